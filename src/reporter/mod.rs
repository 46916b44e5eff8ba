//! Reporter module for output formatting

pub mod console;
pub mod export;
pub mod json;

pub use console::ConsoleReporter;
pub use export::CsvExporter;
pub use json::JsonReporter;
