//! Statistics, rankings and chart series over normalized metrics

pub mod engine;
pub mod ranking;
pub mod series;
pub mod stats;

pub use engine::{Comparison, ComparisonEngine};
pub use ranking::{rank, RankingEntry};
pub use series::{build_series, ChartSeries};
pub use stats::{summarize, SummaryStats};
