//! CSV export of the record listing

use crate::store::RecordStore;
use anyhow::{Context, Result};
use std::io::Write;

const ENGLISH_HEADERS: [&str; 4] = ["name", "salaryText", "employeeCountText", "benefitsText"];
const JAPANESE_HEADERS: [&str; 4] = ["企業名", "平均年収", "社員数", "福利厚生"];

/// Writes records as CSV: name, salary, headcount, benefits
pub struct CsvExporter {
    japanese_headers: bool,
}

impl CsvExporter {
    pub fn new() -> Self {
        Self {
            japanese_headers: false,
        }
    }

    /// Use 企業名/平均年収/社員数/福利厚生 as the header row
    pub fn japanese_headers(mut self, enabled: bool) -> Self {
        self.japanese_headers = enabled;
        self
    }

    /// Write the store to `writer` with a header row
    pub fn export<W: Write>(&self, store: &RecordStore, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        let headers = if self.japanese_headers {
            JAPANESE_HEADERS
        } else {
            ENGLISH_HEADERS
        };
        wtr.write_record(headers).context("Failed to write CSV header")?;
        for record in store {
            wtr.write_record(record.columns())
                .with_context(|| format!("Failed to write CSV row for {}", record.name()))?;
        }
        wtr.flush().context("Failed to flush CSV output")?;
        Ok(())
    }

    /// Export to an in-memory string
    pub fn export_to_string(&self, store: &RecordStore) -> Result<String> {
        let mut buf = Vec::new();
        self.export(store, &mut buf)?;
        String::from_utf8(buf).context("CSV output is not valid UTF-8")
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}
