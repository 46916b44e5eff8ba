//! Shukatsu: employer registry and comparison engine
//!
//! Employer records are entered as loose free text (salary "500万円",
//! headcount "1000人", a paragraph of benefits). This library keeps them in a
//! caller-owned [`RecordStore`], normalizes the text into comparable numbers,
//! and produces summary statistics, rankings and chart-ready series.

pub mod compare;
pub mod config;
pub mod intake;
pub mod normalize;
pub mod reporter;
pub mod store;

pub use compare::{
    build_series, rank, summarize, ChartSeries, Comparison, RankingEntry, SummaryStats,
};
pub use normalize::{normalize, parse_numeric, parse_richness, Metric, NormalizedMetric};
pub use store::RecordStore;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by record validation and store mutation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// A required field was empty
    #[error("{field} must not be empty")]
    Validation { field: &'static str },
    /// Removal index outside the store
    #[error("index {index} is out of range for {len} records")]
    Index { index: usize, len: usize },
}

/// One employer entry as submitted by the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerRecord {
    name: String,
    #[serde(default)]
    salary_text: String,
    #[serde(default)]
    employee_count_text: String,
    #[serde(default)]
    benefits_text: String,
}

impl EmployerRecord {
    /// Create a record. Fails if `name` is empty or whitespace.
    pub fn new(
        name: impl Into<String>,
        salary_text: impl Into<String>,
        employee_count_text: impl Into<String>,
        benefits_text: impl Into<String>,
    ) -> Result<Self, RecordError> {
        let record = Self {
            name: name.into(),
            salary_text: salary_text.into(),
            employee_count_text: employee_count_text.into(),
            benefits_text: benefits_text.into(),
        };
        record.validate()?;
        Ok(record)
    }

    /// Check the invariants a stored record must hold
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.name.trim().is_empty() {
            return Err(RecordError::Validation { field: "name" });
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Annual compensation as typed, e.g. "500万円"
    pub fn salary_text(&self) -> &str {
        &self.salary_text
    }

    /// Headcount as typed, e.g. "1,000人"
    pub fn employee_count_text(&self) -> &str {
        &self.employee_count_text
    }

    pub fn benefits_text(&self) -> &str {
        &self.benefits_text
    }

    /// Fields in export column order: name, salary, headcount, benefits
    pub fn columns(&self) -> [&str; 4] {
        [
            &self.name,
            &self.salary_text,
            &self.employee_count_text,
            &self.benefits_text,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_name() {
        let err = EmployerRecord::new("", "500万円", "", "").unwrap_err();
        assert_eq!(err, RecordError::Validation { field: "name" });
        assert_eq!(err.to_string(), "name must not be empty");
    }

    #[test]
    fn test_new_rejects_whitespace_name() {
        assert!(EmployerRecord::new("  \t", "", "", "").is_err());
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let record = EmployerRecord::new("Acme", "", "", "").unwrap();
        assert_eq!(record.name(), "Acme");
        assert_eq!(record.salary_text(), "");
        assert_eq!(record.columns(), ["Acme", "", "", ""]);
    }

    #[test]
    fn test_deserialize_defaults_missing_fields() {
        let record: EmployerRecord =
            serde_json::from_str(r#"{"name": "Acme", "salaryText": "500万円"}"#).unwrap();
        assert_eq!(record.salary_text(), "500万円");
        assert_eq!(record.employee_count_text(), "");
        assert_eq!(record.benefits_text(), "");
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let record = EmployerRecord::new("Acme", "500", "10", "寮").unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"employeeCountText\":\"10\""));
        assert!(json.contains("\"benefitsText\""));
    }

    #[test]
    fn test_index_error_message() {
        let err = RecordError::Index { index: 3, len: 2 };
        assert_eq!(err.to_string(), "index 3 is out of range for 2 records");
    }
}
