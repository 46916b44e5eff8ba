//! JSON reporter for machine-readable output

use crate::compare::Comparison;
use crate::store::RecordStore;
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Report a single comparison as JSON
    pub fn report(&self, comparison: &Comparison) -> String {
        self.to_json(comparison, "{}")
    }

    /// Report the records as a JSON array, with a count
    pub fn report_records(&self, store: &RecordStore) -> String {
        let output = RecordsOutput {
            count: store.len(),
            records: store.all(),
        };
        self.to_json(&output, "{}")
    }

    /// Report one comparison per metric
    pub fn report_many(&self, comparisons: &[Comparison]) -> String {
        self.to_json(comparisons, "[]")
    }

    fn to_json<T: Serialize + ?Sized>(&self, value: &T, fallback: &str) -> String {
        let result = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        result.unwrap_or_else(|_| fallback.to_string())
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct RecordsOutput<'a> {
    count: usize,
    records: &'a [crate::EmployerRecord],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::ComparisonEngine;
    use crate::normalize::Metric;
    use crate::EmployerRecord;

    fn store() -> RecordStore {
        let mut store = RecordStore::new();
        store
            .add(EmployerRecord::new("Acme", "500万円", "1000人", "住宅手当").unwrap())
            .unwrap();
        store
            .add(EmployerRecord::new("Globex", "", "2000人", "").unwrap())
            .unwrap();
        store
    }

    #[test]
    fn test_report_comparison_shape() {
        let comparison = ComparisonEngine::new().compare(&store(), Metric::Salary);
        let json = JsonReporter::new().report(&comparison);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["metric"], "salary");
        assert_eq!(parsed["stats"]["count"], 1);
        assert_eq!(parsed["stats"]["max"], 500);
        assert_eq!(parsed["ranking"][0]["rank"], 1);
        assert_eq!(parsed["ranking"][0]["name"], "Acme");
        assert_eq!(parsed["series"]["values"], serde_json::json!([500, 0]));
        assert_eq!(parsed["leader"]["name"], "Acme");
    }

    #[test]
    fn test_report_empty_comparison_has_null_stats() {
        let comparison = ComparisonEngine::new().compare(&RecordStore::new(), Metric::Headcount);
        let json = JsonReporter::new().report(&comparison);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["stats"]["count"], 0);
        assert!(parsed["stats"]["mean"].is_null());
        assert!(parsed["leader"].is_null());
    }

    #[test]
    fn test_report_records() {
        let json = JsonReporter::new().pretty().report_records(&store());
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["count"], 2);
        assert_eq!(parsed["records"][1]["name"], "Globex");
        assert_eq!(parsed["records"][0]["employeeCountText"], "1000人");
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_report_many() {
        let all = ComparisonEngine::new().compare_all(&store());
        let json = JsonReporter::new().report_many(&all);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().map(|a| a.len()), Some(3));
        assert_eq!(parsed[2]["metric"], "richness");
    }
}
