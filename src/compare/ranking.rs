//! Descending rankings by a normalized metric

use crate::normalize::{normalize, Metric};
use crate::EmployerRecord;
use serde::{Deserialize, Serialize};

/// One row of a ranking table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    /// 1-based position, never shared between ties
    pub rank: usize,
    pub name: String,
    pub value: u64,
    /// The text the value was derived from
    pub raw: String,
}

/// Rank records by `metric`, highest first.
///
/// Records whose value is 0 are left out. Ties keep insertion order.
pub fn rank(records: &[EmployerRecord], metric: Metric) -> Vec<RankingEntry> {
    let mut scored: Vec<_> = normalize(records, metric)
        .into_iter()
        .filter(|m| m.value > 0)
        .collect();
    // sort_by is stable
    scored.sort_by(|a, b| b.value.cmp(&a.value));

    scored
        .into_iter()
        .enumerate()
        .map(|(i, m)| RankingEntry {
            rank: i + 1,
            name: m.record.name().to_string(),
            value: m.value,
            raw: metric.source_text(m.record).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn salary(name: &str, salary: &str) -> EmployerRecord {
        EmployerRecord::new(name, salary, "", "").unwrap()
    }

    #[test]
    fn test_rank_descending() {
        let records = vec![
            salary("Low", "300万円"),
            salary("High", "900万円"),
            salary("Mid", "600万円"),
        ];
        let ranking = rank(&records, Metric::Salary);
        let names: Vec<&str> = ranking.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["High", "Mid", "Low"]);
        assert_eq!(ranking[0].rank, 1);
        assert_eq!(ranking[2].rank, 3);
        assert_eq!(ranking[0].raw, "900万円");
    }

    #[test]
    fn test_rank_ties_keep_insertion_order() {
        let records = vec![
            salary("A", "500"),
            salary("B", "700"),
            salary("C", "500"),
            salary("D", "500"),
        ];
        let ranking = rank(&records, Metric::Salary);
        let names: Vec<&str> = ranking.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C", "D"]);
        let ranks: Vec<usize> = ranking.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_rank_excludes_zero_values() {
        let records = vec![salary("Blank", ""), salary("Text", "非公開"), salary("Paid", "450")];
        let ranking = rank(&records, Metric::Salary);
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].name, "Paid");
        assert_eq!(ranking[0].rank, 1);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(&[], Metric::Headcount).is_empty());
    }

    proptest! {
        #[test]
        fn ranking_is_sorted_and_sequential(values in prop::collection::vec(0u64..2000, 0..30)) {
            let records: Vec<EmployerRecord> = values
                .iter()
                .enumerate()
                .map(|(i, v)| salary(&format!("C{}", i), &v.to_string()))
                .collect();
            let ranking = rank(&records, Metric::Salary);

            prop_assert_eq!(ranking.len(), values.iter().filter(|v| **v > 0).count());
            for (i, entry) in ranking.iter().enumerate() {
                prop_assert_eq!(entry.rank, i + 1);
                prop_assert!(entry.value > 0);
            }
            for pair in ranking.windows(2) {
                prop_assert!(pair[0].value >= pair[1].value);
            }
        }
    }
}
