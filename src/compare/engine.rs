//! Comparison of every record in a store along one metric

use super::{build_series, rank, summarize, ChartSeries, RankingEntry, SummaryStats};
use crate::normalize::{normalize, Metric};
use crate::store::RecordStore;
use serde::Serialize;

/// Everything a comparison view needs for one metric
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub metric: Metric,
    pub stats: SummaryStats,
    pub ranking: Vec<RankingEntry>,
    pub series: ChartSeries,
    /// Top of the ranking, if any record has a value
    pub leader: Option<RankingEntry>,
}

impl Comparison {
    /// Whether at least one record had a comparable value
    pub fn has_data(&self) -> bool {
        self.stats.has_data()
    }
}

/// Builds [`Comparison`]s from a store snapshot
#[derive(Debug, Clone, Default)]
pub struct ComparisonEngine {
    sort_series: bool,
}

impl ComparisonEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Order chart series highest value first instead of store order
    pub fn with_sorted_series(mut self) -> Self {
        self.sort_series = true;
        self
    }

    pub fn sort_series(mut self, sort: bool) -> Self {
        self.sort_series = sort;
        self
    }

    /// Compare all records in `store` by `metric`
    pub fn compare(&self, store: &RecordStore, metric: Metric) -> Comparison {
        let records = store.all();
        let values: Vec<u64> = normalize(records, metric).iter().map(|m| m.value).collect();

        let stats = summarize(&values);
        let ranking = rank(records, metric);
        let series = build_series(records, metric);
        let series = if self.sort_series {
            series.sorted_descending()
        } else {
            series
        };

        tracing::debug!(
            %metric,
            records = records.len(),
            comparable = stats.count,
            "comparison built"
        );

        Comparison {
            metric,
            leader: ranking.first().cloned(),
            stats,
            ranking,
            series,
        }
    }

    /// One comparison per metric, in [`Metric::ALL`] order
    pub fn compare_all(&self, store: &RecordStore) -> Vec<Comparison> {
        Metric::ALL
            .iter()
            .map(|metric| self.compare(store, *metric))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn test_compare_salary() {
        let comparison = ComparisonEngine::new().compare(&store(), Metric::Salary);
        assert!(comparison.has_data());
        assert_eq!(comparison.stats.count, 1);
        assert_eq!(comparison.ranking.len(), 1);
        assert_eq!(comparison.leader.as_ref().map(|e| e.name.as_str()), Some("Acme"));
        assert_eq!(comparison.series.values, vec![500, 0]);
    }

    #[test]
    fn test_compare_headcount_sorted_series() {
        let comparison = ComparisonEngine::new()
            .with_sorted_series()
            .compare(&store(), Metric::Headcount);
        assert_eq!(comparison.series.labels, vec!["Globex", "Acme"]);
        assert_eq!(comparison.stats.sum, 3000);
        assert_eq!(comparison.stats.rounded_mean(), Some(1500));
    }

    #[test]
    fn test_compare_empty_store() {
        let comparison = ComparisonEngine::new().compare(&RecordStore::new(), Metric::Richness);
        assert!(!comparison.has_data());
        assert!(comparison.leader.is_none());
        assert!(comparison.series.is_empty());
    }

    #[test]
    fn test_compare_all_covers_each_metric() {
        let all = ComparisonEngine::new().compare_all(&store());
        let metrics: Vec<Metric> = all.iter().map(|c| c.metric).collect();
        assert_eq!(metrics, Metric::ALL.to_vec());
    }

    #[test]
    fn test_comparison_reflects_store_changes() {
        let mut store = store();
        let engine = ComparisonEngine::new();
        assert_eq!(engine.compare(&store, Metric::Headcount).stats.count, 2);
        store.remove_at(1).unwrap();
        assert_eq!(engine.compare(&store, Metric::Headcount).stats.count, 1);
    }
}
