//! Category/value series for an external chart renderer

use crate::normalize::Metric;
use crate::EmployerRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Parallel labels and values; `labels[i]` belongs with `values[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate `(label, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    pub fn max_value(&self) -> u64 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    /// Copy reordered by `compare` over `(label, value)` pairs. Stable.
    pub fn sorted_by<F>(&self, mut compare: F) -> ChartSeries
    where
        F: FnMut((&str, u64), (&str, u64)) -> Ordering,
    {
        let mut pairs: Vec<(&str, u64)> = self.iter().collect();
        pairs.sort_by(|a, b| compare(*a, *b));
        let (labels, values) = pairs
            .into_iter()
            .map(|(label, value)| (label.to_string(), value))
            .unzip();
        ChartSeries { labels, values }
    }

    /// Largest value first, ties in original order
    pub fn sorted_descending(&self) -> ChartSeries {
        self.sorted_by(|a, b| b.1.cmp(&a.1))
    }
}

/// Build a series for `metric` in store order.
///
/// Unlike statistics and rankings, zero values are kept so a company with no
/// data shows up as an empty bar.
pub fn build_series(records: &[EmployerRecord], metric: Metric) -> ChartSeries {
    let (labels, values) = records
        .iter()
        .map(|record| (record.name().to_string(), metric.value_of(record)))
        .unzip();
    ChartSeries { labels, values }
}
