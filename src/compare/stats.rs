//! Summary statistics over a normalized column

use serde::{Deserialize, Serialize};

/// Max/min/mean/sum/count over the non-zero values of a column.
///
/// Zero is the normalizer's "absent" sentinel and is never counted. When no
/// value survives the filter, `count` is 0 and the optional fields are `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub count: usize,
    pub sum: u64,
    pub max: Option<u64>,
    pub min: Option<u64>,
    /// Arithmetic mean at full precision
    pub mean: Option<f64>,
}

impl SummaryStats {
    /// Whether any comparable value was present
    pub fn has_data(&self) -> bool {
        self.count > 0
    }

    /// Mean rounded to the nearest integer for display, ties to even
    pub fn rounded_mean(&self) -> Option<u64> {
        self.mean.map(|m| m.round_ties_even() as u64)
    }

    /// Difference between the largest and smallest value
    pub fn spread(&self) -> Option<u64> {
        Some(self.max? - self.min?)
    }
}

/// Summarize `values`, ignoring zeros
pub fn summarize(values: &[u64]) -> SummaryStats {
    let present: Vec<u64> = values.iter().copied().filter(|v| *v > 0).collect();
    if present.is_empty() {
        return SummaryStats::default();
    }

    let count = present.len();
    let sum = present.iter().fold(0u64, |acc, v| acc.saturating_add(*v));
    // Summed in f64 separately so a saturated integer sum cannot skew the mean
    let mean = present.iter().map(|v| *v as f64).sum::<f64>() / count as f64;

    SummaryStats {
        count,
        sum,
        max: present.iter().max().copied(),
        min: present.iter().min().copied(),
        mean: Some(mean),
    }
}
