//! Free-text field normalization
//!
//! Every function here is total: malformed input degrades to `0`, which the
//! aggregation layer treats as "absent" rather than a real observation.

use crate::EmployerRecord;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Any Unicode decimal digit (`Nd`). Commas are not part of a run.
fn digit_run() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+").expect("digit pattern compiles"))
}

fn is_decimal_digit(c: char) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| Regex::new(r"^\d$").expect("digit pattern compiles"));
    let mut buf = [0u8; 4];
    pattern.is_match(c.encode_utf8(&mut buf))
}

/// Numeric value of a decimal digit in any script.
///
/// `Nd` characters come in contiguous, ascending blocks of ten starting at
/// zero, so the value is the offset from the start of the run modulo 10.
fn digit_value(c: char) -> u64 {
    if c.is_ascii_digit() {
        return c as u64 - '0' as u64;
    }
    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    ((c as u32 - start) % 10) as u64
}

/// Extract the first run of digits in `text` as an integer.
///
/// `"500万円"` is 500, `"約800万"` is 800, `""` and `"abc"` are 0.
/// Only the first run counts, so `"1,000人"` is 1. Runs too large for `u64`
/// saturate.
pub fn parse_numeric(text: &str) -> u64 {
    let Some(run) = digit_run().find(text) else {
        return 0;
    };
    run.as_str().chars().fold(0u64, |acc, c| {
        acc.saturating_mul(10).saturating_add(digit_value(c))
    })
}

/// Character count of the trimmed text; a coarse "how much detail" score.
pub fn parse_richness(text: &str) -> u64 {
    text.trim().chars().count() as u64
}

/// Column of an [`EmployerRecord`] that can be compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Annual salary, first number in the salary text
    #[default]
    Salary,
    /// Employee count, first number in the headcount text
    Headcount,
    /// Length of the benefits description
    Richness,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Salary, Metric::Headcount, Metric::Richness];

    /// Normalized value of this metric for one record
    pub fn value_of(self, record: &EmployerRecord) -> u64 {
        match self {
            Metric::Salary => parse_numeric(record.salary_text()),
            Metric::Headcount => parse_numeric(record.employee_count_text()),
            Metric::Richness => parse_richness(record.benefits_text()),
        }
    }

    /// The raw text this metric is derived from
    pub fn source_text(self, record: &EmployerRecord) -> &str {
        match self {
            Metric::Salary => record.salary_text(),
            Metric::Headcount => record.employee_count_text(),
            Metric::Richness => record.benefits_text(),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Metric::Salary => "salary",
            Metric::Headcount => "headcount",
            Metric::Richness => "richness",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::Salary => "年収",
            Metric::Headcount => "社員数",
            Metric::Richness => "福利厚生",
        }
    }

    /// Unit appended to values for display
    pub fn unit(self) -> &'static str {
        match self {
            Metric::Salary => "万円",
            Metric::Headcount => "人",
            Metric::Richness => "文字",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown metric '{0}' (expected salary, headcount or richness)")]
pub struct ParseMetricError(String);

impl FromStr for Metric {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "salary" | "年収" => Ok(Metric::Salary),
            "headcount" | "employees" | "社員数" => Ok(Metric::Headcount),
            "richness" | "benefits" | "福利厚生" => Ok(Metric::Richness),
            _ => Err(ParseMetricError(s.to_string())),
        }
    }
}

/// A record paired with one derived value. Borrows the store snapshot it was
/// computed from, so it cannot outlive a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedMetric<'a> {
    pub record: &'a EmployerRecord,
    pub value: u64,
}

/// Derive `metric` for every record, in store order
pub fn normalize<'a>(records: &'a [EmployerRecord], metric: Metric) -> Vec<NormalizedMetric<'a>> {
    records
        .iter()
        .map(|record| NormalizedMetric {
            record,
            value: metric.value_of(record),
        })
        .collect()
}
