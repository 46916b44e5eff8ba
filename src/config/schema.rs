//! Config schema and deserialization

use crate::normalize::Metric;
use serde::{Deserialize, Serialize};

/// Root config structure for .shukatsurc.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Metric used by `compare` when none is given on the command line
    #[serde(default)]
    pub default_metric: Metric,

    /// Order chart series highest value first instead of registration order
    #[serde(default)]
    pub sort_series: bool,

    /// Colored console output. Default: true
    #[serde(default = "default_color")]
    pub color: bool,

    /// Write Japanese column headers (企業名, 平均年収, ...) on CSV export
    #[serde(default)]
    pub csv_japanese_headers: bool,
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_metric: Metric::default(),
            sort_series: false,
            color: default_color(),
            csv_japanese_headers: false,
        }
    }
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(
        mut self,
        cli_metric: Option<Metric>,
        cli_sort: bool,
        cli_no_color: bool,
        cli_japanese_headers: bool,
    ) -> Self {
        if let Some(metric) = cli_metric {
            self.default_metric = metric;
        }
        // Flags can only switch these on (or color off)
        self.sort_series |= cli_sort;
        self.csv_japanese_headers |= cli_japanese_headers;
        if cli_no_color {
            self.color = false;
        }
        self
    }
}
