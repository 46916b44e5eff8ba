//! Console reporter with colored output

use crate::compare::Comparison;
use crate::normalize::Metric;
use crate::store::RecordStore;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

const BAR_WIDTH: usize = 30;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Print the registered companies in order
    pub fn report_listing(&self, store: &RecordStore) {
        println!("{}", self.render_listing(store));
    }

    /// Print stats cards, ranking and bar chart for one metric
    pub fn report_comparison(&self, comparison: &Comparison) {
        println!("{}", self.render_comparison(comparison));
    }

    pub fn render_listing(&self, store: &RecordStore) -> String {
        let mut lines = Vec::new();
        lines.push(self.heading("登録済み企業一覧"));

        if store.is_empty() {
            lines.push("   まだ企業が登録されていません。".to_string());
            return lines.join("\n");
        }

        lines.push(format!("   登録企業数: {}社", store.len()));
        lines.push(String::new());
        for (i, record) in store.iter().enumerate() {
            lines.push(format!("{}. {}", i + 1, self.bold(record.name())));
            lines.push(format!("   平均年収: {}", record.salary_text()));
            lines.push(format!("   社員数:   {}", record.employee_count_text()));
            lines.push("   福利厚生:".to_string());
            for benefit_line in record.benefits_text().lines() {
                lines.push(format!("     {}", benefit_line));
            }
        }
        lines.join("\n")
    }

    pub fn render_comparison(&self, comparison: &Comparison) -> String {
        let metric = comparison.metric;
        let mut lines = Vec::new();
        lines.push(self.heading(&format!("{}比較", metric.label())));

        if !comparison.has_data() {
            let warning = format!("{}データが正しく入力されていません。", metric.label());
            lines.push(format!("   {}", self.warn(&warning)));
            return lines.join("\n");
        }

        lines.extend(self.stat_cards(comparison));
        lines.push(String::new());

        lines.push(format!("   {}", self.bold("ランキング")));
        for entry in &comparison.ranking {
            lines.push(format!(
                "   {:>3}. {}  {}{}  ({})",
                entry.rank,
                entry.name,
                figure(metric, entry.value),
                metric.unit(),
                entry.raw.replace('\n', " ")
            ));
        }
        lines.push(String::new());

        lines.push(format!("   {}", self.bold("グラフ")));
        let max = comparison.series.max_value();
        let label_width = comparison
            .series
            .labels
            .iter()
            .map(|l| l.width())
            .max()
            .unwrap_or(0);
        for (label, value) in comparison.series.iter() {
            let padding = " ".repeat(label_width - label.width());
            lines.push(format!(
                "   {}{} {} {}",
                label,
                padding,
                self.bar(value, max, metric),
                figure(metric, value)
            ));
        }
        lines.join("\n")
    }

    fn stat_cards(&self, comparison: &Comparison) -> Vec<String> {
        let stats = &comparison.stats;
        let unit = comparison.metric.unit();
        let num = |v: Option<u64>| format!("{}{}", v.unwrap_or(0), unit);
        let grouped = |v: Option<u64>| format!("{}{}", format_number(v.unwrap_or(0)), unit);

        let cards: Vec<(&str, String)> = match comparison.metric {
            Metric::Salary => vec![
                ("最高年収", num(stats.max)),
                ("最低年収", num(stats.min)),
                ("平均年収", num(stats.rounded_mean())),
                ("年収差", num(stats.spread())),
            ],
            Metric::Headcount => vec![
                ("最大社員数", grouped(stats.max)),
                ("最小社員数", grouped(stats.min)),
                ("平均社員数", num(stats.rounded_mean())),
                ("総社員数", grouped(Some(stats.sum))),
            ],
            Metric::Richness => vec![
                (
                    "最も充実",
                    comparison
                        .leader
                        .as_ref()
                        .map(|e| e.name.clone())
                        .unwrap_or_default(),
                ),
                ("平均文字数", num(stats.rounded_mean())),
                ("福利厚生記載企業", format!("{}社", stats.count)),
            ],
        };

        cards
            .into_iter()
            .map(|(label, value)| format!("   {}: {}", label, self.bold(&value)))
            .collect()
    }

    fn bar(&self, value: u64, max: u64, metric: Metric) -> String {
        let filled = if max == 0 {
            0
        } else {
            ((value as u128 * BAR_WIDTH as u128) / max as u128) as usize
        };
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
        if !self.use_colors {
            return bar;
        }
        match metric {
            Metric::Salary => bar.green().to_string(),
            Metric::Headcount => bar.red().to_string(),
            Metric::Richness => bar.blue().to_string(),
        }
    }

    fn heading(&self, text: &str) -> String {
        format!("\n{}", self.bold(text))
    }

    fn bold(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn warn(&self, text: &str) -> String {
        if self.use_colors {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Headcounts get thousands separators, other metrics print plain
fn figure(metric: Metric, value: u64) -> String {
    match metric {
        Metric::Headcount => format_number(value),
        _ => value.to_string(),
    }
}

/// Format with thousands separators: 12345 -> "12,345"
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
