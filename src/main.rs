//! Shukatsu: employer comparison CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use shukatsu::compare::ComparisonEngine;
use shukatsu::config::{load_config, write_config, Config};
use shukatsu::intake::load_records;
use shukatsu::reporter::{ConsoleReporter, CsvExporter, JsonReporter};
use shukatsu::Metric;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Shukatsu: compare prospective employers by salary, headcount and benefits
#[derive(Parser, Debug)]
#[command(name = "shukatsu")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file (default: search .shukatsurc.json in current dir and parents)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Verbose diagnostics on stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List registered companies
    List {
        /// Records file (.json array or .csv)
        file: PathBuf,

        /// Output format as JSON
        #[arg(long, short)]
        json: bool,
    },

    /// Compare companies by one metric: salary, headcount or richness
    Compare {
        /// Records file (.json array or .csv)
        file: PathBuf,

        /// Metric to compare (default from config, else salary)
        #[arg(long, short)]
        metric: Option<Metric>,

        /// Compare by every metric
        #[arg(long, conflicts_with = "metric")]
        all: bool,

        /// Output format as JSON
        #[arg(long, short)]
        json: bool,

        /// Order the chart series by value instead of registration order
        #[arg(long)]
        sort: bool,
    },

    /// Export records as CSV
    Export {
        /// Records file (.json array or .csv)
        file: PathBuf,

        /// Output file (default: stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Use Japanese column headers
        #[arg(long)]
        japanese_headers: bool,
    },

    /// Create .shukatsurc.json with sensible defaults
    Init {
        /// Default metric for compare
        #[arg(long)]
        metric: Option<Metric>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "shukatsu=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    let config_path = args.config.as_deref();

    match args.command {
        Commands::Init { metric, dir } => run_init(metric, dir.as_deref()),
        Commands::List { file, json } => {
            let config =
                resolve_config(config_path)?.merge_with_cli(None, false, args.no_color, false);
            let store = load_records(&file)?;
            if json {
                println!("{}", JsonReporter::new().pretty().report_records(&store));
            } else {
                console_reporter(&config).report_listing(&store);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Compare {
            file,
            metric,
            all,
            json,
            sort,
        } => {
            let config =
                resolve_config(config_path)?.merge_with_cli(metric, sort, args.no_color, false);
            let store = load_records(&file)?;
            if store.is_empty() {
                eprintln!("{}: No companies registered in {}", "Warning".yellow(), file.display());
                return Ok(ExitCode::from(1));
            }

            let engine = ComparisonEngine::new().sort_series(config.sort_series);
            let comparisons = if all {
                engine.compare_all(&store)
            } else {
                vec![engine.compare(&store, config.default_metric)]
            };

            if json {
                let reporter = JsonReporter::new().pretty();
                if all {
                    println!("{}", reporter.report_many(&comparisons));
                } else {
                    println!("{}", reporter.report(&comparisons[0]));
                }
            } else {
                let reporter = console_reporter(&config);
                for comparison in &comparisons {
                    reporter.report_comparison(comparison);
                }
            }

            if comparisons.iter().any(|c| c.has_data()) {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(1))
            }
        }
        Commands::Export {
            file,
            output,
            japanese_headers,
        } => {
            let config = resolve_config(config_path)?.merge_with_cli(
                None,
                false,
                args.no_color,
                japanese_headers,
            );
            let store = load_records(&file)?;
            let exporter = CsvExporter::new().japanese_headers(config.csv_japanese_headers);
            match output {
                Some(path) => {
                    let out = fs::File::create(&path)
                        .with_context(|| format!("Failed to create {}", path.display()))?;
                    exporter.export(&store, out)?;
                    eprintln!(
                        "{}: Exported {} companies to {}",
                        "Info".blue(),
                        store.len(),
                        path.display()
                    );
                }
                None => exporter.export(&store, std::io::stdout().lock())?,
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Load config relative to the current directory
fn resolve_config(custom_path: Option<&Path>) -> Result<Config> {
    let work_dir = std::env::current_dir().context("Failed to read current directory")?;
    load_config(&work_dir, custom_path)
}

fn console_reporter(config: &Config) -> ConsoleReporter {
    if config.color {
        ConsoleReporter::new()
    } else {
        ConsoleReporter::new().without_colors()
    }
}

fn run_init(metric: Option<Metric>, dir: Option<&Path>) -> Result<ExitCode> {
    let dir = match dir {
        Some(d) => d.to_path_buf(),
        None => std::env::current_dir().context("Failed to read current directory")?,
    };
    let config = Config {
        default_metric: metric.unwrap_or_default(),
        ..Config::default()
    };
    let path = write_config(&dir, &config)?;
    println!("Created {}", path.display());
    Ok(ExitCode::SUCCESS)
}
