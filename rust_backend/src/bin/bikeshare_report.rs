//! Bike rental report binary
//!
//! Loads the daily and hourly rental CSVs, applies a date selection and
//! prints the four dashboard summaries.
//!
//! # Usage
//!
//! ```bash
//! # Use report.toml from the current directory
//! cargo run --bin bikeshare-report
//!
//! # Point at the sources directly and pick a range
//! cargo run --bin bikeshare-report -- \
//!   --daily data/daily_edited.csv --hourly data/hourly_edited.csv \
//!   --start 2011-06-01 --end 2011-08-31 --format json
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log filter (default: info)

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bikeshare_report::config::{ConfigOverrides, ReportConfig};
use bikeshare_report::io::{write_summary_csvs, RentalLoader};
use bikeshare_report::output;
use bikeshare_report::services::DashboardSession;

#[derive(Debug, Parser)]
#[command(
    name = "bikeshare-report",
    version,
    about = "Summarize bike rental activity over a date range"
)]
struct Args {
    /// Configuration file (defaults to report.toml in the usual places)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Daily CSV source, overrides the configuration
    #[arg(long)]
    daily: Option<PathBuf>,

    /// Hourly CSV source, overrides the configuration
    #[arg(long)]
    hourly: Option<PathBuf>,

    /// First day of the selection (YYYY-MM-DD)
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Last day of the selection (YYYY-MM-DD)
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Output format: table or json
    #[arg(long)]
    format: Option<String>,

    /// Also write the summary tables as CSV files into this directory
    #[arg(long)]
    export_dir: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            daily_csv: self.daily.clone(),
            hourly_csv: self.hourly.clone(),
            start: self.start,
            end: self.end,
            format: self.format.clone(),
            export_dir: self.export_dir.clone(),
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so JSON on stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = ReportConfig::load_with_overrides(args.config.as_deref(), &args.overrides())
        .context("Failed to load configuration (pass --config, or both --daily and --hourly)")?;
    let format = config.output_format()?;

    let dataset = RentalLoader::load_dataset(&config.data.daily_csv, &config.data.hourly_csv)
        .context("Failed to load rental data")?
        .into_shared();

    let mut session = DashboardSession::new(dataset);
    if let Some(bounds) = session.bounds() {
        info!("Dataset covers {}", bounds);
        let wanted = config.range.resolve(&bounds);
        session.select_range(wanted.start, wanted.end);
    }

    let report = session.report();
    println!("{}", output::render(&report, format)?);

    if let Some(dir) = &config.output.export_dir {
        let written = write_summary_csvs(&report, dir)
            .with_context(|| format!("Failed to export summaries to {}", dir.display()))?;
        info!("Exported {} summary tables to {}", written.len(), dir.display());
    }

    Ok(())
}
