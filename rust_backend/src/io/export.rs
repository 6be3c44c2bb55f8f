//! Summary tables as DataFrames and CSV files for an external chart renderer.

use polars::prelude::*;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::error::ReportResult;
use crate::models::{HourlySummaryRow, SeasonalSummaryRow, UsageSummaryRow};
use crate::services::DashboardReport;
use crate::time::format_date;

pub const DAILY_FILE: &str = "daily_users.csv";
pub const MONTHLY_FILE: &str = "monthly_users.csv";
pub const HOURLY_FILE: &str = "hourly_users.csv";
pub const SEASONAL_FILE: &str = "seasonal_users.csv";

/// The four summary tables of a report as DataFrames.
#[derive(Debug, Clone)]
pub struct SummaryFrames {
    pub daily: DataFrame,
    pub monthly: DataFrame,
    pub hourly: DataFrame,
    pub seasonal: DataFrame,
}

/// Convert every summary table of `report` to a DataFrame.
///
/// Dates are rendered as `YYYY-MM-DD` strings.
pub fn summaries_to_dataframes(report: &DashboardReport) -> ReportResult<SummaryFrames> {
    Ok(SummaryFrames {
        daily: usage_to_dataframe(&report.daily)?,
        monthly: usage_to_dataframe(&report.monthly)?,
        hourly: hourly_to_dataframe(&report.hourly)?,
        seasonal: seasonal_to_dataframe(&report.seasonal)?,
    })
}

/// Write each summary table as its own CSV file under `dir`, creating the
/// directory when needed. Returns the written paths.
pub fn write_summary_csvs(report: &DashboardReport, dir: &Path) -> ReportResult<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let SummaryFrames {
        mut daily,
        mut monthly,
        mut hourly,
        mut seasonal,
    } = summaries_to_dataframes(report)?;

    let mut written = Vec::with_capacity(4);
    for (name, df) in [
        (DAILY_FILE, &mut daily),
        (MONTHLY_FILE, &mut monthly),
        (HOURLY_FILE, &mut hourly),
        (SEASONAL_FILE, &mut seasonal),
    ] {
        let path = dir.join(name);
        let mut file = File::create(&path)?;
        CsvWriter::new(&mut file).include_header(true).finish(df)?;
        log::debug!("Wrote {} rows to {}", df.height(), path.display());
        written.push(path);
    }

    Ok(written)
}

fn usage_to_dataframe(rows: &[UsageSummaryRow]) -> ReportResult<DataFrame> {
    let dates: Vec<String> = rows.iter().map(|r| format_date(r.date)).collect();
    let trips: Vec<u64> = rows.iter().map(|r| r.distinct_trip_count as u64).collect();
    let users: Vec<u64> = rows.iter().map(|r| r.total_users).collect();

    let df = df!(
        "dteday" => dates,
        "distinct_trip_count" => trips,
        "total_users" => users,
    )?;

    Ok(df)
}

fn hourly_to_dataframe(rows: &[HourlySummaryRow]) -> ReportResult<DataFrame> {
    let dates: Vec<String> = rows.iter().map(|r| format_date(r.date)).collect();
    let hours: Vec<u32> = rows.iter().map(|r| u32::from(r.hour.value())).collect();
    let labels: Vec<String> = rows.iter().map(|r| r.label.clone()).collect();
    let counts: Vec<u64> = rows.iter().map(|r| r.cnt).collect();

    let df = df!(
        "dteday" => dates,
        "hr" => hours,
        "hour" => labels,
        "cnt" => counts,
    )?;

    Ok(df)
}

fn seasonal_to_dataframe(rows: &[SeasonalSummaryRow]) -> ReportResult<DataFrame> {
    let seasons: Vec<String> = rows.iter().map(|r| r.season.to_string()).collect();
    let casual: Vec<u64> = rows.iter().map(|r| r.casual).collect();
    let registered: Vec<u64> = rows.iter().map(|r| r.registered).collect();
    let users: Vec<u64> = rows.iter().map(|r| r.total_users).collect();
    let shares: Vec<f64> = rows.iter().map(|r| r.share_percent).collect();

    let df = df!(
        "season_name" => seasons,
        "casual" => casual,
        "registered" => registered,
        "user_count" => users,
        "share_percent" => shares,
    )?;

    Ok(df)
}
