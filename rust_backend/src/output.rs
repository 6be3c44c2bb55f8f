//! Text and JSON renderings of a dashboard report.

use std::str::FromStr;

use crate::error::ReportResult;
use crate::services::DashboardReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Unknown output format: {}. Must be 'table' or 'json'",
                other
            )),
        }
    }
}

pub fn render(report: &DashboardReport, format: OutputFormat) -> ReportResult<String> {
    match format {
        OutputFormat::Table => Ok(render_table(report)),
        OutputFormat::Json => render_json(report),
    }
}

pub fn render_json(report: &DashboardReport) -> ReportResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Plain-text rendering: one titled table per summary.
pub fn render_table(report: &DashboardReport) -> String {
    let mut out = match &report.range {
        Some(range) => format!("Bike Rental Dashboard ({})\n", range),
        None => "Bike Rental Dashboard (no data)\n".to_string(),
    };

    section(&mut out, "Number of Users per Day");
    out.push_str(&format!("{:<12} {:>8} {:>12}\n", "date", "trips", "users"));
    for row in &report.daily {
        out.push_str(&format!(
            "{:<12} {:>8} {:>12}\n",
            row.date, row.distinct_trip_count, row.total_users
        ));
    }

    section(&mut out, "Number of Users per Month");
    out.push_str(&format!("{:<12} {:>8} {:>12}\n", "month_end", "trips", "users"));
    for row in &report.monthly {
        out.push_str(&format!(
            "{:<12} {:>8} {:>12}\n",
            row.date, row.distinct_trip_count, row.total_users
        ));
    }

    section(&mut out, "Bike Rental Trending Hours");
    out.push_str(&format!("{:<12} {:<6} {:>8}\n", "date", "hour", "users"));
    for row in &report.hourly {
        out.push_str(&format!("{:<12} {:<6} {:>8}\n", row.date, row.label, row.cnt));
    }

    section(&mut out, "Proportion of Users per Season");
    out.push_str(&format!(
        "{:<8} {:>10} {:>12} {:>12} {:>7}\n",
        "season", "casual", "registered", "users", "share"
    ));
    for row in &report.seasonal {
        out.push_str(&format!(
            "{:<8} {:>10} {:>12} {:>12} {:>6.1}%\n",
            row.season.label(),
            row.casual,
            row.registered,
            row.total_users,
            row.share_percent
        ));
    }

    out
}

fn section(out: &mut String, title: &str) {
    out.push_str(&format!("\n{}\n{}\n", title, "-".repeat(title.len())));
}
