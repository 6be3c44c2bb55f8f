//! Rows of the four summary tables handed to the presentation layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::season::Season;
use crate::time::Hour;

/// Usage aggregated over one calendar bucket.
///
/// For daily tables `date` is the day itself; for monthly tables it is the
/// last day of the month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSummaryRow {
    pub date: NaiveDate,
    pub distinct_trip_count: usize,
    pub total_users: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlySummaryRow {
    pub date: NaiveDate,
    pub hour: Hour,
    /// "HH:00" label of `hour`.
    pub label: String,
    pub cnt: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalSummaryRow {
    pub season: Season,
    pub casual: u64,
    pub registered: u64,
    pub total_users: u64,
    /// Share of all users in the table, in percent.
    pub share_percent: f64,
}
