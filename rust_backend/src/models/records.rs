//! Typed rental records, one per row of the daily and hourly sources.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::season::Season;
use crate::time::Hour;

/// Anything carrying a calendar date that can be range-filtered.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// One day of rental activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Row identifier from the source (`instant`); counted distinctly per bucket.
    pub instant: i64,
    pub date: NaiveDate,
    pub season: Season,
    pub casual: u64,
    pub registered: u64,
    pub user_count: u64,
}

/// Riders counted in one hour slot of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyRecord {
    pub date: NaiveDate,
    pub hour: Hour,
    pub cnt: u64,
}

impl Dated for DailyRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for HourlyRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}
