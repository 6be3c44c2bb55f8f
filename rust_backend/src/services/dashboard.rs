//! A user's view over a shared dataset: a date selection and the four
//! summaries recomputed from it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{daily_summary, hourly_summary, monthly_summary, seasonal_summary};
use crate::io::RentalDataset;
use crate::models::{HourlySummaryRow, SeasonalSummaryRow, UsageSummaryRow};
use crate::transformations::{filter_by_range, DateRange};

/// The four summary tables for one date selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Selection the tables were computed for; `None` for an empty dataset.
    pub range: Option<DateRange>,
    pub daily: Vec<UsageSummaryRow>,
    pub monthly: Vec<UsageSummaryRow>,
    pub hourly: Vec<HourlySummaryRow>,
    pub seasonal: Vec<SeasonalSummaryRow>,
}

impl DashboardReport {
    /// Filter both collections of `dataset` by `range` and summarize.
    ///
    /// Daily, monthly and seasonal tables come from the filtered daily view;
    /// the hourly table from the hourly collection filtered by the same range.
    pub fn compute(dataset: &RentalDataset, range: &DateRange) -> Self {
        let daily_view = filter_by_range(&dataset.daily, range);
        let hourly_view = filter_by_range(&dataset.hourly, range);

        log::debug!(
            "Summarizing {} daily and {} hourly records for {}",
            daily_view.len(),
            hourly_view.len(),
            range
        );

        Self {
            range: Some(*range),
            daily: daily_summary(&daily_view),
            monthly: monthly_summary(&daily_view),
            hourly: hourly_summary(&hourly_view),
            seasonal: seasonal_summary(&daily_view),
        }
    }

    pub fn empty() -> Self {
        Self {
            range: None,
            daily: Vec::new(),
            monthly: Vec::new(),
            hourly: Vec::new(),
            seasonal: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.daily.is_empty()
            && self.monthly.is_empty()
            && self.hourly.is_empty()
            && self.seasonal.is_empty()
    }

    /// Total users across the daily table.
    pub fn total_users(&self) -> u64 {
        self.daily.iter().map(|row| row.total_users).sum()
    }
}

/// One user's session over a shared, read-only dataset.
///
/// The dataset is shared between sessions; the selection and every report
/// derived from it belong to this session alone.
#[derive(Debug, Clone)]
pub struct DashboardSession {
    dataset: Arc<RentalDataset>,
    bounds: Option<DateRange>,
    selection: Option<DateRange>,
}

impl DashboardSession {
    /// Start a session with the dataset's full date range selected.
    pub fn new(dataset: Arc<RentalDataset>) -> Self {
        let bounds = dataset.date_bounds();
        Self {
            dataset,
            bounds,
            selection: bounds,
        }
    }

    pub fn dataset(&self) -> &RentalDataset {
        &self.dataset
    }

    /// First and last day a selection may cover.
    pub fn bounds(&self) -> Option<DateRange> {
        self.bounds
    }

    pub fn selection(&self) -> Option<DateRange> {
        self.selection
    }

    /// Select `[start, end]`, clamped to [`bounds`](Self::bounds).
    ///
    /// Returns the selection actually applied, or `None` when the dataset has
    /// no daily records.
    pub fn select_range(&mut self, start: NaiveDate, end: NaiveDate) -> Option<DateRange> {
        let Some(bounds) = self.bounds else {
            log::warn!("Ignoring date selection {} .. {}: dataset is empty", start, end);
            return None;
        };

        let requested = DateRange::new(start, end);
        let applied = requested.clamp_to(&bounds);
        if applied != requested {
            log::warn!("Date selection {} clamped to {}", requested, applied);
        }
        if applied.is_empty() {
            log::warn!("Date selection {} covers no days", applied);
        }

        self.selection = Some(applied);
        Some(applied)
    }

    /// Recompute all four summaries for the current selection.
    pub fn report(&self) -> DashboardReport {
        match &self.selection {
            Some(range) => DashboardReport::compute(&self.dataset, range),
            None => DashboardReport::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DailyRecord, HourlyRecord, Season};
    use crate::time::Hour;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dataset() -> Arc<RentalDataset> {
        let daily = vec![
            (1, ymd(2011, 1, 30), Season::Winter, 100),
            (2, ymd(2011, 1, 31), Season::Winter, 200),
            (3, ymd(2011, 3, 21), Season::Spring, 300),
        ]
        .into_iter()
        .map(|(instant, date, season, users)| DailyRecord {
            instant,
            date,
            season,
            casual: users / 4,
            registered: users - users / 4,
            user_count: users,
        })
        .collect();

        let hourly = vec![
            HourlyRecord { date: ymd(2011, 1, 30), hour: Hour::new(7).unwrap(), cnt: 10 },
            HourlyRecord { date: ymd(2011, 1, 30), hour: Hour::new(8).unwrap(), cnt: 30 },
            HourlyRecord { date: ymd(2011, 3, 21), hour: Hour::new(8).unwrap(), cnt: 50 },
        ];

        RentalDataset::new(daily, hourly).into_shared()
    }

    #[test]
    fn test_new_session_selects_everything() {
        let session = DashboardSession::new(dataset());
        assert_eq!(
            session.selection(),
            Some(DateRange::new(ymd(2011, 1, 30), ymd(2011, 3, 21)))
        );

        let report = session.report();
        assert_eq!(report.daily.len(), 3);
        assert_eq!(report.monthly.len(), 2);
        assert_eq!(report.hourly.len(), 3);
        assert_eq!(report.seasonal.len(), 2);
        assert_eq!(report.total_users(), 600);
    }

    #[test]
    fn test_selection_filters_every_table() {
        let mut session = DashboardSession::new(dataset());
        session.select_range(ymd(2011, 1, 30), ymd(2011, 1, 30));

        let report = session.report();
        assert_eq!(report.daily.len(), 1);
        assert_eq!(report.monthly[0].date, ymd(2011, 1, 31));
        assert_eq!(report.monthly[0].total_users, 100);
        assert_eq!(report.hourly.len(), 2);
        assert_eq!(report.seasonal.len(), 1);
        assert_eq!(report.seasonal[0].season, Season::Winter);
    }

    #[test]
    fn test_selection_is_clamped_to_bounds() {
        let mut session = DashboardSession::new(dataset());
        let applied = session.select_range(ymd(2010, 1, 1), ymd(2011, 2, 15));
        assert_eq!(applied, Some(DateRange::new(ymd(2011, 1, 30), ymd(2011, 2, 15))));
    }

    #[test]
    fn test_inverted_selection_gives_empty_report() {
        let mut session = DashboardSession::new(dataset());
        session.select_range(ymd(2011, 3, 1), ymd(2011, 2, 1));

        let report = session.report();
        assert!(report.is_empty());
        assert!(report.range.is_some());
    }

    #[test]
    fn test_sessions_do_not_share_selection() {
        let shared = dataset();
        let mut first = DashboardSession::new(Arc::clone(&shared));
        let second = DashboardSession::new(Arc::clone(&shared));

        first.select_range(ymd(2011, 3, 21), ymd(2011, 3, 21));

        assert_eq!(first.report().daily.len(), 1);
        assert_eq!(second.report().daily.len(), 3);
    }

    #[test]
    fn test_empty_dataset() {
        let mut session = DashboardSession::new(RentalDataset::default().into_shared());
        assert!(session.bounds().is_none());
        assert!(session.select_range(ymd(2011, 1, 1), ymd(2011, 1, 2)).is_none());
        assert_eq!(session.report(), DashboardReport::empty());
    }
}
