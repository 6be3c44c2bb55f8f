use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Dated;

/// Closed date interval `[start, end]`.
///
/// A range whose `start` lies after its `end` is valid and selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Restrict this range to `bounds`, as a date picker limited to the
    /// dataset's first and last day would.
    pub fn clamp_to(&self, bounds: &DateRange) -> DateRange {
        DateRange::new(self.start.max(bounds.start), self.end.min(bounds.end))
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start, self.end)
    }
}

/// Records whose date lies in `[start, end]`, in input order.
///
/// `start > end` yields an empty collection rather than an error.
///
/// # Example
/// ```
/// use bikeshare_report::models::HourlyRecord;
/// use bikeshare_report::time::Hour;
/// use bikeshare_report::transformations::filter_by_date_range;
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2011, 1, day).unwrap();
/// let records: Vec<HourlyRecord> = (1..=5)
///     .map(|day| HourlyRecord { date: d(day), hour: Hour::new(0).unwrap(), cnt: 1 })
///     .collect();
///
/// assert_eq!(filter_by_date_range(&records, d(2), d(4)).len(), 3);
/// assert!(filter_by_date_range(&records, d(4), d(2)).is_empty());
/// ```
pub fn filter_by_date_range<T: Dated + Clone>(
    records: &[T],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<T> {
    filter_by_range(records, &DateRange::new(start, end))
}

/// [`filter_by_date_range`] taking a [`DateRange`].
pub fn filter_by_range<T: Dated + Clone>(records: &[T], range: &DateRange) -> Vec<T> {
    if range.is_empty() {
        return Vec::new();
    }

    records
        .iter()
        .filter(|r| range.contains(r.date()))
        .cloned()
        .collect()
}

/// `[min(date), max(date)]` over a collection, `None` when it is empty.
pub fn date_bounds<T: Dated>(records: &[T]) -> Option<DateRange> {
    let mut dates = records.iter().map(Dated::date);
    let first = dates.next()?;
    let (start, end) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
    Some(DateRange::new(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DailyRecord, Season};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_records() -> Vec<DailyRecord> {
        // Deliberately out of date order
        [ymd(2011, 1, 3), ymd(2011, 1, 1), ymd(2011, 2, 1), ymd(2011, 1, 2)]
            .into_iter()
            .enumerate()
            .map(|(i, date)| DailyRecord {
                instant: i as i64 + 1,
                date,
                season: Season::Spring,
                casual: 1,
                registered: 1,
                user_count: 2,
            })
            .collect()
    }

    #[test]
    fn test_filter_bounds_are_inclusive() {
        let records = sample_records();
        let filtered = filter_by_date_range(&records, ymd(2011, 1, 1), ymd(2011, 1, 3));
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let records = sample_records();
        let filtered = filter_by_date_range(&records, ymd(2011, 1, 1), ymd(2011, 12, 31));
        let instants: Vec<i64> = filtered.iter().map(|r| r.instant).collect();
        assert_eq!(instants, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_filter_single_day() {
        let records = sample_records();
        let filtered = filter_by_date_range(&records, ymd(2011, 2, 1), ymd(2011, 2, 1));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].instant, 3);
    }

    #[test]
    fn test_filter_inverted_range_is_empty() {
        let records = sample_records();
        assert!(filter_by_date_range(&records, ymd(2011, 1, 3), ymd(2011, 1, 1)).is_empty());
    }

    #[test]
    fn test_filter_range_outside_data() {
        let records = sample_records();
        assert!(filter_by_date_range(&records, ymd(2013, 1, 1), ymd(2013, 12, 31)).is_empty());
    }

    #[test]
    fn test_date_bounds() {
        let records = sample_records();
        let bounds = date_bounds(&records).unwrap();
        assert_eq!(bounds, DateRange::new(ymd(2011, 1, 1), ymd(2011, 2, 1)));

        let empty: Vec<DailyRecord> = vec![];
        assert!(date_bounds(&empty).is_none());
    }

    #[test]
    fn test_clamp_to_bounds() {
        let bounds = DateRange::new(ymd(2011, 1, 1), ymd(2012, 12, 31));

        let wide = DateRange::new(ymd(2010, 6, 1), ymd(2013, 1, 1));
        assert_eq!(wide.clamp_to(&bounds), bounds);

        let inside = DateRange::new(ymd(2011, 3, 1), ymd(2011, 4, 1));
        assert_eq!(inside.clamp_to(&bounds), inside);

        let disjoint = DateRange::new(ymd(2014, 1, 1), ymd(2014, 2, 1));
        assert!(disjoint.clamp_to(&bounds).is_empty());
    }

    #[test]
    fn test_display() {
        let range = DateRange::new(ymd(2011, 1, 1), ymd(2011, 1, 31));
        assert_eq!(range.to_string(), "2011-01-01 .. 2011-01-31");
    }
}
