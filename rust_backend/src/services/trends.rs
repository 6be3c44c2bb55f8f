//! Usage over time: daily and monthly buckets.

use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};

use crate::models::{DailyRecord, UsageSummaryRow};
use crate::time::month_end;

/// Group records under `bucket(date)` and aggregate each group.
///
/// Buckets come out in ascending date order; buckets without records are
/// never emitted.
fn bucket_usage(
    records: &[DailyRecord],
    bucket: impl Fn(NaiveDate) -> NaiveDate,
) -> Vec<UsageSummaryRow> {
    let mut groups: BTreeMap<NaiveDate, (HashSet<i64>, u64)> = BTreeMap::new();

    for record in records {
        let entry = groups.entry(bucket(record.date)).or_default();
        entry.0.insert(record.instant);
        entry.1 += record.user_count;
    }

    groups
        .into_iter()
        .map(|(date, (trips, users))| UsageSummaryRow {
            date,
            distinct_trip_count: trips.len(),
            total_users: users,
        })
        .collect()
}

/// One row per calendar day present in `records`.
///
/// # Example
/// ```
/// use bikeshare_report::models::{DailyRecord, Season};
/// use bikeshare_report::services::daily_summary;
/// use chrono::NaiveDate;
///
/// let day = |instant, d, users| DailyRecord {
///     instant,
///     date: NaiveDate::from_ymd_opt(2011, 1, d).unwrap(),
///     season: Season::Spring,
///     casual: 0,
///     registered: users,
///     user_count: users,
/// };
/// let rows = daily_summary(&[day(2, 2, 50), day(1, 1, 100)]);
/// assert_eq!(rows[0].total_users, 100);
/// assert_eq!(rows[1].total_users, 50);
/// ```
pub fn daily_summary(records: &[DailyRecord]) -> Vec<UsageSummaryRow> {
    bucket_usage(records, |date| date)
}

/// One row per calendar month present in `records`, labelled with the
/// month's last day.
pub fn monthly_summary(records: &[DailyRecord]) -> Vec<UsageSummaryRow> {
    bucket_usage(records, month_end)
}
