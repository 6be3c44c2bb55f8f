//! Property tests for date filtering and the four aggregations.

use bikeshare_report::models::{DailyRecord, HourlyRecord, Season};
use bikeshare_report::services::{
    daily_summary, hourly_summary, monthly_summary, seasonal_summary,
};
use bikeshare_report::time::Hour;
use bikeshare_report::transformations::filter_by_date_range;
use chrono::{Datelike, Days, NaiveDate};
use proptest::prelude::*;

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2011, 1, 1).unwrap()
}

fn day(offset: u64) -> NaiveDate {
    epoch() + Days::new(offset)
}

/// Daily collections with unique dates over two years, in shuffled order.
fn daily_records() -> impl Strategy<Value = Vec<DailyRecord>> {
    prop::collection::btree_set(0u64..730, 0..80)
        .prop_flat_map(|offsets| {
            let n = offsets.len();
            (
                Just(offsets.into_iter().collect::<Vec<_>>()),
                prop::collection::vec((0usize..4, 0u64..5_000, 0u64..5_000), n),
            )
        })
        .prop_map(|(offsets, values)| {
            offsets
                .into_iter()
                .zip(values)
                .rev()
                .map(|(offset, (season, casual, registered))| DailyRecord {
                    instant: offset as i64 + 1,
                    date: day(offset),
                    season: Season::ALL[season],
                    casual,
                    registered,
                    user_count: casual + registered,
                })
                .collect()
        })
}

fn hourly_records() -> impl Strategy<Value = Vec<HourlyRecord>> {
    prop::collection::vec((0u64..60, 0u8..24, 0u64..1_000), 0..120).prop_map(|rows| {
        rows.into_iter()
            .map(|(offset, hour, cnt)| HourlyRecord {
                date: day(offset),
                hour: Hour::new(hour).unwrap(),
                cnt,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn daily_dates_strictly_ascending(records in daily_records()) {
        let rows = daily_summary(&records);
        prop_assert!(rows.windows(2).all(|w| w[0].date < w[1].date));
        prop_assert_eq!(rows.len(), records.len());
    }

    #[test]
    fn monthly_labels_are_month_ends_ascending(records in daily_records()) {
        let rows = monthly_summary(&records);
        prop_assert!(rows.windows(2).all(|w| w[0].date < w[1].date));
        for row in &rows {
            let next = row.date + Days::new(1);
            prop_assert_eq!(next.day(), 1);
        }
        let total: u64 = rows.iter().map(|r| r.total_users).sum();
        let expected: u64 = records.iter().map(|r| r.user_count).sum();
        prop_assert_eq!(total, expected);
    }

    #[test]
    fn inverted_range_is_empty(
        records in daily_records(),
        a in 0u64..730,
        gap in 1u64..100,
    ) {
        let start = day(a + gap);
        let end = day(a);
        prop_assert!(filter_by_date_range(&records, start, end).is_empty());
    }

    #[test]
    fn filtering_is_idempotent(
        records in daily_records(),
        a in 0u64..730,
        b in 0u64..730,
    ) {
        let (start, end) = (day(a.min(b)), day(a.max(b)));
        let once = filter_by_date_range(&records, start, end);
        let twice = filter_by_date_range(&once, start, end);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn seasonal_totals_conserve_users(records in daily_records()) {
        let rows = seasonal_summary(&records);
        let seasonal_total: u64 = rows.iter().map(|r| r.total_users).sum();
        let input_total: u64 = records.iter().map(|r| r.user_count).sum();
        prop_assert_eq!(seasonal_total, input_total);

        if input_total > 0 {
            let shares: f64 = rows.iter().map(|r| r.share_percent).sum();
            prop_assert!((shares - 100.0).abs() < 1e-6);
        }
    }

    #[test]
    fn hourly_keeps_one_row_per_record(records in hourly_records()) {
        let rows = hourly_summary(&records);
        prop_assert_eq!(rows.len(), records.len());
        for (row, record) in rows.iter().zip(&records) {
            prop_assert_eq!(row.cnt, record.cnt);
            prop_assert_eq!(row.label.clone(), format!("{:02}:00", record.hour.value()));
        }
    }
}
