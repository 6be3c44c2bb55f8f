//! Per-season usage totals and their share of all users.

use std::collections::BTreeMap;

use crate::models::{DailyRecord, Season, SeasonalSummaryRow};

#[derive(Default)]
struct SeasonTotals {
    casual: u64,
    registered: u64,
    users: u64,
}

/// Sum casual, registered and total users per season.
///
/// Rows come out in calendar order (Spring, Summer, Fall, Winter) and only for
/// seasons present in `records`. `share_percent` is each season's part of the
/// table's total users, 0 when nobody rode.
pub fn seasonal_summary(records: &[DailyRecord]) -> Vec<SeasonalSummaryRow> {
    let mut groups: BTreeMap<Season, SeasonTotals> = BTreeMap::new();

    for record in records {
        let totals = groups.entry(record.season).or_default();
        totals.casual += record.casual;
        totals.registered += record.registered;
        totals.users += record.user_count;
    }

    let grand_total: u64 = groups.values().map(|t| t.users).sum();

    groups
        .into_iter()
        .map(|(season, totals)| SeasonalSummaryRow {
            season,
            casual: totals.casual,
            registered: totals.registered,
            total_users: totals.users,
            share_percent: share_percent(totals.users, grand_total),
        })
        .collect()
}

fn share_percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(day: u32, season: Season, casual: u64, registered: u64) -> DailyRecord {
        DailyRecord {
            instant: i64::from(day),
            date: NaiveDate::from_ymd_opt(2011, 1, day).unwrap(),
            season,
            casual,
            registered,
            user_count: casual + registered,
        }
    }

    #[test]
    fn test_seasonal_summary_example() {
        let records = vec![
            record(1, Season::Spring, 10, 20),
            record(2, Season::Spring, 5, 5),
        ];

        let rows = seasonal_summary(&records);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].season, Season::Spring);
        assert_eq!(rows[0].casual, 15);
        assert_eq!(rows[0].registered, 25);
        assert_eq!(rows[0].total_users, 40);
        assert_eq!(rows[0].share_percent, 100.0);
    }

    #[test]
    fn test_calendar_order_and_shares() {
        let records = vec![
            record(1, Season::Winter, 0, 25),
            record(2, Season::Spring, 0, 25),
            record(3, Season::Fall, 25, 25),
        ];

        let rows = seasonal_summary(&records);
        let seasons: Vec<Season> = rows.iter().map(|r| r.season).collect();
        assert_eq!(seasons, vec![Season::Spring, Season::Fall, Season::Winter]);

        let shares: Vec<f64> = rows.iter().map(|r| r.share_percent).collect();
        assert_eq!(shares, vec![25.0, 50.0, 25.0]);
    }

    #[test]
    fn test_zero_users_gives_zero_share() {
        let rows = seasonal_summary(&[record(1, Season::Summer, 0, 0)]);
        assert_eq!(rows[0].total_users, 0);
        assert_eq!(rows[0].share_percent, 0.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(seasonal_summary(&[]).is_empty());
    }
}
