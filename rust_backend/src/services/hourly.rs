//! Hour-of-day distribution.

use crate::models::{HourlyRecord, HourlySummaryRow};

/// Label every hourly record with its "HH:00" hour.
///
/// The label only decorates; records sharing an hour on different days stay
/// separate rows, in input order.
///
/// # Example
/// ```
/// use bikeshare_report::models::HourlyRecord;
/// use bikeshare_report::services::hourly_summary;
/// use bikeshare_report::time::Hour;
/// use chrono::NaiveDate;
///
/// let record = HourlyRecord {
///     date: NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
///     hour: Hour::new(9).unwrap(),
///     cnt: 12,
/// };
/// let rows = hourly_summary(&[record]);
/// assert_eq!(rows[0].label, "09:00");
/// ```
pub fn hourly_summary(records: &[HourlyRecord]) -> Vec<HourlySummaryRow> {
    records
        .iter()
        .map(|record| HourlySummaryRow {
            date: record.date,
            hour: record.hour,
            label: record.hour.label().to_string(),
            cnt: record.cnt,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Hour;
    use chrono::NaiveDate;

    fn record(day: u32, hour: u8, cnt: u64) -> HourlyRecord {
        HourlyRecord {
            date: NaiveDate::from_ymd_opt(2011, 1, day).unwrap(),
            hour: Hour::new(hour).unwrap(),
            cnt,
        }
    }

    #[test]
    fn test_one_row_per_record_without_collapsing() {
        let records = vec![record(1, 8, 10), record(2, 8, 20), record(3, 8, 30)];

        let rows = hourly_summary(&records);

        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.label == "08:00"));
        let counts: Vec<u64> = rows.iter().map(|r| r.cnt).collect();
        assert_eq!(counts, vec![10, 20, 30]);
    }

    #[test]
    fn test_input_order_kept() {
        let records = vec![record(1, 23, 1), record(1, 0, 2), record(1, 12, 3)];

        let labels: Vec<String> = hourly_summary(&records)
            .into_iter()
            .map(|r| r.label)
            .collect();

        assert_eq!(labels, vec!["23:00", "00:00", "12:00"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(hourly_summary(&[]).is_empty());
    }
}
