//! Calendar helpers shared by the loaders and the monthly bucketing.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `dteday` value.
///
/// Accepts a plain `YYYY-MM-DD` date as well as a timestamp whose time part
/// is discarded (`YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DDTHH:MM:SS`).
///
/// # Example
/// ```
/// use bikeshare_report::time::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_date("2011-01-01"), NaiveDate::from_ymd_opt(2011, 1, 1));
/// assert_eq!(parse_date("2011-01-01 00:00:00"), NaiveDate::from_ymd_opt(2011, 1, 1));
/// assert_eq!(parse_date("01/01/2011"), None);
/// ```
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
                .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
                .ok()
                .map(|dt| dt.date())
        })
}

/// Format a date the way the input files spell it.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Last calendar day of the month containing `date`.
///
/// This is the label every day of a month collapses to when bucketing by
/// month.
///
/// # Example
/// ```
/// use bikeshare_report::time::month_end;
/// use chrono::NaiveDate;
///
/// let d = NaiveDate::from_ymd_opt(2012, 2, 10).unwrap();
/// assert_eq!(month_end(d), NaiveDate::from_ymd_opt(2012, 2, 29).unwrap());
/// ```
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .unwrap_or(date)
}
