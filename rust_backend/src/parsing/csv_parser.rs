use polars::prelude::*;
use std::path::Path;

use crate::error::{ReportError, ReportResult};
use crate::models::{DailyRecord, HourlyRecord, Season};
use crate::time::{parse_date, Hour};

/// Columns of the daily source. Each entry lists accepted spellings, the
/// first one being the canonical name.
pub const DAILY_INSTANT: &[&str] = &["instant"];
pub const DAILY_DATE: &[&str] = &["dteday"];
pub const DAILY_SEASON: &[&str] = &["season_name", "season"];
pub const DAILY_CASUAL: &[&str] = &["casual"];
pub const DAILY_REGISTERED: &[&str] = &["registered"];
pub const DAILY_USERS: &[&str] = &["user_count", "cnt"];

/// Columns of the hourly source.
pub const HOURLY_DATE: &[&str] = &["dteday"];
pub const HOURLY_HOUR: &[&str] = &["hr"];
pub const HOURLY_COUNT: &[&str] = &["cnt"];

/// Parse a CSV file with a header row into a Polars DataFrame.
///
/// Every column is read as text; typed conversion happens per cell in
/// [`dataframe_to_daily_records`] and [`dataframe_to_hourly_records`] so a
/// bad value anywhere in the file is reported as
/// [`ReportError::MalformedInput`].
pub fn parse_rental_csv(csv_path: &Path) -> ReportResult<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(csv_path.into()))?
        .finish()?;

    Ok(df)
}

/// Parse the daily CSV and convert it to typed records
pub fn parse_daily_csv(csv_path: &Path) -> ReportResult<Vec<DailyRecord>> {
    let df = parse_rental_csv(csv_path)?;
    dataframe_to_daily_records(&df)
}

/// Parse the hourly CSV and convert it to typed records
pub fn parse_hourly_csv(csv_path: &Path) -> ReportResult<Vec<HourlyRecord>> {
    let df = parse_rental_csv(csv_path)?;
    dataframe_to_hourly_records(&df)
}

/// Convert a daily-grain DataFrame into [`DailyRecord`]s.
///
/// Every required column must be present and every cell must parse; the
/// first offending cell is reported as [`ReportError::MalformedInput`].
pub fn dataframe_to_daily_records(df: &DataFrame) -> ReportResult<Vec<DailyRecord>> {
    let instants = integer_column(df, DAILY_INSTANT)?;
    let dates = date_column(df, DAILY_DATE)?;
    let seasons = season_column(df, DAILY_SEASON)?;
    let casual = count_column(df, DAILY_CASUAL)?;
    let registered = count_column(df, DAILY_REGISTERED)?;
    let users = count_column(df, DAILY_USERS)?;

    let records = (0..df.height())
        .map(|i| DailyRecord {
            instant: instants[i],
            date: dates[i],
            season: seasons[i],
            casual: casual[i],
            registered: registered[i],
            user_count: users[i],
        })
        .collect();

    Ok(records)
}

/// Convert an hourly-grain DataFrame into [`HourlyRecord`]s.
pub fn dataframe_to_hourly_records(df: &DataFrame) -> ReportResult<Vec<HourlyRecord>> {
    let dates = date_column(df, HOURLY_DATE)?;
    let hours = integer_column(df, HOURLY_HOUR)?;
    let counts = count_column(df, HOURLY_COUNT)?;

    let mut records = Vec::with_capacity(df.height());
    for (row, ((date, hour), cnt)) in dates.into_iter().zip(hours).zip(counts).enumerate() {
        let hour = u8::try_from(hour)
            .ok()
            .and_then(Hour::new)
            .ok_or_else(|| {
                ReportError::malformed(format!(
                    "Column 'hr' row {}: hour {} is outside 0..=23",
                    row, hour
                ))
            })?;
        records.push(HourlyRecord { date, hour, cnt });
    }

    Ok(records)
}

/// Find the first present column among `candidates`.
fn require_column<'a>(
    df: &'a DataFrame,
    candidates: &[&'static str],
) -> ReportResult<(&'static str, &'a Column)> {
    candidates
        .iter()
        .find_map(|name| df.column(name).ok().map(|c| (*name, c)))
        .ok_or_else(|| {
            ReportError::malformed(format!(
                "Missing required column: {}",
                candidates.join(" or ")
            ))
        })
}

fn integer_column(df: &DataFrame, candidates: &[&'static str]) -> ReportResult<Vec<i64>> {
    named_integer_column(df, candidates).map(|(_, values)| values)
}

fn named_integer_column(
    df: &DataFrame,
    candidates: &[&'static str],
) -> ReportResult<(&'static str, Vec<i64>)> {
    let (name, _) = require_column(df, candidates)?;
    let values = text_column(df, &[name], parse_integer)?;
    Ok((name, values))
}

fn parse_integer(raw: &str) -> Result<i64, String> {
    let trimmed = raw.trim();
    trimmed.parse::<i64>().map_err(|_| {
        let is_number = trimmed.parse::<f64>().map_or(false, f64::is_finite);
        if is_number {
            format!("'{}' is fractional, expected an integer", trimmed)
        } else {
            format!("'{}' is not an integer", trimmed)
        }
    })
}

fn count_column(df: &DataFrame, candidates: &[&'static str]) -> ReportResult<Vec<u64>> {
    let (name, values) = named_integer_column(df, candidates)?;
    values
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            u64::try_from(value).map_err(|_| {
                ReportError::malformed(format!(
                    "Column '{}' row {}: negative count {}",
                    name, row, value
                ))
            })
        })
        .collect()
}

fn text_column<T>(
    df: &DataFrame,
    candidates: &[&'static str],
    parse: impl Fn(&str) -> Result<T, String>,
) -> ReportResult<Vec<T>> {
    let (name, column) = require_column(df, candidates)?;
    let cast = column.cast(&DataType::String)?;
    let values = cast.str()?;

    values
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            let raw = value.ok_or_else(|| {
                ReportError::malformed(format!("Column '{}' row {}: missing value", name, row))
            })?;
            parse(raw).map_err(|reason| {
                ReportError::malformed(format!("Column '{}' row {}: {}", name, row, reason))
            })
        })
        .collect()
}

fn date_column(
    df: &DataFrame,
    candidates: &[&'static str],
) -> ReportResult<Vec<chrono::NaiveDate>> {
    text_column(df, candidates, |raw| {
        parse_date(raw).ok_or_else(|| format!("'{}' is not a YYYY-MM-DD date", raw))
    })
}

fn season_column(df: &DataFrame, candidates: &[&'static str]) -> ReportResult<Vec<Season>> {
    text_column(df, candidates, |raw| raw.parse::<Season>())
}
