//! Collection-level validation of loaded rental records.
//!
//! Row-level problems (missing columns, unparseable cells, negative counts,
//! hours outside 0-23) are caught while parsing. This module checks the
//! invariants that span rows: unique dates in the daily collection and unique
//! (date, hour) slots in the hourly collection. It also reports data-quality
//! warnings that do not block loading.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::{DailyRecord, HourlyRecord};
use crate::time::Hour;

/// Only the first few offending rows of each kind are spelled out.
const MAX_REPORTED_ISSUES: usize = 5;

/// Validation outcome with categorized issues and statistics.
///
/// Errors make `is_valid` false; warnings are informational.
///
/// # Examples
///
/// ```
/// use bikeshare_report::preprocessing::validator::ValidationResult;
///
/// let mut result = ValidationResult::new();
/// assert!(result.is_valid);
///
/// result.add_error("Duplicate date 2011-01-01".to_string());
/// assert!(!result.is_valid);
/// assert_eq!(result.errors.len(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub stats: ValidationStats,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationStats {
    pub total_records: usize,
    pub duplicate_keys: usize,
    /// Daily rows whose `user_count` differs from `casual + registered`.
    pub inconsistent_totals: usize,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            ..Default::default()
        }
    }

    /// Adds a critical error and marks the result as invalid.
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

/// Validator for the daily and hourly record collections.
pub struct RecordValidator;

impl RecordValidator {
    /// Validates a daily collection.
    ///
    /// # Examples
    ///
    /// ```
    /// use bikeshare_report::models::{DailyRecord, Season};
    /// use bikeshare_report::preprocessing::validator::RecordValidator;
    /// use chrono::NaiveDate;
    ///
    /// let day = DailyRecord {
    ///     instant: 1,
    ///     date: NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
    ///     season: Season::Spring,
    ///     casual: 10,
    ///     registered: 20,
    ///     user_count: 30,
    /// };
    /// let result = RecordValidator::validate_daily(&[day.clone(), day]);
    /// assert!(!result.is_valid);
    /// assert_eq!(result.stats.duplicate_keys, 1);
    /// ```
    pub fn validate_daily(records: &[DailyRecord]) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.stats.total_records = records.len();

        let mut seen: HashSet<NaiveDate> = HashSet::with_capacity(records.len());
        for record in records {
            if !seen.insert(record.date) {
                result.stats.duplicate_keys += 1;
                if result.stats.duplicate_keys <= MAX_REPORTED_ISSUES {
                    result.add_error(format!("Duplicate daily record for {}", record.date));
                }
            }

            if record.casual.checked_add(record.registered) != Some(record.user_count) {
                result.stats.inconsistent_totals += 1;
                if result.stats.inconsistent_totals <= MAX_REPORTED_ISSUES {
                    result.add_warning(format!(
                        "{}: casual ({}) + registered ({}) != user_count ({})",
                        record.date, record.casual, record.registered, record.user_count
                    ));
                }
            }
        }

        Self::summarize_overflow(&mut result);
        result
    }

    /// Validates an hourly collection.
    pub fn validate_hourly(records: &[HourlyRecord]) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.stats.total_records = records.len();

        let mut seen: HashSet<(NaiveDate, Hour)> = HashSet::with_capacity(records.len());
        for record in records {
            if !seen.insert((record.date, record.hour)) {
                result.stats.duplicate_keys += 1;
                if result.stats.duplicate_keys <= MAX_REPORTED_ISSUES {
                    result.add_error(format!(
                        "Duplicate hourly record for {} {}",
                        record.date, record.hour
                    ));
                }
            }
        }

        Self::summarize_overflow(&mut result);
        result
    }

    fn summarize_overflow(result: &mut ValidationResult) {
        if result.stats.duplicate_keys > MAX_REPORTED_ISSUES {
            let total = result.stats.duplicate_keys;
            result.add_error(format!(
                "Total duplicate records: {} (showing first {})",
                total, MAX_REPORTED_ISSUES
            ));
        }
        if result.stats.inconsistent_totals > MAX_REPORTED_ISSUES {
            let total = result.stats.inconsistent_totals;
            result.add_warning(format!(
                "Total inconsistent user totals: {} (showing first {})",
                total, MAX_REPORTED_ISSUES
            ));
        }
    }
}
