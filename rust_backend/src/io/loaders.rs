use std::path::Path;
use std::sync::Arc;

use crate::error::{ReportError, ReportResult};
use crate::models::{DailyRecord, HourlyRecord};
use crate::parsing::csv_parser;
use crate::preprocessing::validator::{RecordValidator, ValidationResult};
use crate::transformations::{date_bounds, DateRange};

/// The two immutable record collections of one dataset.
///
/// Loaded once and shared read-only; sessions derive their own views from it.
#[derive(Debug, Clone, Default)]
pub struct RentalDataset {
    pub daily: Vec<DailyRecord>,
    pub hourly: Vec<HourlyRecord>,
}

impl RentalDataset {
    pub fn new(daily: Vec<DailyRecord>, hourly: Vec<HourlyRecord>) -> Self {
        Self { daily, hourly }
    }

    /// The range a date picker is limited to: first to last day of the daily
    /// collection.
    pub fn date_bounds(&self) -> Option<DateRange> {
        date_bounds(&self.daily)
    }

    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

/// Loads and validates the rental CSV sources.
pub struct RentalLoader;

impl RentalLoader {
    /// Load the daily CSV into validated records
    pub fn load_daily(path: &Path) -> ReportResult<Vec<DailyRecord>> {
        let records = csv_parser::parse_daily_csv(path)?;
        Self::check("daily", path, RecordValidator::validate_daily(&records))?;

        log::info!("Loaded {} daily records from {}", records.len(), path.display());
        Ok(records)
    }

    /// Load the hourly CSV into validated records
    pub fn load_hourly(path: &Path) -> ReportResult<Vec<HourlyRecord>> {
        let records = csv_parser::parse_hourly_csv(path)?;
        Self::check("hourly", path, RecordValidator::validate_hourly(&records))?;

        log::info!("Loaded {} hourly records from {}", records.len(), path.display());
        Ok(records)
    }

    /// Load both sources of a dataset
    pub fn load_dataset(daily_path: &Path, hourly_path: &Path) -> ReportResult<RentalDataset> {
        let daily = Self::load_daily(daily_path)?;
        let hourly = Self::load_hourly(hourly_path)?;
        Ok(RentalDataset::new(daily, hourly))
    }

    fn check(kind: &str, path: &Path, result: ValidationResult) -> ReportResult<()> {
        for warning in &result.warnings {
            log::warn!("{} ({}): {}", kind, path.display(), warning);
        }

        if result.is_valid {
            Ok(())
        } else {
            Err(ReportError::malformed(format!(
                "{} data in {} failed validation: {}",
                kind,
                path.display(),
                result.errors.join("; ")
            )))
        }
    }
}
