//! Report configuration file support.
//!
//! Reads `report.toml`:
//!
//! ```toml
//! [data]
//! daily_csv = "data/daily_edited.csv"
//! hourly_csv = "data/hourly_edited.csv"
//!
//! [range]
//! start = "2011-01-01"
//! end = "2012-12-31"
//!
//! [output]
//! format = "table"
//! export_dir = "out"
//! ```
//!
//! Only `[data]` is required.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReportError, ReportResult};
use crate::output::OutputFormat;
use crate::transformations::DateRange;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub data: DataSettings,
    #[serde(default)]
    pub range: RangeSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

/// Locations of the two CSV sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    pub daily_csv: PathBuf,
    pub hourly_csv: PathBuf,
}

/// Initial date selection; a missing bound falls back to the dataset's.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RangeSettings {
    #[serde(default)]
    pub start: Option<NaiveDate>,
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

fn default_format() -> String {
    "table".to_string()
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: default_format(),
            export_dir: None,
        }
    }
}

/// Values given on the command line. Each present field replaces the one
/// read from the configuration file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub daily_csv: Option<PathBuf>,
    pub hourly_csv: Option<PathBuf>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub format: Option<String>,
    pub export_dir: Option<PathBuf>,
}

impl RangeSettings {
    /// Fill missing bounds from `bounds`.
    pub fn resolve(&self, bounds: &DateRange) -> DateRange {
        DateRange::new(
            self.start.unwrap_or(bounds.start),
            self.end.unwrap_or(bounds.end),
        )
    }
}

impl ReportConfig {
    /// Build a configuration pointing at the two sources, other settings
    /// defaulted.
    pub fn with_sources(daily_csv: impl Into<PathBuf>, hourly_csv: impl Into<PathBuf>) -> Self {
        Self {
            data: DataSettings {
                daily_csv: daily_csv.into(),
                hourly_csv: hourly_csv.into(),
            },
            range: RangeSettings::default(),
            output: OutputSettings::default(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ReportError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> ReportResult<Self> {
        let config: ReportConfig = toml::from_str(content).map_err(|e| {
            ReportError::Configuration(format!("Failed to parse config file: {}", e))
        })?;

        // Surface a bad format at load time rather than after the data is read
        config.output_format()?;

        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `report.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> ReportResult<Self> {
        let search_paths = [
            PathBuf::from("report.toml"),
            PathBuf::from("rust_backend/report.toml"),
            PathBuf::from("../report.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::debug!("Using configuration from {}", path.display());
                return Self::from_file(&path);
            }
        }

        Err(ReportError::Configuration(
            "No report.toml found in standard locations".to_string(),
        ))
    }

    /// Build the effective configuration for a run.
    ///
    /// An explicit `config_path` wins. Otherwise both sources given as
    /// overrides make a file unnecessary, and failing that the default
    /// location is searched. Overrides are applied last and the resulting
    /// output format is validated.
    pub fn load_with_overrides(
        config_path: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> ReportResult<Self> {
        let mut config = match (config_path, &overrides.daily_csv, &overrides.hourly_csv) {
            (Some(path), _, _) => Self::from_file(path)?,
            (None, Some(daily), Some(hourly)) => Self::with_sources(daily, hourly),
            _ => Self::from_default_location()?,
        };

        config.apply_overrides(overrides);
        config.output_format()?;
        Ok(config)
    }

    /// Replace settings with every override that is present.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(daily) = &overrides.daily_csv {
            self.data.daily_csv = daily.clone();
        }
        if let Some(hourly) = &overrides.hourly_csv {
            self.data.hourly_csv = hourly.clone();
        }
        if overrides.start.is_some() {
            self.range.start = overrides.start;
        }
        if overrides.end.is_some() {
            self.range.end = overrides.end;
        }
        if let Some(format) = &overrides.format {
            self.output.format = format.clone();
        }
        if overrides.export_dir.is_some() {
            self.output.export_dir = overrides.export_dir.clone();
        }
    }

    pub fn output_format(&self) -> ReportResult<OutputFormat> {
        self.output
            .format
            .parse()
            .map_err(ReportError::Configuration)
    }
}
