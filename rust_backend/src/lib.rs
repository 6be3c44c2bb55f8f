//! Bike rental reporting core.
//!
//! Loads daily and hourly rental records from CSV, selects a date range and
//! derives the four summary tables a dashboard charts: users per day, users
//! per month, users per hour slot and users per season.
//!
//! # Example
//!
//! ```no_run
//! use bikeshare_report::io::RentalLoader;
//! use bikeshare_report::services::DashboardSession;
//! use chrono::NaiveDate;
//! use std::path::Path;
//!
//! let dataset = RentalLoader::load_dataset(
//!     Path::new("data/daily_edited.csv"),
//!     Path::new("data/hourly_edited.csv"),
//! )
//! .unwrap()
//! .into_shared();
//!
//! let mut session = DashboardSession::new(dataset);
//! session.select_range(
//!     NaiveDate::from_ymd_opt(2011, 6, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2011, 8, 31).unwrap(),
//! );
//! let report = session.report();
//! println!("{} days selected", report.daily.len());
//! ```

pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod output;
pub mod parsing;
pub mod preprocessing;
pub mod services;
pub mod time;
pub mod transformations;

pub use error::{ReportError, ReportResult};
