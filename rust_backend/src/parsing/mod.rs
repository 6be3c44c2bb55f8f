//! Parsers for the rental CSV sources.
//!
//! CSV reading and column type inference are delegated to Polars; this module
//! turns the resulting DataFrames into typed records and reports any missing
//! or unparseable column as [`ReportError::MalformedInput`].
//!
//! # Example
//!
//! ```no_run
//! use bikeshare_report::parsing::csv_parser::parse_daily_csv;
//! use std::path::Path;
//!
//! let records = parse_daily_csv(Path::new("data/daily_edited.csv"))
//!     .expect("Failed to parse daily data");
//! ```
//!
//! [`ReportError::MalformedInput`]: crate::error::ReportError::MalformedInput

pub mod csv_parser;
