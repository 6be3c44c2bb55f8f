//! Record selection by date.
//!
//! # Example
//!
//! ```no_run
//! use bikeshare_report::io::RentalLoader;
//! use bikeshare_report::transformations::{date_bounds, filter_by_range};
//! use std::path::Path;
//!
//! let daily = RentalLoader::load_daily(Path::new("data/daily_edited.csv")).unwrap();
//! let bounds = date_bounds(&daily).unwrap();
//! let view = filter_by_range(&daily, &bounds);
//! assert_eq!(view.len(), daily.len());
//! ```

pub mod filtering;

pub use filtering::{date_bounds, filter_by_date_range, filter_by_range, DateRange};
