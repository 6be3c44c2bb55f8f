//! Loading the rental sources and exporting summary tables.
//!
//! # Example
//!
//! ```no_run
//! use bikeshare_report::io::RentalLoader;
//! use std::path::Path;
//!
//! let dataset = RentalLoader::load_dataset(
//!     Path::new("data/daily_edited.csv"),
//!     Path::new("data/hourly_edited.csv"),
//! )
//! .expect("Failed to load");
//! println!("Loaded {} days", dataset.daily.len());
//! ```

pub mod export;
pub mod loaders;


pub use export::{summaries_to_dataframes, write_summary_csvs, SummaryFrames};
pub use loaders::{RentalDataset, RentalLoader};
