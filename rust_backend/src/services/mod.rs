//! Summary computations over rental records.
//!
//! The four aggregations are pure functions of the slice they are handed;
//! [`DashboardSession`] ties them to a date selection over a loaded dataset.

pub mod dashboard;
pub mod hourly;
pub mod seasonal;
pub mod trends;

pub use dashboard::{DashboardReport, DashboardSession};
pub use hourly::hourly_summary;
pub use seasonal::seasonal_summary;
pub use trends::{daily_summary, monthly_summary};
