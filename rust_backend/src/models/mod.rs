//! Domain models for rental records and the summary tables derived from them.

pub mod records;
pub mod season;
pub mod summary;

pub use records::{DailyRecord, Dated, HourlyRecord};
pub use season::Season;
pub use summary::{HourlySummaryRow, SeasonalSummaryRow, UsageSummaryRow};
