pub mod calendar;
pub mod hours;

pub use calendar::{format_date, month_end, parse_date};
pub use hours::{hour_label, Hour, HOURS_PER_DAY};
