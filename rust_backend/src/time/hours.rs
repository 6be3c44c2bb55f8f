//! Hour-of-day values and their display labels.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const HOURS_PER_DAY: u8 = 24;

/// "HH:00" labels for hours 0-23, built on first use.
static HOUR_LABELS: Lazy<Vec<String>> = Lazy::new(|| {
    (0..HOURS_PER_DAY)
        .map(|hour| format!("{:02}:00", hour))
        .collect()
});

/// Look up the display label for an hour of the day.
///
/// Returns `None` when `hour` is outside `0..=23`.
///
/// # Example
/// ```
/// use bikeshare_report::time::hour_label;
///
/// assert_eq!(hour_label(9), Some("09:00"));
/// assert_eq!(hour_label(24), None);
/// ```
pub fn hour_label(hour: u8) -> Option<&'static str> {
    HOUR_LABELS.get(usize::from(hour)).map(String::as_str)
}

/// An hour of the day, guaranteed to be in `0..=23`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Hour(u8);

impl Hour {
    pub fn new(value: u8) -> Option<Self> {
        (value < HOURS_PER_DAY).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        HOUR_LABELS[usize::from(self.0)].as_str()
    }
}

impl TryFrom<u8> for Hour {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Hour::new(value).ok_or_else(|| format!("hour {} is outside 0..=23", value))
    }
}

impl From<Hour> for u8 {
    fn from(hour: Hour) -> Self {
        hour.0
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
