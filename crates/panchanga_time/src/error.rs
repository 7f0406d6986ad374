//! Error types for calendar and clock conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil-date construction or parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// The (year, month, day) triple does not name a proleptic-Gregorian date.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Text could not be parsed as a date.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid calendar date: {year:04}-{month:02}-{day:02}")
            }
            Self::Parse(msg) => write!(f, "date parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}
