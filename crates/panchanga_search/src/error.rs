//! Error types for panchanga search and computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use panchanga_base::VedicError;
use panchanga_time::TimeError;

/// Errors from panchanga computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// The requested civil date is not a real calendar date.
    InvalidDate(TimeError),
    /// Latitude, longitude or UTC offset out of range.
    InvalidLocation(&'static str),
    /// A boundary or new-moon search failed to bracket a root.
    NoConvergence(&'static str),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(e) => write!(f, "invalid date: {e}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDate(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        Self::InvalidDate(e)
    }
}

impl From<VedicError> for SearchError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::Time(t) => Self::InvalidDate(t),
            VedicError::InvalidLocation(msg) => Self::InvalidLocation(msg),
            _ => Self::InvalidLocation("unrecognized base error"),
        }
    }
}
