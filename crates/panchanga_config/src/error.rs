//! Error types for loading engine settings.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use panchanga_base::VedicError;

/// Errors from reading or interpreting a settings file.
#[derive(Debug)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// The text is not valid TOML or does not match the expected layout.
    Parse(toml::de::Error),
    /// Unrecognized ayanamsha code.
    UnknownAyanamsha(String),
    /// A `[names.*]` table named no known category.
    UnknownCategory(String),
    /// A name-table key is not an integer index.
    InvalidIndex { category: String, key: String },
    /// The `[location]` table is out of range.
    InvalidLocation(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read settings file {}: {source}", path.display())
            }
            Self::Parse(e) => write!(f, "settings parse error: {e}"),
            Self::UnknownAyanamsha(code) => write!(f, "unknown ayanamsha system '{code}'"),
            Self::UnknownCategory(name) => write!(f, "unknown name category '{name}'"),
            Self::InvalidIndex { category, key } => {
                write!(f, "name index '{key}' in [names.{category}] is not an integer")
            }
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<VedicError> for ConfigError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::InvalidLocation(msg) => Self::InvalidLocation(msg),
            _ => Self::InvalidLocation("location rejected"),
        }
    }
}
