//! TOML settings layer for the panchanga engine.
//!
//! Reads ayanamsha, rise/set and panchanga options, an optional default
//! location, and name-table overrides, and resolves them into the typed
//! configs the engine crates take.

pub mod error;
pub mod settings;

pub use error::ConfigError;
pub use settings::{EngineSettings, load_settings, parse_settings};
