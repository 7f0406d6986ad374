//! TOML layout and conversion into typed engine settings.
//!
//! ```toml
//! ayanamsha = "lahiri"
//!
//! [riseset]
//! horizon_altitude_deg = -0.8333
//! apply_equation_of_time = true
//!
//! [panchang]
//! include_moon_events = true
//!
//! [location]
//! name = "Bengaluru"
//! latitude_deg = 12.9716
//! longitude_deg = 77.5946
//! utc_offset_hours = 5.5
//!
//! [names.tithi]
//! 5 = "Vasant Panchami"
//! ```
//!
//! Every table and key is optional; missing values take the library defaults.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;
use panchanga_base::{
    AyanamshaSystem, GeoLocation, MeanElementEphemeris, NameCategory, NameTable, RiseSetConfig,
};
use panchanga_search::PanchangConfig;
use serde::Deserialize;

use crate::error::ConfigError;

/// Everything needed to run the engine, resolved from a settings file.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub ephemeris: MeanElementEphemeris,
    pub panchang: PanchangConfig,
    /// Built-in names with any overrides applied.
    pub names: NameTable,
    /// Default observer, if the file names one.
    pub location: Option<GeoLocation>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            ephemeris: MeanElementEphemeris::default(),
            panchang: PanchangConfig::default(),
            names: NameTable::builtin(),
            location: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsToml {
    #[serde(default)]
    ayanamsha: Option<String>,
    #[serde(default)]
    riseset: RiseSetToml,
    #[serde(default)]
    panchang: PanchangToml,
    #[serde(default)]
    location: Option<LocationToml>,
    /// category label -> index -> display name
    #[serde(default)]
    names: BTreeMap<String, BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RiseSetToml {
    horizon_altitude_deg: f64,
    apply_equation_of_time: bool,
}

impl Default for RiseSetToml {
    fn default() -> Self {
        let base = RiseSetConfig::default();
        Self {
            horizon_altitude_deg: base.horizon_altitude_deg,
            apply_equation_of_time: base.apply_equation_of_time,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PanchangToml {
    include_moon_events: bool,
}

impl Default for PanchangToml {
    fn default() -> Self {
        Self {
            include_moon_events: PanchangConfig::default().include_moon_events,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct LocationToml {
    #[serde(default)]
    name: Option<String>,
    latitude_deg: f64,
    longitude_deg: f64,
    #[serde(default)]
    utc_offset_hours: f64,
}

/// Parse settings from TOML text.
pub fn parse_settings(text: &str) -> Result<EngineSettings, ConfigError> {
    let raw: SettingsToml = toml::from_str(text)?;
    let SettingsToml {
        ayanamsha,
        riseset,
        panchang,
        location,
        names,
    } = raw;

    let ephemeris = match ayanamsha {
        Some(code) => MeanElementEphemeris::new(
            code.parse::<AyanamshaSystem>()
                .map_err(|_| ConfigError::UnknownAyanamsha(code))?,
        ),
        None => MeanElementEphemeris::default(),
    };

    let panchang = PanchangConfig {
        riseset: RiseSetConfig {
            horizon_altitude_deg: riseset.horizon_altitude_deg,
            apply_equation_of_time: riseset.apply_equation_of_time,
        },
        include_moon_events: panchang.include_moon_events,
    };

    let location = match location {
        Some(loc) => {
            let mut geo =
                GeoLocation::new(loc.latitude_deg, loc.longitude_deg, loc.utc_offset_hours);
            if let Some(name) = loc.name {
                geo = geo.with_name(name);
            }
            geo.validate()?;
            Some(geo)
        }
        None => None,
    };

    Ok(EngineSettings {
        ephemeris,
        panchang,
        names: name_table_with_overrides(names)?,
        location,
    })
}

/// Read and parse a settings file.
pub fn load_settings(path: &Path) -> Result<EngineSettings, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loaded settings from {}", path.display());
    parse_settings(&text)
}

fn name_table_with_overrides(
    overrides: BTreeMap<String, BTreeMap<String, String>>,
) -> Result<NameTable, ConfigError> {
    let mut table = NameTable::builtin();
    for (label, entries) in overrides {
        let category: NameCategory = label
            .parse()
            .map_err(|_| ConfigError::UnknownCategory(label.clone()))?;
        for (key, name) in entries {
            let index = key
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidIndex {
                    category: label.clone(),
                    key: key.clone(),
                })?;
            table.insert(category, index, name);
        }
    }
    Ok(table)
}
