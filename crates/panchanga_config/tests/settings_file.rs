//! Loads settings files from disk and runs the engine with them.

use std::path::PathBuf;

use panchanga_base::{AyanamshaSystem, NameCategory, NameResolver};
use panchanga_config::{ConfigError, load_settings, parse_settings};
use panchanga_search::panchanga_for_date;
use panchanga_time::CivilDate;

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name)
}

#[test]
fn loads_bengaluru_file() {
    let settings = load_settings(&data_path("bengaluru.toml")).unwrap();
    assert_eq!(settings.ephemeris.ayanamsha, AyanamshaSystem::Lahiri);
    assert_eq!(settings.panchang.riseset.horizon_altitude_deg, -0.8333);
    assert!(!settings.panchang.include_moon_events);
    let loc = settings.location.as_ref().unwrap();
    assert_eq!(loc.name.as_deref(), Some("Bengaluru"));
    assert_eq!(settings.names.resolve(NameCategory::Vara, 2), "Monday");
}

#[test]
fn settings_drive_the_engine() {
    let settings = load_settings(&data_path("bengaluru.toml")).unwrap();
    let loc = settings.location.clone().unwrap();
    let date = CivilDate::new(2024, 1, 15).unwrap();
    let result = panchanga_for_date(
        &settings.ephemeris,
        &settings.names,
        date,
        &loc,
        &settings.panchang,
    )
    .unwrap();
    assert_eq!(result.tithi.name, "Vasant Panchami");
    assert_eq!(result.vara.name, "Monday");
    assert_eq!(result.moonrise, None);
}

#[test]
fn missing_file_reports_path() {
    let err = load_settings(&data_path("does_not_exist.toml")).unwrap_err();
    match err {
        ConfigError::Io { path, .. } => assert!(path.ends_with("does_not_exist.toml")),
        other => panic!("expected Io error, got {other}"),
    }
}

#[test]
fn out_of_range_location_is_rejected() {
    let text = "[location]\nlatitude_deg = 95.0\nlongitude_deg = 0.0\n";
    let err = parse_settings(text).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidLocation(_)));
}

#[test]
fn unknown_key_is_a_parse_error() {
    let err = parse_settings("[riseset]\nrefraction = true\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn unknown_category_is_rejected() {
    let err = parse_settings("[names.planet]\n1 = \"Surya\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::UnknownCategory(ref c) if c == "planet"));
}
