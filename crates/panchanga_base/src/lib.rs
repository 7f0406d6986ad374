//! Pure astronomical models and element arithmetic for the panchanga engine.
//!
//! This crate provides:
//! - The [`Ephemeris`] capability and its truncated-series implementation
//! - Ayanamsha for six sidereal reference systems
//! - Sunrise/sunset and approximate moonrise/moonset
//! - Tithi, Nakshatra, Yoga, Karana, Vaar, Masa, Ritu, Samvatsara and Rashi
//!   enumerations with their index arithmetic
//! - [`NameResolver`] and the built-in [`NameTable`]
//!
//! Nothing here searches in time; boundary and new-moon searches live in
//! `panchanga_search`.

pub mod ayanamsha;
pub mod ephemeris;
pub mod error;
pub mod karana;
pub mod masa;
pub mod nakshatra;
pub mod names;
pub mod rashi;
pub mod riseset;
pub mod riseset_types;
pub mod samvatsara;
pub mod tithi;
pub mod util;
pub mod vaar;
pub mod yoga;

pub use ayanamsha::{
    AyanamshaSystem, PRECESSION_DEG_PER_CENTURY, ayanamsha_at_jd, ayanamsha_deg,
    sidereal_longitude,
};
pub use ephemeris::{
    Ephemeris, LunarArguments, MeanElementEphemeris, ecliptic_to_equatorial,
    equation_of_time_min, moon_latitude_deg, moon_longitude_deg, obliquity_deg,
    sun_longitude_deg,
};
pub use error::VedicError;
pub use karana::{KARANA_COUNT, KARANA_SEGMENT_DEG, Karana, karana_from_elongation, karana_number};
pub use masa::{
    ALL_MASAS, ALL_RITUS, Masa, Ritu, masa_from_new_moon_rashis, masa_from_rashi_index,
    ritu_from_masa_number,
};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_COUNT, NAKSHATRA_SPAN_27, Nakshatra, nakshatra_from_longitude,
    nakshatra_number,
};
pub use names::{FallbackNames, NameCategory, NameResolver, NameTable};
pub use rashi::{ALL_RASHIS, Rashi, rashi_from_longitude, rashi_index};
pub use riseset::{
    LUNAR_DAY_HOURS, approximate_local_noon_jd, compute_moon_rise_set, compute_rise_set,
    day_duration_hours, sun_rise_set,
};
pub use riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult};
pub use samvatsara::{
    ALL_SAMVATSARAS, SAMVATSARA_EPOCH_YEAR, Samvatsara, lunar_year_for, samvatsara_from_year,
};
pub use tithi::{
    ALL_TITHIS, Paksha, TITHI_COUNT, TITHI_SEGMENT_DEG, Tithi, tithi_from_elongation,
    tithi_number,
};
pub use util::{
    Dms, deg_to_dms, dms_to_deg, normalize_360, normalize_to_pm180, segment_end_deg,
    segment_number,
};
pub use vaar::{ALL_VAARS, Vaar, vaar_from_jdn};
pub use yoga::{ALL_YOGAS, YOGA_COUNT, YOGA_SEGMENT_DEG, Yoga, yoga_from_sum, yoga_number, yoga_sum_deg};
