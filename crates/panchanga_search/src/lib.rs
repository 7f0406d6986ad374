//! Time searches and sunrise-anchored panchanga computation.
//!
//! This crate provides:
//! - New-moon search and Moon-Sun elongation
//! - Segment boundary search for Tithi, Nakshatra and Yoga, with skipped
//!   units reported as additional entries
//! - Per-element entry points and the composite [`panchanga_for_date`]

pub mod error;
pub mod lunar_phase;
pub mod panchang;
pub mod panchang_types;
pub(crate) mod search_util;

pub use error::SearchError;
pub use lunar_phase::{elongation_at, next_new_moon, prev_new_moon, search_new_moons};
pub use panchang::{
    MASA_ZODIAC, NAKSHATRA_ZODIAC, VedicDay, YOGA_ZODIAC, Zodiac, karana_for_date,
    masa_for_date, moon_nakshatra_longitude_at, nakshatra_for_date, panchanga_for_date,
    panchanga_for_ymd, sun_rashi_index_at, tithi_for_date, vara_for_date, vedic_day,
    yoga_for_date, yoga_sum_at,
};
pub use panchang_types::{
    ElementDay, ElementEnd, KaranaInfo, MasaInfo, NakshatraInfo, PanchangConfig,
    PanchangaResult, RituInfo, SamvatsaraInfo, TithiInfo, VaraInfo, YogaInfo,
};
