//! Types for panchanga computation results.

use panchanga_base::{
    GeoLocation, Karana, Masa, Nakshatra, Paksha, RiseSetConfig, Ritu, Samvatsara, Tithi, Vaar,
    Yoga,
};
use panchanga_time::{CivilDate, ClockTime};

/// Instant at which an element stops prevailing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementEnd {
    /// Julian Date (UT).
    pub jd: f64,
    /// Local clock time counted from midnight of the civil date.
    /// Hours past 24 fall on the following calendar day.
    pub clock: ClockTime,
}

/// Tithi prevailing at (or skipped after) sunrise.
#[derive(Debug, Clone, PartialEq)]
pub struct TithiInfo {
    pub tithi: Tithi,
    /// 1-based number (1-30).
    pub number: u8,
    /// Resolved display name.
    pub name: String,
    pub paksha: Paksha,
    /// `None` when the tithi outlasts the next sunrise.
    pub end: Option<ElementEnd>,
    /// Began and ended between two sunrises without prevailing at either.
    pub is_skipped: bool,
}

/// Nakshatra of the Moon's sidereal longitude.
#[derive(Debug, Clone, PartialEq)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 1-based number (1-27).
    pub number: u8,
    pub name: String,
    pub end: Option<ElementEnd>,
    pub is_skipped: bool,
}

/// Yoga of the summed sidereal longitudes.
#[derive(Debug, Clone, PartialEq)]
pub struct YogaInfo {
    pub yoga: Yoga,
    /// 1-based number (1-27).
    pub number: u8,
    pub name: String,
    pub end: Option<ElementEnd>,
    pub is_skipped: bool,
}

/// Karana in force at sunrise. No end time is tracked.
#[derive(Debug, Clone, PartialEq)]
pub struct KaranaInfo {
    pub karana: Karana,
    /// 1-based sequence number within the lunation (1-60).
    pub number: u8,
    pub name: String,
}

/// Weekday of the civil date.
#[derive(Debug, Clone, PartialEq)]
pub struct VaraInfo {
    pub vaar: Vaar,
    /// 1-based, Ravivara = 1.
    pub number: u8,
    pub name: String,
}

/// Lunar month (new moon to new moon).
#[derive(Debug, Clone, PartialEq)]
pub struct MasaInfo {
    pub masa: Masa,
    /// 1-based, Chaitra = 1.
    pub number: u8,
    pub name: String,
    /// Intercalary month: the Sun changed no rashi during the lunation.
    pub is_leap: bool,
    /// Opening new moon (JD, UT).
    pub start_jd: f64,
    /// Closing new moon (JD, UT).
    pub end_jd: f64,
}

/// Year of the 60-year cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct SamvatsaraInfo {
    pub samvatsara: Samvatsara,
    /// 1-based, Prabhava = 1.
    pub number: u8,
    pub name: String,
    /// CE year in which this lunar year began.
    pub lunar_year: i32,
}

/// Season, two lunar months each.
#[derive(Debug, Clone, PartialEq)]
pub struct RituInfo {
    pub ritu: Ritu,
    /// 1-based, Vasanta = 1.
    pub number: u8,
    pub name: String,
}

/// One day's worth of a boundary-tracked element.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementDay<T> {
    /// Unit in force at sunrise.
    pub prevailing: T,
    /// Unit that started and ended before the next sunrise.
    pub additional: Option<T>,
}

/// Configuration for panchanga computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangConfig {
    /// Sunrise/sunset settings. The sunrise also anchors the day.
    pub riseset: RiseSetConfig,
    /// Compute moonrise and moonset.
    pub include_moon_events: bool,
}

impl Default for PanchangConfig {
    fn default() -> Self {
        Self {
            riseset: RiseSetConfig::default(),
            include_moon_events: true,
        }
    }
}

/// Full panchanga for one civil date at one location.
#[derive(Debug, Clone, PartialEq)]
pub struct PanchangaResult {
    pub date: CivilDate,
    pub location: GeoLocation,
    pub tithi: TithiInfo,
    pub nakshatra: NakshatraInfo,
    pub yoga: YogaInfo,
    pub karana: KaranaInfo,
    pub vara: VaraInfo,
    pub masa: MasaInfo,
    pub samvatsara: SamvatsaraInfo,
    pub ritu: RituInfo,
    /// `None` under polar night or midnight sun.
    pub sunrise: Option<ClockTime>,
    pub sunset: Option<ClockTime>,
    /// `None` when the Moon does not rise on this date or moon events are off.
    pub moonrise: Option<ClockTime>,
    pub moonset: Option<ClockTime>,
    /// Sunset minus sunrise; 24 under midnight sun, 0 under polar night.
    pub day_duration_hours: f64,
    pub additional_tithi: Option<TithiInfo>,
    pub additional_nakshatra: Option<NakshatraInfo>,
    pub additional_yoga: Option<YogaInfo>,
}
