//! Calendar epoch conversions for the panchanga engine.
//!
//! This crate provides:
//! - [`CivilDate`], a validated proleptic-Gregorian date
//! - Julian Day Number ↔ civil date conversions
//! - [`ClockTime`], the sexagesimal rendering of decimal hours
//! - Greenwich mean sidereal time for hour-angle work
//!
//! Every downstream astronomical function takes a continuous Julian Date;
//! this crate is the only place civil calendar arithmetic happens.

pub mod civil_date;
pub mod clock;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil_date::{CivilDate, MAX_YEAR, MIN_YEAR, days_in_month, is_leap_year};
pub use clock::ClockTime;
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, civil_from_jdn,
    jd_at_midnight, jd_to_calendar, jd_to_centuries, jdn_from_civil,
    local_hours_since_midnight,
};
pub use sidereal::{
    SIDEREAL_RATE_DEG_PER_DAY, earth_rotation_angle_deg, gmst_deg, local_sidereal_time_deg,
};
