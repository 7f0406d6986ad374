//! Types for sunrise/sunset and moonrise/moonset calculations.
//!
//! Provides geographic location, event types, configuration, and result types
//! used by the rise/set computation module.

use crate::error::VedicError;

/// Geographic location on Earth's surface with its civil time zone.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Offset of local civil time from UTC in hours. Range: [-12, 14].
    pub utc_offset_hours: f64,
    /// Optional display name, echoed back in results.
    pub name: Option<String>,
}

impl GeoLocation {
    /// Create a new location without a display name.
    pub fn new(latitude_deg: f64, longitude_deg: f64, utc_offset_hours: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            utc_offset_hours,
            name: None,
        }
    }

    /// Attach a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Check every field against its documented range.
    ///
    /// NaN fails every range check and is rejected too.
    pub fn validate(&self) -> Result<(), VedicError> {
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(VedicError::InvalidLocation("latitude must be in [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(VedicError::InvalidLocation(
                "longitude must be in [-180, 180]",
            ));
        }
        if !(-12.0..=14.0).contains(&self.utc_offset_hours) {
            return Err(VedicError::InvalidLocation(
                "utc offset must be in [-12, 14] hours",
            ));
        }
        Ok(())
    }
}

/// Rise/set event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetEvent {
    /// Sun center crosses the configured horizon altitude, rising.
    Sunrise,
    /// Sun center crosses the configured horizon altitude, setting.
    Sunset,
    /// Moon center rises above the lunar horizon.
    Moonrise,
    /// Moon center sets below the lunar horizon.
    Moonset,
}

impl RiseSetEvent {
    /// Whether this is a rising event.
    pub fn is_rising(self) -> bool {
        matches!(self, Self::Sunrise | Self::Moonrise)
    }

    /// Whether the event concerns the Moon.
    pub fn is_lunar(self) -> bool {
        matches!(self, Self::Moonrise | Self::Moonset)
    }
}

/// Configurable parameters for rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetConfig {
    /// Altitude of the Sun's center at the rise/set instant, in degrees.
    ///
    /// Default 0.0: the geometric horizon, for which the hour-angle equation
    /// reduces to `cos H = -tan(lat) tan(dec)`. Use -0.8333 for the
    /// conventional refraction plus semidiameter correction.
    pub horizon_altitude_deg: f64,
    /// Shift transit by the equation of time (apparent vs mean solar noon).
    /// Default: true.
    pub apply_equation_of_time: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            horizon_altitude_deg: 0.0,
            apply_equation_of_time: true,
        }
    }
}

/// Result of a rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// Event occurs at the given instant.
    Event {
        /// Julian Date (UT) of the event.
        jd: f64,
        /// Local clock hours on the requested civil date, in [0, 24).
        local_hours: f64,
        event: RiseSetEvent,
    },
    /// Body stays below the horizon all day (polar night).
    NeverRises,
    /// Body stays above the horizon all day (midnight sun).
    NeverSets,
    /// The event skips this civil day. Happens to the Moon once a month
    /// because lunar days are about 50 minutes longer than solar days.
    NotOnThisDate,
}

impl RiseSetResult {
    /// Julian Date of the event, if it occurs.
    pub fn jd(&self) -> Option<f64> {
        match self {
            Self::Event { jd, .. } => Some(*jd),
            _ => None,
        }
    }

    /// Local clock hours of the event, if it occurs.
    pub fn local_hours(&self) -> Option<f64> {
        match self {
            Self::Event { local_hours, .. } => Some(*local_hours),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = RiseSetConfig::default();
        assert_eq!(c.horizon_altitude_deg, 0.0);
        assert!(c.apply_equation_of_time);
    }

    #[test]
    fn is_rising_correct() {
        assert!(RiseSetEvent::Sunrise.is_rising());
        assert!(RiseSetEvent::Moonrise.is_rising());
        assert!(!RiseSetEvent::Sunset.is_rising());
        assert!(!RiseSetEvent::Moonset.is_rising());
    }

    #[test]
    fn lunar_events() {
        assert!(RiseSetEvent::Moonset.is_lunar());
        assert!(!RiseSetEvent::Sunrise.is_lunar());
    }

    #[test]
    fn valid_location() {
        let loc = GeoLocation::new(12.9716, 77.5946, 5.5).with_name("Bengaluru");
        assert!(loc.validate().is_ok());
        assert_eq!(loc.name.as_deref(), Some("Bengaluru"));
    }

    #[test]
    fn range_edges_accepted() {
        assert!(GeoLocation::new(90.0, 180.0, 14.0).validate().is_ok());
        assert!(GeoLocation::new(-90.0, -180.0, -12.0).validate().is_ok());
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(GeoLocation::new(91.0, 0.0, 0.0).validate().is_err());
        assert!(GeoLocation::new(0.0, 181.0, 0.0).validate().is_err());
        assert!(GeoLocation::new(0.0, 0.0, 25.0).validate().is_err());
        assert!(GeoLocation::new(0.0, 0.0, -12.5).validate().is_err());
        assert!(GeoLocation::new(f64::NAN, 0.0, 0.0).validate().is_err());
    }

    #[test]
    fn result_accessors() {
        let r = RiseSetResult::Event {
            jd: 2_460_325.5,
            local_hours: 6.5,
            event: RiseSetEvent::Sunrise,
        };
        assert_eq!(r.jd(), Some(2_460_325.5));
        assert_eq!(r.local_hours(), Some(6.5));
        assert_eq!(RiseSetResult::NeverRises.jd(), None);
        assert_eq!(RiseSetResult::NotOnThisDate.local_hours(), None);
    }

    #[test]
    fn cos_h_polar_never_rises() {
        // Tromso (lat=70N), winter solstice (dec=-23.44), geometric horizon
        let phi = 70.0_f64.to_radians();
        let dec = (-23.44_f64).to_radians();
        let cos_h = -phi.tan() * dec.tan();
        assert!(cos_h > 1.0, "cos_h = {cos_h}, should be > 1 (never rises)");
    }
}
