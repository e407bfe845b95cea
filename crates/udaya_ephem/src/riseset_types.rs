//! Observer, event and horizon model for sunrise/sunset.

use std::fmt::{Display, Formatter};

/// Standard horizontal refraction, arcminutes.
pub const STANDARD_REFRACTION_ARCMIN: f64 = 34.0;
/// Mean apparent solar semidiameter, arcminutes.
pub const SOLAR_SEMIDIAMETER_ARCMIN: f64 = 16.0;

const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Observer on the Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Degrees, north positive.
    pub latitude_deg: f64,
    /// Degrees, east positive.
    pub longitude_deg: f64,
    /// Meters above sea level.
    pub altitude_m: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}

/// Upper-limb horizon crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetEvent {
    Sunrise,
    Sunset,
}

impl RiseSetEvent {
    pub fn is_rising(self) -> bool {
        self == Self::Sunrise
    }
}

impl Display for RiseSetEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Sunrise => "sunrise",
            Self::Sunset => "sunset",
        })
    }
}

/// Horizon model: how far below the geometric horizon the Sun's centre sits
/// at the moment its upper limb touches the apparent horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetConfig {
    pub refraction_arcmin: f64,
    pub semidiameter_arcmin: f64,
    /// Lower the horizon by the dip seen from `altitude_m` above sea level.
    pub altitude_correction: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: STANDARD_REFRACTION_ARCMIN,
            semidiameter_arcmin: SOLAR_SEMIDIAMETER_ARCMIN,
            altitude_correction: true,
        }
    }
}

/// Geometric dip of the sea horizon, `acos(R / (R + h))`, in degrees.
pub fn horizon_dip_deg(altitude_m: f64) -> f64 {
    if altitude_m <= 0.0 {
        return 0.0;
    }
    (EARTH_RADIUS_M / (EARTH_RADIUS_M + altitude_m)).acos().to_degrees()
}

impl RiseSetConfig {
    /// Sea-level observer, no dip.
    pub fn sea_level() -> Self {
        Self {
            altitude_correction: false,
            ..Self::default()
        }
    }

    /// Depression of the Sun's centre at the event, degrees (positive = below).
    pub fn horizon_depression_deg(&self, altitude_m: f64) -> f64 {
        let limb = (self.refraction_arcmin + self.semidiameter_arcmin) / 60.0;
        if self.altitude_correction {
            limb + horizon_dip_deg(altitude_m)
        } else {
            limb
        }
    }
}

/// Outcome of one rise/set search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    Event { jd_ut: f64, event: RiseSetEvent },
    /// Polar night: the Sun stays below the horizon.
    NeverRises,
    /// Midnight sun: the Sun stays above the horizon.
    NeverSets,
}

impl RiseSetResult {
    /// JD (UT) of the event, if it happens.
    pub fn jd_ut(&self) -> Option<f64> {
        match *self {
            Self::Event { jd_ut, .. } => Some(jd_ut),
            Self::NeverRises | Self::NeverSets => None,
        }
    }
}
