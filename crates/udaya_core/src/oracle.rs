//! Seams to the external collaborators of the pipeline.
//!
//! Each oracle is a plain blocking trait. Implementations may do network
//! I/O; callers that need a deadline run the pipeline on a worker and report
//! expiry as [`OracleError::Timeout`].

use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use chrono_tz::Tz;
use udaya_time::LocalInstant;

use crate::error::OracleError;
use crate::types::{Coordinates, Location};

/// Bodies placed by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Body {
    Sun,
    Moon,
}

/// All placed bodies, in report order.
pub const ALL_BODIES: [Body; 2] = [Body::Sun, Body::Moon];

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
        }
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Place-name search.
pub trait GeocodeOracle {
    /// Candidate locations for free text, optionally narrowed by a country
    /// name. Lookup failures yield an empty list.
    fn suggest(&self, query: &str, country_hint: Option<&str>) -> Vec<Location>;
}

/// Coordinates → IANA zone identifier.
pub trait TimezoneOracle {
    /// `None` when no zone is known; the pipeline then falls back to UTC.
    fn lookup(&self, coordinates: &Coordinates) -> Option<String>;
}

/// Sunrise for a place and local calendar date.
pub trait SunEventOracle {
    /// Local sunrise instant. Fails when the Sun does not rise that day.
    fn sunrise(
        &self,
        coordinates: &Coordinates,
        date: NaiveDate,
        zone: Tz,
    ) -> Result<LocalInstant, OracleError>;
}

/// Tropical ecliptic longitudes at a UT Julian Day.
pub trait EphemerisOracle {
    /// Longitude of the ascendant in degrees.
    fn ascendant(&self, jd_ut: f64, coordinates: &Coordinates) -> Result<f64, OracleError>;

    /// Geocentric ecliptic longitude of `body` in degrees.
    fn body_longitude(&self, jd_ut: f64, body: Body) -> Result<f64, OracleError>;
}

impl<T: GeocodeOracle + ?Sized> GeocodeOracle for &T {
    fn suggest(&self, query: &str, country_hint: Option<&str>) -> Vec<Location> {
        (**self).suggest(query, country_hint)
    }
}

impl<T: TimezoneOracle + ?Sized> TimezoneOracle for &T {
    fn lookup(&self, coordinates: &Coordinates) -> Option<String> {
        (**self).lookup(coordinates)
    }
}

impl<T: SunEventOracle + ?Sized> SunEventOracle for &T {
    fn sunrise(
        &self,
        coordinates: &Coordinates,
        date: NaiveDate,
        zone: Tz,
    ) -> Result<LocalInstant, OracleError> {
        (**self).sunrise(coordinates, date, zone)
    }
}

impl<T: EphemerisOracle + ?Sized> EphemerisOracle for &T {
    fn ascendant(&self, jd_ut: f64, coordinates: &Coordinates) -> Result<f64, OracleError> {
        (**self).ascendant(jd_ut, coordinates)
    }

    fn body_longitude(&self, jd_ut: f64, body: Body) -> Result<f64, OracleError> {
        (**self).body_longitude(jd_ut, body)
    }
}
