//! Data model of one Panchang query and its result.

use std::fmt::{Display, Formatter};

use chrono::{DateTime, FixedOffset, NaiveDate};
use chrono_tz::Tz;
use udaya_vedic::{HousePlacement, NakshatraPlacement, SignPlacement};

use crate::config::Zodiac;
use crate::oracle::{ALL_BODIES, Body};

/// Decimal places kept on coordinates.
pub const DEFAULT_COORDINATE_DECIMALS: u32 = 6;

fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals.min(15) as i32);
    (value * scale).round() / scale
}

/// Geographic position in degrees (north and east positive).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Coordinates rounded to 6 decimals (~0.1 m).
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self::with_decimals(latitude, longitude, DEFAULT_COORDINATE_DECIMALS)
    }

    pub fn with_decimals(latitude: f64, longitude: f64, decimals: u32) -> Self {
        Self {
            latitude: round_to(latitude, decimals),
            longitude: round_to(longitude, decimals),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Same point re-rounded to `decimals`.
    pub fn rounded(&self, decimals: u32) -> Self {
        Self::with_decimals(self.latitude, self.longitude, decimals)
    }
}

impl Display for Coordinates {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let ns = if self.latitude < 0.0 { 'S' } else { 'N' };
        let ew = if self.longitude < 0.0 { 'W' } else { 'E' };
        write!(
            f,
            "{:.6}°{ns}, {:.6}°{ew}",
            self.latitude.abs(),
            self.longitude.abs()
        )
    }
}

/// A geocoded place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Location {
    pub coordinates: Coordinates,
    pub display_address: String,
}

impl Location {
    pub fn new(coordinates: Coordinates, display_address: impl Into<String>) -> Self {
        Self {
            coordinates,
            display_address: display_address.into(),
        }
    }

    /// First comma-separated segment of the address, usually the city.
    pub fn short_name(&self) -> &str {
        first_segment(&self.display_address)
    }
}

fn first_segment(address: &str) -> &str {
    address.split(',').next().map(str::trim).unwrap_or_default()
}

/// Where and when a query is evaluated; built once per invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverContext {
    pub coordinates: Coordinates,
    pub zone: Tz,
    /// True when the timezone oracle had no answer and the fallback was used.
    pub zone_fallback: bool,
    pub date: NaiveDate,
}

/// The ascendant and its sign.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AscendantPosition {
    /// Longitude in [0, 360), in the configured zodiac.
    pub longitude_deg: f64,
    pub sign: SignPlacement,
}

/// All three placements of one body.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BodyPosition {
    pub body: Body,
    /// Longitude in [0, 360), in the configured zodiac.
    pub longitude_deg: f64,
    pub sign: SignPlacement,
    pub nakshatra: NakshatraPlacement,
    pub house: HousePlacement,
}

/// Everything computed for one (place, date) query.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PanchangResult {
    pub coordinates: Coordinates,
    pub display_address: String,
    /// IANA zone the sunrise is expressed in.
    pub timezone: String,
    pub timezone_fallback: bool,
    pub sunrise_local: DateTime<FixedOffset>,
    pub jd_ut: f64,
    pub zodiac: Zodiac,
    /// Ayanamsha subtracted from tropical longitudes, if sidereal.
    pub ayanamsha_deg: Option<f64>,
    pub ascendant: AscendantPosition,
    pub sun: BodyPosition,
    pub moon: BodyPosition,
}

impl PanchangResult {
    pub fn body(&self, body: Body) -> &BodyPosition {
        match body {
            Body::Sun => &self.sun,
            Body::Moon => &self.moon,
        }
    }

    /// City label for headings.
    pub fn short_name(&self) -> &str {
        first_segment(&self.display_address)
    }
}

fn write_body(f: &mut Formatter<'_>, p: &BodyPosition) -> std::fmt::Result {
    writeln!(f, "{}", p.body)?;
    writeln!(f, "  longitude : {:.4}°", p.longitude_deg)?;
    writeln!(f, "  sign      : {}", p.sign)?;
    writeln!(f, "  nakshatra : {}", p.nakshatra)?;
    writeln!(f, "  house     : {}", p.house)
}

impl Display for PanchangResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Location  : {}", self.display_address)?;
        writeln!(f, "Lat/Lon   : {}", self.coordinates)?;
        if self.timezone_fallback {
            writeln!(f, "Timezone  : {} (fallback)", self.timezone)?;
        } else {
            writeln!(f, "Timezone  : {}", self.timezone)?;
        }
        writeln!(f, "Sunrise   : {}", self.sunrise_local.format("%Y-%m-%d %H:%M:%S %:z"))?;
        writeln!(f, "JD (UT)   : {:.6}", self.jd_ut)?;
        match self.ayanamsha_deg {
            Some(aya) => writeln!(
                f,
                "Zodiac    : {} (ayanamsha {})",
                self.zodiac,
                udaya_vedic::deg_to_dms(aya)
            )?,
            None => writeln!(f, "Zodiac    : {}", self.zodiac)?,
        }
        writeln!(f)?;
        writeln!(f, "Ascendant")?;
        writeln!(f, "  longitude : {:.4}°", self.ascendant.longitude_deg)?;
        writeln!(f, "  sign      : {}", self.ascendant.sign)?;
        for body in ALL_BODIES {
            writeln!(f)?;
            write_body(f, self.body(body))?;
        }
        Ok(())
    }
}
