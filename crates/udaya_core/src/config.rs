//! Pipeline configuration.

use std::fmt::{Display, Formatter};

use udaya_time::UTC_ZONE;
use udaya_vedic::AyanamshaSystem;

use crate::types::DEFAULT_COORDINATE_DECIMALS;

/// Reference frame for the reported longitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Zodiac {
    /// Longitudes as returned by the ephemeris oracle.
    #[default]
    Tropical,
    /// Tropical longitudes minus the ayanamsha of the given system.
    Sidereal(AyanamshaSystem),
}

impl Display for Zodiac {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tropical => f.write_str("tropical"),
            Self::Sidereal(system) => write!(f, "sidereal/{}", system.name()),
        }
    }
}

/// Knobs for [`crate::PanchangPipeline`].
#[derive(Debug, Clone, PartialEq)]
pub struct PanchangConfig {
    pub zodiac: Zodiac,
    /// Decimal places kept on input coordinates.
    pub coordinate_decimals: u32,
    /// Zone used when the timezone oracle has no answer.
    pub fallback_zone: String,
}

impl Default for PanchangConfig {
    fn default() -> Self {
        Self {
            zodiac: Zodiac::Tropical,
            coordinate_decimals: DEFAULT_COORDINATE_DECIMALS,
            fallback_zone: UTC_ZONE.to_string(),
        }
    }
}

impl PanchangConfig {
    pub fn with_zodiac(mut self, zodiac: Zodiac) -> Self {
        self.zodiac = zodiac;
        self
    }

    pub fn with_coordinate_decimals(mut self, decimals: u32) -> Self {
        self.coordinate_decimals = decimals;
        self
    }

    pub fn with_fallback_zone(mut self, zone: impl Into<String>) -> Self {
        self.fallback_zone = zone.into();
        self
    }
}
