//! Equal-house placement counted from the ascendant.
//!
//! House 1 begins exactly at the ascendant and each house spans 30 degrees,
//! whatever cusp system produced the ascendant itself.

use std::fmt::{Display, Formatter};

use crate::util::arc_forward;

/// Span of one equal house in degrees.
pub const HOUSE_SPAN: f64 = 30.0;

/// Where a longitude falls among the 12 equal houses.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HousePlacement {
    /// House number, 1-12.
    pub house: u8,
    /// Decimal degrees past the house cusp, [0, 30).
    pub degrees_in_house: f64,
}

impl HousePlacement {
    /// Ecliptic longitude of this house's cusp for a given ascendant.
    pub fn cusp_deg(&self, ascendant_deg: f64) -> f64 {
        crate::util::normalize_360(ascendant_deg + (self.house - 1) as f64 * HOUSE_SPAN)
    }
}

impl Display for HousePlacement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "house {} ({:.4}° in house)", self.house, self.degrees_in_house)
    }
}

/// House Mapper: body longitude against the ascendant.
///
/// `rel = (L − asc) mod 360`, `house = floor(rel / 30) + 1`.
pub fn house_from_ascendant(lon_deg: f64, ascendant_deg: f64) -> HousePlacement {
    let rel = arc_forward(ascendant_deg, lon_deg);
    let idx = ((rel / HOUSE_SPAN).floor() as u8).min(11);
    HousePlacement {
        house: idx + 1,
        degrees_in_house: (rel - idx as f64 * HOUSE_SPAN).max(0.0),
    }
}
