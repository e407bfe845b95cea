//! Angular partitions of the ecliptic used in Panchang work.
//!
//! This crate provides:
//! - Angle normalization to [0, 360)
//! - Rashi (12 signs) placement with DMS
//! - Nakshatra (27 mansions) and pada placement
//! - Equal-house placement from the ascendant
//! - Ayanamsha for sidereal longitudes
//!
//! All mappers accept any real longitude and treat segment boundaries as
//! inclusive-lower.

pub mod ayanamsha;
pub mod bhava;
pub mod nakshatra;
pub mod rashi;
pub mod util;

pub use ayanamsha::{
    AyanamshaSystem, ayanamsha_at_jd, ayanamsha_deg, general_precession_arcsec, to_sidereal,
};
pub use bhava::{HOUSE_SPAN, HousePlacement, house_from_ascendant};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraPlacement, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use rashi::{
    ALL_RASHIS, Dms, RASHI_SPAN, Rashi, SignPlacement, deg_to_dms, dms_to_deg,
    sign_from_longitude,
};
pub use util::{arc_forward, normalize_360};
