//! Analytical ephemeris for sunrise-anchored placements.
//!
//! This crate provides:
//! - Apparent Sun longitude, RA/Dec and distance
//! - Apparent Moon longitude
//! - Ascendant and Midheaven from sidereal time
//! - Sunrise/sunset with polar day/night detection
//!
//! Everything is closed-form or iterative on published series; no kernel
//! files or network access are needed.

pub mod error;
pub mod lagna;
pub mod moon;
pub mod nutation;
pub mod riseset;
pub mod riseset_types;
pub mod sun;

pub use error::EphemError;
pub use lagna::{ascendant_deg, mc_deg};
pub use moon::moon_longitude_deg;
pub use nutation::{mean_obliquity_deg, nutation_deg};
pub use riseset::{approximate_local_noon_jd, compute_rise_set};
pub use riseset_types::{
    GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult, SOLAR_SEMIDIAMETER_ARCMIN,
    STANDARD_REFRACTION_ARCMIN, horizon_dip_deg,
};
pub use sun::{SunPosition, sun_longitude_deg, sun_position};
