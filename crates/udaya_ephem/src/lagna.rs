//! Ascendant (Lagna) and Midheaven (MC).
//!
//! Both are derived from the apparent local sidereal time, the true
//! obliquity and the geographic latitude:
//!
//! ```text
//! MC  = atan2(sin θ, cos θ · cos ε)
//! ASC = atan2(cos θ, −(sin θ · cos ε + tan φ · sin ε))
//! ```
//!
//! where θ is the local apparent sidereal time, ε the true obliquity and φ
//! the geographic latitude.

use udaya_time::{gmst_deg, jd_to_centuries};

use crate::error::EphemError;
use crate::nutation::{mean_obliquity_deg, nutation_deg};

/// Local apparent sidereal time and true obliquity, both in radians.
fn sidereal_frame(jd_ut: f64, longitude_deg: f64) -> (f64, f64) {
    let t = jd_to_centuries(jd_ut);
    let (dpsi, deps) = nutation_deg(t);
    let eps = mean_obliquity_deg(t) + deps;
    // Equation of the equinoxes turns mean into apparent sidereal time.
    let gast = gmst_deg(jd_ut) + dpsi * eps.to_radians().cos();
    let lst = (gast + longitude_deg).rem_euclid(360.0);
    (lst.to_radians(), eps.to_radians())
}

fn check_location(latitude_deg: f64, longitude_deg: f64) -> Result<(), EphemError> {
    if !latitude_deg.is_finite() || latitude_deg.abs() >= 90.0 {
        return Err(EphemError::InvalidLocation("latitude must be in (-90, 90)"));
    }
    if !longitude_deg.is_finite() || longitude_deg.abs() > 180.0 {
        return Err(EphemError::InvalidLocation("longitude must be in [-180, 180]"));
    }
    Ok(())
}

/// Tropical ecliptic longitude of the ascendant in degrees, [0, 360).
pub fn ascendant_deg(jd_ut: f64, latitude_deg: f64, longitude_deg: f64) -> Result<f64, EphemError> {
    check_location(latitude_deg, longitude_deg)?;
    let (theta, eps) = sidereal_frame(jd_ut, longitude_deg);
    let phi = latitude_deg.to_radians();

    let y = theta.cos();
    let x = -(theta.sin() * eps.cos() + phi.tan() * eps.sin());
    Ok(y.atan2(x).to_degrees().rem_euclid(360.0))
}

/// Tropical ecliptic longitude of the Midheaven in degrees, [0, 360).
pub fn mc_deg(jd_ut: f64, longitude_deg: f64) -> Result<f64, EphemError> {
    check_location(0.0, longitude_deg)?;
    let (theta, eps) = sidereal_frame(jd_ut, longitude_deg);
    Ok(theta.sin().atan2(theta.cos() * eps.cos()).to_degrees().rem_euclid(360.0))
}
