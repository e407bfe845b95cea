//! Greenwich and local sidereal time from a UT Julian Day.
//!
//! GMST = Earth Rotation Angle + precession polynomial.
//! Sources: IERS Conventions 2010 Eq. 5.15 (ERA); Capitaine et al. 2003 (polynomial).

use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

/// Earth Rotation Angle in degrees, range [0, 360).
pub fn earth_rotation_angle_deg(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    let turns = 0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du;
    (turns.rem_euclid(1.0)) * 360.0
}

/// Greenwich Mean Sidereal Time in degrees, range [0, 360).
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = (jd_ut - J2000_JD) / DAYS_PER_CENTURY;
    let poly_arcsec = 0.014_506
        + t * (4612.156_534
            + t * (1.391_581_7 + t * (-0.000_000_44 + t * (-0.000_029_956 - t * 0.000_000_036_8))));
    (earth_rotation_angle_deg(jd_ut) + poly_arcsec / 3600.0).rem_euclid(360.0)
}

/// Local sidereal time in degrees for an east-positive longitude.
pub fn local_sidereal_deg(jd_ut: f64, longitude_east_deg: f64) -> f64 {
    (gmst_deg(jd_ut) + longitude_east_deg).rem_euclid(360.0)
}
