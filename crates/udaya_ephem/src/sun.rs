//! Apparent geocentric position of the Sun.
//!
//! Low-accuracy solar theory from Meeus ch. 25 (about 0.01°), with the
//! aberration and nutation corrections folded into the apparent longitude.
//! Julian Days are taken as UT; the UT/TT difference shifts the Sun by
//! well under a thousandth of a degree.

use udaya_time::jd_to_centuries;

use crate::nutation::mean_obliquity_deg;

/// Apparent position of the Sun at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Apparent ecliptic longitude, degrees in [0, 360).
    pub longitude_deg: f64,
    /// Apparent right ascension, degrees in [0, 360).
    pub ra_deg: f64,
    /// Apparent declination, degrees.
    pub dec_deg: f64,
    /// Earth-Sun distance in AU.
    pub distance_au: f64,
}

/// Sun position for a Julian Day.
pub fn sun_position(jd: f64) -> SunPosition {
    let t = jd_to_centuries(jd);

    let l0 = 280.46646 + t * (36000.76983 + t * 0.0003032);
    let m = 357.52911 + t * (35999.05029 - t * 0.0001537);
    let e = 0.016708634 - t * (0.000042037 + t * 0.0000001267);

    let m_rad = m.to_radians();
    let c = (1.914602 - t * (0.004817 + t * 0.000014)) * m_rad.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m_rad).sin()
        + 0.000289 * (3.0 * m_rad).sin();

    let true_lon = l0 + c;
    let anomaly = (m + c).to_radians();
    let distance_au = 1.000001018 * (1.0 - e * e) / (1.0 + e * anomaly.cos());

    let omega = (125.04 - 1934.136 * t).to_radians();
    let lambda = true_lon - 0.00569 - 0.00478 * omega.sin();
    let eps = (mean_obliquity_deg(t) + 0.00256 * omega.cos()).to_radians();

    let lambda_rad = lambda.to_radians();
    let ra = (eps.cos() * lambda_rad.sin()).atan2(lambda_rad.cos());
    let dec = (eps.sin() * lambda_rad.sin()).asin();

    SunPosition {
        longitude_deg: lambda.rem_euclid(360.0),
        ra_deg: ra.to_degrees().rem_euclid(360.0),
        dec_deg: dec.to_degrees(),
        distance_au,
    }
}

/// Apparent ecliptic longitude of the Sun in degrees.
pub fn sun_longitude_deg(jd: f64) -> f64 {
    sun_position(jd).longitude_deg
}
