//! Obliquity of the ecliptic and low-precision nutation.
//!
//! Sources: Meeus, "Astronomical Algorithms" 2nd ed., ch. 22 (Eq. 22.2 for
//! the mean obliquity; the abridged series for Δψ and Δε, good to 0.5″).

/// Mean obliquity of the ecliptic in degrees, `t` in Julian centuries from J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 21.448 - t * (46.8150 + t * (0.00059 - t * 0.001813));
    23.0 + 26.0 / 60.0 + arcsec / 3600.0
}

/// Nutation in longitude and obliquity, `(Δψ, Δε)` in degrees.
pub fn nutation_deg(t: f64) -> (f64, f64) {
    let omega = (125.04452 - 1934.136261 * t).to_radians();
    let l_sun = (280.4665 + 36000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481267.8813 * t).to_radians();

    let dpsi = -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin();
    let deps = 9.20 * omega.cos() + 0.57 * (2.0 * l_sun).cos() + 0.10 * (2.0 * l_moon).cos()
        - 0.09 * (2.0 * omega).cos();

    (dpsi / 3600.0, deps / 3600.0)
}
