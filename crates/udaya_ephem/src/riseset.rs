//! Sunrise/sunset computation.
//!
//! Iterative hour-angle method: start from the hour angle at which the Sun
//! reaches the target depression around local noon, then refine against the
//! Sun's position at the estimated event time until the correction drops
//! below a tenth of a second.
//!
//! Sources: Meeus ch. 15; Montenbruck & Pfleger, "Astronomy on the Personal
//! Computer", ch. 3.

use std::f64::consts::{PI, TAU};

use log::trace;
use udaya_time::gmst_deg;

use crate::error::EphemError;
use crate::riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult};
use crate::sun::sun_position;

/// Maximum iterations for the rise/set refinement loop.
const MAX_ITERATIONS: usize = 8;

/// Convergence threshold in days (~0.086 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Sidereal rotation rate in radians per day.
const SIDEREAL_RATE: f64 = TAU * 1.002_737_811_911_354_6;

/// Approximate local solar noon JD from 0h UT JD and longitude.
///
/// `JD_noon = JD_0h + 0.5 - longitude_deg / 360`
pub fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    jd_ut_midnight + 0.5 - longitude_deg / 360.0
}

fn wrap_pi(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    if a > PI { a - TAU } else { a }
}

/// Hour angle of the Sun (radians, [-π, π]) at `jd_ut`.
fn hour_angle(jd_ut: f64, longitude_deg: f64, ra_deg: f64) -> f64 {
    wrap_pi((gmst_deg(jd_ut) + longitude_deg - ra_deg).to_radians())
}

/// cos H0 for the target altitude, or the polar outcome when out of range.
fn cos_hour_angle(phi: f64, dec: f64, h0: f64) -> Result<f64, RiseSetResult> {
    let cos_h = (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
    if cos_h > 1.0 {
        Err(RiseSetResult::NeverRises)
    } else if cos_h < -1.0 {
        Err(RiseSetResult::NeverSets)
    } else {
        Ok(cos_h)
    }
}

/// Compute a single sunrise or sunset.
///
/// # Arguments
/// * `location`: observer geographic location
/// * `event`: sunrise or sunset
/// * `jd_ut_noon`: approximate local noon on the desired date (UT JD).
///   Use [`approximate_local_noon_jd`] to compute from calendar date + longitude.
/// * `config`: refraction, limb, and altitude parameters
///
/// # Returns
/// * `RiseSetResult::Event` with the event time in JD UT
/// * `RiseSetResult::NeverRises` if the Sun stays below the horizon (polar night)
/// * `RiseSetResult::NeverSets` if the Sun stays above the horizon (midnight sun)
pub fn compute_rise_set(
    location: &GeoLocation,
    event: RiseSetEvent,
    jd_ut_noon: f64,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, EphemError> {
    if !location.latitude_deg.is_finite() || location.latitude_deg.abs() > 90.0 {
        return Err(EphemError::InvalidLocation("latitude must be in [-90, 90]"));
    }
    if !location.longitude_deg.is_finite() || location.longitude_deg.abs() > 180.0 {
        return Err(EphemError::InvalidLocation("longitude must be in [-180, 180]"));
    }

    let phi = location.latitude_rad();
    let h0 = (-config.horizon_depression_deg(location.altitude_m)).to_radians();

    let noon = sun_position(jd_ut_noon);
    let cos_h0 = match cos_hour_angle(phi, noon.dec_deg.to_radians(), h0) {
        Ok(c) => c,
        Err(polar) => return Ok(polar),
    };

    // Transit: correct noon by the Sun's hour angle there
    let ha_noon = hour_angle(jd_ut_noon, location.longitude_deg, noon.ra_deg);
    let jd_transit = jd_ut_noon - ha_noon / SIDEREAL_RATE;

    let h0_days = cos_h0.acos() / SIDEREAL_RATE;
    let mut jd_event = if event.is_rising() {
        jd_transit - h0_days
    } else {
        jd_transit + h0_days
    };

    for iteration in 0..MAX_ITERATIONS {
        let sun = sun_position(jd_event);
        let cos_h = match cos_hour_angle(phi, sun.dec_deg.to_radians(), h0) {
            Ok(c) => c,
            Err(polar) => return Ok(polar),
        };
        let h_target = cos_h.acos();
        let ha_target = if event.is_rising() { -h_target } else { h_target };

        let ha_actual = hour_angle(jd_event, location.longitude_deg, sun.ra_deg);
        let correction = wrap_pi(ha_target - ha_actual) / SIDEREAL_RATE;
        jd_event += correction;

        trace!("{event:?} iteration {iteration}: jd {jd_event:.8}, correction {correction:.3e} d");

        if correction.abs() < CONVERGENCE_DAYS {
            return Ok(RiseSetResult::Event {
                jd_ut: jd_event,
                event,
            });
        }
    }

    Err(EphemError::NoConvergence("rise/set refinement"))
}
