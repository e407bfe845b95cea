//! Oracles backed by the analytical ephemeris, plus simple timezone sources.
//!
//! These make the pipeline usable offline; any other implementation of the
//! oracle traits can be swapped in.

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Timelike};
use chrono_tz::Tz;
use log::debug;
use udaya_ephem::{
    GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult, approximate_local_noon_jd,
    ascendant_deg, compute_rise_set, moon_longitude_deg, sun_longitude_deg,
};
use udaya_time::{LocalInstant, calendar_to_jd, utc_from_julian_day};

use crate::error::OracleError;
use crate::oracle::{Body, EphemerisOracle, SunEventOracle, TimezoneOracle};
use crate::types::Coordinates;

/// Sunrise and sunset from the iterative hour-angle solver.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BuiltinSunEvents {
    pub config: RiseSetConfig,
    /// Observer height above sea level in meters.
    pub altitude_m: f64,
}

impl BuiltinSunEvents {
    pub fn new(config: RiseSetConfig, altitude_m: f64) -> Self {
        Self { config, altitude_m }
    }

    fn solve(
        &self,
        location: &GeoLocation,
        event: RiseSetEvent,
        jd_noon: f64,
    ) -> Result<f64, OracleError> {
        match compute_rise_set(location, event, jd_noon, &self.config) {
            Ok(RiseSetResult::Event { jd_ut, .. }) => Ok(jd_ut),
            Ok(RiseSetResult::NeverRises) => Err(OracleError::PolarNight),
            Ok(RiseSetResult::NeverSets) => Err(OracleError::PolarDay),
            Err(e) => Err(OracleError::Failed(e.to_string())),
        }
    }

    /// Sunrise or sunset falling on the local calendar `date` in `zone`.
    ///
    /// The solver works around local solar noon; when civil time is far
    /// enough from solar time that the event lands on a neighbouring civil
    /// date, the search is repeated one day over.
    pub fn event(
        &self,
        coordinates: &Coordinates,
        date: NaiveDate,
        zone: Tz,
        event: RiseSetEvent,
    ) -> Result<DateTime<Tz>, OracleError> {
        let location = GeoLocation::new(
            coordinates.latitude(),
            coordinates.longitude(),
            self.altitude_m,
        );
        let jd_0h = calendar_to_jd(date.year(), date.month(), f64::from(date.day()));
        let mut jd_noon = approximate_local_noon_jd(jd_0h, location.longitude_deg);

        let mut local = self.to_local(self.solve(&location, event, jd_noon)?, zone)?;
        let shift = (date - local.date_naive()).num_days();
        if shift != 0 {
            debug!("{event} landed on {}, retrying one day over", local.date_naive());
            jd_noon += shift.signum() as f64;
            local = self.to_local(self.solve(&location, event, jd_noon)?, zone)?;
        }
        ensure_on_date(local, date, event)
    }

    fn to_local(&self, jd_ut: f64, zone: Tz) -> Result<DateTime<Tz>, OracleError> {
        let utc = utc_from_julian_day(jd_ut).map_err(|e| OracleError::Failed(e.to_string()))?;
        // whole seconds, as almanacs print them
        let utc = utc
            .checked_add_signed(TimeDelta::milliseconds(500))
            .and_then(|t| t.with_nanosecond(0))
            .ok_or_else(|| OracleError::Failed(format!("JD {jd_ut} out of range")))?;
        Ok(utc.with_timezone(&zone))
    }
}

/// The event must fall on the requested civil date.
fn ensure_on_date(
    local: DateTime<Tz>,
    date: NaiveDate,
    event: RiseSetEvent,
) -> Result<DateTime<Tz>, OracleError> {
    if local.date_naive() == date {
        Ok(local)
    } else {
        Err(OracleError::Failed(format!(
            "no {event} on {date} in {}: nearest is {local}",
            local.timezone().name()
        )))
    }
}

impl SunEventOracle for BuiltinSunEvents {
    fn sunrise(
        &self,
        coordinates: &Coordinates,
        date: NaiveDate,
        zone: Tz,
    ) -> Result<LocalInstant, OracleError> {
        self.event(coordinates, date, zone, RiseSetEvent::Sunrise)
            .map(LocalInstant::from)
    }
}

/// Sun and Moon longitudes and the ascendant from the analytical theories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuiltinEphemeris;

impl EphemerisOracle for BuiltinEphemeris {
    fn ascendant(&self, jd_ut: f64, coordinates: &Coordinates) -> Result<f64, OracleError> {
        ascendant_deg(jd_ut, coordinates.latitude(), coordinates.longitude())
            .map_err(|e| OracleError::Failed(e.to_string()))
    }

    fn body_longitude(&self, jd_ut: f64, body: Body) -> Result<f64, OracleError> {
        Ok(match body {
            Body::Sun => sun_longitude_deg(jd_ut),
            Body::Moon => moon_longitude_deg(jd_ut),
        })
    }
}

/// Always answers with the same zone identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedZone(pub String);

impl FixedZone {
    pub fn new(zone: impl Into<String>) -> Self {
        Self(zone.into())
    }
}

impl TimezoneOracle for FixedZone {
    fn lookup(&self, _coordinates: &Coordinates) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Never knows the zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoZone;

impl TimezoneOracle for NoZone {
    fn lookup(&self, _coordinates: &Coordinates) -> Option<String> {
        None
    }
}

/// Nautical zone from longitude: `Etc/GMT±N` with N = round(lon / 15).
///
/// The tz database names these with the POSIX sign, so east of Greenwich
/// is `Etc/GMT-N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NauticalZone;

impl TimezoneOracle for NauticalZone {
    fn lookup(&self, coordinates: &Coordinates) -> Option<String> {
        let lon = coordinates.longitude();
        if !lon.is_finite() {
            return None;
        }
        let hours = (lon / 15.0).round().clamp(-12.0, 12.0) as i32;
        Some(match hours {
            0 => "Etc/GMT".to_string(),
            h if h > 0 => format!("Etc/GMT-{h}"),
            h => format!("Etc/GMT+{}", -h),
        })
    }
}
