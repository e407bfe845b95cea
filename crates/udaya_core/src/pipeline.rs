//! Position Pipeline: (place, date) → sunrise → Sun/Moon/ascendant placements.
//!
//! Stages, in order:
//! 1. resolve coordinates (missing → `MissingLocation`)
//! 2. timezone lookup (absent → fallback zone, logged)
//! 3. sunrise lookup (failure → `SunEventUnavailable`)
//! 4. local sunrise → Julian Day (UT)
//! 5. ascendant and body longitudes (failure → `EphemerisUnavailable`)
//! 6. normalize, apply ayanamsha if sidereal, and map
//! 7. assemble the result
//!
//! The invocation is all-or-nothing: any failing stage aborts with its error
//! and no partial result is produced.

use chrono::NaiveDate;
use log::{debug, warn};
use udaya_time::{julian_day_ut, parse_calendar_date, parse_zone, to_utc};
use udaya_vedic::{
    ayanamsha_at_jd, house_from_ascendant, nakshatra_from_longitude, normalize_360,
    sign_from_longitude, to_sidereal,
};

use crate::config::{PanchangConfig, Zodiac};
use crate::error::{EphemerisQuery, OracleError, PanchangError};
use crate::oracle::{Body, EphemerisOracle, SunEventOracle, TimezoneOracle};
use crate::types::{AscendantPosition, BodyPosition, Coordinates, ObserverContext, PanchangResult};

/// Sign, nakshatra and house of one body against an already-normalized ascendant.
pub fn place_body(body: Body, longitude_deg: f64, ascendant_deg: f64) -> BodyPosition {
    let lon = normalize_360(longitude_deg);
    BodyPosition {
        body,
        longitude_deg: lon,
        sign: sign_from_longitude(lon),
        nakshatra: nakshatra_from_longitude(lon),
        house: house_from_ascendant(lon, ascendant_deg),
    }
}

/// Orchestrates the oracles and mappers for one query at a time.
#[derive(Debug, Clone)]
pub struct PanchangPipeline<Z, S, E> {
    timezone: Z,
    sun: S,
    ephemeris: E,
    config: PanchangConfig,
}

impl<Z, S, E> PanchangPipeline<Z, S, E>
where
    Z: TimezoneOracle,
    S: SunEventOracle,
    E: EphemerisOracle,
{
    pub fn new(timezone: Z, sun: S, ephemeris: E) -> Self {
        Self {
            timezone,
            sun,
            ephemeris,
            config: PanchangConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PanchangConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &PanchangConfig {
        &self.config
    }

    /// Stages 1-2: round the coordinates and resolve the zone.
    pub fn observer_context(
        &self,
        coordinates: Option<Coordinates>,
        display_address: &str,
        date: NaiveDate,
    ) -> Result<ObserverContext, PanchangError> {
        let coordinates = coordinates
            .ok_or_else(|| PanchangError::MissingLocation {
                address: display_address.to_string(),
            })?
            .rounded(self.config.coordinate_decimals);

        let (zone_id, zone_fallback) = match self.timezone.lookup(&coordinates) {
            Some(id) => (id, false),
            None => {
                warn!(
                    "no timezone for {coordinates}, falling back to {}",
                    self.config.fallback_zone
                );
                (self.config.fallback_zone.clone(), true)
            }
        };
        let zone = parse_zone(&zone_id).map_err(|source| PanchangError::InvalidTimezone {
            zone: zone_id.clone(),
            coordinates,
            source,
        })?;
        debug!("observer {coordinates} in {} on {date}", zone.name());

        Ok(ObserverContext {
            coordinates,
            zone,
            zone_fallback,
            date,
        })
    }

    /// Full pipeline for one place and local calendar date.
    pub fn compute_panchang(
        &self,
        coordinates: Option<Coordinates>,
        display_address: &str,
        date: NaiveDate,
    ) -> Result<PanchangResult, PanchangError> {
        let ctx = self.observer_context(coordinates, display_address, date)?;
        let sun_unavailable = |source: OracleError| PanchangError::SunEventUnavailable {
            coordinates: ctx.coordinates,
            date,
            source,
        };

        let sunrise = self
            .sun
            .sunrise(&ctx.coordinates, date, ctx.zone)
            .map_err(sun_unavailable)?;

        // A sunrise that cannot be placed on UT is as unusable as a missing one.
        let as_oracle_error = |e: udaya_time::TimeError| OracleError::Failed(e.to_string());
        let sunrise_utc = to_utc(sunrise, ctx.zone.name())
            .map_err(as_oracle_error)
            .map_err(sun_unavailable)?;
        let jd_ut = julian_day_ut(sunrise_utc, ctx.zone.name())
            .map_err(as_oracle_error)
            .map_err(sun_unavailable)?;
        let sunrise_local = sunrise_utc.with_timezone(&ctx.zone).fixed_offset();
        debug!("sunrise {sunrise_local} ({sunrise_utc}), JD {jd_ut:.6} UT");

        let ayanamsha_deg = match self.config.zodiac {
            Zodiac::Tropical => None,
            Zodiac::Sidereal(system) => Some(ayanamsha_at_jd(system, jd_ut)),
        };
        let to_zodiac = |tropical: f64| match ayanamsha_deg {
            Some(aya) => to_sidereal(tropical, aya),
            None => normalize_360(tropical),
        };

        let raw_asc = self.query_ephemeris(EphemerisQuery::Ascendant, jd_ut, || {
            self.ephemeris.ascendant(jd_ut, &ctx.coordinates)
        })?;
        let asc = to_zodiac(raw_asc);
        let ascendant = AscendantPosition {
            longitude_deg: asc,
            sign: sign_from_longitude(asc),
        };

        let place = |body: Body| -> Result<BodyPosition, PanchangError> {
            let raw = self.query_ephemeris(EphemerisQuery::Longitude(body), jd_ut, || {
                self.ephemeris.body_longitude(jd_ut, body)
            })?;
            Ok(place_body(body, to_zodiac(raw), asc))
        };
        // one body at a time; the first failure ends the invocation
        let sun = place(Body::Sun)?;
        let moon = place(Body::Moon)?;

        Ok(PanchangResult {
            coordinates: ctx.coordinates,
            display_address: display_address.to_string(),
            timezone: ctx.zone.name().to_string(),
            timezone_fallback: ctx.zone_fallback,
            sunrise_local,
            jd_ut,
            zodiac: self.config.zodiac,
            ayanamsha_deg,
            ascendant,
            sun,
            moon,
        })
    }

    /// [`Self::compute_panchang`] with the date given as text
    /// (`DD-MM-YYYY` or `YYYY-MM-DD`).
    pub fn compute_panchang_str(
        &self,
        coordinates: Option<Coordinates>,
        display_address: &str,
        date: &str,
    ) -> Result<PanchangResult, PanchangError> {
        let date = parse_calendar_date(date).map_err(|source| PanchangError::InvalidDate {
            input: date.to_string(),
            source,
        })?;
        self.compute_panchang(coordinates, display_address, date)
    }

    /// One ephemeris lookup; non-finite answers count as failures.
    fn query_ephemeris(
        &self,
        query: EphemerisQuery,
        jd_ut: f64,
        lookup: impl FnOnce() -> Result<f64, OracleError>,
    ) -> Result<f64, PanchangError> {
        let unavailable = |source: OracleError| PanchangError::EphemerisUnavailable {
            query,
            jd_ut,
            source,
        };
        let value = lookup().map_err(unavailable)?;
        if !value.is_finite() {
            return Err(unavailable(OracleError::Failed(format!(
                "non-finite {query}: {value}"
            ))));
        }
        debug!("{query} = {value:.6}° at JD {jd_ut:.6}");
        Ok(value)
    }
}
