//! Error types for oracles and the Panchang pipeline.

use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use thiserror::Error;
use udaya_time::TimeError;

use crate::oracle::Body;
use crate::types::Coordinates;

/// Failure reported by an external collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum OracleError {
    /// The Sun stays above the horizon all day.
    #[error("sun never sets (polar day)")]
    PolarDay,
    /// The Sun stays below the horizon all day.
    #[error("sun never rises (polar night)")]
    PolarNight,
    /// The caller gave up waiting for an answer.
    #[error("oracle timed out")]
    Timeout,
    #[error("{0}")]
    Failed(String),
}

/// Which ephemeris lookup failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EphemerisQuery {
    Ascendant,
    Longitude(Body),
}

impl Display for EphemerisQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ascendant => f.write_str("ascendant"),
            Self::Longitude(body) => write!(f, "{body} longitude"),
        }
    }
}

/// Terminal failure of one `compute_panchang` invocation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PanchangError {
    /// No coordinates were resolved for the requested place.
    #[error("no coordinates resolved for {address:?}")]
    MissingLocation { address: String },

    /// The zone identifier is not in the tz database.
    #[error("invalid timezone {zone:?} for {coordinates}")]
    InvalidTimezone {
        zone: String,
        coordinates: Coordinates,
        #[source]
        source: TimeError,
    },

    /// Sunrise is undefined or the sun-event oracle failed.
    #[error("sunrise unavailable at {coordinates} on {date}: {source}")]
    SunEventUnavailable {
        coordinates: Coordinates,
        date: NaiveDate,
        #[source]
        source: OracleError,
    },

    /// The ephemeris oracle failed for one of its lookups.
    #[error("{query} unavailable at JD {jd_ut:.6}: {source}")]
    EphemerisUnavailable {
        query: EphemerisQuery,
        jd_ut: f64,
        #[source]
        source: OracleError,
    },

    /// The calendar date text could not be parsed.
    #[error("invalid date {input:?}")]
    InvalidDate {
        input: String,
        #[source]
        source: TimeError,
    },
}
