//! Error types for time conversion.

use thiserror::Error;

/// Errors from zone resolution, date parsing, or Julian Day conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The identifier is not a zone name known to the tz database.
    #[error("unrecognized timezone identifier: {zone:?}")]
    InvalidTimezone { zone: String },
    /// The calendar date text matched none of the accepted layouts.
    #[error("invalid date {input:?}: expected DD-MM-YYYY or YYYY-MM-DD")]
    InvalidDate { input: String },
    /// Wall-clock time could not be placed on the UTC timeline.
    #[error("local time {local} cannot be mapped onto UTC")]
    UnmappableLocalTime { local: String },
    /// The instant falls before the start of the Julian Day count.
    #[error("julian day {jd} is negative")]
    NegativeJulianDay { jd: String },
}
