//! Local wall-clock time → Julian Day (UT).
//!
//! The ephemeris side of the workspace counts time in fractional Julian Days
//! on the UT scale. This module turns whatever the sunrise computation hands
//! back (a zoned instant, or a bare wall-clock reading) into that count.
//! UT is taken equal to UTC; the sub-second UT1−UTC difference is below the
//! resolution of the longitude mappers.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, jd_to_calendar, julday};
use crate::zone::{localize, parse_zone};

/// A local date-time, with or without an attached offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalInstant {
    /// Wall-clock reading with no zone attached.
    Naive(NaiveDateTime),
    /// Instant that already carries its UTC offset.
    Zoned(DateTime<FixedOffset>),
}

impl From<NaiveDateTime> for LocalInstant {
    fn from(naive: NaiveDateTime) -> Self {
        Self::Naive(naive)
    }
}

impl From<DateTime<FixedOffset>> for LocalInstant {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::Zoned(dt)
    }
}

impl From<DateTime<Tz>> for LocalInstant {
    fn from(dt: DateTime<Tz>) -> Self {
        Self::Zoned(dt.fixed_offset())
    }
}

impl From<DateTime<Utc>> for LocalInstant {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Zoned(dt.fixed_offset())
    }
}

/// Place `instant` in `zone`, then move it onto the UTC timeline.
///
/// Naive readings are interpreted as wall-clock time in `zone`
/// (see [`localize`] for DST gap/overlap handling). Zoned instants are first
/// expressed in `zone`, which leaves the absolute instant unchanged.
pub fn to_utc(instant: impl Into<LocalInstant>, zone: &str) -> Result<DateTime<Utc>, TimeError> {
    let tz = parse_zone(zone)?;
    let local = match instant.into() {
        LocalInstant::Naive(naive) => localize(&naive, tz)?,
        LocalInstant::Zoned(dt) => dt.with_timezone(&tz),
    };
    Ok(local.with_timezone(&Utc))
}

/// Fractional Julian Day for a UTC instant.
///
/// The day fraction is `hour + minute/60 + second/3600 + microsecond/3.6e9`
/// hours, fed to the civil-to-Julian-day formula.
pub fn julian_day_from_utc(utc: &DateTime<Utc>) -> f64 {
    let micros = f64::from(utc.nanosecond() / 1_000);
    let hour = f64::from(utc.hour())
        + f64::from(utc.minute()) / 60.0
        + f64::from(utc.second()) / 3600.0
        + micros / 3.6e9;
    julday(utc.year(), utc.month(), utc.day(), hour)
}

/// Time Converter: local instant + IANA zone → Julian Day (UT).
///
/// Fails with [`TimeError::InvalidTimezone`] when `zone` is unknown and with
/// [`TimeError::NegativeJulianDay`] for instants before 4713 BC.
pub fn julian_day_ut(instant: impl Into<LocalInstant>, zone: &str) -> Result<f64, TimeError> {
    let utc = to_utc(instant, zone)?;
    let jd = julian_day_from_utc(&utc);
    if jd < 0.0 {
        return Err(TimeError::NegativeJulianDay {
            jd: format!("{jd:.6}"),
        });
    }
    log::trace!("{utc} -> JD {jd:.6} UT");
    Ok(jd)
}

/// Inverse of [`julian_day_from_utc`], rounded to the nearest microsecond.
pub fn utc_from_julian_day(jd: f64) -> Result<DateTime<Utc>, TimeError> {
    let (year, month, day_frac) = jd_to_calendar(jd);
    let day = day_frac.floor();
    let micros_of_day = ((day_frac - day) * SECONDS_PER_DAY * 1e6).round() as i64;
    let unmappable = || TimeError::UnmappableLocalTime {
        local: format!("JD {jd}"),
    };

    let midnight = NaiveDate::from_ymd_opt(year, month, day as u32)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(unmappable)?;
    let naive = midnight
        .checked_add_signed(chrono::TimeDelta::microseconds(micros_of_day))
        .ok_or_else(unmappable)?;
    Ok(Utc.from_utc_datetime(&naive))
}
