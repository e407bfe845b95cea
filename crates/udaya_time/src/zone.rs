//! IANA zone lookup and wall-clock localization.

use chrono::{DateTime, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone};
use chrono_tz::Tz;

use crate::error::TimeError;

/// Zone identifier used whenever no zone could be resolved.
pub const UTC_ZONE: &str = "UTC";

/// Resolve an IANA zone identifier such as `"Asia/Kolkata"`.
pub fn parse_zone(zone: &str) -> Result<Tz, TimeError> {
    zone.trim()
        .parse::<Tz>()
        .map_err(|_| TimeError::InvalidTimezone {
            zone: zone.to_string(),
        })
}

/// Attach `tz` to a naive wall-clock reading.
///
/// Repeated wall-clock times (end of DST) resolve to the earlier instant.
/// Skipped wall-clock times (start of DST) are read with the offset that was
/// in force just before the transition, so 02:30 in a 02:00→03:00 gap lands
/// on 03:30 daylight time.
pub fn localize(naive: &NaiveDateTime, tz: Tz) -> Result<DateTime<Tz>, TimeError> {
    match tz.from_local_datetime(naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, latest) => {
            log::debug!(
                "{naive} is ambiguous in {tz}: {earliest} or {latest}, keeping the earlier"
            );
            Ok(earliest)
        }
        LocalResult::None => {
            // a day earlier is before the transition in every zone
            let day_before = naive
                .checked_sub_signed(TimeDelta::days(1))
                .ok_or_else(|| TimeError::UnmappableLocalTime {
                    local: naive.to_string(),
                })?;
            let before = tz.offset_from_utc_datetime(&day_before).fix();
            let utc = naive
                .checked_sub_signed(TimeDelta::seconds(i64::from(before.local_minus_utc())))
                .ok_or_else(|| TimeError::UnmappableLocalTime {
                    local: naive.to_string(),
                })?;
            log::debug!("{naive} falls in a {tz} transition gap, using offset {before}");
            Ok(tz.from_utc_datetime(&utc))
        }
    }
}
