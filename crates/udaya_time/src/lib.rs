//! Time handling for the sunrise pipeline.
//!
//! This crate provides:
//! - Julian Day ↔ civil calendar conversions
//! - The local-time → Julian Day (UT) converter, with IANA zone resolution
//! - Calendar-date text parsing
//! - Greenwich and local sidereal time

pub mod convert;
pub mod date;
pub mod error;
pub mod julian;
pub mod sidereal;
pub mod zone;

pub use convert::{LocalInstant, julian_day_from_utc, julian_day_ut, to_utc, utc_from_julian_day};
pub use date::parse_calendar_date;
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar,
    jd_to_centuries, julday,
};
pub use sidereal::{earth_rotation_angle_deg, gmst_deg, local_sidereal_deg};
pub use zone::{UTC_ZONE, localize, parse_zone};

pub use chrono_tz::Tz;
