//! Sunrise-anchored Sun/Moon placements.
//!
//! Resolves a place and calendar date to the local sunrise, then places the
//! Sun, the Moon and the ascendant in the 12 signs, 27 nakshatras (with
//! pada) and 12 equal houses.
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use udaya_core::{BuiltinEphemeris, BuiltinSunEvents, Coordinates, FixedZone, PanchangPipeline};
//!
//! let pipeline = PanchangPipeline::new(
//!     FixedZone::new("Asia/Kolkata"),
//!     BuiltinSunEvents::default(),
//!     BuiltinEphemeris,
//! );
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let result = pipeline
//!     .compute_panchang(Some(Coordinates::new(13.0827, 80.2707)), "Chennai, India", date)
//!     .unwrap();
//! println!("{result}");
//! ```
//!
//! External services plug in through the traits in [`oracle`].

pub mod builtin;
pub mod config;
pub mod error;
#[cfg(feature = "nominatim")]
pub mod nominatim;
pub mod oracle;
pub mod pipeline;
pub mod types;
#[cfg(feature = "tzf")]
pub mod tzfinder;

pub use builtin::{BuiltinEphemeris, BuiltinSunEvents, FixedZone, NauticalZone, NoZone};
pub use config::{PanchangConfig, Zodiac};
pub use error::{EphemerisQuery, OracleError, PanchangError};
#[cfg(feature = "nominatim")]
pub use nominatim::NominatimGeocoder;
pub use oracle::{
    ALL_BODIES, Body, EphemerisOracle, GeocodeOracle, SunEventOracle, TimezoneOracle,
};
pub use pipeline::{PanchangPipeline, place_body};
pub use types::{
    AscendantPosition, BodyPosition, Coordinates, Location, ObserverContext, PanchangResult,
};
#[cfg(feature = "tzf")]
pub use tzfinder::BoundaryZone;

pub use udaya_ephem::RiseSetConfig;
pub use udaya_vedic::AyanamshaSystem;
