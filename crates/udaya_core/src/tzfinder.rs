//! Coordinate to IANA zone lookup over the bundled timezone boundary data.

use log::debug;
use tzf_rs::DefaultFinder;

use crate::oracle::TimezoneOracle;
use crate::types::Coordinates;

/// Resolves the civil zone whose boundary polygon contains the coordinates.
///
/// Building the finder decodes the embedded boundary set, so construct one
/// and share it across lookups.
pub struct BoundaryZone {
    finder: DefaultFinder,
}

impl BoundaryZone {
    pub fn new() -> Self {
        Self {
            finder: DefaultFinder::new(),
        }
    }
}

impl Default for BoundaryZone {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BoundaryZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundaryZone").finish_non_exhaustive()
    }
}

impl TimezoneOracle for BoundaryZone {
    fn lookup(&self, coordinates: &Coordinates) -> Option<String> {
        let (lat, lon) = (coordinates.latitude(), coordinates.longitude());
        if !lat.is_finite() || !lon.is_finite() {
            return None;
        }
        let name = self.finder.get_tz_name(lon, lat);
        debug!("zone at ({lat}, {lon}): {name:?}");
        (!name.is_empty()).then(|| name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cities_resolve_to_their_civil_zone() {
        let zones = BoundaryZone::new();
        let zone = |lat, lon| zones.lookup(&Coordinates::new(lat, lon));
        assert_eq!(zone(13.0827, 80.2707).as_deref(), Some("Asia/Kolkata"));
        assert_eq!(zone(35.6762, 139.6503).as_deref(), Some("Asia/Tokyo"));
        assert_eq!(zone(40.7128, -74.0060).as_deref(), Some("America/New_York"));
        assert_eq!(zone(52.52, 13.405).as_deref(), Some("Europe/Berlin"));
    }

    #[test]
    fn non_finite_coordinates_have_no_zone() {
        let zones = BoundaryZone::default();
        assert_eq!(zones.lookup(&Coordinates::new(f64::NAN, 80.0)), None);
    }

    #[test]
    fn resolved_zone_drives_the_pipeline() {
        use chrono::{NaiveDate, Timelike};

        use crate::{BuiltinEphemeris, BuiltinSunEvents, PanchangPipeline};

        let pipeline = PanchangPipeline::new(
            BoundaryZone::new(),
            BuiltinSunEvents::default(),
            BuiltinEphemeris,
        );
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let r = pipeline
            .compute_panchang(Some(Coordinates::new(35.6762, 139.6503)), "Tokyo", date)
            .unwrap();
        assert_eq!(r.timezone, "Asia/Tokyo");
        assert!(!r.timezone_fallback);
        assert_eq!(r.sunrise_local.hour(), 6);
    }
}
