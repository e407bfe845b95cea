use std::cell::Cell;

use chrono::{NaiveDate, Timelike};
use chrono_tz::Tz;
use udaya_core::{
    AyanamshaSystem, Body, BuiltinEphemeris, BuiltinSunEvents, Coordinates, EphemerisOracle,
    EphemerisQuery, FixedZone, NoZone, OracleError, PanchangConfig, PanchangError,
    PanchangPipeline, SunEventOracle, Zodiac,
};
use udaya_time::LocalInstant;
use udaya_vedic::Rashi;

const CHENNAI: (f64, f64) = (13.0827, 80.2707);

fn jan1() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn chennai() -> Option<Coordinates> {
    Some(Coordinates::new(CHENNAI.0, CHENNAI.1))
}

/// Sunrise at a fixed wall-clock reading with no offset attached.
struct WallClockSunrise(u32, u32);

impl SunEventOracle for WallClockSunrise {
    fn sunrise(
        &self,
        _: &Coordinates,
        date: NaiveDate,
        _: Tz,
    ) -> Result<LocalInstant, OracleError> {
        Ok(LocalInstant::Naive(date.and_hms_opt(self.0, self.1, 0).unwrap()))
    }
}

struct FailingSun(OracleError);

impl SunEventOracle for FailingSun {
    fn sunrise(&self, _: &Coordinates, _: NaiveDate, _: Tz) -> Result<LocalInstant, OracleError> {
        Err(self.0.clone())
    }
}

/// Canned tropical longitudes; counts lookups.
struct Canned {
    asc: f64,
    sun: f64,
    moon: f64,
    calls: Cell<u32>,
}

impl Canned {
    fn new(asc: f64, sun: f64, moon: f64) -> Self {
        Self {
            asc,
            sun,
            moon,
            calls: Cell::new(0),
        }
    }
}

impl EphemerisOracle for Canned {
    fn ascendant(&self, _: f64, _: &Coordinates) -> Result<f64, OracleError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.asc)
    }

    fn body_longitude(&self, _: f64, body: Body) -> Result<f64, OracleError> {
        self.calls.set(self.calls.get() + 1);
        Ok(match body {
            Body::Sun => self.sun,
            Body::Moon => self.moon,
        })
    }
}

/// UTC zone, sunrise at 06:00 wall clock.
fn utc_pipeline<E: EphemerisOracle>(ephem: E) -> PanchangPipeline<FixedZone, WallClockSunrise, E> {
    PanchangPipeline::new(FixedZone::new("UTC"), WallClockSunrise(6, 0), ephem)
}

fn no_zone_pipeline() -> PanchangPipeline<NoZone, WallClockSunrise, Canned> {
    PanchangPipeline::new(NoZone, WallClockSunrise(6, 0), Canned::new(0.0, 0.0, 0.0))
}

#[test]
fn naive_sunrise_is_read_in_resolved_zone() {
    let ephem = Canned::new(350.0, 5.0, 365.0);
    let zone = FixedZone::new("Asia/Kolkata");
    let pipeline = PanchangPipeline::new(zone, WallClockSunrise(6, 30), &ephem);
    let r = pipeline.compute_panchang(chennai(), "Chennai, India", jan1()).unwrap();

    assert_eq!(r.timezone, "Asia/Kolkata");
    assert!(!r.timezone_fallback);
    assert_eq!(r.sunrise_local.offset().local_minus_utc(), 5 * 3600 + 1800);
    // 06:30 IST = 01:00 UT
    assert!((r.jd_ut - (2_460_310.5 + 1.0 / 24.0)).abs() < 1e-8, "jd {}", r.jd_ut);
    assert_eq!(ephem.calls.get(), 3);

    assert_eq!(r.ascendant.sign.rashi, Rashi::Meena);
    assert_eq!(r.sun.sign.rashi, Rashi::Mesha);
    assert_eq!(r.sun.house.house, 1);
    assert!((r.sun.house.degrees_in_house - 15.0).abs() < 1e-9);
    assert_eq!(r.moon.longitude_deg, 5.0);
    assert_eq!(r.moon.nakshatra.nakshatra_index, 1);
    assert_eq!(r.moon.nakshatra.pada, 2);
    assert_eq!(r.body(Body::Moon), &r.moon);
    assert_eq!(r.short_name(), "Chennai");
}

#[test]
fn unknown_zone_falls_back_to_utc() {
    let r = no_zone_pipeline().compute_panchang(chennai(), "Chennai", jan1()).unwrap();
    assert_eq!(r.timezone, "UTC");
    assert!(r.timezone_fallback);
    assert_eq!(r.sunrise_local.offset().local_minus_utc(), 0);
    assert!((r.jd_ut - 2_460_310.75).abs() < 1e-8);
    assert!(r.to_string().contains("UTC (fallback)"));
}

#[test]
fn configured_fallback_zone() {
    let pipeline = no_zone_pipeline()
        .with_config(PanchangConfig::default().with_fallback_zone("Asia/Kolkata"));
    let r = pipeline.compute_panchang(chennai(), "Chennai", jan1()).unwrap();
    assert_eq!(r.timezone, "Asia/Kolkata");
    assert!(r.timezone_fallback);
}

#[test]
fn missing_coordinates() {
    let err = no_zone_pipeline()
        .compute_panchang(None, "Atlantis", jan1())
        .unwrap_err();
    assert_eq!(
        err,
        PanchangError::MissingLocation {
            address: "Atlantis".into()
        }
    );
}

#[test]
fn unknown_zone_identifier() {
    let pipeline = PanchangPipeline::new(
        FixedZone::new("Mars/Olympus_Mons"),
        WallClockSunrise(6, 0),
        Canned::new(0.0, 0.0, 0.0),
    );
    let err = pipeline.compute_panchang(chennai(), "Chennai", jan1()).unwrap_err();
    match err {
        PanchangError::InvalidTimezone { zone, .. } => assert_eq!(zone, "Mars/Olympus_Mons"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn sun_oracle_failure_aborts_before_ephemeris() {
    let ephem = Canned::new(0.0, 0.0, 0.0);
    let sun = FailingSun(OracleError::Timeout);
    let pipeline = PanchangPipeline::new(FixedZone::new("UTC"), sun, &ephem);
    let err = pipeline.compute_panchang(chennai(), "Chennai", jan1()).unwrap_err();
    assert!(matches!(
        err,
        PanchangError::SunEventUnavailable {
            source: OracleError::Timeout,
            ..
        }
    ));
    assert_eq!(ephem.calls.get(), 0);
}

#[test]
fn polar_night_is_sun_event_unavailable() {
    let pipeline = PanchangPipeline::new(
        FixedZone::new("Europe/Oslo"),
        BuiltinSunEvents::default(),
        BuiltinEphemeris,
    );
    let date = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();
    let err = pipeline
        .compute_panchang(Some(Coordinates::new(69.6492, 18.9553)), "Tromsø, Norway", date)
        .unwrap_err();
    match err {
        PanchangError::SunEventUnavailable { source, date: d, .. } => {
            assert_eq!(source, OracleError::PolarNight);
            assert_eq!(d, date);
        }
        other => panic!("unexpected {other:?}"),
    }
}

struct BrokenMoon;

impl EphemerisOracle for BrokenMoon {
    fn ascendant(&self, _: f64, _: &Coordinates) -> Result<f64, OracleError> {
        Ok(100.0)
    }

    fn body_longitude(&self, _: f64, body: Body) -> Result<f64, OracleError> {
        match body {
            Body::Sun => Ok(10.0),
            Body::Moon => Ok(f64::NAN),
        }
    }
}

/// Sun lookup fails; counts Moon lookups.
struct MissingSun {
    moon_calls: Cell<u32>,
}

impl EphemerisOracle for MissingSun {
    fn ascendant(&self, _: f64, _: &Coordinates) -> Result<f64, OracleError> {
        Ok(100.0)
    }

    fn body_longitude(&self, _: f64, body: Body) -> Result<f64, OracleError> {
        match body {
            Body::Sun => Err(OracleError::Failed("sun data missing".into())),
            Body::Moon => {
                self.moon_calls.set(self.moon_calls.get() + 1);
                Ok(200.0)
            }
        }
    }
}

struct NoAscendant;

impl EphemerisOracle for NoAscendant {
    fn ascendant(&self, _: f64, _: &Coordinates) -> Result<f64, OracleError> {
        Err(OracleError::Failed("house system unsupported".into()))
    }

    fn body_longitude(&self, _: f64, _: Body) -> Result<f64, OracleError> {
        Ok(0.0)
    }
}

#[test]
fn non_finite_longitude_is_ephemeris_failure() {
    let err = utc_pipeline(BrokenMoon).compute_panchang(chennai(), "Chennai", jan1()).unwrap_err();
    match err {
        PanchangError::EphemerisUnavailable { query, source, .. } => {
            assert_eq!(query, EphemerisQuery::Longitude(Body::Moon));
            assert!(matches!(source, OracleError::Failed(_)));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn sun_failure_stops_before_moon_lookup() {
    let ephem = MissingSun {
        moon_calls: Cell::new(0),
    };
    let err = utc_pipeline(&ephem)
        .compute_panchang(chennai(), "Chennai", jan1())
        .unwrap_err();
    match err {
        PanchangError::EphemerisUnavailable { query, source, .. } => {
            assert_eq!(query, EphemerisQuery::Longitude(Body::Sun));
            assert_eq!(source, OracleError::Failed("sun data missing".into()));
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(ephem.moon_calls.get(), 0);
}

#[test]
fn ascendant_failure_reported() {
    let err = utc_pipeline(NoAscendant)
        .compute_panchang(chennai(), "Chennai", jan1())
        .unwrap_err();
    assert!(matches!(
        err,
        PanchangError::EphemerisUnavailable {
            query: EphemerisQuery::Ascendant,
            ..
        }
    ));
    let msg = err.to_string();
    assert!(msg.contains("house system unsupported") || msg.contains("ascendant"), "{msg}");
}

#[test]
fn date_text_accepted_in_both_layouts() {
    let pipeline = utc_pipeline(Canned::new(0.0, 0.0, 0.0));
    let a = pipeline.compute_panchang_str(chennai(), "Chennai", "01-01-2024").unwrap();
    let b = pipeline.compute_panchang_str(chennai(), "Chennai", "2024-01-01").unwrap();
    assert_eq!(a.jd_ut, b.jd_ut);

    let err = pipeline.compute_panchang_str(chennai(), "Chennai", "2024/13/45").unwrap_err();
    assert!(matches!(err, PanchangError::InvalidDate { .. }));
}

#[test]
fn coordinates_are_rounded_per_config() {
    let pipeline = utc_pipeline(Canned::new(0.0, 0.0, 0.0))
        .with_config(PanchangConfig::default().with_coordinate_decimals(2));
    let r = pipeline
        .compute_panchang(Some(Coordinates::new(13.0827, 80.2707)), "Chennai", jan1())
        .unwrap();
    assert_eq!(r.coordinates.latitude(), 13.08);
    assert_eq!(r.coordinates.longitude(), 80.27);
}

#[test]
fn sidereal_shifts_every_longitude_equally() {
    let ephem = Canned::new(100.0, 130.0, 250.0);
    let tropical = utc_pipeline(&ephem)
        .compute_panchang(chennai(), "Chennai", jan1())
        .unwrap();
    let lahiri = Zodiac::Sidereal(AyanamshaSystem::Lahiri);
    let sidereal = utc_pipeline(&ephem)
        .with_config(PanchangConfig::default().with_zodiac(lahiri))
        .compute_panchang(chennai(), "Chennai", jan1())
        .unwrap();

    assert_eq!(tropical.ayanamsha_deg, None);
    let aya = sidereal.ayanamsha_deg.unwrap();
    assert!((24.0..24.4).contains(&aya), "ayanamsha {aya}");
    assert!((sidereal.sun.longitude_deg - (130.0 - aya)).abs() < 1e-9);
    assert!((sidereal.ascendant.longitude_deg - (100.0 - aya)).abs() < 1e-9);
    // houses are relative to the ascendant and do not move
    assert_eq!(sidereal.sun.house.house, tropical.sun.house.house);
    assert_eq!(sidereal.moon.house.house, tropical.moon.house.house);
    assert_eq!(sidereal.sun.sign.rashi, Rashi::Karka);
    assert_eq!(tropical.sun.sign.rashi, Rashi::Simha);
}

#[test]
fn chennai_with_builtin_oracles() {
    let pipeline = PanchangPipeline::new(
        FixedZone::new("Asia/Kolkata"),
        BuiltinSunEvents::default(),
        BuiltinEphemeris,
    );
    let r = pipeline
        .compute_panchang(chennai(), "Chennai, Tamil Nadu, India", jan1())
        .unwrap();

    assert_eq!(r.sunrise_local.date_naive(), jan1());
    assert_eq!(r.sunrise_local.hour(), 6);
    assert!((2_460_310.5..2_460_311.0).contains(&r.jd_ut));

    // Sun about 280° tropical, rising with the ascendant
    assert!((278.0..282.0).contains(&r.sun.longitude_deg), "sun {}", r.sun.longitude_deg);
    assert_eq!(r.sun.sign.rashi, Rashi::Makara);
    assert_eq!(r.sun.house.house, 1);
    assert_eq!(r.ascendant.sign.rashi, Rashi::Makara);

    for p in [&r.sun, &r.moon] {
        assert!((0.0..360.0).contains(&p.longitude_deg));
        assert!((1..=12).contains(&p.sign.sign_index));
        assert!((0.0..30.0).contains(&p.sign.degrees_in_sign));
        assert!((1..=27).contains(&p.nakshatra.nakshatra_index));
        assert!((1..=4).contains(&p.nakshatra.pada));
        assert!((1..=12).contains(&p.house.house));
        assert!((0.0..30.0).contains(&p.house.degrees_in_house));
    }
    let report = r.to_string();
    assert!(report.contains("Asia/Kolkata"), "{report}");
    assert!(report.contains("Moon"), "{report}");
}
