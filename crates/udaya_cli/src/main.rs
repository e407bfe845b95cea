use std::error::Error;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use env_logger::{Builder, Env, Target};
use log::debug;
use serde::Serialize;
use serde_json::json;
use udaya_core::{
    AyanamshaSystem, BoundaryZone, BuiltinEphemeris, BuiltinSunEvents, Coordinates, FixedZone,
    GeocodeOracle, NauticalZone, NoZone, NominatimGeocoder, OracleError, PanchangConfig,
    PanchangPipeline, RiseSetConfig, TimezoneOracle, Zodiac,
};
use udaya_ephem::RiseSetEvent;
use udaya_time::{Tz, julian_day_ut, parse_calendar_date, to_utc};
use udaya_vedic::{
    deg_to_dms, house_from_ascendant, nakshatra_from_longitude, sign_from_longitude,
};

#[derive(Parser)]
#[command(name = "udaya", about = "Sunrise-anchored Sun/Moon placements", version)]
struct Cli {
    /// Log pipeline stages (same as RUST_LOG=debug)
    #[arg(long, short, global = true)]
    verbose: bool,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct PlaceArgs {
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true, requires = "lon")]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true, requires = "lat")]
    lon: Option<f64>,
    /// Place name; geocoded when --lat/--lon are not given
    #[arg(long)]
    place: Option<String>,
    /// Country name narrowing the place search (e.g. India)
    #[arg(long)]
    country: Option<String>,
    /// IANA timezone (e.g. Asia/Kolkata); looked up from the coordinates when omitted
    #[arg(long, conflicts_with_all = ["nautical", "utc"])]
    tz: Option<String>,
    /// Use the nautical zone Etc/GMT±N derived from longitude
    #[arg(long, conflicts_with = "utc")]
    nautical: bool,
    /// Skip the zone lookup and report times in UTC
    #[arg(long)]
    utc: bool,
    /// Observer altitude above sea level in meters
    #[arg(long, default_value = "0")]
    altitude: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Ascendant, Sun and Moon placements at local sunrise
    Panchang {
        #[command(flatten)]
        place: PlaceArgs,
        /// Local calendar date (DD-MM-YYYY or YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Sidereal zodiac with the given ayanamsha (lahiri, kp, raman, fagan-bradley, yukteshwar)
        #[arg(long)]
        sidereal: Option<AyanamshaSystem>,
    },
    /// Local sunrise and sunset
    Sunrise {
        #[command(flatten)]
        place: PlaceArgs,
        /// Local calendar date (DD-MM-YYYY or YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Search places by name
    Search {
        /// Free-text place name
        query: String,
        /// Country name narrowing the search
        #[arg(long)]
        country: Option<String>,
    },
    /// Rashi from ecliptic longitude
    Rashi {
        /// Ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Nakshatra and pada from ecliptic longitude
    Nakshatra {
        /// Ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Equal house of a longitude given the ascendant
    House {
        /// Ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
        /// Ascendant longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        asc: f64,
    },
    /// Julian Day (UT) of a local date-time
    Julday {
        /// Local date-time (YYYY-MM-DD HH:MM[:SS] or YYYY-MM-DDTHH:MM[:SS])
        datetime: String,
        /// IANA timezone of the date-time
        #[arg(long, default_value = "UTC")]
        tz: String,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_hyphen_values = true)]
        deg: f64,
    },
}

const DATETIME_LAYOUTS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

fn parse_local_datetime(s: &str) -> Result<NaiveDateTime, String> {
    let text = s.trim();
    DATETIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(text, layout).ok())
        .ok_or_else(|| format!("Invalid date-time: {s} (expected YYYY-MM-DD HH:MM[:SS])"))
}

fn fail(err: &dyn Error) -> ! {
    eprintln!("Error: {err}");
    let mut cause = err.source();
    while let Some(e) = cause {
        eprintln!("  caused by: {e}");
        cause = e.source();
    }
    std::process::exit(1);
}

fn fail_msg(msg: &str) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn parse_date(s: &str) -> NaiveDate {
    parse_calendar_date(s).unwrap_or_else(|e| fail(&e))
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(level))
        .target(Target::Stderr)
        .init();
}

fn zone_oracle(place: &PlaceArgs) -> Box<dyn TimezoneOracle> {
    match &place.tz {
        Some(tz) => Box::new(FixedZone::new(tz.clone())),
        None if place.nautical => Box::new(NauticalZone),
        None if place.utc => Box::new(NoZone),
        None => Box::new(BoundaryZone::new()),
    }
}

fn geocoder() -> NominatimGeocoder {
    NominatimGeocoder::from_env().unwrap_or_else(|e| fail(&e))
}

/// Coordinates and a display label, geocoding `--place` when needed.
fn resolve_place(place: &PlaceArgs) -> (Option<Coordinates>, String) {
    if let (Some(lat), Some(lon)) = (place.lat, place.lon) {
        let coords = Coordinates::new(lat, lon);
        let label = place.place.clone().unwrap_or_else(|| coords.to_string());
        return (Some(coords), label);
    }
    let Some(name) = place.place.as_deref() else {
        fail_msg("Give --lat/--lon or --place");
    };
    let first = geocoder()
        .suggest(name, place.country.as_deref())
        .into_iter()
        .next();
    match first {
        Some(loc) => {
            debug!("{name:?} resolved to {} ({})", loc.display_address, loc.coordinates);
            (Some(loc.coordinates), loc.display_address)
        }
        // the pipeline reports the missing location
        None => (None, name.to_string()),
    }
}

fn event_json(event: &Result<DateTime<Tz>, OracleError>) -> serde_json::Value {
    match event {
        Ok(t) => json!({ "time": t.to_rfc3339() }),
        Err(e) => json!({ "unavailable": e.to_string() }),
    }
}

fn print_json(value: &impl Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => fail(&e),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Panchang {
            place,
            date,
            sidereal,
        } => {
            let date = parse_date(&date);
            let (coords, label) = resolve_place(&place);
            let zodiac = sidereal.map_or(Zodiac::Tropical, Zodiac::Sidereal);
            let zone = zone_oracle(&place);
            let pipeline = PanchangPipeline::new(
                &*zone,
                BuiltinSunEvents::new(RiseSetConfig::default(), place.altitude),
                BuiltinEphemeris,
            )
            .with_config(PanchangConfig::default().with_zodiac(zodiac));

            let result = pipeline
                .compute_panchang(coords, &label, date)
                .unwrap_or_else(|e| fail(&e));
            if cli.json {
                print_json(&result);
            } else {
                print!("{result}");
            }
        }

        Commands::Sunrise { place, date } => {
            let date = parse_date(&date);
            let (coords, label) = resolve_place(&place);
            let sun = BuiltinSunEvents::new(RiseSetConfig::default(), place.altitude);
            let zone = zone_oracle(&place);
            let ctx = PanchangPipeline::new(&*zone, sun, BuiltinEphemeris)
                .observer_context(coords, &label, date)
                .unwrap_or_else(|e| fail(&e));

            let [rise, set] = [RiseSetEvent::Sunrise, RiseSetEvent::Sunset]
                .map(|event| sun.event(&ctx.coordinates, date, ctx.zone, event));

            if cli.json {
                print_json(&json!({
                    "location": label,
                    "coordinates": ctx.coordinates,
                    "timezone": ctx.zone.name(),
                    "timezone_fallback": ctx.zone_fallback,
                    "date": date.to_string(),
                    "sunrise": event_json(&rise),
                    "sunset": event_json(&set),
                }));
            } else {
                println!("Rise/Set for {label} ({}) on {date}:\n", ctx.coordinates);
                for (name, r) in [("Sunrise", &rise), ("Sunset", &set)] {
                    match r {
                        Ok(t) => println!("  {name:8} {}", t.format("%H:%M:%S %Z (%:z)")),
                        Err(e) => println!("  {name:8} none: {e}"),
                    }
                }
                if ctx.zone_fallback {
                    println!("\n  (no timezone for this place, times are UTC)");
                }
            }
        }

        Commands::Search { query, country } => {
            let found = geocoder().suggest(&query, country.as_deref());
            if cli.json {
                print_json(&found);
            } else if found.is_empty() {
                println!("No matches for {query:?}");
            } else {
                for (i, loc) in found.iter().enumerate() {
                    println!("{:>2}. {}  [{}]", i + 1, loc.display_address, loc.coordinates);
                }
            }
        }

        Commands::Rashi { lon } => {
            let info = sign_from_longitude(lon);
            if cli.json {
                print_json(&info);
            } else {
                println!(
                    "{} ({}) - {} ({:.4} deg in sign)",
                    info.rashi.sanskrit_name(),
                    info.sign_name,
                    info.dms,
                    info.degrees_in_sign
                );
            }
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            if cli.json {
                print_json(&info);
            } else {
                println!(
                    "{} (index {}) - Pada {} ({:.4} deg in nakshatra, {:.4} deg in pada)",
                    info.nakshatra_name,
                    info.nakshatra_index,
                    info.pada,
                    info.degrees_in_nakshatra,
                    info.degrees_in_pada
                );
            }
        }

        Commands::House { lon, asc } => {
            let info = house_from_ascendant(lon, asc);
            if cli.json {
                print_json(&info);
            } else {
                println!(
                    "House {} ({:.4} deg past cusp at {:.4} deg)",
                    info.house,
                    info.degrees_in_house,
                    info.cusp_deg(asc)
                );
            }
        }

        Commands::Julday { datetime, tz } => {
            let local = parse_local_datetime(&datetime).unwrap_or_else(|e| fail_msg(&e));
            let utc = to_utc(local, &tz).unwrap_or_else(|e| fail(&e));
            let jd = julian_day_ut(local, &tz).unwrap_or_else(|e| fail(&e));
            if cli.json {
                print_json(&json!({
                    "local": local.to_string(),
                    "timezone": tz,
                    "utc": utc.to_rfc3339(),
                    "jd_ut": jd,
                }));
            } else {
                println!("UTC : {}", utc.format("%Y-%m-%d %H:%M:%S"));
                println!("JD  : {jd:.6} UT");
            }
        }

        Commands::Dms { deg } => {
            let dms = deg_to_dms(deg);
            if cli.json {
                print_json(&dms);
            } else {
                println!("{dms}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn panchang_args() {
        let cli = Cli::try_parse_from([
            "udaya", "panchang", "--lat", "13.0827", "--lon", "80.2707", "--tz", "Asia/Kolkata",
            "--date", "01-01-2024", "--sidereal", "lahiri", "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Panchang { place, date, sidereal } => {
                assert_eq!(place.lat, Some(13.0827));
                assert_eq!(place.tz.as_deref(), Some("Asia/Kolkata"));
                assert_eq!(date, "01-01-2024");
                assert_eq!(sidereal, Some(AyanamshaSystem::Lahiri));
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn negative_coordinates_and_tz_conflict() {
        let cli = Cli::try_parse_from([
            "udaya", "sunrise", "--lat", "-33.87", "--lon", "-151.2", "--date", "2024-06-21",
        ])
        .unwrap();
        match cli.command {
            Commands::Sunrise { place, .. } => {
                assert_eq!(place.lat, Some(-33.87));
                assert_eq!(place.lon, Some(-151.2));
            }
            _ => panic!("wrong subcommand"),
        }
        assert!(
            Cli::try_parse_from([
                "udaya", "sunrise", "--lat", "0", "--lon", "0", "--date", "2024-06-21", "--tz",
                "UTC", "--nautical",
            ])
            .is_err()
        );
    }

    #[test]
    fn zone_source_selection() {
        let place = |extra: &[&str]| {
            let mut argv = vec!["udaya", "sunrise", "--lat", "13.08", "--lon", "80.27"];
            argv.extend_from_slice(extra);
            argv.extend_from_slice(&["--date", "2024-01-01"]);
            match Cli::try_parse_from(argv).map(|cli| cli.command) {
                Ok(Commands::Sunrise { place, .. }) => Ok(place),
                Ok(_) => panic!("wrong subcommand"),
                Err(e) => Err(e),
            }
        };
        let chennai = Coordinates::new(13.08, 80.27);
        let lookup = |extra: &[&str]| zone_oracle(&place(extra).unwrap()).lookup(&chennai);

        assert_eq!(lookup(&[]).as_deref(), Some("Asia/Kolkata"));
        assert_eq!(lookup(&["--nautical"]).as_deref(), Some("Etc/GMT-5"));
        assert_eq!(lookup(&["--utc"]), None);
        assert_eq!(lookup(&["--tz", "Asia/Colombo"]).as_deref(), Some("Asia/Colombo"));
        assert!(place(&["--utc", "--nautical"]).is_err());
        assert!(place(&["--utc", "--tz", "UTC"]).is_err());
    }

    #[test]
    fn local_datetime_layouts() {
        let a = parse_local_datetime("2024-01-01 06:31:00").unwrap();
        let b = parse_local_datetime("2024-01-01T06:31").unwrap();
        assert_eq!(a, b);
        assert!(parse_local_datetime("01-01-2024 06:31").is_err());
    }
}
