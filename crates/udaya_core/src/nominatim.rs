//! Place search via OpenStreetMap Nominatim.
//!
//! Environment:
//! - `UDAYA_NOMINATIM_URL` overrides the search endpoint
//! - `UDAYA_USER_AGENT` overrides the User-Agent header (Nominatim's usage
//!   policy requires an identifying one)

use std::time::Duration;

use log::{debug, warn};
use serde::Deserialize;

use crate::error::OracleError;
use crate::oracle::GeocodeOracle;
use crate::types::{Coordinates, Location};

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_USER_AGENT: &str = concat!("udaya/", env!("CARGO_PKG_VERSION"));

/// Suggestions returned per query.
pub const SUGGESTION_LIMIT: usize = 6;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Hint that means "no particular country".
const NO_COUNTRY_HINT: &str = "Other";

/// ISO 3166-1 alpha-2 code for the country names offered as hints.
pub fn country_code(hint: &str) -> Option<&'static str> {
    Some(match hint {
        "India" => "IN",
        "United States" => "US",
        "United Kingdom" => "GB",
        "Canada" => "CA",
        "Australia" => "AU",
        "Singapore" => "SG",
        "UAE" => "AE",
        "Germany" => "DE",
        "France" => "FR",
        _ => return None,
    })
}

/// Free-text query with the country hint appended, unless it is "Other".
pub fn build_query(query: &str, country_hint: Option<&str>) -> String {
    match country_hint {
        Some(hint) if !hint.is_empty() && hint != NO_COUNTRY_HINT => format!("{query}, {hint}"),
        _ => query.to_string(),
    }
}

#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
    display_name: String,
}

/// Parse a Nominatim JSON response; entries with unparseable coordinates are skipped.
pub fn parse_places(body: &str) -> Result<Vec<Location>, OracleError> {
    let places: Vec<Place> =
        serde_json::from_str(body).map_err(|e| OracleError::Failed(format!("bad response: {e}")))?;
    Ok(places
        .into_iter()
        .filter_map(|p| {
            let lat = p.lat.parse::<f64>().ok()?;
            let lon = p.lon.parse::<f64>().ok()?;
            Some(Location::new(Coordinates::new(lat, lon), p.display_name))
        })
        .take(SUGGESTION_LIMIT)
        .collect())
}

/// Blocking Nominatim client.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl NominatimGeocoder {
    pub fn new(base_url: impl Into<String>, user_agent: &str) -> Result<Self, OracleError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| OracleError::Failed(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Endpoint and User-Agent from the environment, with public defaults.
    pub fn from_env() -> Result<Self, OracleError> {
        let url =
            std::env::var("UDAYA_NOMINATIM_URL").unwrap_or_else(|_| DEFAULT_NOMINATIM_URL.into());
        let agent = std::env::var("UDAYA_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.into());
        Self::new(url, &agent)
    }

    fn search(
        &self,
        query: &str,
        country_hint: Option<&str>,
    ) -> Result<Vec<Location>, OracleError> {
        let q = build_query(query, country_hint);
        let limit = SUGGESTION_LIMIT.to_string();
        let mut params = vec![
            ("q", q.as_str()),
            ("format", "json"),
            ("addressdetails", "1"),
            ("limit", limit.as_str()),
        ];
        if let Some(code) = country_hint.and_then(country_code) {
            params.push(("countrycodes", code));
        }
        debug!("nominatim search {q:?}");

        let body = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.text())
            .map_err(|e| {
                if e.is_timeout() {
                    OracleError::Timeout
                } else {
                    OracleError::Failed(e.to_string())
                }
            })?;
        parse_places(&body)
    }
}

impl GeocodeOracle for NominatimGeocoder {
    fn suggest(&self, query: &str, country_hint: Option<&str>) -> Vec<Location> {
        match self.search(query, country_hint) {
            Ok(found) => found,
            Err(e) => {
                warn!("geocoding {query:?} failed: {e}");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHENNAI: &str = r#"[
        {"place_id": 1, "lat": "13.0836939", "lon": "80.270186",
         "display_name": "Chennai, Chennai District, Tamil Nadu, India",
         "address": {"city": "Chennai", "country_code": "in"}},
        {"place_id": 2, "lat": "not-a-number", "lon": "80.0",
         "display_name": "Broken"}
    ]"#;

    #[test]
    fn country_map() {
        assert_eq!(country_code("India"), Some("IN"));
        assert_eq!(country_code("UAE"), Some("AE"));
        assert_eq!(country_code("United Kingdom"), Some("GB"));
        assert_eq!(country_code("Other"), None);
        assert_eq!(country_code("Nepal"), None);
    }

    #[test]
    fn query_text() {
        assert_eq!(build_query("Chennai", Some("India")), "Chennai, India");
        assert_eq!(build_query("Kathmandu", Some("Nepal")), "Kathmandu, Nepal");
        assert_eq!(build_query("Paris", Some("Other")), "Paris");
        assert_eq!(build_query("Paris", None), "Paris");
    }

    #[test]
    fn parses_and_skips_bad_entries() {
        let found = parse_places(CHENNAI).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].short_name(), "Chennai");
        assert_eq!(found[0].coordinates.latitude(), 13.083694);
        assert_eq!(found[0].coordinates.longitude(), 80.270186);
    }

    #[test]
    fn empty_and_malformed() {
        assert!(parse_places("[]").unwrap().is_empty());
        assert!(matches!(parse_places("<html>"), Err(OracleError::Failed(_))));
    }

    #[test]
    fn limit_applied() {
        let many: Vec<String> = (0..10)
            .map(|i| format!(r#"{{"lat": "{i}.0", "lon": "0.0", "display_name": "P{i}"}}"#))
            .collect();
        let body = format!("[{}]", many.join(","));
        assert_eq!(parse_places(&body).unwrap().len(), SUGGESTION_LIMIT);
    }
}
