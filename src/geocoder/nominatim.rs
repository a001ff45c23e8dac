use super::Geocoder;
use crate::error::GeocodeError;
use crate::location::Coordinate;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::instrument;

pub const DEFAULT_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct NominatimConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Option<Duration>,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        NominatimConfig {
            base_url: DEFAULT_URL.into(),
            user_agent: DEFAULT_USER_AGENT.into(),
            timeout: None,
        }
    }
}

#[derive(Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

/// OpenStreetMap Nominatim search, one blocking request per lookup.
pub struct Nominatim {
    client: Client,
    search_url: String,
}

impl Nominatim {
    pub fn new(config: NominatimConfig) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()?;
        let search_url = format!("{}/search", config.base_url.trim_end_matches('/'));
        Ok(Nominatim { client, search_url })
    }
}

fn first_place(places: Vec<Place>) -> Result<Option<Coordinate>, GeocodeError> {
    let place = match places.into_iter().next() {
        Some(place) => place,
        None => return Ok(None),
    };
    let coordinate = Coordinate::parse(&place.lat, &place.lon)
        .map_err(|e| GeocodeError::InvalidResponse(e.to_string()))?;
    Ok(Some(coordinate))
}

impl Geocoder for Nominatim {
    #[instrument(skip(self))]
    fn lookup(&self, name: &str) -> Result<Option<Coordinate>, GeocodeError> {
        let places: Vec<Place> = self
            .client
            .get(&self.search_url)
            .query(&[("q", name), ("format", "json"), ("limit", "1")])
            .send()?
            .error_for_status()?
            .json()?;
        first_place(places)
    }
}
