use crate::geocoder::nominatim::{NominatimConfig, DEFAULT_URL, DEFAULT_USER_AGENT};
use crate::location::Coordinate;
use std::path::PathBuf;
use std::time::Duration;
use structopt::clap::AppSettings;
use structopt::StructOpt;

/// Arguments shared by the binaries that scan a locations list.
#[derive(Debug, StructOpt)]
#[structopt(setting = AppSettings::AllowNegativeNumbers)]
pub struct ScanOpts {
    /// release year of the films
    pub year: i32,
    /// your latitude
    pub lat: f64,
    /// your longitude
    pub lon: f64,
    /// path to the locations list
    #[structopt(parse(from_os_str))]
    pub path: PathBuf,
    /// nominatim base url
    #[structopt(long, env = "NOMINATIM_URL", default_value = DEFAULT_URL)]
    pub nominatim_url: String,
    /// user agent sent to nominatim
    #[structopt(long, env = "NOMINATIM_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
    /// geocoding request timeout in seconds
    #[structopt(long, env = "NOMINATIM_TIMEOUT")]
    pub timeout: Option<u64>,
}

impl ScanOpts {
    pub fn user(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }

    pub fn nominatim(&self) -> NominatimConfig {
        NominatimConfig {
            base_url: self.nominatim_url.clone(),
            user_agent: self.user_agent.clone(),
            timeout: self.timeout.map(Duration::from_secs),
        }
    }
}
