use geo_types::Point;
use std::num::ParseFloatError;
use thiserror::Error;

/// A position in decimal degrees. Equality is exact, two coordinates that
/// differ in the last bit are different places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Coordinate { lat, lon }
    }

    /// The point on the opposite side of the globe. The longitude shift
    /// follows the sign of the longitude so the result stays within
    /// [-180, 180]; choosing it by the sign of the latitude would not.
    pub fn antipode(&self) -> Self {
        let lon = if self.lon > 0.0 {
            self.lon - 180.0
        } else {
            self.lon + 180.0
        };
        Coordinate { lat: -self.lat, lon }
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(coord: Coordinate) -> Self {
        Point::new(coord.lon, coord.lat)
    }
}

#[derive(Debug, Error)]
pub enum ParseCoordinateError {
    #[error("{field} {value:?}: {source}")]
    Float {
        field: &'static str,
        value: String,
        source: ParseFloatError,
    },
    #[error("coordinate out of range: {0},{1}")]
    Range(f64, f64),
}

fn parse_degrees(field: &'static str, value: &str) -> Result<f64, ParseCoordinateError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|source| ParseCoordinateError::Float {
            field,
            value: value.to_string(),
            source,
        })
}

impl Coordinate {
    /// Parses decimal degree strings, rejecting values off the globe
    /// (including NaN and infinities).
    pub fn parse(lat: &str, lon: &str) -> Result<Self, ParseCoordinateError> {
        let lat = parse_degrees("lat", lat)?;
        let lon = parse_degrees("lon", lon)?;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(ParseCoordinateError::Range(lat, lon));
        }
        Ok(Coordinate { lat, lon })
    }
}
