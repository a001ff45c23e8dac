use crate::error::GeocodeError;
use crate::location::Coordinate;
use std::collections::HashMap;
use tracing::{debug, warn};

pub mod nominatim;

/// Resolves place names to coordinates. `Ok(None)` means the service knows
/// no such place.
pub trait Geocoder {
    fn lookup(&self, name: &str) -> Result<Option<Coordinate>, GeocodeError>;
}

impl<G: Geocoder + ?Sized> Geocoder for &G {
    fn lookup(&self, name: &str) -> Result<Option<Coordinate>, GeocodeError> {
        (**self).lookup(name)
    }
}

impl<G: Geocoder + ?Sized> Geocoder for Box<G> {
    fn lookup(&self, name: &str) -> Result<Option<Coordinate>, GeocodeError> {
        (**self).lookup(name)
    }
}

/// Memoizes lookups for the lifetime of one run. Names that failed to
/// resolve are remembered as well and never looked up again.
pub struct Resolver<G> {
    geocoder: G,
    cache: HashMap<String, Option<Coordinate>>,
}

impl<G: Geocoder> Resolver<G> {
    pub fn new(geocoder: G) -> Self {
        Resolver {
            geocoder,
            cache: HashMap::new(),
        }
    }

    pub fn resolve(&mut self, name: &str) -> Option<Coordinate> {
        if let Some(cached) = self.cache.get(name) {
            debug!(location = name, resolved = cached.is_some(), "geocode cache hit");
            return *cached;
        }

        let resolved = match self.geocoder.lookup(name) {
            Ok(coord) => coord,
            Err(e) => {
                warn!(location = name, error = %e, "geocoding failed");
                None
            }
        };
        debug!(location = name, resolved = resolved.is_some(), "geocode cache miss");
        self.cache.insert(name.to_string(), resolved);
        resolved
    }

    /// Number of distinct names looked up so far.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}
