use tracing::{subscriber::set_global_default, Subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

pub mod config;
pub mod distance;
pub mod error;
pub mod extract;
pub mod geocoder;
pub mod geojson;
pub mod location;
pub mod map;
pub mod scanner;
pub mod selector;

pub use error::Error;
pub use geocoder::{Geocoder, Resolver};
pub use location::Coordinate;
pub use scanner::{scan, scan_file};
pub use selector::{NearestLocations, Record};

/// Bunyan json on stderr, stdout belongs to the binaries.
pub fn get_subscriber(env_filter: String) -> impl Subscriber + Send + Sync {
    const PKG_NAME: &str = env!("CARGO_PKG_NAME");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = BunyanFormattingLayer::new(PKG_NAME.into(), std::io::stderr);
    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

pub fn init_subscriber(
    subscriber: impl Subscriber + Send + Sync,
) -> Result<(), Box<dyn std::error::Error>> {
    LogTracer::init()?;
    set_global_default(subscriber)?;
    Ok(())
}
