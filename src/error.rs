use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoding request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid geocoding response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read locations: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not write map {path}: {source}")]
    Render {
        path: String,
        source: std::io::Error,
    },
}
