//! Error types for trail-watch

use thiserror::Error;

/// Main error type for trail-watch operations
///
/// Place-lookup and hazard-lookup failures are separate variants: the two
/// lookups are independent failure domains, and neither is ever used for an
/// empty result set (empty results are `Ok`).
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid boundary: {0}")]
    InvalidBoundary(String),

    #[error("Place lookup failed: {0}")]
    PlaceLookup(String),

    #[error("Geocoding provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Hazard lookup failed: {0}")]
    HazardLookup(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Sharing unavailable: {0}")]
    ShareUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for trail-watch operations
pub type Result<T> = std::result::Result<T, Error>;
