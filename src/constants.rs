//! Centralized constants for the trail-watch crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in meters (WGS84 approximation)
    pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

    /// Colorado bounding rectangle used to bias place suggestions:
    /// (south, west, north, east)
    pub const COLORADO_BOUNDS: (f64, f64, f64, f64) = (36.99, -109.06, 41.0, -102.04);
}

/// External API endpoints
pub mod api {
    /// Google Maps Places autocomplete endpoint
    pub const PLACES_AUTOCOMPLETE_URL: &str =
        "https://maps.googleapis.com/maps/api/place/autocomplete/json";

    /// Google Maps Places details endpoint
    pub const PLACES_DETAILS_URL: &str =
        "https://maps.googleapis.com/maps/api/place/details/json";

    /// Google Maps geocoding endpoint
    pub const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
}

/// Suggestion behavior
pub mod suggest {
    /// Maximum number of place suggestions returned per query
    pub const MAX_SUGGESTIONS: usize = 5;

    /// Prefix for place ids synthesized by the fallback catalog, so they
    /// can never collide with real provider ids
    pub const MOCK_PLACE_ID_PREFIX: &str = "mock-";
}

/// Name search behavior
pub mod search {
    /// Minimum fuzzy score for a candidate to count as significant
    pub const FUZZY_MIN_SCORE: f64 = 0.35;

    /// Default result limit for name searches
    pub const DEFAULT_SEARCH_LIMIT: usize = 10;

    /// Hard cap on name search result limits
    pub const MAX_SEARCH_LIMIT: usize = 50;
}
