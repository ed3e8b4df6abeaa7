//! Place search and resolution
//!
//! This module defines the `PlaceProvider` trait and its implementations:
//! a real geocoding/places provider (`google`) and the built-in landmark
//! catalog (`catalog`) used as a deterministic offline fallback. The
//! `resolver` picks between them based on configuration, and `session`
//! guards suggestion state against stale responses.

pub mod catalog;
pub mod google;
pub mod resolver;
pub mod session;

use crate::error::Result;
use crate::geo::LatLng;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// A place suggestion produced for a search query
///
/// Transient: produced per query, discarded when the query changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub description: String,
    pub place_id: String,
    #[serde(default)]
    pub types: Vec<String>,
}

/// A fully resolved place
///
/// `coordinates` may be absent when the provider returns no geometry; the
/// place is still valid, but hazard lookup is skipped for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPlace {
    pub place_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<LatLng>,
}

/// Trait for place providers
///
/// Implementations must be thread-safe (Send + Sync) to work with the
/// async server. The landmark catalog implements an equivalent reduced
/// capability set without any of these methods touching the network.
pub trait PlaceProvider: Send + Sync {
    /// Autocomplete suggestions for a free-text query
    fn predictions(
        &self,
        input: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Suggestion>>> + Send;

    /// Full details for a place id
    ///
    /// Returns `None` when the provider reports a non-OK status.
    fn details(
        &self,
        place_id: &str,
    ) -> impl std::future::Future<Output = Result<Option<ResolvedPlace>>> + Send;

    /// Best place for a coordinate pair
    fn reverse_geocode(
        &self,
        point: LatLng,
    ) -> impl std::future::Future<Output = Result<Option<ResolvedPlace>>> + Send;
}

static HTTP_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Process-wide HTTP client for place providers
///
/// Lazily initialized on first use and reused thereafter; the returned
/// clone shares the underlying connection pool. Initialization is the
/// only mutation of shared state, so no locking discipline is needed
/// beyond the `OnceLock`.
pub(crate) fn shared_client() -> reqwest::Client {
    HTTP_CLIENT
        .get_or_init(|| {
            reqwest::Client::builder()
                .user_agent(concat!("trail-watch/", env!("CARGO_PKG_VERSION")))
                .build()
                .expect("Failed to build HTTP client")
        })
        .clone()
}
