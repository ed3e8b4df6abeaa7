//! Place resolution
//!
//! Orchestrates suggestion and details lookups across the configured
//! provider and the landmark catalog fallback. Selection happens here,
//! once, rather than branching on configuration at every call site.

use crate::config::Config;
use crate::constants::suggest::MAX_SUGGESTIONS;
use crate::error::{Error, Result};
use crate::geo::LatLng;
use crate::places::catalog::LandmarkCatalog;
use crate::places::google::GoogleMapsProvider;
use crate::places::{PlaceProvider, ResolvedPlace, Suggestion};

/// Resolves free-text queries and place ids to places
///
/// Holds an optional provider; without one, every lookup is served from
/// the catalog (fallback/disabled mode rather than an error).
#[derive(Debug, Clone)]
pub struct PlaceResolver<P> {
    provider: Option<P>,
    catalog: LandmarkCatalog,
}

impl PlaceResolver<GoogleMapsProvider> {
    /// Build a resolver from configuration
    ///
    /// A missing provider API key selects fallback mode.
    pub fn from_config(config: &Config) -> Self {
        let provider = if config.provider_configured() {
            Some(GoogleMapsProvider::new(
                config.places.provider_api_key.clone(),
            ))
        } else {
            None
        };

        Self {
            provider,
            catalog: LandmarkCatalog::new(),
        }
    }
}

impl<P: PlaceProvider> PlaceResolver<P> {
    /// Create a resolver with an explicit provider (or none)
    pub fn new(provider: Option<P>) -> Self {
        Self {
            provider,
            catalog: LandmarkCatalog::new(),
        }
    }

    /// Whether an external provider is configured
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Get ranked place suggestions for a query
    ///
    /// Empty queries return an empty list without touching the provider
    /// or the catalog. Provider transport failures fall back to the
    /// catalog; a provider request failure is surfaced as an error,
    /// distinct from "no results" (which is an empty `Ok`).
    pub async fn suggestions(&self, query: &str) -> Result<Vec<Suggestion>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let Some(provider) = &self.provider else {
            return Ok(self.catalog.suggest(query));
        };

        match provider.predictions(query).await {
            Ok(mut suggestions) => {
                suggestions.truncate(MAX_SUGGESTIONS);
                Ok(suggestions)
            }
            Err(Error::ProviderUnavailable(reason)) => {
                tracing::warn!("places provider unreachable, using catalog: {}", reason);
                Ok(self.catalog.suggest(query))
            }
            Err(e) => Err(e),
        }
    }

    /// Resolve full place details for a place id
    ///
    /// Catalog ids resolve locally without any network call. For provider
    /// ids, `None` means the provider is unconfigured, the call failed,
    /// or the provider reported a non-OK status; a resolved place without
    /// coordinates is still `Some` (hazard lookup is just skipped).
    pub async fn place_details(&self, place_id: &str) -> Result<Option<ResolvedPlace>> {
        if place_id.trim().is_empty() {
            return Err(Error::Validation("Place id must not be empty".to_string()));
        }

        if let Some(place) = self.catalog.resolve(place_id) {
            return Ok(Some(place));
        }

        let Some(provider) = &self.provider else {
            return Ok(None);
        };

        match provider.details(place_id).await {
            Ok(place) => Ok(place),
            Err(e) => {
                tracing::warn!("place details lookup failed: {}", e);
                Ok(None)
            }
        }
    }

    /// Resolve the best-known place for a coordinate pair
    pub async fn place_for_point(&self, point: LatLng) -> Result<Option<ResolvedPlace>> {
        point.validate()?;

        let Some(provider) = &self.provider else {
            return Ok(None);
        };

        match provider.reverse_geocode(point).await {
            Ok(place) => Ok(place),
            Err(Error::ProviderUnavailable(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
