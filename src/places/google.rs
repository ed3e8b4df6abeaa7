//! Google Maps places provider
//!
//! Web-service client for the Places autocomplete, Places details, and
//! Geocoding APIs. Suggestions are biased toward the Colorado bounding
//! rectangle and restricted to US results.
//!
//! Error mapping matters here: a transport failure means the provider is
//! unreachable (`ProviderUnavailable`, callers fall back to the landmark
//! catalog), while a non-OK API status other than `ZERO_RESULTS` is a
//! request failure (`PlaceLookup`). `ZERO_RESULTS` is an empty `Ok`.

use crate::constants::api::{GEOCODE_URL, PLACES_AUTOCOMPLETE_URL, PLACES_DETAILS_URL};
use crate::constants::geo::COLORADO_BOUNDS;
use crate::constants::suggest::MAX_SUGGESTIONS;
use crate::error::{Error, Result};
use crate::geo::LatLng;
use crate::places::{shared_client, PlaceProvider, ResolvedPlace, Suggestion};
use serde::Deserialize;

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Google Maps places provider
#[derive(Debug, Clone)]
pub struct GoogleMapsProvider {
    client: reqwest::Client,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct AutocompleteResponse {
    status: String,
    #[serde(default)]
    predictions: Vec<Prediction>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    place_id: Option<String>,
    #[serde(default)]
    types: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    status: String,
    result: Option<PlaceResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<PlaceResult>,
}

#[derive(Debug, Deserialize)]
struct PlaceResult {
    #[serde(default)]
    place_id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    formatted_address: Option<String>,
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Option<GeometryLocation>,
}

#[derive(Debug, Deserialize)]
struct GeometryLocation {
    lat: f64,
    lng: f64,
}

impl GoogleMapsProvider {
    /// Create a provider with the given API key
    ///
    /// Reuses the process-wide HTTP client.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: shared_client(),
            api_key: api_key.into(),
        }
    }

    /// Location bias parameter for the Colorado bounding rectangle
    fn location_bias() -> String {
        let (south, west, north, east) = COLORADO_BOUNDS;
        format!("rectangle:{},{}|{},{}", south, west, north, east)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::ProviderUnavailable(format!("Provider unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::PlaceLookup(format!(
                "Provider returned status: {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::PlaceLookup(format!("Failed to parse provider response: {}", e)))
    }

    fn resolved_place(result: PlaceResult) -> ResolvedPlace {
        let coordinates = result
            .geometry
            .and_then(|g| g.location)
            .map(|loc| LatLng::new(loc.lat, loc.lng));

        ResolvedPlace {
            place_id: result.place_id.unwrap_or_default(),
            name: result
                .name
                .or_else(|| result.formatted_address.clone())
                .unwrap_or_default(),
            formatted_address: result.formatted_address,
            coordinates,
        }
    }
}

impl PlaceProvider for GoogleMapsProvider {
    async fn predictions(&self, input: &str) -> Result<Vec<Suggestion>> {
        let url = format!(
            "{}?input={}&locationbias={}&components=country:us&key={}",
            PLACES_AUTOCOMPLETE_URL,
            urlencoding::encode(input),
            urlencoding::encode(&Self::location_bias()),
            self.api_key
        );

        let response: AutocompleteResponse = self.get_json(&url).await?;

        match response.status.as_str() {
            STATUS_OK => Ok(response
                .predictions
                .into_iter()
                .take(MAX_SUGGESTIONS)
                .map(|p| Suggestion {
                    description: p.description.unwrap_or_default(),
                    place_id: p.place_id.unwrap_or_default(),
                    types: p.types,
                })
                .collect()),
            STATUS_ZERO_RESULTS => Ok(Vec::new()),
            status => Err(Error::PlaceLookup(format!(
                "Autocomplete failed with status {}{}",
                status,
                response
                    .error_message
                    .map(|m| format!(": {}", m))
                    .unwrap_or_default()
            ))),
        }
    }

    async fn details(&self, place_id: &str) -> Result<Option<ResolvedPlace>> {
        let url = format!(
            "{}?place_id={}&fields=place_id,name,formatted_address,geometry&key={}",
            PLACES_DETAILS_URL,
            urlencoding::encode(place_id),
            self.api_key
        );

        let response: DetailsResponse = self.get_json(&url).await?;

        if response.status != STATUS_OK {
            return Ok(None);
        }

        Ok(response.result.map(Self::resolved_place))
    }

    async fn reverse_geocode(&self, point: LatLng) -> Result<Option<ResolvedPlace>> {
        point.validate()?;

        let url = format!(
            "{}?latlng={},{}&key={}",
            GEOCODE_URL, point.lat, point.lng, self.api_key
        );

        let response: GeocodeResponse = self.get_json(&url).await?;

        match response.status.as_str() {
            STATUS_OK => Ok(response.results.into_iter().next().map(Self::resolved_place)),
            STATUS_ZERO_RESULTS => Ok(None),
            status => Err(Error::PlaceLookup(format!(
                "Geocode failed with status {}",
                status
            ))),
        }
    }
}
