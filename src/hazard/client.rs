//! Hazard API client
//!
//! Talks to the hazard backend over HTTP. Query coordinates are validated
//! before any request goes out, and a backend failure is reported as a
//! distinct "hazards unavailable" condition so callers never confuse it
//! with an empty result set.

use crate::error::{Error, Result};
use crate::geo::LatLng;
use crate::hazard::{Hazard, NewHazard, NewPresentation, Presentation};
use uuid::Uuid;

/// Client for the hazard backend
#[derive(Debug, Clone)]
pub struct HazardClient {
    client: reqwest::Client,
    base_url: String,
    admin_token: Option<String>,
}

impl HazardClient {
    /// Create a client for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: crate::places::shared_client(),
            base_url: trim_trailing_slash(base_url.into()),
            admin_token: None,
        }
    }

    /// Attach an admin bearer token for write endpoints
    pub fn with_admin_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.admin_token = if token.is_empty() { None } else { Some(token) };
        self
    }

    /// Fetch all hazards whose presentations contain the given point
    ///
    /// An empty response array is a normal outcome (`Ok(vec![])`), never
    /// an error.
    pub async fn query_by_point(&self, lat: f64, lng: f64) -> Result<Vec<Hazard>> {
        LatLng::new(lat, lng).validate()?;

        let url = format!(
            "{}/hazards/?latitude={}&longitude={}",
            self.base_url, lat, lng
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::HazardLookup(format!("Hazard request failed: {}", e)))?;

        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::HazardLookup(message));
        }

        response
            .json()
            .await
            .map_err(|e| Error::HazardLookup(format!("Failed to parse hazard response: {}", e)))
    }

    /// Create a hazard (admin only)
    pub async fn create_hazard(&self, payload: &NewHazard) -> Result<Hazard> {
        let url = format!("{}/hazards", self.base_url);
        let mut request = self.client.post(&url).json(payload);
        if let Some(token) = &self.admin_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::HazardLookup(format!("Hazard create failed: {}", e)))?;

        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::HazardLookup(message));
        }

        response
            .json()
            .await
            .map_err(|e| Error::HazardLookup(format!("Failed to parse hazard response: {}", e)))
    }

    /// Add a presentation to a hazard (admin only)
    pub async fn add_presentation(
        &self,
        hazard_id: Uuid,
        payload: &NewPresentation,
    ) -> Result<Presentation> {
        let url = format!("{}/hazards/{}/presentations", self.base_url, hazard_id);
        let mut request = self.client.post(&url).json(payload);
        if let Some(token) = &self.admin_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::HazardLookup(format!("Presentation create failed: {}", e)))?;

        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::HazardLookup(message));
        }

        response.json().await.map_err(|e| {
            Error::HazardLookup(format!("Failed to parse presentation response: {}", e))
        })
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
