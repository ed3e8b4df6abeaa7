//! Hazard storage
//!
//! A file-backed store for hazards and named locations. The whole data set
//! is held in memory and persisted as JSON in the XDG data directory
//! (~/.local/share/trail-watch/) or at an explicit path; the hazard set is
//! presumed small, so point queries are a linear scan over presentations.

use crate::config::defaults::{APP_DIR_NAME, DEFAULT_STORE_FILE};
use crate::constants::search::{DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT};
use crate::error::{Error, Result};
use crate::geo::{Boundary, LatLng};
use crate::hazard::search::rank_by_name;
use crate::hazard::{
    Hazard, LocationSummary, NewHazard, NewLocation, NewPresentation, Presentation, Tip,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// On-disk snapshot of the store
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    saved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    locations: Vec<LocationSummary>,
    #[serde(default)]
    hazards: Vec<Hazard>,
}

/// Hazard store manager
#[derive(Debug)]
pub struct HazardStore {
    hazards: Vec<Hazard>,
    locations: Vec<LocationSummary>,
    path: Option<PathBuf>,
}

impl HazardStore {
    /// Get the data directory path
    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Store("Could not determine data directory".to_string()))
    }

    /// Get the default store file path
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join(DEFAULT_STORE_FILE))
    }

    /// Load the store from the default path
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path()?)
    }

    /// Load the store from a specific path
    ///
    /// A missing file is an empty store, not an error.
    pub fn load_from(path: PathBuf) -> Result<Self> {
        let document = if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| Error::Store(format!("Failed to read store file: {}", e)))?;

            serde_json::from_str::<StoreDocument>(&content)
                .map_err(|e| Error::Store(format!("Failed to parse store file: {}", e)))?
        } else {
            StoreDocument::default()
        };

        Ok(Self {
            hazards: document.hazards,
            locations: document.locations,
            path: Some(path),
        })
    }

    /// Create an in-memory store that is never persisted
    pub fn in_memory() -> Self {
        Self {
            hazards: Vec::new(),
            locations: Vec::new(),
            path: None,
        }
    }

    /// Save the store to its path (no-op for in-memory stores)
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Store(format!("Failed to create store directory: {}", e)))?;
        }

        let document = StoreDocument {
            saved_at: Some(Utc::now()),
            locations: self.locations.clone(),
            hazards: self.hazards.clone(),
        };

        let content = serde_json::to_string_pretty(&document)
            .map_err(|e| Error::Store(format!("Failed to serialize store: {}", e)))?;

        fs::write(path, content)
            .map_err(|e| Error::Store(format!("Failed to write store file: {}", e)))?;

        Ok(())
    }

    /// Insert a new hazard
    ///
    /// Hazard names are unique; inline tips become owned `Tip` records.
    pub fn insert(&mut self, new: NewHazard) -> Result<&Hazard> {
        if new.name.trim().is_empty() {
            return Err(Error::Validation("Hazard name must not be empty".to_string()));
        }
        if self
            .hazards
            .iter()
            .any(|h| h.name.eq_ignore_ascii_case(&new.name))
        {
            return Err(Error::Validation(format!(
                "A hazard named {:?} already exists",
                new.name
            )));
        }

        let tips = new
            .tips
            .into_iter()
            .map(|tip| Tip {
                id: Uuid::new_v4(),
                name: tip.name,
                description: tip.description,
            })
            .collect();

        let hazard = Hazard {
            id: Uuid::new_v4(),
            name: new.name,
            severity: new.severity,
            kind: new.kind,
            description: new.description,
            tips,
            presentations: Vec::new(),
        };

        self.hazards.push(hazard);
        Ok(self.hazards.last().expect("just pushed"))
    }

    /// Register a named location that presentations may reference
    pub fn add_location(&mut self, location: LocationSummary) -> Result<()> {
        location.coordinates.validate()?;
        if self.locations.iter().any(|l| l.id == location.id) {
            return Err(Error::Validation(format!(
                "Location {} already exists",
                location.id
            )));
        }
        self.locations.push(location);
        Ok(())
    }

    /// Create a named location from a request payload
    ///
    /// Location names are unique, like hazard names.
    pub fn create_location(&mut self, new: NewLocation) -> Result<&LocationSummary> {
        if new.name.trim().is_empty() {
            return Err(Error::Validation(
                "Location name must not be empty".to_string(),
            ));
        }
        if self
            .locations
            .iter()
            .any(|l| l.name.eq_ignore_ascii_case(&new.name))
        {
            return Err(Error::Validation(format!(
                "A location named {:?} already exists",
                new.name
            )));
        }

        let coordinates = LatLng::new(new.latitude, new.longitude);
        coordinates.validate()?;

        let location = LocationSummary {
            id: Uuid::new_v4(),
            name: new.name,
            kind: new.kind,
            coordinates,
            description: new.description,
            image: new.image,
        };

        self.locations.push(location);
        Ok(self.locations.last().expect("just pushed"))
    }

    /// Remove a location by id, returning it if present
    pub fn remove_location(&mut self, id: Uuid) -> Option<LocationSummary> {
        let index = self.locations.iter().position(|l| l.id == id)?;
        Some(self.locations.remove(index))
    }

    /// Add a circular presentation to an existing hazard
    pub fn add_presentation(
        &mut self,
        hazard_id: Uuid,
        new: NewPresentation,
    ) -> Result<Presentation> {
        let center = LatLng::new(new.latitude, new.longitude);
        let boundary = Boundary::circle(center, new.radius_meters);
        boundary.validate()?;

        let location = match new.location_id {
            Some(location_id) => Some(
                self.locations
                    .iter()
                    .find(|l| l.id == location_id)
                    .cloned()
                    .ok_or_else(|| {
                        Error::Validation(format!("Unknown location: {}", location_id))
                    })?,
            ),
            None => None,
        };

        let hazard = self
            .hazards
            .iter_mut()
            .find(|h| h.id == hazard_id)
            .ok_or_else(|| Error::Validation(format!("Unknown hazard: {}", hazard_id)))?;

        let presentation = Presentation {
            id: Uuid::new_v4(),
            boundary,
            notes: new.notes,
            location,
        };

        hazard.presentations.push(presentation.clone());
        Ok(presentation)
    }

    /// Remove a hazard by id, returning it if present
    pub fn remove(&mut self, id: Uuid) -> Option<Hazard> {
        let index = self.hazards.iter().position(|h| h.id == id)?;
        Some(self.hazards.remove(index))
    }

    /// Remove a single presentation from a hazard
    pub fn remove_presentation(
        &mut self,
        hazard_id: Uuid,
        presentation_id: Uuid,
    ) -> Option<Presentation> {
        let hazard = self.hazards.iter_mut().find(|h| h.id == hazard_id)?;
        let index = hazard
            .presentations
            .iter()
            .position(|p| p.id == presentation_id)?;
        Some(hazard.presentations.remove(index))
    }

    /// Get a hazard by id
    pub fn get(&self, id: Uuid) -> Option<&Hazard> {
        self.hazards.iter().find(|h| h.id == id)
    }

    /// Get a location by id
    pub fn get_location(&self, id: Uuid) -> Option<&LocationSummary> {
        self.locations.iter().find(|l| l.id == id)
    }

    /// Query hazards whose presentations contain a point
    ///
    /// Coordinates are validated before any scan. A matching hazard is
    /// returned with all of its presentations, not just the containing
    /// ones, so callers can show full context. Presentations with invalid
    /// boundary data are skipped rather than failing the whole query.
    /// Results are ordered by hazard name.
    pub fn query_by_point(&self, point: LatLng) -> Result<Vec<Hazard>> {
        point.validate()?;

        let mut matched: Vec<Hazard> = self
            .hazards
            .iter()
            .filter(|hazard| {
                hazard
                    .presentations
                    .iter()
                    .any(|p| p.boundary.validate().is_ok() && p.boundary.contains(point))
            })
            .cloned()
            .collect();

        matched.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(matched)
    }

    /// Fuzzy name search over hazards
    pub fn search_hazards(&self, query: &str, limit: Option<usize>) -> Result<Vec<&Hazard>> {
        let limit = effective_limit(limit)?;
        Ok(rank_by_name(&self.hazards, |h| h.name.as_str(), query, limit))
    }

    /// Fuzzy name search over locations
    pub fn search_locations(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> Result<Vec<&LocationSummary>> {
        let limit = effective_limit(limit)?;
        Ok(rank_by_name(
            &self.locations,
            |l| l.name.as_str(),
            query,
            limit,
        ))
    }

    /// Number of stored hazards
    pub fn len(&self) -> usize {
        self.hazards.len()
    }

    /// Whether the store holds no hazards
    pub fn is_empty(&self) -> bool {
        self.hazards.is_empty()
    }
}

fn effective_limit(limit: Option<usize>) -> Result<usize> {
    match limit {
        None => Ok(DEFAULT_SEARCH_LIMIT),
        Some(0) => Err(Error::Validation(
            "Limit must be greater than zero".to_string(),
        )),
        Some(n) => Ok(n.min(MAX_SEARCH_LIMIT)),
    }
}
