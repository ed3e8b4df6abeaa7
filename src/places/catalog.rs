//! Built-in landmark catalog
//!
//! A small fixed set of named Colorado landmarks used when no external
//! places provider is configured or the provider is unreachable. Place
//! ids are prefixed with `mock-` so they can never collide with real
//! provider ids, and resolve locally without any network call.

use crate::constants::suggest::{MAX_SUGGESTIONS, MOCK_PLACE_ID_PREFIX};
use crate::geo::LatLng;
use crate::places::{ResolvedPlace, Suggestion};

/// A catalog landmark
#[derive(Debug, Clone)]
pub struct Landmark {
    pub name: &'static str,
    pub description: &'static str,
    pub coordinates: LatLng,
    pub types: &'static [&'static str],
}

const LANDMARKS: &[Landmark] = &[
    Landmark {
        name: "Rocky Mountain National Park",
        description: "Alpine trails northwest of Estes Park",
        coordinates: LatLng {
            lat: 40.3428,
            lng: -105.6836,
        },
        types: &["park", "point_of_interest"],
    },
    Landmark {
        name: "Garden of the Gods",
        description: "Sandstone formations in Colorado Springs",
        coordinates: LatLng {
            lat: 38.8784,
            lng: -104.8698,
        },
        types: &["park", "point_of_interest"],
    },
    Landmark {
        name: "Great Sand Dunes National Park",
        description: "Tallest dunes in North America",
        coordinates: LatLng {
            lat: 37.7916,
            lng: -105.5943,
        },
        types: &["park", "point_of_interest"],
    },
    Landmark {
        name: "Mesa Verde National Park",
        description: "Ancestral Puebloan cliff dwellings",
        coordinates: LatLng {
            lat: 37.2309,
            lng: -108.4618,
        },
        types: &["park", "point_of_interest"],
    },
    Landmark {
        name: "Maroon Bells",
        description: "Twin peaks near Aspen",
        coordinates: LatLng {
            lat: 39.0708,
            lng: -106.9390,
        },
        types: &["natural_feature", "point_of_interest"],
    },
];

/// Fallback catalog of known landmarks
#[derive(Debug, Clone, Default)]
pub struct LandmarkCatalog;

impl LandmarkCatalog {
    /// Create a new catalog
    pub fn new() -> Self {
        Self
    }

    /// All landmarks in the catalog
    pub fn landmarks(&self) -> &'static [Landmark] {
        LANDMARKS
    }

    /// Suggest landmarks whose name contains the query (case-insensitive)
    ///
    /// Returns at most five matches, formatted "{name} — {description}".
    pub fn suggest(&self, query: &str) -> Vec<Suggestion> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        LANDMARKS
            .iter()
            .filter(|landmark| landmark.name.to_lowercase().contains(&needle))
            .take(MAX_SUGGESTIONS)
            .map(|landmark| Suggestion {
                description: format!("{} — {}", landmark.name, landmark.description),
                place_id: Self::place_id(landmark.name),
                types: landmark.types.iter().map(|t| t.to_string()).collect(),
            })
            .collect()
    }

    /// Resolve a catalog place id, if it names a landmark
    pub fn resolve(&self, place_id: &str) -> Option<ResolvedPlace> {
        let slug = place_id.strip_prefix(MOCK_PLACE_ID_PREFIX)?;

        LANDMARKS
            .iter()
            .find(|landmark| slugify(landmark.name) == slug)
            .map(|landmark| ResolvedPlace {
                place_id: place_id.to_string(),
                name: landmark.name.to_string(),
                formatted_address: Some(format!("{}, Colorado, USA", landmark.name)),
                coordinates: Some(landmark.coordinates),
            })
    }

    /// The synthetic place id for a landmark name
    pub fn place_id(name: &str) -> String {
        format!("{}{}", MOCK_PLACE_ID_PREFIX, slugify(name))
    }
}

/// Lowercase, with non-alphanumeric runs collapsed to single hyphens
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
