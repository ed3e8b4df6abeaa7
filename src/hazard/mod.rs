//! Hazard domain model
//!
//! Hazards are stored safety-relevant conditions with a severity, a type,
//! advice tips, and one or more geographic presentations (regions in which
//! the hazard is active). Severity and type are closed enumerations:
//! unrecognized wire values fail deserialization instead of being accepted.

pub mod client;
pub mod search;
pub mod store;

use crate::geo::{Boundary, LatLng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hazard severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Sort rank, most severe first
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Hazard categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardKind {
    Animal,
    Event,
    Weather,
    Disease,
}

impl std::fmt::Display for HazardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Animal => write!(f, "animal"),
            Self::Event => write!(f, "event"),
            Self::Weather => write!(f, "weather"),
            Self::Disease => write!(f, "disease"),
        }
    }
}

/// Kinds of named locations a presentation may reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationKind {
    #[serde(rename = "National Park")]
    NationalPark,
    Region,
}

/// Advice attached to a hazard; owned by exactly one hazard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

/// A named place of interest a presentation may reference for display
///
/// Locations have a lifecycle independent of hazards: many presentations
/// may reference the same location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSummary {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LocationKind,
    pub coordinates: LatLng,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A geographic region in which a hazard is active; owned by exactly one
/// hazard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    pub id: Uuid,
    pub boundary: Boundary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationSummary>,
}

/// A stored hazard with its tips and presentations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub id: Uuid,
    pub name: String,
    pub severity: Severity,
    #[serde(rename = "type")]
    pub kind: HazardKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tips: Vec<Tip>,
    #[serde(default)]
    pub presentations: Vec<Presentation>,
}

/// Payload for creating a hazard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHazard {
    pub name: String,
    pub severity: Severity,
    #[serde(rename = "type")]
    pub kind: HazardKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tips: Vec<NewTip>,
}

/// Tip payload inside a hazard creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTip {
    pub name: String,
    pub description: String,
}

/// Payload for registering a named location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLocation {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LocationKind,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Payload for adding a presentation to a hazard
///
/// The wire shape mirrors the write API: a circle center plus radius; the
/// store materializes the boundary from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPresentation {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_serialization() {
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
        let parsed: Severity = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, Severity::Medium);
    }

    #[test]
    fn test_unknown_severity_rejected() {
        let result: Result<Severity, _> = serde_json::from_str("\"extreme\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result: Result<HazardKind, _> = serde_json::from_str("\"volcano\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_severity_rank_order() {
        assert!(Severity::High.rank() < Severity::Medium.rank());
        assert!(Severity::Medium.rank() < Severity::Low.rank());
    }

    #[test]
    fn test_location_kind_wire_names() {
        let json = serde_json::to_string(&LocationKind::NationalPark).unwrap();
        assert_eq!(json, "\"National Park\"");
    }

    #[test]
    fn test_hazard_roundtrip() {
        let hazard = Hazard {
            id: Uuid::new_v4(),
            name: "Bear".to_string(),
            severity: Severity::High,
            kind: HazardKind::Animal,
            description: Some("Black bears active in the area.".to_string()),
            tips: vec![Tip {
                id: Uuid::new_v4(),
                name: "Bear Spray".to_string(),
                description: "Carry bear spray at all times.".to_string(),
            }],
            presentations: vec![],
        };

        let json = serde_json::to_string(&hazard).unwrap();
        assert!(json.contains("\"type\":\"animal\""));

        let parsed: Hazard = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, hazard);
    }

    #[test]
    fn test_hazard_optional_fields_omitted() {
        let hazard = Hazard {
            id: Uuid::new_v4(),
            name: "Avalanche".to_string(),
            severity: Severity::Medium,
            kind: HazardKind::Weather,
            description: None,
            tips: vec![],
            presentations: vec![],
        };

        let json = serde_json::to_string(&hazard).unwrap();
        assert!(!json.contains("description"));
    }
}
