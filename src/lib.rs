//! trail-watch: Location Hazard Lookup
//!
//! A library, CLI tool, and web server for finding outdoor hazards at a
//! place or coordinate in Colorado.
//!
//! ## Features
//!
//! - Place suggestions with a built-in landmark catalog fallback
//! - Great-circle and polygon containment for hazard coverage areas
//! - File-backed hazard store with fuzzy name search
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use trail_watch::geo::{Boundary, LatLng};
//! use trail_watch::hazard::store::HazardStore;
//! use trail_watch::hazard::{HazardKind, NewHazard, NewPresentation, Severity};
//!
//! let mut store = HazardStore::in_memory();
//! let id = store
//!     .insert(NewHazard {
//!         name: "Bear".to_string(),
//!         severity: Severity::High,
//!         kind: HazardKind::Animal,
//!         description: None,
//!         tips: vec![],
//!     })
//!     .unwrap()
//!     .id;
//!
//! // Cover a 5 km circle around the Rocky Mountain National Park entrance
//! store
//!     .add_presentation(
//!         id,
//!         NewPresentation {
//!             latitude: 40.3428,
//!             longitude: -105.6836,
//!             radius_meters: 5000.0,
//!             notes: None,
//!             location_id: None,
//!         },
//!     )
//!     .unwrap();
//!
//! let hits = store.query_by_point(LatLng::new(40.3430, -105.6840)).unwrap();
//! assert_eq!(hits[0].name, "Bear");
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod geo;
pub mod hazard;
pub mod places;
pub mod present;
pub mod server;
pub mod share;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use geo::{Boundary, LatLng};
pub use hazard::{Hazard, HazardKind, Severity};
pub use places::{ResolvedPlace, Suggestion};
