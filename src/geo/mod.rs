//! Geographic primitives
//!
//! Coordinates, boundary regions, and the point-in-region containment
//! predicate used by hazard queries.

pub mod containment;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A geographic coordinate (latitude, longitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Create new coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validate that coordinates are within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> Result<()> {
        if self.lat < -90.0 || self.lat > 90.0 {
            return Err(Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if self.lng < -180.0 || self.lng > 180.0 {
            return Err(Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }
}

/// A geographic region in which a hazard presents
///
/// Either a circle (center + radius) or a simple polygon. Vertex order of
/// polygons does not affect containment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Boundary {
    Circle { center: LatLng, radius_meters: f64 },
    Polygon { vertices: Vec<LatLng> },
}

impl Boundary {
    /// Create a circular boundary
    pub fn circle(center: LatLng, radius_meters: f64) -> Self {
        Self::Circle {
            center,
            radius_meters,
        }
    }

    /// Create a polygonal boundary
    pub fn polygon(vertices: Vec<LatLng>) -> Self {
        Self::Polygon { vertices }
    }

    /// Validate the region: positive radius, or a polygon with at least
    /// three distinct vertices
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Circle {
                center,
                radius_meters,
            } => {
                center.validate()?;
                if *radius_meters <= 0.0 {
                    return Err(Error::InvalidBoundary(format!(
                        "Radius must be greater than zero, got {}",
                        radius_meters
                    )));
                }
                Ok(())
            }
            Self::Polygon { vertices } => {
                let mut distinct: Vec<LatLng> = Vec::new();
                for v in vertices {
                    v.validate()?;
                    if !distinct.contains(v) {
                        distinct.push(*v);
                    }
                }
                if distinct.len() < 3 {
                    return Err(Error::InvalidBoundary(format!(
                        "Polygon requires at least three distinct vertices, got {}",
                        distinct.len()
                    )));
                }
                Ok(())
            }
        }
    }

    /// Check whether this region contains a point (closed semantics:
    /// points on the edge are inside)
    pub fn contains(&self, point: LatLng) -> bool {
        containment::contains(self, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        assert!(LatLng::new(40.3428, -105.6836).validate().is_ok());
        assert!(LatLng::new(-90.0, 180.0).validate().is_ok());
        assert!(LatLng::new(90.0, -180.0).validate().is_ok());
    }

    #[test]
    fn test_invalid_latitude() {
        let result = LatLng::new(90.1, 0.0).validate();
        assert!(matches!(
            result,
            Err(crate::error::Error::InvalidCoordinates(_))
        ));
    }

    #[test]
    fn test_invalid_longitude() {
        let result = LatLng::new(0.0, -180.5).validate();
        assert!(matches!(
            result,
            Err(crate::error::Error::InvalidCoordinates(_))
        ));
    }

    #[test]
    fn test_circle_validation() {
        let center = LatLng::new(40.0, -105.0);
        assert!(Boundary::circle(center, 100.0).validate().is_ok());
        assert!(Boundary::circle(center, 0.0).validate().is_err());
        assert!(Boundary::circle(center, -5.0).validate().is_err());
    }

    #[test]
    fn test_polygon_validation() {
        let triangle = Boundary::polygon(vec![
            LatLng::new(40.0, -105.0),
            LatLng::new(40.1, -105.0),
            LatLng::new(40.0, -105.1),
        ]);
        assert!(triangle.validate().is_ok());

        let two_points = Boundary::polygon(vec![
            LatLng::new(40.0, -105.0),
            LatLng::new(40.1, -105.0),
        ]);
        assert!(two_points.validate().is_err());

        // Repeated vertices collapse to fewer than three distinct points
        let degenerate = Boundary::polygon(vec![
            LatLng::new(40.0, -105.0),
            LatLng::new(40.0, -105.0),
            LatLng::new(40.1, -105.0),
        ]);
        assert!(degenerate.validate().is_err());
    }

    #[test]
    fn test_boundary_serialization() {
        let circle = Boundary::circle(LatLng::new(40.34, -105.68), 5000.0);
        let json = serde_json::to_string(&circle).unwrap();
        assert!(json.contains("\"shape\":\"circle\""));

        let parsed: Boundary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, circle);
    }
}
