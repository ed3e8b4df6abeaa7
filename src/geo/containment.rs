//! Point-in-region containment
//!
//! The predicate behind hazard queries: does a boundary region contain a
//! query point? Circles use great-circle (haversine) distance; polygons
//! use ray casting with an explicit on-edge check so regions are closed
//! (points exactly on the edge are contained, which keeps behavior stable
//! for points near a hazard's edge).

use crate::constants::geo::EARTH_RADIUS_METERS;
use crate::geo::{Boundary, LatLng};
use std::f64::consts::PI;

/// Tolerance in degrees for the polygon on-edge check (~1 cm at the equator)
const EDGE_EPSILON_DEG: f64 = 1e-7;

/// Check whether a boundary region contains a point
pub fn contains(boundary: &Boundary, point: LatLng) -> bool {
    match boundary {
        Boundary::Circle {
            center,
            radius_meters,
        } => point_in_circle(point, *center, *radius_meters),
        Boundary::Polygon { vertices } => point_in_polygon(point, vertices),
    }
}

/// Calculate the great-circle distance between two points in meters
/// (haversine formula)
pub fn haversine_distance(p1: LatLng, p2: LatLng) -> f64 {
    let lat1 = p1.lat * PI / 180.0;
    let lat2 = p2.lat * PI / 180.0;
    let delta_lat = (p2.lat - p1.lat) * PI / 180.0;
    let delta_lng = (p2.lng - p1.lng) * PI / 180.0;

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Check if a point is within a circle (closed: the boundary itself counts)
///
/// Returns false for non-positive radii rather than treating them as a
/// degenerate point region.
pub fn point_in_circle(point: LatLng, center: LatLng, radius_meters: f64) -> bool {
    if radius_meters <= 0.0 {
        return false;
    }
    haversine_distance(point, center) <= radius_meters
}

/// Check if a point is inside or on the edge of a simple polygon
///
/// Ray casting over (lng, lat) treated as planar coordinates; fine at the
/// regional scale the store operates on. Vertex order does not matter.
pub fn point_in_polygon(point: LatLng, vertices: &[LatLng]) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    // Closed-region semantics: edge points are contained
    for i in 0..vertices.len() {
        let j = (i + vertices.len() - 1) % vertices.len();
        if point_on_segment(point, vertices[j], vertices[i]) {
            return true;
        }
    }

    let x = point.lng;
    let y = point.lat;
    let mut inside = false;

    for i in 0..vertices.len() {
        let j = (i + vertices.len() - 1) % vertices.len();
        let (xi, yi) = (vertices[i].lng, vertices[i].lat);
        let (xj, yj) = (vertices[j].lng, vertices[j].lat);

        if (yi > y) != (yj > y) {
            let slope = (xj - xi) / (yj - yi);
            let intersect_x = slope * (y - yi) + xi;
            if intersect_x > x {
                inside = !inside;
            }
        }
    }

    inside
}

/// Check whether a point lies on the segment between two vertices
fn point_on_segment(p: LatLng, a: LatLng, b: LatLng) -> bool {
    let cross = (b.lng - a.lng) * (p.lat - a.lat) - (b.lat - a.lat) * (p.lng - a.lng);
    if cross.abs() > EDGE_EPSILON_DEG {
        return false;
    }
    let dot = (p.lng - a.lng) * (b.lng - a.lng) + (p.lat - a.lat) * (b.lat - a.lat);
    if dot < -EDGE_EPSILON_DEG {
        return false;
    }
    let len_sq = (b.lng - a.lng).powi(2) + (b.lat - a.lat).powi(2);
    dot <= len_sq + EDGE_EPSILON_DEG
}
