// src/models/geometry.rs
// Geographic types for working with ship waypoint paths

use std::error::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

/// An ordered sequence of waypoints, fixed for the lifetime of a voyage.
/// Always holds at least one point.
#[derive(Debug, Clone)]
pub struct ShipPath {
    points: Vec<LngLat>,
}

impl ShipPath {
    pub fn new(points: Vec<LngLat>) -> Result<Self, Box<dyn Error>> {
        if points.is_empty() {
            return Err("ship path needs at least one waypoint".into());
        }
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[LngLat] {
        &self.points
    }

    pub fn first(&self) -> LngLat {
        self.points[0]
    }

    pub fn last(&self) -> LngLat {
        self.points[self.points.len() - 1]
    }

    /// Linear interpolation along the segment between waypoint
    /// `segment_index` and the next one. Past the last segment the final
    /// waypoint is returned verbatim.
    pub fn position_at(&self, segment_index: usize, progress: f64) -> LngLat {
        if segment_index >= self.points.len() - 1 {
            return self.last();
        }

        let start = self.points[segment_index];
        let end = self.points[segment_index + 1];

        LngLat {
            lng: start.lng + (end.lng - start.lng) * progress,
            lat: start.lat + (end.lat - start.lat) * progress,
        }
    }
}
