//! Core value types shared across the engine.

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True when the coordinate is finite and within WGS84 bounds.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// One campus path segment: the ordered vertex sequence of a stored
/// GeoJSON LineString. Read-only input to graph construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathFeature {
    points: Vec<Point>,
}

impl PathFeature {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn first_point(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// A feature needs at least two valid vertices to contribute edges.
    pub fn is_routable(&self) -> bool {
        self.points.iter().filter(|p| p.is_valid()).count() >= 2
    }
}

/// How the user is moving; selects the ETA speed and the public router
/// profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Walking,
    Riding,
    Driving,
}

impl TransportMode {
    /// Profile name understood by OSRM-compatible routers.
    pub fn osrm_profile(self) -> &'static str {
        match self {
            TransportMode::Walking => "walking",
            TransportMode::Riding => "cycling",
            TransportMode::Driving => "driving",
        }
    }
}
