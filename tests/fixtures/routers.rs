//! Deterministic mock road routers.

use campus_router::traits::{RoadRouter, RouterError};
use campus_router::types::{Point, TransportMode};

/// Always answers with a fixed point sequence.
pub struct StaticRouter {
    pub segment: Vec<Point>,
}

impl RoadRouter for StaticRouter {
    fn route_between(
        &self,
        _start: Point,
        _end: Point,
        _mode: TransportMode,
    ) -> Result<Vec<Point>, RouterError> {
        Ok(self.segment.clone())
    }
}

/// Simulates an unreachable routing service.
pub struct OfflineRouter;

impl RoadRouter for OfflineRouter {
    fn route_between(
        &self,
        _start: Point,
        _end: Point,
        _mode: TransportMode,
    ) -> Result<Vec<Point>, RouterError> {
        Err(RouterError::Unavailable("connection refused".to_string()))
    }
}

/// Answers successfully but with degenerate geometry.
pub struct EmptyRouter;

impl RoadRouter for EmptyRouter {
    fn route_between(
        &self,
        _start: Point,
        _end: Point,
        _mode: TransportMode,
    ) -> Result<Vec<Point>, RouterError> {
        Ok(Vec::new())
    }
}
