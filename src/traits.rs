//! Collaborator seams for the routing engine.
//!
//! The public road router is an external network service; it is modeled as
//! a trait so tests can substitute deterministic implementations.

use crate::types::{Point, TransportMode};

/// Failure from the public road routing collaborator.
///
/// Always recoverable: the route composer falls back to campus-only or
/// direct-line routing and never surfaces this to the end user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// Transport-level failure: unreachable, timed out, malformed body.
    Unavailable(String),
    /// The service answered but produced no usable route.
    BadStatus(String),
}

/// Provides point-to-point routing over the public road network.
///
/// Implementations are treated as untrusted; callers must tolerate errors
/// and degenerate geometry.
pub trait RoadRouter {
    /// Requests an ordered point sequence from `start` to `end` for the
    /// given transport mode.
    fn route_between(
        &self,
        start: Point,
        end: Point,
        mode: TransportMode,
    ) -> Result<Vec<Point>, RouterError>;
}
