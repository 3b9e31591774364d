//! The routing engine: owns the campus graph and the road router.
//!
//! One explicitly constructed engine per campus dataset; there is no
//! ambient global state. The graph is immutable once built and shared via
//! `Arc`, so route computations can run concurrently while a rebuild swaps
//! in a replacement.

use std::sync::Arc;

use tracing::debug;

use crate::geo;
use crate::graph::{self, Graph, NodeId};
use crate::nearest;
use crate::route::{self, RouteKind, RouteOptions, RouteRequest, RouteResult};
use crate::traits::RoadRouter;
use crate::types::{PathFeature, Point};

/// A GPS fix as delivered by the positioning collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsFix {
    pub position: Point,
    pub accuracy_m: f64,
}

/// Map events with fixed, typed payloads.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    LocationUpdated { fix: GpsFix },
    MarkerDragged { marker_id: i64, position: Point },
    RouteRecomputed { kind: RouteKind, total_distance_m: f64 },
}

/// Recompute only after moving more than this.
const MIN_MOVEMENT_M: f64 = 2.0;

/// Or after the fix accuracy improves by more than this fraction.
const MIN_ACCURACY_GAIN: f64 = 0.30;

/// Debounce for the GPS fix stream: a new fix triggers a route
/// recomputation only when the user moved more than 2 m or the fix
/// accuracy improved by more than 30 %.
pub fn should_recompute(previous: Option<&GpsFix>, next: &GpsFix) -> bool {
    let Some(prev) = previous else {
        return true;
    };
    if geo::distance(prev.position, next.position) > MIN_MOVEMENT_M {
        return true;
    }
    prev.accuracy_m > 0.0 && (prev.accuracy_m - next.accuracy_m) / prev.accuracy_m > MIN_ACCURACY_GAIN
}

pub struct RoutingEngine<R: RoadRouter> {
    router: R,
    features: Vec<PathFeature>,
    graph: Arc<Graph>,
    options: RouteOptions,
}

impl<R: RoadRouter> RoutingEngine<R> {
    pub fn new(router: R, features: Vec<PathFeature>, options: RouteOptions) -> Self {
        let graph = Arc::new(graph::build_graph(&features));
        Self {
            router,
            features,
            graph,
            options,
        }
    }

    /// The current graph snapshot. Clones of this handle stay valid across
    /// rebuilds.
    pub fn graph(&self) -> Arc<Graph> {
        Arc::clone(&self.graph)
    }

    pub fn options(&self) -> &RouteOptions {
        &self.options
    }

    /// Replaces the feature snapshot and swaps in a freshly built graph.
    /// The old graph is never patched in place; in-flight computations keep
    /// reading it until they finish.
    pub fn rebuild(&mut self, features: Vec<PathFeature>) {
        self.features = features;
        self.graph = Arc::new(graph::build_graph(&self.features));
        debug!(nodes = self.graph.node_count(), "campus graph rebuilt");
    }

    /// Snaps a GPS fix onto the path network, rejecting fixes farther than
    /// the configured cap so a user nowhere near campus is not teleported
    /// onto it.
    pub fn snap_fix(&self, fix: &GpsFix) -> Option<NodeId> {
        nearest::nearest_node(fix.position, &self.graph, Some(self.options.gps_snap_max_m))
    }

    /// Computes a route for one request against the current graph.
    pub fn route(&self, request: &RouteRequest) -> RouteResult {
        route::compose_route(request, &self.graph, &self.features, &self.router, &self.options)
    }
}
