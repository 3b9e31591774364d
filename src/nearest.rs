//! Nearest-node and nearest-vertex queries over the campus network.
//!
//! All lookups are linear scans; the graph stays in the tens-to-thousands
//! of nodes, well below where an index would pay off.

use crate::geo;
use crate::graph::{Graph, NodeId};
use crate::types::{PathFeature, Point};

/// The closest vertex of a path feature to some query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestVertex {
    /// Index of the vertex within the feature.
    pub index: usize,
    pub point: Point,
    pub distance_m: f64,
}

/// A feature matched by [`nearest_private_path`], with its closest vertex.
#[derive(Debug, Clone, Copy)]
pub struct PathMatch<'a> {
    pub feature: &'a PathFeature,
    pub vertex: NearestVertex,
}

/// Finds the graph node closest to `p`.
///
/// With `max_distance` set, a best match farther than the cap yields `None`;
/// use a cap (~100 m) when snapping raw GPS fixes so a user nowhere near the
/// campus grid is not silently teleported onto it, and `None` for points
/// already known to be near the network.
pub fn nearest_node(p: Point, graph: &Graph, max_distance: Option<f64>) -> Option<NodeId> {
    let mut best: Option<(NodeId, f64)> = None;
    for node in graph.nodes() {
        let dist = geo::distance(p, node.position);
        if best.is_none_or(|(_, d)| dist < d) {
            best = Some((node.id, dist));
        }
    }

    match best {
        Some((id, dist)) if max_distance.is_none_or(|cap| dist <= cap) => Some(id),
        _ => None,
    }
}

/// Finds the feature vertex closest to `p`.
///
/// Deliberately compares against vertices rather than projecting onto
/// segments; campus features are densely digitized and the downstream
/// consumers snap to graph nodes anyway.
pub fn nearest_point_on_feature(p: Point, feature: &PathFeature) -> Option<NearestVertex> {
    let mut best: Option<NearestVertex> = None;
    for (index, &point) in feature.points().iter().enumerate() {
        let distance_m = geo::distance(p, point);
        if best.is_none_or(|b| distance_m < b.distance_m) {
            best = Some(NearestVertex {
                index,
                point,
                distance_m,
            });
        }
    }
    best
}

/// Scans all features for the one whose closest vertex is nearest to `p`,
/// within `threshold` meters. Decides whether a destination is approached
/// via the private campus network at all.
pub fn nearest_private_path<'a>(
    p: Point,
    features: &'a [PathFeature],
    threshold: f64,
) -> Option<PathMatch<'a>> {
    let mut best: Option<PathMatch<'a>> = None;
    for feature in features {
        if let Some(vertex) = nearest_point_on_feature(p, feature) {
            if best.is_none_or(|b| vertex.distance_m < b.vertex.distance_m) {
                best = Some(PathMatch { feature, vertex });
            }
        }
    }

    best.filter(|m| m.vertex.distance_m <= threshold)
}
