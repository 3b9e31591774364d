//! Campus path graph: construction from path features and read-only access.
//!
//! The graph is built once per feature snapshot and never mutated afterwards,
//! so it can be shared across concurrent route computations. Rebuilds produce
//! a fresh graph; callers swap the reference wholesale.

use std::collections::HashMap;

use tracing::debug;

use crate::geo;
use crate::types::{PathFeature, Point};

/// Opaque identifier of a graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

/// A unique point in the campus path network after coordinate deduplication.
#[derive(Debug, Clone)]
pub struct GraphNode {
    pub id: NodeId,
    pub position: Point,
    neighbors: Vec<(NodeId, f64)>,
}

impl GraphNode {
    /// Adjacent nodes with edge costs in meters.
    pub fn neighbors(&self) -> &[(NodeId, f64)] {
        &self.neighbors
    }
}

/// Undirected weighted graph over deduplicated path vertices.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: HashMap<NodeId, GraphNode>,
    key_to_id: HashMap<String, NodeId>,
}

impl Graph {
    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.get(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Undirected edge count.
    pub fn edge_count(&self) -> usize {
        self.nodes
            .values()
            .map(|node| node.neighbors.len())
            .sum::<usize>()
            / 2
    }

    /// Looks up the node occupying a position, using the same quantization
    /// that merged coincident vertices at build time.
    pub fn node_at(&self, position: Point) -> Option<NodeId> {
        self.key_to_id.get(&quantized_key(position)).copied()
    }

    /// Resolves the node for a position, creating it when unseen.
    fn node_id_for(&mut self, position: Point) -> NodeId {
        let key = quantized_key(position);
        if let Some(&id) = self.key_to_id.get(&key) {
            return id;
        }
        let id = NodeId(self.nodes.len() as u32);
        self.key_to_id.insert(key, id);
        self.nodes.insert(
            id,
            GraphNode {
                id,
                position,
                neighbors: Vec::new(),
            },
        );
        id
    }

    /// Adds an undirected edge unless it already exists. The dedup check is a
    /// linear scan over the neighbor list; node degree stays small on campus
    /// path data.
    fn add_edge(&mut self, a: NodeId, b: NodeId, cost: f64) {
        if let Some(node) = self.nodes.get_mut(&a) {
            if !node.neighbors.iter().any(|(id, _)| *id == b) {
                node.neighbors.push((b, cost));
            }
        }
        if let Some(node) = self.nodes.get_mut(&b) {
            if !node.neighbors.iter().any(|(id, _)| *id == a) {
                node.neighbors.push((a, cost));
            }
        }
    }
}

/// Coordinate key at 6 decimal places (~0.11 m), so points shared by
/// different features collapse onto one node.
fn quantized_key(p: Point) -> String {
    format!("{:.6},{:.6}", p.lat, p.lng)
}

/// Builds the campus graph from a feature snapshot.
///
/// Features with fewer than two usable vertices and invalid coordinates are
/// skipped; malformed input never aborts the build.
pub fn build_graph(features: &[PathFeature]) -> Graph {
    let mut graph = Graph::default();

    for feature in features {
        if !feature.is_routable() {
            debug!("skipping path feature with fewer than two usable vertices");
            continue;
        }

        let mut prev: Option<NodeId> = None;
        for &point in feature.points() {
            if !point.is_valid() {
                continue;
            }
            let id = graph.node_id_for(point);
            if let Some(prev_id) = prev {
                if prev_id != id {
                    let prev_pos = graph.nodes[&prev_id].position;
                    graph.add_edge(prev_id, id, geo::distance(prev_pos, point));
                }
            }
            prev = Some(id);
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built campus graph"
    );
    graph
}
