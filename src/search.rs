//! A* shortest-path search over the campus graph.
//!
//! Search state (open heap, closed set, score maps) is owned by each call,
//! so concurrent route computations over a shared graph never interfere.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::{debug, warn};

use crate::geo;
use crate::graph::{Graph, NodeId};
use crate::types::Point;

/// The heuristic slightly underestimates the remaining distance so that
/// floating-point rounding in the haversine never tips it into
/// inadmissibility.
const HEURISTIC_SCALE: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Candidate {
    f_score: f64,
    node: NodeId,
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by f-score (reversed from standard Rust BinaryHeap).
        other
            .f_score
            .total_cmp(&self.f_score)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn heuristic(from: Point, goal: Point) -> f64 {
    HEURISTIC_SCALE * geo::distance(from, goal)
}

/// Searches for the cheapest path between two nodes, returning its point
/// sequence in start→goal order.
///
/// Returns `None` when either node is absent, the goal is unreachable, or
/// the iteration bound of `2 × node count` is hit; callers are expected to
/// fall back rather than fail.
pub fn find_path(start: NodeId, goal: NodeId, graph: &Graph) -> Option<Vec<Point>> {
    let start_node = graph.node(start)?;
    let goal_node = graph.node(goal)?;

    if start == goal {
        return Some(vec![start_node.position]);
    }

    let goal_pos = goal_node.position;

    let mut open = BinaryHeap::new();
    let mut closed: HashSet<NodeId> = HashSet::new();
    let mut g_score: HashMap<NodeId, f64> = HashMap::new();
    let mut came_from: HashMap<NodeId, NodeId> = HashMap::new();

    g_score.insert(start, 0.0);
    open.push(Candidate {
        f_score: heuristic(start_node.position, goal_pos),
        node: start,
    });

    // Hard bound against runaway search on malformed graphs.
    let max_iterations = graph.node_count() * 2;
    let mut iterations = 0;

    while iterations < max_iterations {
        let Some(Candidate { node: current, .. }) = open.pop() else {
            break;
        };
        iterations += 1;

        if current == goal {
            debug!(iterations, "campus path found");
            return Some(reconstruct(&came_from, goal, graph));
        }

        // Stale heap entries for already-finalized nodes are skipped here;
        // edge costs are non-negative, so closed nodes never need reopening.
        if !closed.insert(current) {
            continue;
        }

        let Some(current_node) = graph.node(current) else {
            continue;
        };
        let current_g = g_score.get(&current).copied().unwrap_or(f64::INFINITY);

        for &(neighbor, cost) in current_node.neighbors() {
            if closed.contains(&neighbor) {
                continue;
            }
            let Some(neighbor_node) = graph.node(neighbor) else {
                continue;
            };

            let tentative = current_g + cost;
            if g_score.get(&neighbor).is_none_or(|&g| tentative < g) {
                came_from.insert(neighbor, current);
                g_score.insert(neighbor, tentative);
                open.push(Candidate {
                    f_score: tentative + heuristic(neighbor_node.position, goal_pos),
                    node: neighbor,
                });
            }
        }
    }

    warn!(iterations, "no campus path between nodes");
    None
}

fn reconstruct(came_from: &HashMap<NodeId, NodeId>, goal: NodeId, graph: &Graph) -> Vec<Point> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(id) = current {
        if let Some(node) = graph.node(id) {
            path.push(node.position);
        }
        current = came_from.get(&id).copied();
    }
    path.reverse();
    path
}
