//! Route composition: blends externally-routed public roads with the
//! internally-searched campus network.

use tracing::{debug, warn};

use crate::geo;
use crate::graph::Graph;
use crate::instructions::{self, Instruction};
use crate::nearest;
use crate::search;
use crate::traits::RoadRouter;
use crate::types::{PathFeature, Point, TransportMode};

/// How a composed route was produced, from best to worst fallback tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// Entirely on public roads.
    Public,
    /// Campus network, reached via a straight connector.
    Campus,
    /// Public-road segment followed by a campus-network segment.
    Hybrid,
    /// Straight line between user and destination; the last resort.
    Direct,
    /// Campus network used because the public router failed.
    CampusFallback,
}

impl RouteKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RouteKind::Public => "public",
            RouteKind::Campus => "campus",
            RouteKind::Hybrid => "hybrid",
            RouteKind::Direct => "direct",
            RouteKind::CampusFallback => "campus_fallback",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RouteRequest {
    pub user_position: Point,
    pub destination: Point,
    pub mode: TransportMode,
}

/// Assumed travel speeds for ETA estimation, in km/h.
#[derive(Debug, Clone)]
pub struct SpeedTable {
    pub walking_kmh: f64,
    pub riding_kmh: f64,
    pub driving_kmh: f64,
}

impl Default for SpeedTable {
    fn default() -> Self {
        Self {
            walking_kmh: 5.0,
            riding_kmh: 15.0,
            driving_kmh: 40.0,
        }
    }
}

impl SpeedTable {
    pub fn speed_kmh(&self, mode: TransportMode) -> f64 {
        match mode {
            TransportMode::Walking => self.walking_kmh,
            TransportMode::Riding => self.riding_kmh,
            TransportMode::Driving => self.driving_kmh,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RouteOptions {
    /// Max distance between a destination and a campus path for the private
    /// network to be used at all.
    pub private_path_threshold_m: f64,
    /// Snap cap for raw GPS fixes onto the path network.
    pub gps_snap_max_m: f64,
    /// Upper bound on generated instructions.
    pub max_instructions: usize,
    pub speeds: SpeedTable,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            private_path_threshold_m: 50.0,
            gps_snap_max_m: 100.0,
            max_instructions: 7,
            speeds: SpeedTable::default(),
        }
    }
}

/// A composed route, owned by the caller; holds no reference to the graph.
#[derive(Debug, Clone)]
pub struct RouteResult {
    pub points: Vec<Point>,
    pub kind: RouteKind,
    pub total_distance_m: f64,
    pub eta_minutes: u32,
    /// True when any part of the route runs over the campus network.
    pub used_private_path: bool,
    /// True when the campus segment fell back to raw feature vertices
    /// because the graph search failed.
    pub degraded: bool,
    pub instructions: Vec<Instruction>,
}

/// Composes a route from the user's position to the destination.
///
/// Every failure tier has a deterministic fallback; the worst case is a
/// two-point straight line with kind [`RouteKind::Direct`], so the result
/// always holds at least two points.
///
/// Campus entry is the matched feature's *first* vertex rather than the
/// vertex nearest the destination; campus features are digitized with their
/// start at a gate, and this mirrors the behavior the path data was authored
/// against.
pub fn compose_route<R: RoadRouter>(
    request: &RouteRequest,
    graph: &Graph,
    features: &[PathFeature],
    router: &R,
    options: &RouteOptions,
) -> RouteResult {
    let mut points: Vec<Point> = Vec::new();
    let mut used_private_path = false;
    let mut degraded = false;

    let matched = nearest::nearest_private_path(
        request.destination,
        features,
        options.private_path_threshold_m,
    );

    let kind = if let Some(matched) = matched {
        used_private_path = true;
        let entry = matched.feature.first_point().unwrap_or(request.user_position);

        // Public leg from the user to the campus entry. Router failure is
        // never fatal here; a straight connector stands in.
        let mut kind = match router.route_between(request.user_position, entry, request.mode) {
            Ok(segment) if segment.len() >= 2 => {
                points.extend(segment);
                RouteKind::Hybrid
            }
            Ok(_) => {
                warn!("public router returned degenerate geometry, using straight connector");
                points.push(request.user_position);
                points.push(entry);
                RouteKind::Campus
            }
            Err(err) => {
                warn!(error = ?err, "public router failed, using straight connector");
                points.push(request.user_position);
                points.push(entry);
                RouteKind::Campus
            }
        };

        // Both points are known to be near the network; snap without a cap.
        let start_id = nearest::nearest_node(entry, graph, None);
        let goal_id = nearest::nearest_node(matched.vertex.point, graph, None);
        let campus_leg = match (start_id, goal_id) {
            (Some(start), Some(goal)) => search::find_path(start, goal, graph),
            _ => None,
        };

        match campus_leg {
            Some(leg) => points.extend(leg),
            None => {
                // Walk the matched feature's vertices from its start up to
                // the matched index instead.
                warn!("campus search failed, walking feature vertices");
                points.extend(
                    matched
                        .feature
                        .points()
                        .iter()
                        .take(matched.vertex.index + 1)
                        .copied(),
                );
                kind = RouteKind::Campus;
                degraded = true;
            }
        }
        kind
    } else {
        // No campus path near the destination: full public route, then an
        // exploratory campus attempt, then a straight line.
        let public = match router.route_between(request.user_position, request.destination, request.mode)
        {
            Ok(segment) if segment.len() >= 2 => Some(segment),
            Ok(_) => {
                warn!("public router returned degenerate geometry");
                None
            }
            Err(err) => {
                warn!(error = ?err, "public route failed");
                None
            }
        };

        if let Some(segment) = public {
            points.extend(segment);
            RouteKind::Public
        } else {
            let start_id = nearest::nearest_node(request.user_position, graph, None);
            let goal_id = nearest::nearest_node(request.destination, graph, None);
            let fallback = match (start_id, goal_id) {
                (Some(start), Some(goal)) => search::find_path(start, goal, graph),
                _ => None,
            };

            match fallback {
                Some(leg) if leg.len() >= 2 => {
                    points.extend(leg);
                    used_private_path = true;
                    RouteKind::CampusFallback
                }
                _ => {
                    points.push(request.user_position);
                    points.push(request.destination);
                    RouteKind::Direct
                }
            }
        }
    };

    let total_distance_m = geo::path_distance(&points);
    let eta_minutes = eta_minutes(total_distance_m, options.speeds.speed_kmh(request.mode));
    let instructions = instructions::generate(&points, used_private_path, options.max_instructions);

    debug!(
        kind = kind.as_str(),
        distance_m = total_distance_m,
        eta_minutes,
        "route composed"
    );

    RouteResult {
        points,
        kind,
        total_distance_m,
        eta_minutes,
        used_private_path,
        degraded,
        instructions,
    }
}

/// Travel time at the given speed, rounded up to whole minutes.
fn eta_minutes(distance_m: f64, speed_kmh: f64) -> u32 {
    if distance_m <= 0.0 || speed_kmh <= 0.0 {
        return 0;
    }
    let speed_ms = speed_kmh * 1000.0 / 3600.0;
    let seconds = distance_m / speed_ms;
    (seconds / 60.0).ceil() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eta_rounds_up() {
        // 1 km at 5 km/h is exactly 12 minutes.
        assert_eq!(eta_minutes(1000.0, 5.0), 12);
        // A bit farther rounds up to 13.
        assert_eq!(eta_minutes(1050.0, 5.0), 13);
        assert_eq!(eta_minutes(0.0, 5.0), 0);
        assert_eq!(eta_minutes(1000.0, 0.0), 0);
    }

    #[test]
    fn default_speed_table_matches_modes() {
        let speeds = SpeedTable::default();
        assert_eq!(speeds.speed_kmh(TransportMode::Walking), 5.0);
        assert_eq!(speeds.speed_kmh(TransportMode::Riding), 15.0);
        assert_eq!(speeds.speed_kmh(TransportMode::Driving), 40.0);
    }

    #[test]
    fn kind_labels_are_stable() {
        assert_eq!(RouteKind::Public.as_str(), "public");
        assert_eq!(RouteKind::CampusFallback.as_str(), "campus_fallback");
    }
}
