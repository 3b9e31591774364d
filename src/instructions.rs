//! Turn-by-turn instruction generation from a resolved point sequence.

use crate::geo::{self, CompassDirection, TurnKind};
use crate::types::Point;

/// Turns flatter than this are not worth an instruction.
const SIGNIFICANT_TURN_DEG: f64 = 20.0;

/// Routes shorter than this skip the campus-entry notice.
const CAMPUS_NOTICE_MIN_DISTANCE_M: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionCategory {
    Start,
    Turn(TurnKind),
    EnterCampus,
    Arrival,
}

/// One human-readable navigation step.
#[derive(Debug, Clone)]
pub struct Instruction {
    pub category: InstructionCategory,
    pub text: String,
    /// Cumulative distance from the route start, in meters.
    pub distance_m: f64,
    pub bearing_deg: Option<f64>,
}

#[derive(Debug, Clone, Copy)]
struct SignificantTurn {
    angle: f64,
    distance_m: f64,
    bearing_deg: f64,
}

/// Generates at most `max_instructions` steps for a route.
///
/// The list always opens with a start instruction and closes with an
/// arrival instruction. Routes through the campus network longer than
/// 100 m additionally get an "enter campus grounds" notice at the route's
/// midpoint distance.
pub fn generate(
    points: &[Point],
    used_private_path: bool,
    max_instructions: usize,
) -> Vec<Instruction> {
    if points.len() < 2 {
        return vec![Instruction {
            category: InstructionCategory::Arrival,
            text: "You are at your destination".to_string(),
            distance_m: 0.0,
            bearing_deg: None,
        }];
    }

    let mut out = Vec::new();

    let initial_bearing = geo::bearing(points[0], points[1]);
    let direction = CompassDirection::from_bearing(initial_bearing);
    out.push(Instruction {
        category: InstructionCategory::Start,
        text: format!("Start heading {}", direction.name()),
        distance_m: 0.0,
        bearing_deg: Some(initial_bearing),
    });

    let total_distance = geo::path_distance(points);

    let mut turns = Vec::new();
    let mut cumulative = 0.0;
    for i in 1..points.len() - 1 {
        cumulative += geo::distance(points[i - 1], points[i]);
        let angle = geo::turn_angle(points[i - 1], points[i], points[i + 1]);
        if angle.abs() > SIGNIFICANT_TURN_DEG {
            turns.push(SignificantTurn {
                angle,
                distance_m: cumulative,
                bearing_deg: geo::bearing(points[i], points[i + 1]),
            });
        }
    }

    let campus_notice = used_private_path && total_distance > CAMPUS_NOTICE_MIN_DISTANCE_M;
    if campus_notice {
        out.push(Instruction {
            category: InstructionCategory::EnterCampus,
            text: "Enter campus grounds".to_string(),
            distance_m: total_distance / 2.0,
            bearing_deg: None,
        });
    }

    // Start and arrival are fixed; the notice takes one more slot.
    let budget = max_instructions.saturating_sub(2 + usize::from(campus_notice));
    if turns.len() > budget {
        turns.sort_by(|a, b| b.angle.abs().total_cmp(&a.angle.abs()));
        turns.truncate(budget);
        // Restore route order among the kept turns.
        turns.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m));
    }

    for turn in &turns {
        let kind = geo::classify_turn(turn.angle);
        out.push(Instruction {
            category: InstructionCategory::Turn(kind),
            text: kind.text().to_string(),
            distance_m: turn.distance_m,
            bearing_deg: Some(turn.bearing_deg),
        });
    }

    out.push(Instruction {
        category: InstructionCategory::Arrival,
        text: "You have arrived at your destination".to_string(),
        distance_m: total_distance,
        bearing_deg: None,
    });

    // Hard cap: drop the earliest turn entries, keeping start and arrival.
    if out.len() > max_instructions && max_instructions >= 2 {
        let excess = out.len() - max_instructions;
        out.drain(1..1 + excess);
    }

    out
}
