//! Geodesic primitives: haversine distance, bearings and turn angles.
//!
//! Everything here is pure and deterministic; the rest of the engine is
//! built on these functions.

use crate::types::Point;

/// Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two points in meters (haversine formula).
pub fn distance(a: Point, b: Point) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Initial compass bearing from `a` to `b`, in degrees within `[0, 360)`.
pub fn bearing(a: Point, b: Point) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let y = delta_lng.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lng.cos();

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Signed turn angle at `curr`, in degrees within `(-180, 180]`.
/// Positive means a right turn.
pub fn turn_angle(prev: Point, curr: Point, next: Point) -> f64 {
    let mut angle = bearing(curr, next) - bearing(prev, curr);
    if angle > 180.0 {
        angle -= 360.0;
    }
    if angle <= -180.0 {
        angle += 360.0;
    }
    angle
}

/// Sum of consecutive-pair distances along a point sequence, in meters.
pub fn path_distance(points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|pair| distance(pair[0], pair[1]))
        .sum()
}

/// Turn category derived from a signed turn angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnKind {
    Straight,
    SlightLeft,
    SlightRight,
    Left,
    Right,
    SharpLeft,
    SharpRight,
}

impl TurnKind {
    pub fn text(self) -> &'static str {
        match self {
            TurnKind::Straight => "Continue straight",
            TurnKind::SlightLeft => "Turn slight left",
            TurnKind::SlightRight => "Turn slight right",
            TurnKind::Left => "Turn left",
            TurnKind::Right => "Turn right",
            TurnKind::SharpLeft => "Turn sharp left",
            TurnKind::SharpRight => "Turn sharp right",
        }
    }
}

/// Classifies a signed turn angle: under 20° is straight, 20–70° slight,
/// 70–120° a turn, beyond that sharp. The sign selects left or right.
pub fn classify_turn(angle: f64) -> TurnKind {
    let magnitude = angle.abs();
    if magnitude < 20.0 {
        return TurnKind::Straight;
    }
    let right = angle > 0.0;
    if magnitude < 70.0 {
        if right {
            TurnKind::SlightRight
        } else {
            TurnKind::SlightLeft
        }
    } else if magnitude < 120.0 {
        if right { TurnKind::Right } else { TurnKind::Left }
    } else if right {
        TurnKind::SharpRight
    } else {
        TurnKind::SharpLeft
    }
}

/// Eight-way compass rose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompassDirection {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl CompassDirection {
    /// Maps a bearing in `[0, 360)` to its 45° sector.
    pub fn from_bearing(bearing: f64) -> Self {
        let sector = (((bearing + 22.5) / 45.0).floor() as usize) % 8;
        match sector {
            0 => CompassDirection::North,
            1 => CompassDirection::Northeast,
            2 => CompassDirection::East,
            3 => CompassDirection::Southeast,
            4 => CompassDirection::South,
            5 => CompassDirection::Southwest,
            6 => CompassDirection::West,
            _ => CompassDirection::Northwest,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CompassDirection::North => "north",
            CompassDirection::Northeast => "northeast",
            CompassDirection::East => "east",
            CompassDirection::Southeast => "southeast",
            CompassDirection::South => "south",
            CompassDirection::Southwest => "southwest",
            CompassDirection::West => "west",
            CompassDirection::Northwest => "northwest",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric_and_zero_at_identity() {
        let a = Point::new(13.7565, 121.0583);
        let b = Point::new(13.7601, 121.0622);
        assert_eq!(distance(a, b), distance(b, a));
        assert!(distance(a, a) < 1e-9);
    }

    #[test]
    fn distance_known_value() {
        // One millidegree of longitude at the equator is ~111 m.
        let d = distance(Point::new(0.0, 0.0), Point::new(0.0, 0.001));
        assert!(d > 110.0 && d < 112.0, "got {d}");
    }

    #[test]
    fn bearing_cardinal_directions() {
        let origin = Point::new(0.0, 0.0);
        assert!(bearing(origin, Point::new(0.001, 0.0)).abs() < 0.1); // north
        assert!((bearing(origin, Point::new(0.0, 0.001)) - 90.0).abs() < 0.1); // east
        assert!((bearing(origin, Point::new(-0.001, 0.0)) - 180.0).abs() < 0.1); // south
        assert!((bearing(origin, Point::new(0.0, -0.001)) - 270.0).abs() < 0.1); // west
    }

    #[test]
    fn bearing_stays_in_range() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(-1.0, 1.0),
            Point::new(1.0, -1.0),
            Point::new(-1.0, -1.0),
        ];
        for a in points {
            for b in points {
                if a != b {
                    let deg = bearing(a, b);
                    assert!((0.0..360.0).contains(&deg), "bearing {deg} out of range");
                }
            }
        }
    }

    #[test]
    fn turn_angle_signs() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.0, 0.001); // heading east
        let right = Point::new(-0.001, 0.001); // then south
        let left = Point::new(0.001, 0.001); // then north
        let ahead = Point::new(0.0, 0.002); // keep east

        assert!((turn_angle(a, b, right) - 90.0).abs() < 0.5);
        assert!((turn_angle(a, b, left) + 90.0).abs() < 0.5);
        assert!(turn_angle(a, b, ahead).abs() < 0.5);
    }

    #[test]
    fn turn_classification_thresholds() {
        assert_eq!(classify_turn(10.0), TurnKind::Straight);
        assert_eq!(classify_turn(-19.9), TurnKind::Straight);
        assert_eq!(classify_turn(45.0), TurnKind::SlightRight);
        assert_eq!(classify_turn(-45.0), TurnKind::SlightLeft);
        assert_eq!(classify_turn(90.0), TurnKind::Right);
        assert_eq!(classify_turn(-90.0), TurnKind::Left);
        assert_eq!(classify_turn(150.0), TurnKind::SharpRight);
        assert_eq!(classify_turn(-150.0), TurnKind::SharpLeft);
    }

    #[test]
    fn compass_sectors() {
        assert_eq!(CompassDirection::from_bearing(0.0), CompassDirection::North);
        assert_eq!(CompassDirection::from_bearing(350.0), CompassDirection::North);
        assert_eq!(CompassDirection::from_bearing(45.0), CompassDirection::Northeast);
        assert_eq!(CompassDirection::from_bearing(90.0), CompassDirection::East);
        assert_eq!(CompassDirection::from_bearing(225.0), CompassDirection::Southwest);
        assert_eq!(CompassDirection::from_bearing(270.0), CompassDirection::West);
        assert_eq!(CompassDirection::from_bearing(300.0), CompassDirection::Northwest);
    }

    #[test]
    fn path_distance_sums_segments() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.001),
            Point::new(0.0, 0.002),
        ];
        let total = path_distance(&points);
        let expected = distance(points[0], points[1]) + distance(points[1], points[2]);
        assert!((total - expected).abs() < 1e-9);
        assert!(path_distance(&points[..1]).abs() < 1e-9);
    }
}
