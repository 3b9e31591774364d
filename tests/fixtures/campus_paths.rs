//! A small but realistic campus network around Batangas City.
//!
//! Layout (roughly to scale, ~55 m per 0.0005° of latitude):
//!
//! ```text
//!   library ─┐
//!            │
//!   quad ────┴── gym
//!     │
//!   gate        (user approaches from the southwest)
//! ```

use campus_router::types::{PathFeature, Point};

pub fn gate() -> Point {
    Point::new(13.7565, 121.0583)
}

pub fn quad() -> Point {
    Point::new(13.7570, 121.0583)
}

pub fn library() -> Point {
    Point::new(13.7575, 121.0583)
}

pub fn gym() -> Point {
    Point::new(13.7570, 121.0590)
}

/// The campus path network: a main walk gate→quad→library and a cross
/// path quad→gym sharing the quad vertex.
pub fn campus_features() -> Vec<PathFeature> {
    vec![
        PathFeature::new(vec![gate(), quad(), library()]),
        PathFeature::new(vec![quad(), gym()]),
    ]
}

/// A user position on the public road southwest of the gate, ~200 m out.
pub fn user_position() -> Point {
    Point::new(13.7550, 121.0570)
}

/// A destination ~16 m from the library vertex; inside the 50 m
/// private-path threshold.
pub fn library_entrance() -> Point {
    Point::new(13.75752, 121.05845)
}

/// A destination ~68 m from the gym vertex: outside the 50 m threshold but
/// close enough for an uncapped campus fallback snap.
pub fn north_field() -> Point {
    Point::new(13.7576, 121.0591)
}

/// A destination kilometers away from any campus path.
pub fn downtown() -> Point {
    Point::new(13.7700, 121.0700)
}
