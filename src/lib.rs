//! campus-router core
//!
//! Geospatial pathfinding for campus navigation: builds a weighted graph
//! from campus path geometry, searches it with A*, and composes hybrid
//! routes against an external public road router, with turn-by-turn
//! instructions and ETA.

pub mod engine;
pub mod geo;
pub mod graph;
pub mod instructions;
pub mod load;
pub mod nearest;
pub mod osrm;
pub mod route;
pub mod search;
pub mod traits;
pub mod types;
