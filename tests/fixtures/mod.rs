//! Test fixtures for campus-router.
//!
//! Provides realistic campus path geometry (a small gate/quad/library
//! network) and deterministic mock road routers.

pub mod campus_paths;
pub mod routers;

pub use campus_paths::*;
pub use routers::*;
