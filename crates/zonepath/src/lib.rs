//! Shortest covered paths through a union of disks.
//!
//! Given a source, a target and a finite set of disk-shaped zones, compute the
//! length of the shortest path that never leaves the union of the zones.
//!
//! Layers (leaves first)
//! - `numeric`: the single tolerance predicate `sign` and `dist`.
//! - `geom`: `Point`, `Segment`, `Zone` and their pairwise relations.
//! - `coverage`: does a segment lie inside the zone union?
//! - `graph`: visibility graph over admissible waypoints, SPFA solver.
//! - `solve`: one-shot entry point over a parsed `Instance`.
//!
//! API Policy
//! - This crate is consumed by the `zonepath` CLI. There is no stable public API.

pub mod cfg;
pub mod coverage;
pub mod error;
pub mod geom;
pub mod graph;
pub mod instance;
pub mod numeric;
pub mod rand;
pub mod solve;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, Result};
pub use instance::Instance;
pub use solve::{shortest_covered_path, solve, Solution};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{EPS, UNREACHABLE};
    pub use crate::coverage::covers;
    pub use crate::geom::{Crossing, Point, Segment, Zone};
    pub use crate::graph::{build_graph, shortest_path, VisibilityGraph, SOURCE, TARGET};
    pub use crate::instance::Instance;
    pub use crate::numeric::{dist, sign};
    pub use crate::rand::{draw_instance, InstanceCfg, ReplayToken};
    pub use crate::solve::{solve, Solution};
}
