//! Visibility graph over admissible waypoints and its shortest-path solver.
//!
//! Purpose
//! - Enumerate waypoints: source, target, and every zone–zone boundary
//!   crossing not strictly inside another zone.
//! - Link every waypoint pair whose connecting segment is covered by the zone
//!   union, weighted by Euclidean length.
//! - Run a queue-based label-correcting search (SPFA) from source to target.
//!
//! Costs
//! - Waypoints: `O(n^2)` crossings, each filtered in `O(n)`.
//! - Edges: `O(V^2)` coverage queries at `O(n^2)` each.
//!
//! Code cross-refs: `coverage::covers`, `geom::{Zone, Crossing}`

mod build;
mod spfa;
mod types;

pub use build::{build_graph, waypoints};
pub use spfa::shortest_path;
pub use types::{Edge, VisibilityGraph, SOURCE, TARGET};
