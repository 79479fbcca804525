//! One-shot solve: build the visibility graph and run SPFA.

use crate::cfg::UNREACHABLE;
use crate::geom::{Point, Zone};
use crate::graph::{build_graph, shortest_path, SOURCE, TARGET};
use crate::instance::Instance;
use crate::numeric::{dist, sign};

/// Result of one solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solution {
    /// Shortest covered path length, or `UNREACHABLE`.
    pub length: f64,
    /// Waypoints in the visibility graph (source and target included).
    pub vertices: usize,
    /// Undirected covered edges.
    pub edges: usize,
}

impl Solution {
    #[inline]
    pub fn is_reachable(&self) -> bool {
        sign(self.length - UNREACHABLE).is_lt()
    }
    /// Fixed-point, 10 decimals; the sentinel prints as `10000000000.0000000000`.
    pub fn formatted(&self) -> String {
        format!("{:.10}", self.length)
    }
}

/// Solve one instance.
///
/// A source that coincides with the target has length 0 even when no zone
/// covers it: the empty path crosses no space.
pub fn solve(inst: &Instance) -> Solution {
    let graph = build_graph(inst.source, inst.target, &inst.zones);
    let length = if sign(dist(inst.source, inst.target)).is_eq() {
        0.0
    } else {
        shortest_path(&graph, SOURCE, TARGET)
    };
    let sol = Solution {
        length,
        vertices: graph.num_vertices(),
        edges: graph.num_edges(),
    };
    tracing::debug!(
        length = sol.length,
        reachable = sol.is_reachable(),
        "solve"
    );
    sol
}

/// Length only, for callers that do not keep an `Instance`.
pub fn shortest_covered_path(source: Point, target: Point, zones: &[Zone]) -> f64 {
    solve(&Instance::new(source, target, zones.to_vec())).length
}
