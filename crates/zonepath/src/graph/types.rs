//! Graph data types.

use crate::geom::Point;

/// Vertex index of the source waypoint.
pub const SOURCE: usize = 0;
/// Vertex index of the target waypoint.
pub const TARGET: usize = 1;

/// Directed half of an undirected edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub to: usize,
    pub weight: f64,
}

/// Undirected, distance-weighted graph over waypoints.
///
/// Invariants:
/// - `vertices[SOURCE]` and `vertices[TARGET]` always exist.
/// - Each undirected edge appears once in both endpoint lists; no self-loops.
/// - Weights are finite and non-negative.
#[derive(Clone, Debug, Default)]
pub struct VisibilityGraph {
    pub vertices: Vec<Point>,
    pub adj: Vec<Vec<Edge>>,
}

impl VisibilityGraph {
    pub fn with_vertices(vertices: Vec<Point>) -> Self {
        let adj = vec![Vec::new(); vertices.len()];
        Self { vertices, adj }
    }
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }
    /// Number of undirected edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }
    #[inline]
    pub fn neighbors(&self, v: usize) -> &[Edge] {
        &self.adj[v]
    }
    pub fn add_edge(&mut self, a: usize, b: usize, weight: f64) {
        debug_assert!(a != b, "self-loop at vertex {a}");
        debug_assert!(weight.is_finite() && weight >= 0.0, "bad weight {weight}");
        self.adj[a].push(Edge { to: b, weight });
        self.adj[b].push(Edge { to: a, weight });
    }
}
