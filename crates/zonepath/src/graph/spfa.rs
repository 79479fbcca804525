//! Queue-based label-correcting shortest path (SPFA).

use std::collections::VecDeque;

use crate::cfg::UNREACHABLE;
use crate::numeric::sign;

use super::types::VisibilityGraph;

/// Shortest path length from `source` to `target`.
///
/// Returns `UNREACHABLE` when no path exists. Weights are non-negative, so the
/// queue always drains.
pub fn shortest_path(graph: &VisibilityGraph, source: usize, target: usize) -> f64 {
    let n = graph.num_vertices();
    let mut best = vec![UNREACHABLE; n];
    let mut queued = vec![false; n];
    let mut queue = VecDeque::with_capacity(n);
    best[source] = 0.0;
    queued[source] = true;
    queue.push_back(source);
    while let Some(cur) = queue.pop_front() {
        queued[cur] = false;
        for e in graph.neighbors(cur) {
            let cand = best[cur] + e.weight;
            // strict improvement beyond tolerance
            if sign(best[e.to] - cand).is_gt() {
                best[e.to] = cand;
                if !queued[e.to] {
                    queued[e.to] = true;
                    queue.push_back(e.to);
                }
            }
        }
    }
    best[target]
}
