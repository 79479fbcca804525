//! Waypoint enumeration and edge construction.

use crate::coverage::covers;
use crate::geom::{Point, Segment, Zone};

use super::types::VisibilityGraph;

/// Source, target, then every pairwise boundary crossing that is not strictly
/// inside some zone.
pub fn waypoints(source: Point, target: Point, zones: &[Zone]) -> Vec<Point> {
    let mut points = vec![source, target];
    for (i, zi) in zones.iter().enumerate() {
        for zj in &zones[i + 1..] {
            for p in zi.intersect_zone(zj).points() {
                if zones.iter().any(|z| z.contains_inner(p)) {
                    continue;
                }
                points.push(p);
            }
        }
    }
    points
}

/// Build the visibility graph for one instance.
pub fn build_graph(source: Point, target: Point, zones: &[Zone]) -> VisibilityGraph {
    let mut graph = VisibilityGraph::with_vertices(waypoints(source, target, zones));
    let n = graph.num_vertices();
    for i in 0..n {
        for j in i + 1..n {
            let s = Segment::new(graph.vertices[i], graph.vertices[j]);
            if covers(zones, &s) {
                graph.add_edge(i, j, s.length());
            }
        }
    }
    tracing::debug!(
        zones = zones.len(),
        vertices = n,
        edges = graph.num_edges(),
        "visibility_graph"
    );
    graph
}
