//! Coverage oracle: does a segment lie inside the union of the zones?
//!
//! The segment is cut at every chord endpoint produced by some zone; the
//! pieces between consecutive cuts must each fit inside a single zone.
//! Cost is `O(k)` to collect cuts plus `O(k)` per piece, `O(k^2)` overall.
//!
//! Cuts are ordered by their parametric position along the segment, which is
//! a total order also for vertical segments.

use crate::geom::{Point, Segment, Zone};

/// True if every point of `s` lies in at least one zone.
pub fn covers(zones: &[Zone], s: &Segment) -> bool {
    if s.is_degenerate() {
        return zones.iter().any(|z| z.contains_point(s.p1));
    }
    let mut cuts: Vec<(f64, Point)> = Vec::with_capacity(2 * zones.len() + 2);
    cuts.push((0.0, s.p1));
    cuts.push((1.0, s.p2));
    for chord in zones.iter().filter_map(|z| z.chord(s)) {
        cuts.push((s.param_of(chord.p1), chord.p1));
        cuts.push((s.param_of(chord.p2), chord.p2));
    }
    cuts.sort_by(|a, b| a.0.total_cmp(&b.0));
    cuts.windows(2).all(|w| {
        let piece = Segment::new(w[0].1, w[1].1);
        zones.iter().any(|z| z.contains_segment(&piece))
    })
}
