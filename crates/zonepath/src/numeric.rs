//! Tolerance-aware comparisons and Euclidean distance.

use std::cmp::Ordering;

use crate::cfg::EPS;
use crate::geom::Point;

/// Compare `x` against zero with tolerance `EPS`.
///
/// `Less`, `Equal`, `Greater` stand for -1, 0, +1.
#[inline]
pub fn sign(x: f64) -> Ordering {
    if x + EPS < 0.0 {
        Ordering::Less
    } else if x - EPS > 0.0 {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Euclidean distance.
#[inline]
pub fn dist(a: Point, b: Point) -> f64 {
    (a - b).norm()
}
