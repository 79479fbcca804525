//! Basic value types.

use nalgebra::Vector2;

use crate::numeric::{dist, sign};

/// A point in the plane.
pub type Point = Vector2<f64>;

/// Closed segment between `p1` and `p2`.
///
/// Direction only matters for the parametrization `p1 + u (p2 - p1)`;
/// geometrically the segment is undirected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    #[inline]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }
    #[inline]
    pub fn length(&self) -> f64 {
        dist(self.p1, self.p2)
    }
    /// Zero length under the shared tolerance.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        sign(self.length()).is_eq()
    }
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.p2 - self.p1
    }
    #[inline]
    pub fn point_at(&self, u: f64) -> Point {
        self.p1 + self.direction() * u
    }
    /// Parametric position of the projection of `p` onto the supporting line.
    /// Pre: the segment is not degenerate.
    #[inline]
    pub fn param_of(&self, p: Point) -> f64 {
        let d = self.direction();
        (p - self.p1).dot(&d) / d.norm_squared()
    }
}

/// Closed disk. Radius is non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zone {
    pub center: Point,
    pub radius: f64,
}

impl Zone {
    #[inline]
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
}
