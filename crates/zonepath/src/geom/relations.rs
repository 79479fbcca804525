//! Pairwise relations between points, segments and zones.

use crate::error::{Error, Result};
use crate::numeric::{dist, sign};

use super::types::{Point, Segment, Zone};

/// Outcome of intersecting two zone boundaries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Crossing {
    /// No common boundary point: separated, nested without contact, or concentric.
    Disjoint,
    /// Boundaries touch in one point (externally or internally).
    Tangent(Point),
    /// Boundaries cross in two points.
    Secant(Point, Point),
}

impl Crossing {
    pub fn points(&self) -> Vec<Point> {
        match *self {
            Crossing::Disjoint => Vec::new(),
            Crossing::Tangent(p) => vec![p],
            Crossing::Secant(p, q) => vec![p, q],
        }
    }
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Crossing::Disjoint => 0,
            Crossing::Tangent(_) => 1,
            Crossing::Secant(..) => 2,
        }
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Crossing::Disjoint)
    }
}

impl Zone {
    /// `p` lies strictly inside (boundary excluded).
    #[inline]
    pub fn contains_inner(&self, p: Point) -> bool {
        sign(dist(self.center, p) - self.radius).is_lt()
    }

    /// `p` lies on the boundary circle.
    #[inline]
    pub fn contains_outer(&self, p: Point) -> bool {
        sign(dist(self.center, p) - self.radius).is_eq()
    }

    /// `p` lies inside or on the boundary.
    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        sign(dist(self.center, p) - self.radius).is_le()
    }

    /// Both endpoints inside or on the boundary; by convexity the whole segment is.
    #[inline]
    pub fn contains_segment(&self, s: &Segment) -> bool {
        self.contains_point(s.p1) && self.contains_point(s.p2)
    }

    /// Chord cut from `s` by this zone's boundary.
    ///
    /// Returns the sub-segment between the two boundary crossings when both lie
    /// on `s`. Tangency, a single crossing, or no crossing yield `None`.
    pub fn intersect_segment(&self, s: &Segment) -> Result<Option<Segment>> {
        if s.is_degenerate() {
            return Err(Error::DegenerateGeometry);
        }
        Ok(self.chord(s))
    }

    /// Pre: `s` is not degenerate.
    pub(crate) fn chord(&self, s: &Segment) -> Option<Segment> {
        // |p1 + u d - c|^2 = r^2  =>  a u^2 + b u + c = 0
        let d = s.direction();
        let f = s.p1 - self.center;
        let a = d.norm_squared();
        let b = 2.0 * d.dot(&f);
        let c = f.norm_squared() - self.radius * self.radius;
        let disc = b * b - 4.0 * a * c;
        if !sign(disc).is_gt() {
            return None;
        }
        let sq = disc.sqrt();
        let u1 = (-b - sq) / (2.0 * a);
        let u2 = (-b + sq) / (2.0 * a);
        let on_segment = |u: f64| sign(u).is_ge() && sign(u - 1.0).is_le();
        if on_segment(u1) && on_segment(u2) {
            Some(Segment::new(s.point_at(u1), s.point_at(u2)))
        } else {
            None
        }
    }

    /// Boundary crossing points of two zones.
    ///
    /// Concentric zones (including identical ones) never cross.
    pub fn intersect_zone(&self, other: &Zone) -> Crossing {
        let d = dist(self.center, other.center);
        if sign(d).is_eq() {
            return Crossing::Disjoint;
        }
        let (r1, r2) = (self.radius, other.radius);
        let outer = sign(d - (r1 + r2));
        let inner = sign(d - (r1 - r2).abs());
        if outer.is_gt() || inner.is_lt() {
            return Crossing::Disjoint;
        }
        // Foot of the radical line, measured from self.center toward other.center.
        let r = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
        let axis = (other.center - self.center) / d;
        let foot = self.center + axis * r;
        if outer.is_eq() || inner.is_eq() {
            return Crossing::Tangent(foot);
        }
        let h = (r1 * r1 - r * r).max(0.0).sqrt();
        let normal = Point::new(-axis.y, axis.x);
        Crossing::Secant(foot + normal * h, foot - normal * h)
    }
}
