//! Planar primitives for the zone union: points, segments, disks.
//!
//! Purpose
//! - Value types (`Point`, `Segment`, `Zone`) with no identity beyond their
//!   coordinates.
//! - Pairwise relations: point containment (strict and boundary), segment
//!   inside one zone, segment–zone chords, zone–zone crossings.
//!
//! All comparisons route through `numeric::sign`.
//!
//! Code cross-refs: `coverage::covers`, `graph::build_graph`

mod relations;
mod types;

pub use relations::Crossing;
pub use types::{Point, Segment, Zone};
