//! Tolerance defaults for the zone geometry.
//!
//! Policy
//! - Fixed constants; every comparison between derived quantities goes through
//!   `numeric::sign`, which is the only reader of `EPS`.

/// Absolute tolerance for distances, discriminants and path relaxations.
pub const EPS: f64 = 1e-10;

/// Sentinel distance for "no covered path exists".
pub const UNREACHABLE: f64 = 1e10;
