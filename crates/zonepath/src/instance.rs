//! Problem instance and its whitespace-separated text format.
//!
//! Format (tokens may be split across lines arbitrarily)
//! - `sx sy` source point
//! - `tx ty` target point
//! - `n` zone count
//! - `n` times `cx cy r`
//!
//! Trailing tokens after the last zone are ignored.

use std::fmt::Write as _;
use std::str::SplitWhitespace;

use nalgebra::vector;

use crate::error::{Error, Result};
use crate::geom::{Point, Zone};

/// One solve request: endpoints plus a fixed zone set.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    pub source: Point,
    pub target: Point,
    pub zones: Vec<Zone>,
}

impl Instance {
    pub fn new(source: Point, target: Point, zones: Vec<Zone>) -> Self {
        Self {
            source,
            target,
            zones,
        }
    }

    /// Parse the text format; any missing, malformed or out-of-range token is
    /// an `Error::InvalidInput` naming the field being read.
    pub fn parse(text: &str) -> Result<Self> {
        let mut tok = Tokens {
            inner: text.split_whitespace(),
        };
        let source = tok.point("source")?;
        let target = tok.point("target")?;
        let n = tok.count("zone count")?;
        let mut zones = Vec::with_capacity(n.min(1 << 16));
        for i in 0..n {
            let center = tok.point(&format!("zones[{i}].center"))?;
            let field = format!("zones[{i}].radius");
            let radius = tok.real(&field)?;
            if radius < 0.0 {
                return Err(Error::invalid(field, format!("negative radius {radius}")));
            }
            zones.push(Zone::new(center, radius));
        }
        Ok(Self::new(source, target, zones))
    }

    /// Render back to the text format (one record per line).
    pub fn to_input_string(&self) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = writeln!(out, "{} {}", self.source.x, self.source.y);
        let _ = writeln!(out, "{} {}", self.target.x, self.target.y);
        let _ = writeln!(out, "{}", self.zones.len());
        for z in &self.zones {
            let _ = writeln!(out, "{} {} {}", z.center.x, z.center.y, z.radius);
        }
        out
    }
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn next(&mut self, field: &str) -> Result<&'a str> {
        self.inner
            .next()
            .ok_or_else(|| Error::invalid(field, "unexpected end of input"))
    }

    fn real(&mut self, field: &str) -> Result<f64> {
        let raw = self.next(field)?;
        let x: f64 = raw
            .parse()
            .map_err(|_| Error::invalid(field, format!("not a number: {raw:?}")))?;
        if !x.is_finite() {
            return Err(Error::invalid(field, format!("not finite: {raw:?}")));
        }
        Ok(x)
    }

    fn point(&mut self, field: &str) -> Result<Point> {
        let x = self.real(&format!("{field}.x"))?;
        let y = self.real(&format!("{field}.y"))?;
        Ok(vector![x, y])
    }

    fn count(&mut self, field: &str) -> Result<usize> {
        let raw = self.next(field)?;
        let n: i64 = raw
            .parse()
            .map_err(|_| Error::invalid(field, format!("not an integer: {raw:?}")))?;
        usize::try_from(n).map_err(|_| Error::invalid(field, format!("negative count {n}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_field(err: Error) -> String {
        match err {
            Error::InvalidInput { field, .. } => field,
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn parses_tokens_across_lines() {
        let inst = Instance::parse("0 0\n10 0\n2\n5 0 6\n-1.5 2e1\n0.25\n").unwrap();
        assert_eq!(inst.source, vector![0.0, 0.0]);
        assert_eq!(inst.target, vector![10.0, 0.0]);
        assert_eq!(inst.zones.len(), 2);
        assert_eq!(inst.zones[1], Zone::new(vector![-1.5, 20.0], 0.25));
    }

    #[test]
    fn zero_zones_and_trailing_tokens() {
        let inst = Instance::parse("1 2 3 4 0 garbage").unwrap();
        assert!(inst.zones.is_empty());
        assert_eq!(inst.target, vector![3.0, 4.0]);
    }

    #[test]
    fn short_read_names_the_field() {
        let err = Instance::parse("0 0\n10 0\n2\n5 0 6\n1 1").unwrap_err();
        assert_eq!(invalid_field(err), "zones[1].radius");
        let err = Instance::parse("0").unwrap_err();
        assert_eq!(invalid_field(err), "source.y");
        assert!(Instance::parse("").is_err());
    }

    #[test]
    fn rejects_malformed_values() {
        let err = Instance::parse("0 0 1 x 0").unwrap_err();
        assert_eq!(invalid_field(err), "target.y");
        let err = Instance::parse("0 0 1 1 -1").unwrap_err();
        assert_eq!(invalid_field(err), "zone count");
        let err = Instance::parse("0 0 1 1 1.5").unwrap_err();
        assert_eq!(invalid_field(err), "zone count");
        let err = Instance::parse("0 0 1 1 1 0 0 -2").unwrap_err();
        assert_eq!(invalid_field(err), "zones[0].radius");
        let err = Instance::parse("nan 0 1 1 0").unwrap_err();
        assert_eq!(invalid_field(err), "source.x");
    }

    #[test]
    fn renders_back_to_same_instance() {
        let inst = Instance::new(
            vector![-5.0, 0.0],
            vector![15.0, 0.5],
            vec![Zone::new(vector![0.0, 0.0], 5.0), Zone::new(vector![10.0, 0.0], 5.25)],
        );
        assert_eq!(Instance::parse(&inst.to_input_string()).unwrap(), inst);
    }
}
