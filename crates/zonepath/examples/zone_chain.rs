//! Timing probe on a chain of overlapping zones.
//!
//! Purpose
//! - Give a concrete data point for how graph size and solve time grow with
//!   the number of zones when every neighbor pair crosses.
//!
//! Run: `cargo run --release -p zonepath --example zone_chain`

use std::time::Instant;

use nalgebra::vector;
use zonepath::geom::Zone;
use zonepath::{solve, Instance};

fn main() {
    for n in [4usize, 8, 16, 32, 64] {
        // centers on a slight zigzag so consecutive zones cross in two points
        let zones: Vec<Zone> = (0..n)
            .map(|k| {
                let y = if k % 2 == 0 { 0.0 } else { 0.8 };
                Zone::new(vector![1.5 * k as f64, y], 1.0)
            })
            .collect();
        let inst = Instance::new(zones[0].center, zones[n - 1].center, zones);
        let start = Instant::now();
        let sol = solve(&inst);
        let elapsed = start.elapsed().as_secs_f64() * 1e3;
        println!(
            "zones={n} vertices={} edges={} length={} time_ms={elapsed:.3}",
            sol.vertices,
            sol.edges,
            sol.formatted()
        );
    }
}
