//! Hull sizes of random point clouds, for a quick sanity check on counts.
//!
//! Usage:
//!   cargo run -p dchull --example disk_hulls -- disk
//!   cargo run -p dchull --example disk_hulls -- square
//!
//! Uniform disks grow their hull roughly like n^(1/3), squares like log n.

use dchull::geom2::rand::{sample_points, PointDist, ReplayToken};
use dchull::hull::convex_hull;
use nalgebra::Vector2;

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "disk".to_string());
    let dist = match mode.as_str() {
        "disk" => PointDist::UniformDisk { radius: 10.0 },
        "square" => PointDist::UniformSquare { half_width: 10.0 },
        _ => {
            eprintln!("usage: disk_hulls [disk|square]");
            return;
        }
    };
    println!("{:>10} {:>8} {:>12}", "n", "hull", "area");
    for exp in 1..=6 {
        let n = 10usize.pow(exp);
        let tok = ReplayToken {
            seed: 2025,
            index: exp as u64,
        };
        let pts = sample_points(n, dist, Vector2::zeros(), tok);
        match convex_hull(&pts) {
            Ok(h) => println!("{:>10} {:>8} {:>12.4}", n, h.len(), h.area()),
            Err(err) => eprintln!("n={n}: {err}"),
        }
    }
}
