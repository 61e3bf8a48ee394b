//! Random planar point sets (replay tokens + a few distributions).
//!
//! Purpose
//! - Deterministic point clouds for tests, benches and the CLI `sample` command.
//!
//! Model
//! - A replay token `(seed, index)` is mixed into a single `StdRng`, so the
//!   `index`-th draw of a seed can be regenerated without replaying the others.
//! - `UniformDisk` and `UniformSquare` fill an area; `Circle` puts every point on
//!   the boundary, so all of them end up on the hull (worst case for merges).

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point;

/// Point distribution, centered at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointDist {
    UniformDisk { radius: f64 },
    UniformSquare { half_width: f64 },
    Circle { radius: f64 },
}

impl PointDist {
    fn sample<R: Rng>(&self, rng: &mut R) -> Point {
        match *self {
            PointDist::UniformDisk { radius } => {
                // sqrt for uniform area density
                let r = radius.abs() * rng.gen::<f64>().sqrt();
                let th = rng.gen::<f64>() * std::f64::consts::TAU;
                Vector2::new(r * th.cos(), r * th.sin())
            }
            PointDist::UniformSquare { half_width } => {
                let h = half_width.abs();
                if h == 0.0 {
                    return Vector2::zeros();
                }
                Vector2::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h))
            }
            PointDist::Circle { radius } => {
                let th = rng.gen::<f64>() * std::f64::consts::TAU;
                Vector2::new(radius * th.cos(), radius * th.sin())
            }
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `n` points from `dist`, translated by `center`.
pub fn sample_points(n: usize, dist: PointDist, center: Point, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    (0..n).map(|_| center + dist.sample(&mut rng)).collect()
}

/// Shorthand for `n` uniform points in the disk of `radius` around the origin.
pub fn sample_disk(n: usize, radius: f64, tok: ReplayToken) -> Vec<Point> {
    sample_points(n, PointDist::UniformDisk { radius }, Vector2::zeros(), tok)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = sample_disk(50, 1.0, tok);
        let b = sample_disk(50, 1.0, tok);
        assert_eq!(a, b);
        let c = sample_disk(50, 1.0, ReplayToken { seed: 42, index: 8 });
        assert_ne!(a, c);
    }

    #[test]
    fn distributions_respect_bounds() {
        let tok = ReplayToken { seed: 3, index: 0 };
        let center = Vector2::new(5.0, -2.0);
        for p in sample_points(200, PointDist::UniformDisk { radius: 2.0 }, center, tok) {
            assert!((p - center).norm() <= 2.0 + 1e-12);
        }
        for p in sample_points(200, PointDist::UniformSquare { half_width: 1.5 }, center, tok) {
            assert!((p.x - center.x).abs() <= 1.5 && (p.y - center.y).abs() <= 1.5);
        }
        for p in sample_points(200, PointDist::Circle { radius: 3.0 }, center, tok) {
            assert!(((p - center).norm() - 3.0).abs() < 1e-9);
        }
    }
}
