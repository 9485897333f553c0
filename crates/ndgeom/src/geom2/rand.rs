//! Random point clouds (bounded uniform coordinates + replay tokens).
//!
//! Purpose
//! - A small, deterministic sampler of planar point sets for the randomized
//!   invariant checks. Parameterizable, reproducible, and indexable: each
//!   `(seed, index)` token yields the same cloud on every run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::nd::Array;

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PointCloudCfg {
    /// Point count is drawn uniformly from `0..=max_points`.
    pub max_points: usize,
    /// Coordinates are drawn uniformly from `[coord_min, coord_max)`.
    pub coord_min: f64,
    pub coord_max: f64,
}

impl Default for PointCloudCfg {
    fn default() -> Self {
        Self {
            max_points: 64,
            coord_min: -100.0,
            coord_max: 100.0,
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
        // SplitMix64-style mixing, cheap and stable.
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

/// Draw a random `(N, 2)` point set, `N` uniform in `0..=cfg.max_points`.
///
/// # Panics
/// If `cfg.coord_min >= cfg.coord_max`.
pub fn draw_point_cloud(cfg: PointCloudCfg, tok: ReplayToken) -> Array<f64, 2> {
    assert!(
        cfg.coord_min < cfg.coord_max,
        "empty coordinate range [{}, {})",
        cfg.coord_min,
        cfg.coord_max
    );
    let mut rng = tok.to_std_rng();
    let n = rng.gen_range(0..=cfg.max_points);
    let data: Vec<f64> = (0..n * 2)
        .map(|_| rng.gen_range(cfg.coord_min..cfg.coord_max))
        .collect();
    Array::from_vec(data, [n, 2])
}
