//! Random planar point clouds (deterministic, for tests and benches).
//!
//! Model
//! - Uniform points in the axis-aligned square `[0, span)²`, drawn from a
//!   seeded `StdRng` so that every draw is reproducible from `(cfg, seed)`.

// Leading `::` keeps the extern crate apart from this module's own path.
use ::rand::rngs::StdRng;
use ::rand::{Rng, SeedableRng};

use crate::types::Point;

/// Cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    /// Number of points to draw.
    pub count: usize,
    /// Side length of the sampling square.
    pub span: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 64,
            span: 100.0,
        }
    }
}

/// Draw a reproducible point cloud.
pub fn draw_cloud(cfg: CloudCfg, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..cfg.count)
        .map(|_| {
            Point::new(
                rng.gen_range(0.0..cfg.span),
                rng.gen_range(0.0..cfg.span),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_cloud() {
        let cfg = CloudCfg::default();
        assert_eq!(draw_cloud(cfg, 7), draw_cloud(cfg, 7));
        assert_ne!(draw_cloud(cfg, 7), draw_cloud(cfg, 8));
    }

    #[test]
    fn cloud_stays_in_span() {
        let cfg = CloudCfg {
            count: 200,
            span: 10.0,
        };
        for p in draw_cloud(cfg, 1) {
            assert!(p.x >= 0.0 && p.x < 10.0);
            assert!(p.y >= 0.0 && p.y < 10.0);
        }
    }
}
