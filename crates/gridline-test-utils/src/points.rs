//! Deterministic random point generation.

use crate::config::FuzzConfig;
use gridline_core::{Point2, Point3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded source of uniformly distributed grid points.
///
/// Identical configurations produce identical point sequences.
pub struct PointSource {
    rng: ChaCha8Rng,
    range: i32,
}

impl PointSource {
    /// Create a source drawing coordinates from
    /// `[-config.coordinate_range(), config.coordinate_range()]`.
    pub fn new(config: &FuzzConfig) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed()),
            range: config.coordinate_range(),
        }
    }

    /// A uniform integer in `[lo, hi]`.
    pub fn int(&mut self, lo: i32, hi: i32) -> i32 {
        self.rng.random_range(lo..=hi)
    }

    /// A random planar point.
    pub fn point2(&mut self) -> Point2 {
        let r = self.range;
        Point2::new(self.int(-r, r), self.int(-r, r))
    }

    /// A random 3D point.
    pub fn point3(&mut self) -> Point3 {
        let r = self.range;
        Point3::new(self.int(-r, r), self.int(-r, r), self.int(-r, r))
    }

    /// `config.cases()` random planar point pairs.
    pub fn pairs2(config: &FuzzConfig) -> Vec<(Point2, Point2)> {
        let mut source = Self::new(config);
        (0..config.cases())
            .map(|_| (source.point2(), source.point2()))
            .collect()
    }
}
