//! Benchmark fixtures for the gridline crates.
//!
//! - [`line_pairs`]: seeded 2D endpoint pairs for line benchmarks
//! - [`line_pairs_3d`]: seeded 3D endpoint pairs
//! - [`offsets`]: every planar offset in a square window, lifted to 3D

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridline::{Point2, Point3};
use gridline_test_utils::{FuzzConfig, PointSource, MAX_COORDINATE_RANGE};

/// Out-of-range inputs are clamped, so the build cannot fail.
fn config(seed: u64, range: i32, count: usize) -> FuzzConfig {
    FuzzConfig::builder()
        .seed(seed)
        .coordinate_range(range.clamp(1, MAX_COORDINATE_RANGE))
        .cases(count.max(1))
        .build()
        .unwrap_or_default()
}

/// `count` deterministic 2D endpoint pairs with coordinates in `[-range, range]`.
pub fn line_pairs(seed: u64, range: i32, count: usize) -> Vec<(Point2, Point2)> {
    PointSource::pairs2(&config(seed, range, count))
}

/// `count` deterministic 3D endpoint pairs with coordinates in `[-range, range]`.
pub fn line_pairs_3d(seed: u64, range: i32, count: usize) -> Vec<(Point3, Point3)> {
    let config = config(seed, range, count);
    let mut source = PointSource::new(&config);
    (0..config.cases())
        .map(|_| (source.point3(), source.point3()))
        .collect()
}

/// Every offset `(x, y, z)` with `|x|, |y| <= radius`, at the given level.
pub fn offsets(radius: i32, z: i32) -> Vec<Point3> {
    let mut out = Vec::with_capacity(((2 * radius + 1) * (2 * radius + 1)).max(0) as usize);
    for y in -radius..=radius {
        for x in -radius..=radius {
            out.push(Point3::new(x, y, z));
        }
    }
    out
}
