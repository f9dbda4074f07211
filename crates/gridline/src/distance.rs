//! Distance metrics between grid points.

use gridline_core::{Point2, Point3};

/// Which metric [`rl_dist`] measures with.
///
/// Chebyshev matches 8-connected movement where a diagonal step costs the
/// same as a cardinal one. Euclidean makes diagonal travel cost more and
/// gives round rather than square neighbourhoods.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DistanceMetric {
    /// `max(|dx|, |dy|, |dz|)`.
    #[default]
    Chebyshev,
    /// Straight-line distance rounded to the nearest integer.
    Euclidean,
}

/// Euclidean distance between two planar points.
pub fn trig_dist(a: Point2, b: Point2) -> f64 {
    let d = b - a;
    let (dx, dy) = (d.x as f64, d.y as f64);
    (dx * dx + dy * dy).sqrt()
}

/// Euclidean distance between two 3D points.
pub fn trig_dist_3d(a: Point3, b: Point3) -> f64 {
    let d = b - a;
    let (dx, dy, dz) = (d.x as f64, d.y as f64, d.z as f64);
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Chebyshev (L-inf) distance: the number of 8-connected steps between
/// two planar points.
pub fn square_dist(a: Point2, b: Point2) -> i32 {
    let d = (b - a).abs();
    d.x.max(d.y)
}

/// Chebyshev distance in 3D: the number of 26-connected steps.
pub fn square_dist_3d(a: Point3, b: Point3) -> i32 {
    let d = (b - a).abs();
    d.x.max(d.y).max(d.z)
}

/// Manhattan (L1) distance: the number of 4-connected steps.
pub fn manhattan_dist(a: Point2, b: Point2) -> i32 {
    let d = (b - a).abs();
    d.x + d.y
}

/// Octile distance: cardinal steps cost `multiplier`, diagonal steps cost
/// `multiplier * 99 / 70` (99/70 approximates the square root of two).
pub fn octile_dist(a: Point2, b: Point2, multiplier: i32) -> i32 {
    let d = (b - a).abs();
    let diagonal = d.x.min(d.y);
    (d.x + d.y - 2 * diagonal) * multiplier + diagonal * multiplier * 99 / 70
}

/// Integer distance under the chosen metric.
pub fn rl_dist(metric: DistanceMetric, a: Point3, b: Point3) -> i32 {
    match metric {
        DistanceMetric::Chebyshev => square_dist_3d(a, b),
        DistanceMetric::Euclidean => trig_dist_3d(a, b).round() as i32,
    }
}
