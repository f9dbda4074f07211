//! Ordered neighbourhood queries: which adjacent cells move towards a
//! target, and which cells lie nearest a center.

use gridline_core::{Point2, Point3};
use smallvec::{smallvec, SmallVec};

/// Adjacent cells of `from` that step towards `to`, best first.
///
/// The first entry is the straight-line step. The rest are fallbacks in
/// decreasing preference:
///
/// - when `to` is on another level, the full 3D step (including the level
///   change) comes first, then the same-level steps below;
/// - x-dominant offsets give `(sx, 0)`, `(sx, 1)`, `(sx, -1)`, then
///   `(0, sy)` when `dy != 0`;
/// - y-dominant offsets give `(0, sy)`, `(1, sy)`, `(-1, sy)`, then
///   `(sx, 0)` when `dx != 0`;
/// - exact diagonals give `(sx, sy)`, `(sx, 0)`, `(0, sy)`.
///
/// Same-level steps keep `from.z`. Coincident points give no steps.
pub fn squares_closer_to(from: Point3, to: Point3) -> SmallVec<[Point3; 5]> {
    let mut steps = SmallVec::new();
    let d = to - from;
    if d.z != 0 {
        steps.push(from + d.signum());
    }
    steps.extend(
        planar_steps(d.xy())
            .into_iter()
            .map(|step| from + Point3::from_xy(step, 0)),
    );
    steps
}

/// Planar form of [`squares_closer_to`].
pub fn squares_closer_to_2d(from: Point2, to: Point2) -> SmallVec<[Point2; 4]> {
    planar_steps(to - from)
        .into_iter()
        .map(|step| from + step)
        .collect()
}

/// Unit steps for an offset, per the table on [`squares_closer_to`].
fn planar_steps(d: Point2) -> SmallVec<[Point2; 4]> {
    let a = d.abs();
    let s = d.signum();
    if a.x > a.y {
        let mut steps: SmallVec<[Point2; 4]> = smallvec![
            Point2::new(s.x, 0),
            Point2::new(s.x, 1),
            Point2::new(s.x, -1),
        ];
        if d.y != 0 {
            steps.push(Point2::new(0, s.y));
        }
        steps
    } else if a.x < a.y {
        let mut steps: SmallVec<[Point2; 4]> = smallvec![
            Point2::new(0, s.y),
            Point2::new(1, s.y),
            Point2::new(-1, s.y),
        ];
        if d.x != 0 {
            steps.push(Point2::new(s.x, 0));
        }
        steps
    } else if d.x != 0 {
        smallvec![s, Point2::new(s.x, 0), Point2::new(0, s.y)]
    } else {
        SmallVec::new()
    }
}

/// Every point whose Chebyshev distance from `center` lies in
/// `[min_dist, max_dist]`, nearest rings first.
///
/// Ring 0 is `center` itself. Ring `r > 0` holds `8 * r` points, visited
/// clockwise on screen from the north-west corner `center + (-r, -r)`:
/// east along the top edge, south down the east edge, west along the
/// bottom edge, then north up the west edge. Negative `min_dist` is
/// treated as 0; an empty range gives no points.
pub fn closest_points_first(center: Point2, min_dist: i32, max_dist: i32) -> Vec<Point2> {
    let min_dist = min_dist.max(0);
    if max_dist < min_dist {
        return Vec::new();
    }
    let outer = (2 * max_dist as usize + 1).pow(2);
    let inner = if min_dist == 0 {
        0
    } else {
        (2 * min_dist as usize - 1).pow(2)
    };
    let mut points = Vec::with_capacity(outer - inner);
    for r in min_dist..=max_dist {
        if r == 0 {
            points.push(center);
            continue;
        }
        for x in -r..r {
            points.push(center + Point2::new(x, -r));
        }
        for y in -r..r {
            points.push(center + Point2::new(r, y));
        }
        for x in (-r + 1..=r).rev() {
            points.push(center + Point2::new(x, r));
        }
        for y in (-r + 1..=r).rev() {
            points.push(center + Point2::new(-r, y));
        }
    }
    points
}
