//! Straightforward reference rasterizer used as an oracle.
//!
//! Runs the doubled-delta Bresenham loop until the current point equals
//! the end point, with a bounding box guard so that a bad error term
//! cannot loop forever. Deliberately unoptimized: it always emits at least
//! one point and rechecks the full point every step.

use gridline_core::Point2;

/// Reference 2D line from `p1` to `p2` with initial error term `t`.
pub fn reference_line_to(p1: Point2, p2: Point2, mut t: i32) -> Vec<Point2> {
    let d = p2 - p1;
    let a = d.abs() * 2;
    let s = d.signum();
    let reach = d.abs();
    let min = Point2::new(p1.x.min(p2.x) - reach.x, p1.y.min(p2.y) - reach.y);
    let max = Point2::new(p1.x.max(p2.x) + reach.x, p1.y.max(p2.y) + reach.y);
    let in_bounds = |p: Point2| p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y;

    let mut out = Vec::new();
    let mut cur = p1;
    loop {
        if a.x == a.y {
            cur += s;
        } else if a.x > a.y {
            if t > 0 {
                cur.y += s.y;
                t -= a.x;
            }
            cur.x += s.x;
            t += a.y;
        } else {
            if t > 0 {
                cur.x += s.x;
                t -= a.y;
            }
            cur.y += s.y;
            t += a.x;
        }
        out.push(cur);
        if cur == p2 || !in_bounds(cur) {
            return out;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coincident_points_give_end_point() {
        let p = Point2::new(3, -4);
        assert_eq!(reference_line_to(p, p, 0), vec![p]);
    }

    #[test]
    fn shallow_line() {
        assert_eq!(
            reference_line_to(Point2::ZERO, Point2::new(3, 1), 0),
            vec![Point2::new(1, 0), Point2::new(2, 1), Point2::new(3, 1)]
        );
    }
}
