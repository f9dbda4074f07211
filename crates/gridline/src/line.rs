//! Integer line rasterization (Bresenham) in two and three dimensions.
//!
//! All arithmetic uses doubled absolute deltas so the error term stays
//! integral. Lines exclude their start point and end exactly on their end
//! point. The error term `t` supplied at construction places the traversal
//! part-way into the error cycle of the line, which is how callers draw a
//! window of a longer line. Any `t` within the line's resumption range
//! (see the `line_to_boundaries` integration test) still ends on the end
//! point.
//!
//! To pick up a traversal where it stopped, keep the iterator, or rebuild
//! it with [`Line2::resume`] / [`Line3::resume`] from the original
//! endpoints. Starting a fresh line at the stopping point changes the slope.

use crate::distance::square_dist_3d;
use gridline_core::{Point2, Point3};
use log::{debug, trace};
use smallvec::{smallvec, SmallVec};
use std::iter::FusedIterator;

/// Axis that advances on every step of a 2D line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Dominant {
    /// `|dx| == |dy|`: both axes advance every step.
    Diagonal,
    X,
    Y,
}

/// Iterator over the points of a 2D line, start excluded.
///
/// Terminates when the dominant coordinate reaches the end point's. With
/// an error term of zero the last point is always the end point; other
/// error terms in the resumption range of the line also end there.
#[derive(Clone, Debug)]
pub struct Line2 {
    cur: Point2,
    end: Point2,
    step: Point2,
    /// Doubled absolute deltas.
    delta: Point2,
    t: i32,
    dominant: Dominant,
}

impl Line2 {
    /// Start a line from `start` to `end` with initial error term `t`.
    pub fn new(start: Point2, end: Point2, t: i32) -> Self {
        let d = end - start;
        let delta = d.abs() * 2;
        let dominant = if delta.x == delta.y {
            Dominant::Diagonal
        } else if delta.x > delta.y {
            Dominant::X
        } else {
            Dominant::Y
        };
        Self {
            cur: start,
            end,
            step: d.signum(),
            delta,
            t,
            dominant,
        }
    }

    /// Continue the line from `start` to `end` at `position`, with the error
    /// term `t` that [`Line2::error`] reported there.
    ///
    /// The slope still comes from `start` and `end`, so the remaining points
    /// are exactly those an uninterrupted traversal would have produced.
    pub fn resume(start: Point2, end: Point2, position: Point2, t: i32) -> Self {
        Self {
            cur: position,
            ..Self::new(start, end, t)
        }
    }

    /// The most recently emitted point (the start point before the first).
    pub fn position(&self) -> Point2 {
        self.cur
    }

    /// Current value of the error accumulator.
    pub fn error(&self) -> i32 {
        self.t
    }

    fn remaining(&self) -> usize {
        match self.dominant {
            Dominant::Diagonal | Dominant::X => (self.end.x - self.cur.x).unsigned_abs() as usize,
            Dominant::Y => (self.end.y - self.cur.y).unsigned_abs() as usize,
        }
    }
}

impl Iterator for Line2 {
    type Item = Point2;

    fn next(&mut self) -> Option<Point2> {
        match self.dominant {
            Dominant::Diagonal => {
                if self.cur.x == self.end.x {
                    return None;
                }
                self.cur += self.step;
            }
            Dominant::X => {
                if self.cur.x == self.end.x {
                    return None;
                }
                if self.t > 0 {
                    self.cur.y += self.step.y;
                    self.t -= self.delta.x;
                }
                self.cur.x += self.step.x;
                self.t += self.delta.y;
            }
            Dominant::Y => {
                if self.cur.y == self.end.y {
                    return None;
                }
                if self.t > 0 {
                    self.cur.x += self.step.x;
                    self.t -= self.delta.y;
                }
                self.cur.y += self.step.y;
                self.t += self.delta.x;
            }
        }
        Some(self.cur)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Line2 {}
impl FusedIterator for Line2 {}

/// A minor axis of a 3D line and its own error accumulator.
#[derive(Clone, Copy, Debug)]
struct MinorAxis {
    axis: usize,
    t: i32,
}

/// Iterator over the points of a 3D line, start excluded.
///
/// The axis with the largest delta advances every step (ties prefer x,
/// then y). Each of the other two axes is paired with it as an independent
/// 2D driver: the first in x, y, z order uses `t`, the second `t2`. A minor
/// axis whose delta equals the dominant one advances every step.
#[derive(Clone, Debug)]
pub struct Line3 {
    cur: [i32; 3],
    end: [i32; 3],
    step: [i32; 3],
    /// Doubled absolute deltas.
    delta: [i32; 3],
    major: usize,
    minors: [MinorAxis; 2],
}

fn to_array(p: Point3) -> [i32; 3] {
    [p.x, p.y, p.z]
}

fn from_array(a: [i32; 3]) -> Point3 {
    Point3::new(a[0], a[1], a[2])
}

impl Line3 {
    /// Start a line from `start` to `end` with initial error terms `t` and
    /// `t2` for the two minor axes.
    pub fn new(start: Point3, end: Point3, t: i32, t2: i32) -> Self {
        let start = to_array(start);
        let end = to_array(end);
        let mut step = [0; 3];
        let mut delta = [0; 3];
        for axis in 0..3 {
            let d = end[axis] - start[axis];
            step[axis] = d.signum();
            delta[axis] = d.abs() * 2;
        }
        let mut major = 0;
        if delta[1] > delta[major] {
            major = 1;
        }
        if delta[2] > delta[major] {
            major = 2;
        }
        let (first, second) = match major {
            0 => (1, 2),
            1 => (0, 2),
            _ => (0, 1),
        };
        Self {
            cur: start,
            end,
            step,
            delta,
            major,
            minors: [
                MinorAxis { axis: first, t },
                MinorAxis {
                    axis: second,
                    t: t2,
                },
            ],
        }
    }

    /// Continue the line from `start` to `end` at `position`, with the error
    /// terms that [`Line3::errors`] reported there.
    pub fn resume(start: Point3, end: Point3, position: Point3, t: i32, t2: i32) -> Self {
        let mut line = Self::new(start, end, t, t2);
        line.cur = to_array(position);
        line
    }

    /// The most recently emitted point (the start point before the first).
    pub fn position(&self) -> Point3 {
        from_array(self.cur)
    }

    /// Current values of the two minor-axis error accumulators.
    pub fn errors(&self) -> (i32, i32) {
        (self.minors[0].t, self.minors[1].t)
    }
}

impl Iterator for Line3 {
    type Item = Point3;

    fn next(&mut self) -> Option<Point3> {
        if self.cur[self.major] == self.end[self.major] {
            return None;
        }
        let major_delta = self.delta[self.major];
        for minor in &mut self.minors {
            let delta = self.delta[minor.axis];
            if delta == major_delta {
                self.cur[minor.axis] += self.step[minor.axis];
                continue;
            }
            if minor.t > 0 {
                self.cur[minor.axis] += self.step[minor.axis];
                minor.t -= major_delta;
            }
            minor.t += delta;
        }
        self.cur[self.major] += self.step[self.major];
        Some(from_array(self.cur))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.end[self.major] - self.cur[self.major]).unsigned_abs() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Line3 {}
impl FusedIterator for Line3 {}

/// Walk the 2D line from `p1` to `p2`, calling `visit` with each point
/// after `p1`. Stops early as soon as `visit` returns `false`.
pub fn bresenham_2d(p1: Point2, p2: Point2, t: i32, mut visit: impl FnMut(Point2) -> bool) {
    for p in Line2::new(p1, p2, t) {
        if !visit(p) {
            trace!("line {p1} -> {p2} stopped at {p}");
            return;
        }
    }
}

/// Walk the 3D line from `p1` to `p2`, calling `visit` with each point
/// after `p1`. Stops early as soon as `visit` returns `false`.
///
/// With `t == t2 == 0` the walk visits exactly `square_dist_3d(p1, p2)`
/// points, each a 26-neighbour of the previous one, the last being `p2`.
pub fn bresenham_3d(
    p1: Point3,
    p2: Point3,
    t: i32,
    t2: i32,
    mut visit: impl FnMut(Point3) -> bool,
) {
    for p in Line3::new(p1, p2, t, t2) {
        if !visit(p) {
            trace!("line {p1} -> {p2} stopped at {p}");
            return;
        }
    }
}

/// The points of the 2D line from `p1` to `p2`, start excluded.
///
/// A zero-length line yields the single point `p2`.
pub fn line_to(p1: Point2, p2: Point2, t: i32) -> Vec<Point2> {
    if p1 == p2 {
        return vec![p2];
    }
    Line2::new(p1, p2, t).collect()
}

/// The points of the 3D line from `p1` to `p2`, start excluded.
///
/// A zero-length line yields the single point `p2`.
pub fn line_to_3d(p1: Point3, p2: Point3, t: i32, t2: i32) -> Vec<Point3> {
    if p1 == p2 {
        return vec![p2];
    }
    Line3::new(p1, p2, t, t2).collect()
}

/// The first step from `p1` towards `p2` followed by the two cells that
/// flank it.
///
/// For a vertical first step the flanks are its horizontal neighbours, for
/// a horizontal one its vertical neighbours, and for a diagonal one the two
/// orthogonal cells adjacent to `p1`. Empty when `p1 == p2`.
pub fn squares_in_direction(p1: Point2, p2: Point2) -> SmallVec<[Point2; 3]> {
    let Some(center) = Line2::new(p1, p2, 0).next() else {
        return SmallVec::new();
    };
    if p1.x == center.x {
        smallvec![
            center,
            Point2::new(p1.x + 1, center.y),
            Point2::new(p1.x - 1, center.y),
        ]
    } else if p1.y == center.y {
        smallvec![
            center,
            Point2::new(center.x, p1.y + 1),
            Point2::new(center.x, p1.y - 1),
        ]
    } else {
        smallvec![
            center,
            Point2::new(p1.x, center.y),
            Point2::new(center.x, p1.y),
        ]
    }
}

/// Extend `line` past its last point by `distance` further steps, keeping
/// the slope from its first point to its last. Returns only the new points.
///
/// Empty when `distance <= 0` or when the line's endpoints coincide.
pub fn continue_line(line: &[Point3], distance: i32) -> Vec<Point3> {
    let (Some(&first), Some(&last)) = (line.first(), line.last()) else {
        return Vec::new();
    };
    if distance <= 0 {
        return Vec::new();
    }
    let span = square_dist_3d(first, last);
    if span == 0 {
        debug!("cannot continue degenerate line at {last}");
        return Vec::new();
    }
    let slope = last - first;
    let end = last
        + Point3::new(
            slope.x * distance / span,
            slope.y * distance / span,
            slope.z * distance / span,
        );
    Line3::new(last, end, 0, 0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p2(x: i32, y: i32) -> Point2 {
        Point2::new(x, y)
    }

    fn p3(x: i32, y: i32, z: i32) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn zero_length_lines() {
        assert_eq!(line_to(p2(4, 4), p2(4, 4), 0), vec![p2(4, 4)]);
        assert_eq!(line_to_3d(p3(1, 2, 3), p3(1, 2, 3), 0, 0), vec![p3(1, 2, 3)]);
        let mut calls = 0;
        bresenham_2d(p2(4, 4), p2(4, 4), 0, |_| {
            calls += 1;
            true
        });
        bresenham_3d(p3(1, 2, 3), p3(1, 2, 3), 0, 0, |_| {
            calls += 1;
            true
        });
        assert_eq!(calls, 0);
    }

    #[test]
    fn x_dominant_line() {
        assert_eq!(
            line_to(p2(0, 0), p2(5, 2), 0),
            vec![p2(1, 0), p2(2, 1), p2(3, 1), p2(4, 2), p2(5, 2)]
        );
    }

    #[test]
    fn y_dominant_line_going_north_west() {
        assert_eq!(
            line_to(p2(0, 0), p2(-2, -5), 0),
            vec![p2(0, -1), p2(-1, -2), p2(-1, -3), p2(-2, -4), p2(-2, -5)]
        );
    }

    #[test]
    fn diagonal_line_ignores_error_term() {
        let expected = vec![p2(-1, 1), p2(-2, 2), p2(-3, 3)];
        assert_eq!(line_to(p2(0, 0), p2(-3, 3), 0), expected);
        assert_eq!(line_to(p2(0, 0), p2(-3, 3), 17), expected);
    }

    #[test]
    fn positive_error_term_shifts_minor_step_earlier() {
        assert_eq!(
            line_to(p2(0, 0), p2(4, 1), 1),
            vec![p2(1, 1), p2(2, 1), p2(3, 1), p2(4, 1)]
        );
    }

    #[test]
    fn iterator_reports_exact_length_and_state() {
        let mut line = Line2::new(p2(0, 0), p2(7, -3), 0);
        assert_eq!(line.len(), 7);
        line.next();
        line.next();
        assert_eq!(line.len(), 5);
        assert_eq!(line.position(), p2(2, -1));
        assert_eq!(line.error(), 12 - 14);
        assert_eq!(line.by_ref().count(), 5);
        assert_eq!(line.next(), None);

        let line = Line3::new(p3(0, 0, 0), p3(2, -6, 3), 0, 0);
        assert_eq!(line.len(), 6);
        assert_eq!(line.errors(), (0, 0));
    }

    #[test]
    fn resumed_line_matches_uninterrupted_tail() {
        let end = p2(7, -3);
        let mut line = Line2::new(Point2::ZERO, end, 0);
        let tail: Vec<_> = line.clone().skip(2).collect();
        line.next();
        line.next();
        let resumed = Line2::resume(Point2::ZERO, end, line.position(), line.error());
        assert_eq!(resumed.len(), tail.len());
        assert_eq!(resumed.collect::<Vec<_>>(), tail);
        assert_eq!(tail, vec![p2(3, -1), p2(4, -2), p2(5, -2), p2(6, -3), p2(7, -3)]);

        let (start, end) = (p3(-2, 5, 1), p3(9, -1, -4));
        let mut line = Line3::new(start, end, 3, -2);
        let tail: Vec<_> = line.clone().skip(4).collect();
        for _ in 0..4 {
            line.next();
        }
        let (t, t2) = line.errors();
        let resumed = Line3::resume(start, end, line.position(), t, t2);
        assert_eq!(resumed.collect::<Vec<_>>(), tail);
    }

    #[test]
    fn nonzero_3d_error_terms_drive_their_own_minor_axis() {
        // x is major; y takes `t` and z takes `t2`.
        let end = p3(6, 2, -3);
        let line = line_to_3d(Point3::ZERO, end, 3, -2);
        assert_eq!(
            line,
            vec![p3(1, 1, 0), p3(2, 1, -1), p3(3, 1, -1), p3(4, 2, -2), p3(5, 2, -2), p3(6, 2, -3)]
        );
        let xy: Vec<_> = line.iter().map(|p| p2(p.x, p.y)).collect();
        let xz: Vec<_> = line.iter().map(|p| p2(p.x, p.z)).collect();
        assert_eq!(xy, line_to(Point2::ZERO, p2(6, 2), 3));
        assert_eq!(xz, line_to(Point2::ZERO, p2(6, -3), -2));
        assert_eq!(line, line_to_3d(Point3::ZERO, end, 3, -2));

        let mut walked = Vec::new();
        bresenham_3d(Point3::ZERO, end, 3, -2, |p| {
            walked.push(p);
            true
        });
        assert_eq!(walked, line);

        // z is major; x takes `t` and y takes `t2`.
        assert_eq!(
            line_to_3d(Point3::ZERO, p3(1, -2, 5), 2, -4),
            vec![p3(1, 0, 1), p3(1, 0, 2), p3(1, -1, 3), p3(1, -1, 4), p3(1, -2, 5)]
        );
    }

    #[test]
    fn minor_axis_tied_with_major_ignores_its_error_term() {
        let end = p3(4, 4, 1);
        let expected = vec![p3(1, 1, 0), p3(2, 2, 1), p3(3, 3, 1), p3(4, 4, 1)];
        assert_eq!(line_to_3d(Point3::ZERO, end, 5, -1), expected);
        assert_eq!(line_to_3d(Point3::ZERO, end, -7, -1), expected);
        let line = Line3::new(Point3::ZERO, end, 5, -1);
        assert_eq!(line.last(), Some(end));
    }

    #[test]
    fn callback_cancellation_stops_immediately() {
        let mut seen = Vec::new();
        bresenham_3d(p3(0, 0, 0), p3(10, 3, -4), 0, 0, |p| {
            seen.push(p);
            seen.len() < 3
        });
        assert_eq!(seen.len(), 3);
        assert_eq!(seen, line_to_3d(p3(0, 0, 0), p3(10, 3, -4), 0, 0)[..3]);

        let mut count = 0;
        bresenham_2d(p2(0, 0), p2(-8, 8), 0, |_| {
            count += 1;
            false
        });
        assert_eq!(count, 1);
    }

    #[test]
    fn z_dominant_line() {
        assert_eq!(
            line_to_3d(p3(0, 0, 0), p3(1, -2, 4), 0, 0),
            vec![p3(0, 0, 1), p3(1, -1, 2), p3(1, -1, 3), p3(1, -2, 4)]
        );
    }

    #[test]
    fn minor_axis_tied_with_major_moves_every_step() {
        assert_eq!(
            line_to_3d(p3(0, 0, 0), p3(3, 0, 3), 0, 0),
            vec![p3(1, 0, 1), p3(2, 0, 2), p3(3, 0, 3)]
        );
    }

    #[test]
    fn squares_in_direction_flanks() {
        let s = squares_in_direction(p2(0, 0), p2(0, -9));
        assert_eq!(s.as_slice(), &[p2(0, -1), p2(1, -1), p2(-1, -1)]);
        let s = squares_in_direction(p2(0, 0), p2(9, 2));
        assert_eq!(s.as_slice(), &[p2(1, 0), p2(1, 1), p2(1, -1)]);
        let s = squares_in_direction(p2(0, 0), p2(-5, 5));
        assert_eq!(s.as_slice(), &[p2(-1, 1), p2(0, 1), p2(-1, 0)]);
        assert!(squares_in_direction(p2(3, 3), p2(3, 3)).is_empty());
    }

    #[test]
    fn continue_line_keeps_slope() {
        let line = line_to_3d(p3(0, 0, 0), p3(4, 2, 0), 0, 0);
        let more = continue_line(&line, 4);
        assert_eq!(more.len(), 4);
        assert_eq!(more.last(), Some(&p3(8, 4, 0)));
        assert!(continue_line(&line, 0).is_empty());
        assert!(continue_line(&[], 3).is_empty());
        assert!(continue_line(&[p3(1, 1, 1)], 3).is_empty());
    }

    proptest! {
        #[test]
        fn planar_3d_line_matches_2d(
            x1 in -40i32..40, y1 in -40i32..40,
            x2 in -40i32..40, y2 in -40i32..40,
            z in -5i32..5,
        ) {
            let flat: Vec<Point2> = line_to_3d(p3(x1, y1, z), p3(x2, y2, z), 0, 0)
                .into_iter()
                .map(Point3::xy)
                .collect();
            prop_assert_eq!(flat, line_to(p2(x1, y1), p2(x2, y2), 0));
        }

        #[test]
        fn line_2d_reaches_end_with_chebyshev_length(
            x1 in -99i32..99, y1 in -99i32..99,
            x2 in -99i32..99, y2 in -99i32..99,
        ) {
            prop_assume!((x1, y1) != (x2, y2));
            let line = line_to(p2(x1, y1), p2(x2, y2), 0);
            prop_assert_eq!(line.last(), Some(&p2(x2, y2)));
            prop_assert_eq!(line.len() as i32, crate::distance::square_dist(p2(x1, y1), p2(x2, y2)));
        }

        #[test]
        fn resume_continues_any_prefix(
            x in -40i32..40, y in -40i32..40, t in -6i32..6, split in 0usize..40,
        ) {
            let end = p2(x, y);
            let mut line = Line2::new(Point2::ZERO, end, t);
            let tail: Vec<_> = line.clone().skip(split).collect();
            for _ in 0..split {
                line.next();
            }
            let resumed = Line2::resume(Point2::ZERO, end, line.position(), line.error());
            prop_assert_eq!(resumed.collect::<Vec<_>>(), tail);
        }

        #[test]
        fn lines_are_idempotent(
            x in -50i32..50, y in -50i32..50, z in -50i32..50, t in -20i32..20,
        ) {
            prop_assert_eq!(line_to(Point2::ZERO, p2(x, y), t), line_to(Point2::ZERO, p2(x, y), t));
            prop_assert_eq!(
                line_to_3d(Point3::ZERO, p3(x, y, z), t, t),
                line_to_3d(Point3::ZERO, p3(x, y, z), t, t)
            );
        }
    }
}
