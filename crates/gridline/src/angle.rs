//! Scale-independent angle measure for planar offsets.

use gridline_core::Point2;

/// Tangent of 22.5 degrees: the boundary between a cardinal wedge and a
/// diagonal wedge when measured with [`get_normalized_angle`].
pub const TAN_22_5: f64 = 0.414_213_562_373_095_03;

/// The angle of `to - from` folded into the first octant, as the ratio of
/// the smaller to the larger absolute component.
///
/// Returns `0.0` for axis-aligned offsets (and for `from == to`), `1.0` for
/// exact diagonals in every quadrant, and values in between otherwise. The
/// result depends only on the direction of the offset, not its length.
pub fn get_normalized_angle(from: Point2, to: Point2) -> f64 {
    let d = (to - from).abs();
    let major = d.x.max(d.y);
    if major == 0 {
        return 0.0;
    }
    let minor = d.x.min(d.y);
    minor as f64 / major as f64
}
