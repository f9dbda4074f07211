//! Discrete-grid geometry: integer lines, directions and proximity steps.
//!
//! Every function here is pure. The only state that survives a call is what
//! the caller chooses to thread back in, such as the error term of a line.
//!
//! # Modules
//!
//! - [`line`]: 2D and 3D Bresenham rasterization ([`line_to`],
//!   [`bresenham_3d`]) with resumable error terms and cancellable callbacks
//! - [`direction`]: the 27 [`Direction`]s and the classifiers
//!   [`make_xyz`] and [`make_xyz_unit`]
//! - [`angle`]: the scale-independent [`get_normalized_angle`]
//! - [`proximity`]: [`squares_closer_to`] and ring enumeration
//! - [`distance`]: [`trig_dist`] and the integer grid metrics
//!
//! # Example
//!
//! ```
//! use gridline::{line_to, squares_closer_to, Direction, Point2, Point3};
//!
//! let line = line_to(Point2::ZERO, Point2::new(4, 2), 0);
//! assert_eq!(line.last(), Some(&Point2::new(4, 2)));
//!
//! let steps = squares_closer_to(Point3::ZERO, Point3::new(10, 0, 0));
//! assert_eq!(steps[0], Point3::EAST);
//!
//! assert_eq!(Direction::from_offset(Point3::new(-22, -60, 0)), Direction::North);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod angle;
pub mod direction;
pub mod distance;
pub mod line;
pub mod proximity;

pub use angle::get_normalized_angle;
pub use direction::{
    direction_from, direction_from_2d, make_xyz, make_xyz_unit, Compass, Direction, VerticalBand,
};
pub use distance::{
    manhattan_dist, octile_dist, rl_dist, square_dist, square_dist_3d, trig_dist, trig_dist_3d,
    DistanceMetric,
};
pub use gridline_core::{GeometryError, Point2, Point3};
pub use line::{
    bresenham_2d, bresenham_3d, continue_line, line_to, line_to_3d, squares_in_direction, Line2,
    Line3,
};
pub use proximity::{closest_points_first, squares_closer_to, squares_closer_to_2d};
