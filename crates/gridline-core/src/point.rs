//! Integer grid points in two and three dimensions.
//!
//! Coordinates follow screen convention: north is `y - 1`, east is `x + 1`,
//! above is `z + 1`.

use smallvec::SmallVec;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// The 8 planar unit offsets in compass order: N, NE, E, SE, S, SW, W, NW.
const OFFSETS_8: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// A point on a 2D integer grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point2 {
    /// Column; grows eastward.
    pub x: i32,
    /// Row; grows southward.
    pub y: i32,
}

impl Point2 {
    /// The origin.
    pub const ZERO: Self = Self::new(0, 0);
    /// Unit offset one row up.
    pub const NORTH: Self = Self::new(0, -1);
    /// Unit offset up and right.
    pub const NORTH_EAST: Self = Self::new(1, -1);
    /// Unit offset one column right.
    pub const EAST: Self = Self::new(1, 0);
    /// Unit offset down and right.
    pub const SOUTH_EAST: Self = Self::new(1, 1);
    /// Unit offset one row down.
    pub const SOUTH: Self = Self::new(0, 1);
    /// Unit offset down and left.
    pub const SOUTH_WEST: Self = Self::new(-1, 1);
    /// Unit offset one column left.
    pub const WEST: Self = Self::new(-1, 0);
    /// Unit offset up and left.
    pub const NORTH_WEST: Self = Self::new(-1, -1);

    /// Create a point from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Componentwise absolute value.
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Componentwise sign, with `signum(0) == 0`.
    pub fn signum(self) -> Self {
        Self::new(self.x.signum(), self.y.signum())
    }

    /// The 8-connected neighbours in compass order, starting at north.
    pub fn neighbours(self) -> SmallVec<[Point2; 8]> {
        OFFSETS_8
            .iter()
            .map(|&(dx, dy)| self + Point2::new(dx, dy))
            .collect()
    }
}

/// A point on a 3D integer grid: a planar position plus a z-level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point3 {
    /// Column; grows eastward.
    pub x: i32,
    /// Row; grows southward.
    pub y: i32,
    /// Level; grows upward.
    pub z: i32,
}

impl Point3 {
    /// The origin.
    pub const ZERO: Self = Self::new(0, 0, 0);
    /// Unit offset one row up.
    pub const NORTH: Self = Self::new(0, -1, 0);
    /// Unit offset up and right.
    pub const NORTH_EAST: Self = Self::new(1, -1, 0);
    /// Unit offset one column right.
    pub const EAST: Self = Self::new(1, 0, 0);
    /// Unit offset down and right.
    pub const SOUTH_EAST: Self = Self::new(1, 1, 0);
    /// Unit offset one row down.
    pub const SOUTH: Self = Self::new(0, 1, 0);
    /// Unit offset down and left.
    pub const SOUTH_WEST: Self = Self::new(-1, 1, 0);
    /// Unit offset one column left.
    pub const WEST: Self = Self::new(-1, 0, 0);
    /// Unit offset up and left.
    pub const NORTH_WEST: Self = Self::new(-1, -1, 0);
    /// Unit offset one level up.
    pub const ABOVE: Self = Self::new(0, 0, 1);
    /// Unit offset one level down.
    pub const BELOW: Self = Self::new(0, 0, -1);

    /// Create a point from its components.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Lift a planar point onto level `z`.
    pub const fn from_xy(p: Point2, z: i32) -> Self {
        Self::new(p.x, p.y, z)
    }

    /// The planar part of this point.
    pub const fn xy(self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Componentwise absolute value.
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Componentwise sign, with `signum(0) == 0`.
    pub fn signum(self) -> Self {
        Self::new(self.x.signum(), self.y.signum(), self.z.signum())
    }

    /// The 8 same-level neighbours in compass order, starting at north.
    pub fn neighbours(self) -> SmallVec<[Point3; 8]> {
        self.xy()
            .neighbours()
            .into_iter()
            .map(|p| Point3::from_xy(p, self.z))
            .collect()
    }
}

impl From<Point2> for Point3 {
    fn from(p: Point2) -> Self {
        Self::from_xy(p, 0)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

macro_rules! impl_point_ops {
    ($ty:ident { $($field:ident),+ }) => {
        impl Add for $ty {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl Sub for $ty {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl Neg for $ty {
            type Output = Self;
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl Mul<i32> for $ty {
            type Output = Self;
            fn mul(self, k: i32) -> Self {
                Self { $($field: self.$field * k),+ }
            }
        }

        impl AddAssign for $ty {
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl SubAssign for $ty {
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field -= rhs.$field;)+
            }
        }
    };
}

impl_point_ops!(Point2 { x, y });
impl_point_ops!(Point3 { x, y, z });
