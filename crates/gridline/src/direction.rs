//! The 27 discrete directions of a 3D grid and the classifiers that map
//! offsets onto them.
//!
//! A [`Direction`] pairs a [`Compass`] label (one of the 8 octants, or
//! center) with a [`VerticalBand`]. The discriminant order is fixed so that
//! external name tables can be indexed by [`Direction::index`]:
//! `(x + 1) + 3 * (y + 1) + 9 * (1 - z)` for the direction's unit offset.

use gridline_core::{GeometryError, Point2, Point3};

/// Planar component of a direction: an 8-way compass octant or center.
///
/// Declared in row-major screen order, north-west first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Compass {
    /// `(-1, -1)`.
    NorthWest,
    /// `(0, -1)`.
    North,
    /// `(1, -1)`.
    NorthEast,
    /// `(-1, 0)`.
    West,
    /// `(0, 0)`.
    Center,
    /// `(1, 0)`.
    East,
    /// `(-1, 1)`.
    SouthWest,
    /// `(0, 1)`.
    South,
    /// `(1, 1)`.
    SouthEast,
}

impl Compass {
    /// All labels in declaration order.
    pub const ALL: [Compass; 9] = [
        Compass::NorthWest,
        Compass::North,
        Compass::NorthEast,
        Compass::West,
        Compass::Center,
        Compass::East,
        Compass::SouthWest,
        Compass::South,
        Compass::SouthEast,
    ];

    /// Label for a planar offset whose components are reduced to their sign.
    pub fn from_unit(offset: Point2) -> Self {
        let s = offset.signum();
        Self::ALL[((s.x + 1) + 3 * (s.y + 1)) as usize]
    }

    /// The unit offset this label points along.
    pub fn offset(self) -> Point2 {
        match self {
            Compass::NorthWest => Point2::NORTH_WEST,
            Compass::North => Point2::NORTH,
            Compass::NorthEast => Point2::NORTH_EAST,
            Compass::West => Point2::WEST,
            Compass::Center => Point2::ZERO,
            Compass::East => Point2::EAST,
            Compass::SouthWest => Point2::SOUTH_WEST,
            Compass::South => Point2::SOUTH,
            Compass::SouthEast => Point2::SOUTH_EAST,
        }
    }
}

/// Vertical component of a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VerticalBand {
    /// `z > 0`.
    Above,
    /// `z == 0`.
    Same,
    /// `z < 0`.
    Below,
}

impl VerticalBand {
    /// All bands in declaration order.
    pub const ALL: [VerticalBand; 3] = [
        VerticalBand::Above,
        VerticalBand::Same,
        VerticalBand::Below,
    ];

    /// Band from the sign of a z offset.
    pub fn from_z(z: i32) -> Self {
        match z.signum() {
            1 => VerticalBand::Above,
            -1 => VerticalBand::Below,
            _ => VerticalBand::Same,
        }
    }

    /// Unit z offset of this band.
    pub fn dz(self) -> i32 {
        match self {
            VerticalBand::Above => 1,
            VerticalBand::Same => 0,
            VerticalBand::Below => -1,
        }
    }
}

/// One of the 27 discrete directions on a 3D grid.
///
/// Variants are declared in discriminant order, so the derived `Ord` and
/// [`Direction::index`] agree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Direction {
    AboveNorthWest = 0,
    AboveNorth,
    AboveNorthEast,
    AboveWest,
    AboveCenter,
    AboveEast,
    AboveSouthWest,
    AboveSouth,
    AboveSouthEast,
    NorthWest = 9,
    North,
    NorthEast,
    West,
    Center,
    East,
    SouthWest,
    South,
    SouthEast,
    BelowNorthWest = 18,
    BelowNorth,
    BelowNorthEast,
    BelowWest,
    BelowCenter,
    BelowEast,
    BelowSouthWest,
    BelowSouth,
    BelowSouthEast,
}

impl Direction {
    /// All 27 directions in index order.
    pub const ALL: [Direction; 27] = [
        Direction::AboveNorthWest,
        Direction::AboveNorth,
        Direction::AboveNorthEast,
        Direction::AboveWest,
        Direction::AboveCenter,
        Direction::AboveEast,
        Direction::AboveSouthWest,
        Direction::AboveSouth,
        Direction::AboveSouthEast,
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::West,
        Direction::Center,
        Direction::East,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
        Direction::BelowNorthWest,
        Direction::BelowNorth,
        Direction::BelowNorthEast,
        Direction::BelowWest,
        Direction::BelowCenter,
        Direction::BelowEast,
        Direction::BelowSouthWest,
        Direction::BelowSouth,
        Direction::BelowSouthEast,
    ];

    /// Combine a planar label and a vertical band.
    pub const fn compose(compass: Compass, band: VerticalBand) -> Self {
        use Compass as C;
        use Direction as D;
        use VerticalBand as V;
        match (compass, band) {
            (C::NorthWest, V::Above) => D::AboveNorthWest,
            (C::North, V::Above) => D::AboveNorth,
            (C::NorthEast, V::Above) => D::AboveNorthEast,
            (C::West, V::Above) => D::AboveWest,
            (C::Center, V::Above) => D::AboveCenter,
            (C::East, V::Above) => D::AboveEast,
            (C::SouthWest, V::Above) => D::AboveSouthWest,
            (C::South, V::Above) => D::AboveSouth,
            (C::SouthEast, V::Above) => D::AboveSouthEast,
            (C::NorthWest, V::Same) => D::NorthWest,
            (C::North, V::Same) => D::North,
            (C::NorthEast, V::Same) => D::NorthEast,
            (C::West, V::Same) => D::West,
            (C::Center, V::Same) => D::Center,
            (C::East, V::Same) => D::East,
            (C::SouthWest, V::Same) => D::SouthWest,
            (C::South, V::Same) => D::South,
            (C::SouthEast, V::Same) => D::SouthEast,
            (C::NorthWest, V::Below) => D::BelowNorthWest,
            (C::North, V::Below) => D::BelowNorth,
            (C::NorthEast, V::Below) => D::BelowNorthEast,
            (C::West, V::Below) => D::BelowWest,
            (C::Center, V::Below) => D::BelowCenter,
            (C::East, V::Below) => D::BelowEast,
            (C::SouthWest, V::Below) => D::BelowSouthWest,
            (C::South, V::Below) => D::BelowSouth,
            (C::SouthEast, V::Below) => D::BelowSouthEast,
        }
    }

    /// Stable position of this direction in [`Direction::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Planar component.
    pub fn compass(self) -> Compass {
        Compass::ALL[self.index() % 9]
    }

    /// Vertical component.
    pub fn band(self) -> VerticalBand {
        VerticalBand::ALL[self.index() / 9]
    }

    /// The unit-cube offset this direction points along.
    pub fn offset(self) -> Point3 {
        Point3::from_xy(self.compass().offset(), self.band().dz())
    }

    /// The direction pointing the opposite way. `Center` is its own opposite.
    pub fn opposite(self) -> Self {
        make_xyz_unit(-self.offset())
    }

    /// Classify an arbitrary offset; identical to [`make_xyz`].
    pub fn from_offset(offset: Point3) -> Self {
        make_xyz(offset)
    }

    /// Checked form of [`make_xyz_unit`].
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonUnitOffset`] if any component of
    /// `offset` lies outside `{-1, 0, 1}`.
    pub fn try_from_unit(offset: Point3) -> Result<Self, GeometryError> {
        let unit = |v: i32| (-1..=1).contains(&v);
        if unit(offset.x) && unit(offset.y) && unit(offset.z) {
            Ok(make_xyz_unit(offset))
        } else {
            Err(GeometryError::NonUnitOffset { offset })
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = GeometryError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Direction::ALL
            .get(index as usize)
            .copied()
            .ok_or(GeometryError::InvalidDirectionIndex { index })
    }
}

/// Direction of a unit-cube offset by direct table lookup.
///
/// Components outside `{-1, 0, 1}` are reduced to their sign first, so
/// `(0, -1, -2)` is [`Direction::BelowNorth`]. Use
/// [`Direction::try_from_unit`] to reject such offsets instead.
pub fn make_xyz_unit(offset: Point3) -> Direction {
    Direction::compose(Compass::from_unit(offset.xy()), VerticalBand::from_z(offset.z))
}

/// Classify an offset of any magnitude into one of the 27 directions.
///
/// The band comes from the sign of `z`. The planar label is center when
/// `x == y == 0`; otherwise each compass label owns a 45 degree wedge
/// centred on its axis or diagonal. Offsets whose normalized angle (see
/// [`get_normalized_angle`](crate::angle::get_normalized_angle)) is below
/// tan(22.5 degrees) go to the axis of the larger component, the rest to
/// the diagonal.
///
/// The wedge test is done in integers, so it is exact for every `i32`
/// offset. No integer offset sits exactly on a wedge boundary.
pub fn make_xyz(offset: Point3) -> Direction {
    let band = VerticalBand::from_z(offset.z);
    let p = offset.xy();
    if p == Point2::ZERO {
        return Direction::compose(Compass::Center, band);
    }
    let s = p.signum();
    let unit = if within_axis_wedge(p) {
        if p.x.abs() > p.y.abs() {
            Point2::new(s.x, 0)
        } else {
            Point2::new(0, s.y)
        }
    } else {
        s
    };
    Direction::compose(Compass::from_unit(unit), band)
}

/// `min / max < tan(22.5)`, i.e. `min / max < sqrt(2) - 1`, rearranged to
/// `(min + max)^2 < 2 * max^2`.
fn within_axis_wedge(p: Point2) -> bool {
    let major = u128::from(p.x.unsigned_abs().max(p.y.unsigned_abs()));
    let minor = u128::from(p.x.unsigned_abs().min(p.y.unsigned_abs()));
    (minor + major).pow(2) < 2 * major.pow(2)
}

/// Direction from `origin` towards `target`.
pub fn direction_from(origin: Point3, target: Point3) -> Direction {
    make_xyz(target - origin)
}

/// Planar direction from `origin` towards `target`; always in the
/// [`VerticalBand::Same`] band.
pub fn direction_from_2d(origin: Point2, target: Point2) -> Direction {
    make_xyz(Point3::from_xy(target - origin, 0))
}
