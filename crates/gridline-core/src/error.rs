//! Error types for checked geometry conversions.
//!
//! The geometric functions themselves are total; these errors only arise
//! from the checked entry points that validate caller input up front.

use crate::point::Point3;
use std::error::Error;
use std::fmt;

/// Errors from checked direction and offset conversions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// An offset had a component outside `{-1, 0, 1}` where a unit-cube
    /// offset was required.
    NonUnitOffset {
        /// The offending offset.
        offset: Point3,
    },
    /// A direction index outside `0..27`.
    InvalidDirectionIndex {
        /// The offending index.
        index: u8,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonUnitOffset { offset } => {
                write!(f, "offset {offset} is not a unit-cube offset")
            }
            Self::InvalidDirectionIndex { index } => {
                write!(f, "direction index {index} out of range 0..27")
            }
        }
    }
}

impl Error for GeometryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_input() {
        let e = GeometryError::NonUnitOffset {
            offset: Point3::new(2, 0, 0),
        };
        assert_eq!(e.to_string(), "offset (2,0,0) is not a unit-cube offset");
        let e = GeometryError::InvalidDirectionIndex { index: 40 };
        assert_eq!(e.to_string(), "direction index 40 out of range 0..27");
    }
}
