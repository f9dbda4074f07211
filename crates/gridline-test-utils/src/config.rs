//! Configuration for randomized sweeps.

use std::error::Error;
use std::fmt;

/// Largest accepted coordinate range. Doubled deltas between two points in
/// `[-range, range]` must fit in `i32`.
pub const MAX_COORDINATE_RANGE: i32 = i32::MAX / 4;

/// Parameters of a seeded random sweep.
///
/// Constructed via [`FuzzConfig::builder`]; defaults match the reference
/// line regression sweep: seed 0, coordinates in `[-99, 99]`, 1000 cases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FuzzConfig {
    seed: u64,
    coordinate_range: i32,
    cases: usize,
}

impl FuzzConfig {
    /// Create a new builder.
    pub fn builder() -> FuzzConfigBuilder {
        FuzzConfigBuilder {
            seed: 0,
            coordinate_range: 99,
            cases: 1000,
        }
    }

    /// RNG seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Coordinates are drawn from `[-coordinate_range, coordinate_range]`.
    pub fn coordinate_range(&self) -> i32 {
        self.coordinate_range
    }

    /// Number of cases to generate.
    pub fn cases(&self) -> usize {
        self.cases
    }
}

impl Default for FuzzConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            coordinate_range: 99,
            cases: 1000,
        }
    }
}

/// Builder for [`FuzzConfig`].
pub struct FuzzConfigBuilder {
    seed: u64,
    coordinate_range: i32,
    cases: usize,
}

impl FuzzConfigBuilder {
    /// Set the RNG seed (default: 0).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the coordinate range (default: 99).
    pub fn coordinate_range(mut self, range: i32) -> Self {
        self.coordinate_range = range;
        self
    }

    /// Set the case count (default: 1000).
    pub fn cases(mut self, cases: usize) -> Self {
        self.cases = cases;
        self
    }

    /// Validate and build.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzConfigError::InvalidRange`] unless
    /// `0 < coordinate_range <= MAX_COORDINATE_RANGE`, and
    /// [`FuzzConfigError::NoCases`] if `cases == 0`.
    pub fn build(self) -> Result<FuzzConfig, FuzzConfigError> {
        if self.coordinate_range <= 0 || self.coordinate_range > MAX_COORDINATE_RANGE {
            return Err(FuzzConfigError::InvalidRange {
                range: self.coordinate_range,
            });
        }
        if self.cases == 0 {
            return Err(FuzzConfigError::NoCases);
        }
        Ok(FuzzConfig {
            seed: self.seed,
            coordinate_range: self.coordinate_range,
            cases: self.cases,
        })
    }
}

/// Errors from [`FuzzConfigBuilder::build`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FuzzConfigError {
    /// The coordinate range is not positive or is too large.
    InvalidRange {
        /// The rejected range.
        range: i32,
    },
    /// Zero cases requested.
    NoCases,
}

impl fmt::Display for FuzzConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { range } => write!(
                f,
                "coordinate range {range} must be in 1..={MAX_COORDINATE_RANGE}"
            ),
            Self::NoCases => write!(f, "at least one case is required"),
        }
    }
}

impl Error for FuzzConfigError {}
