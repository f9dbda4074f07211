//! Test utilities for gridline development.
//!
//! Provides the reference line rasterizer used as an oracle
//! ([`reference_line_to`]), seeded random point generation
//! ([`PointSource`], configured by [`FuzzConfig`]), and the path contract
//! checks shared by the line tests ([`assert_line_3d`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod path;
pub mod points;
pub mod reference;

pub use config::{FuzzConfig, FuzzConfigBuilder, FuzzConfigError, MAX_COORDINATE_RANGE};
pub use path::{assert_connected, assert_line_3d, assert_no_duplicates};
pub use points::PointSource;
pub use reference::reference_line_to;
