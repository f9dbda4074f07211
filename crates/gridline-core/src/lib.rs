//! Core types for the gridline geometry crates.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! integer point types every other gridline crate passes around, and the
//! error type for checked conversions.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod point;

pub use error::GeometryError;
pub use point::{Point2, Point3};
