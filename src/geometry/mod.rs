//! Scalar and 2D geometry primitives.
//!
//! This module provides the small building blocks the rest of the library
//! computes with:
//! - [`clamp`] for bounding a scalar into a window
//! - [`Point`] for positions in the output coordinate space
//! - [`Vector`] for displacements between points

mod clamp;
mod point;
mod vector;

pub use clamp::clamp;
pub use point::Point;
pub use vector::Vector;
