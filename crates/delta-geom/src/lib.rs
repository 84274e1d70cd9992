//! # delta-geom: 2D vector arithmetic
//!
//! [`Vector2`] carries a plane displacement with length, normalization,
//! distance and angle helpers plus the usual vector and scalar operators.

pub mod vector;

pub use vector::Vector2;
