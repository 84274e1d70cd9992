// SPDX-License-Identifier: MIT
//
// deltakit: umbrella crate over three independent crates.
//
//   delta-seq   → positional diff, keyed set diff, vector/stack helpers
//   delta-color → XYZ/LAB conversion, CIE94, CIEDE2000, WCAG contrast, HSB
//   delta-geom  → 2D vector arithmetic
//
// None depends on another; this crate only re-exports them.

//! Change detection for collections, perceptual color metrics and 2D vectors.
//!
//! ```
//! use std::collections::HashSet;
//!
//! use deltakit::color::{ContrastLevel, Rgba};
//! use deltakit::seq::{Comparator, SetExt};
//!
//! let diff = deltakit::seq::positional::diff(&[1, 2, 3], &[1, 9]);
//! assert_eq!(diff.changed, vec![1]);
//! assert_eq!(diff.inserted, 2..3);
//!
//! let previous: HashSet<u32> = [1, 2].into();
//! let current: HashSet<u32> = [2, 3].into();
//! let changes = current.changes_from(&previous, Comparator::AlwaysEqual);
//! assert!(changes.added.contains(&3) && changes.removed.contains(&1));
//!
//! assert!(Rgba::BLACK.is_contrasting(&Rgba::WHITE, ContrastLevel::Strict));
//!
//! let step = deltakit::geom::Vector2::new(3.0, 4.0);
//! assert_eq!(step.length(), 5.0);
//! ```

pub use delta_color as color;
pub use delta_geom as geom;
pub use delta_seq as seq;
