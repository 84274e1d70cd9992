//! # delta-color: perceptual color metrics
//!
//! Measures how different two colors look and whether they are legible
//! against each other.
//!
//! # Architecture
//!
//! ```text
//! Rgba (sRGB 0–1 + alpha)
//!     │
//!     ├──► space.rs:    linearize ×100 → XYZ (D65) → LAB
//!     │        │
//!     │        ▼
//!     │    delta_e.rs:  CIE94, CIEDE2000, DeltaECategory
//!     │
//!     ├──► contrast.rs: WCAG relative luminance → contrast ratio → level
//!     │
//!     └──► color.rs:    HSB hue, darker
//! ```
//!
//! Every function is pure and total over finite input. The only fallible
//! operation is hex parsing, which reports [`ParseColorError`].

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// L/C/H primes and their deltas are inherently similar names.
#![allow(clippy::similar_names)]

pub mod color;
pub mod contrast;
pub mod delta_e;
pub mod error;
pub mod space;

pub use color::Rgba;
pub use contrast::ContrastLevel;
pub use delta_e::{Cie94Weights, DeltaECategory};
pub use error::ParseColorError;
pub use space::{Lab, Xyz};
