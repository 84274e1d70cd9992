//! # delta-seq: change detection for ordered and keyed collections
//!
//! Two ways to compare an old and a new version of a collection:
//!
//! - **[`positional`]**: slot-by-slot comparison of two sequences. Reports
//!   changed indices plus the range that was appended or truncated. No
//!   realignment: an insert at the front shows up as a run of changes.
//! - **[`set`]**: keyed comparison of two `HashSet`s. Elements are matched
//!   by their `Eq`/`Hash` key; a [`Comparator`](set::Comparator) decides
//!   whether a key that exists in both versions changed its value.
//!
//! Supporting modules:
//!
//! - **[`slice`]**: bounds-checked vector/slice helpers (conditional append,
//!   sorted insertion, chunking, stable de-duplication)
//! - **[`stack`]**: LIFO stack with an optional capacity limit
//! - **[`bounds`]**: clamping and range checks for `PartialOrd` values
//!
//! Everything is pure and synchronous. Results are plain owned values.

pub mod bounds;
pub mod positional;
pub mod set;
pub mod slice;
pub mod stack;

pub use positional::PositionalDiff;
pub use set::{Comparator, SetChanges, SetExt};
pub use slice::VecExt;
pub use stack::Stack;
