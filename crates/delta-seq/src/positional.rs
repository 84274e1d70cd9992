// SPDX-License-Identifier: MIT
//
// Positional diff: index-by-index comparison of two versions of a sequence.
//
// This is the same idea as a frame diff: walk both versions with a single
// cursor and report every slot whose content differs. No alignment, no
// longest-common-subsequence search, no move detection. If an element is
// inserted at the front, every following index is reported as changed.
// Callers that feed list views rely on exactly that behavior.
//
//   previous: [3, 2, 1]
//   current:  [2, 2, 1, 4, 9]
//              ^        ^^^^
//              changed  inserted (3..5)

use std::ops::Range;

use tracing::trace;

// ─── PositionalDiff ──────────────────────────────────────────────────────────

/// Result of comparing two sequences slot by slot.
///
/// `changed` lists the overlapping indices whose elements differ, in
/// ascending order. At most one of `inserted` / `deleted` is non-empty:
/// the sequence either grew or shrank, never both. The empty one is always
/// `0..0`, so two diffs with the same changes compare equal whatever the
/// input lengths.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PositionalDiff {
    /// Indices in `0..min(len)` where `current[i] != previous[i]`.
    pub changed: Vec<usize>,
    /// Indices that exist only in `current` (the sequence grew).
    pub inserted: Range<usize>,
    /// Indices that exist only in `previous` (the sequence shrank).
    pub deleted: Range<usize>,
}

impl PositionalDiff {
    /// True when the two sequences were identical.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty() && self.inserted.is_empty() && self.deleted.is_empty()
    }

    /// Total number of affected slots (changed + inserted + deleted).
    #[inline]
    #[must_use]
    pub fn total_changes(&self) -> usize {
        self.changed.len() + self.inserted.len() + self.deleted.len()
    }
}

// ─── diff ────────────────────────────────────────────────────────────────────

/// Compare `current` against `previous` index by index.
///
/// ```
/// use delta_seq::positional::diff;
///
/// let d = diff(&[2, 2, 1, 4, 9], &[3, 2, 1]);
/// assert_eq!(d.changed, vec![0]);
/// assert_eq!(d.inserted, 3..5);
/// assert!(d.deleted.is_empty());
/// ```
#[must_use]
pub fn diff<T: PartialEq>(current: &[T], previous: &[T]) -> PositionalDiff {
    diff_by(current, previous, |a, b| a == b)
}

/// Like [`diff`], with an explicit equality function.
///
/// Useful when `T` has no `PartialEq` or when only part of each element
/// matters for change detection. `eq` receives `(current, previous)`.
#[must_use]
pub fn diff_by<T, F>(current: &[T], previous: &[T], mut eq: F) -> PositionalDiff
where
    F: FnMut(&T, &T) -> bool,
{
    let changed: Vec<usize> = current
        .iter()
        .zip(previous)
        .enumerate()
        .filter_map(|(i, (cur, prev))| (!eq(cur, prev)).then_some(i))
        .collect();

    let shared = current.len().min(previous.len());
    let longest = current.len().max(previous.len());
    let tail = shared..longest;

    let (inserted, deleted) = if current.len() > previous.len() {
        (tail, 0..0)
    } else if current.len() < previous.len() {
        (0..0, tail)
    } else {
        (0..0, 0..0)
    };

    trace!(
        changed = changed.len(),
        inserted = ?inserted,
        deleted = ?deleted,
        "positional diff"
    );

    PositionalDiff {
        changed,
        inserted,
        deleted,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
