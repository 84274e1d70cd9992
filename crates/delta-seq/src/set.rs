// SPDX-License-Identifier: MIT
//
// Keyed set diff.
//
// Elements in a `HashSet` are identified by their `Eq`/`Hash` key, but they
// may carry a payload that is *not* part of that key (a record with a stable
// id and mutable fields). Diffing two versions of such a set therefore has
// three outcomes per key:
//
//   key only in current   → added
//   key only in previous  → removed
//   key in both           → changed, if the payloads disagree
//
// "Payloads disagree" is decided by a `Comparator`. The default comparator
// treats every pair as equal, so a caller who does not pass one never sees
// `changed` entries, even when payloads differ. The enum keeps that default
// visible at every call site.

use std::collections::HashSet;
use std::hash::Hash;

use tracing::debug;

// ─── Comparator ──────────────────────────────────────────────────────────────

/// Decides whether two key-equal elements also carry the same value.
///
/// The closure receives `(previous, current)`.
pub enum Comparator<'a, T> {
    /// Every key-equal pair counts as unchanged. Nothing is ever reported
    /// in [`SetChanges::changed`].
    AlwaysEqual,

    /// Custom value equality. Returning `false` reports the current element
    /// as changed.
    Custom(&'a dyn Fn(&T, &T) -> bool),
}

impl<T> Comparator<'_, T> {
    /// Whether `previous` and `current` hold the same value.
    #[inline]
    #[must_use]
    pub fn same_value(&self, previous: &T, current: &T) -> bool {
        match self {
            Self::AlwaysEqual => true,
            Self::Custom(eq) => eq(previous, current),
        }
    }
}

// Manual impls: derives would demand `T: Clone` / `T: Default`.
impl<T> Clone for Comparator<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Comparator<'_, T> {}

impl<T> Default for Comparator<'_, T> {
    fn default() -> Self {
        Self::AlwaysEqual
    }
}

impl<T> std::fmt::Debug for Comparator<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlwaysEqual => write!(f, "Comparator::AlwaysEqual"),
            Self::Custom(_) => write!(f, "Comparator::Custom(..)"),
        }
    }
}

// ─── SetChanges ──────────────────────────────────────────────────────────────

/// Outcome of [`changes`]: which keys appeared, disappeared, or changed value.
///
/// `added` and `removed` never share an element. An element in `changed`
/// is the *current* version and is never also listed in `added`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetChanges<T: Eq + Hash> {
    pub added: HashSet<T>,
    pub removed: HashSet<T>,
    pub changed: HashSet<T>,
}

impl<T: Eq + Hash> SetChanges<T> {
    /// True when nothing was added, removed, or changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}

impl<T: Eq + Hash> Default for SetChanges<T> {
    fn default() -> Self {
        Self {
            added: HashSet::new(),
            removed: HashSet::new(),
            changed: HashSet::new(),
        }
    }
}

// ─── changes ─────────────────────────────────────────────────────────────────

/// Compute the changes that lead from `previous` to `current`.
///
/// Runs in O(n + m): every element of `current` is looked up in `previous`
/// by key once.
///
/// ```
/// use std::collections::HashSet;
/// use delta_seq::set::{changes, Comparator};
///
/// let previous: HashSet<_> = [1, 2, 3].into();
/// let current: HashSet<_> = [2, 3, 4].into();
/// let c = changes(&current, &previous, Comparator::AlwaysEqual);
/// assert_eq!(c.added, [4].into());
/// assert_eq!(c.removed, [1].into());
/// assert!(c.changed.is_empty());
/// ```
#[must_use]
pub fn changes<T>(
    current: &HashSet<T>,
    previous: &HashSet<T>,
    comparator: Comparator<'_, T>,
) -> SetChanges<T>
where
    T: Eq + Hash + Clone,
{
    let added: HashSet<T> = current.difference(previous).cloned().collect();
    let removed: HashSet<T> = previous.difference(current).cloned().collect();

    let changed: HashSet<T> = current
        .iter()
        .filter(|cur| {
            previous
                .get(*cur)
                .is_some_and(|prev| !comparator.same_value(prev, cur))
        })
        .cloned()
        .collect();

    debug!(
        added = added.len(),
        removed = removed.len(),
        changed = changed.len(),
        "set changes"
    );

    SetChanges {
        added,
        removed,
        changed,
    }
}

// ─── Keyed mutation ──────────────────────────────────────────────────────────

/// Remove the first element matching `predicate` (if any), then insert
/// `element`, replacing a key-equal element already present.
///
/// Afterwards `element` is always in the set. Returns the element removed
/// through `predicate`.
pub fn update_where<T, P>(set: &mut HashSet<T>, element: T, mut predicate: P) -> Option<T>
where
    T: Eq + Hash + Clone,
    P: FnMut(&T) -> bool,
{
    let candidate = set.iter().find(|e| predicate(e)).cloned();
    let removed = candidate.and_then(|c| set.take(&c));
    set.replace(element);
    removed
}

/// Replace the first element matching `predicate` with `element`.
///
/// If nothing matches, the set is left untouched and `element` is dropped.
/// Returns the element that was replaced.
pub fn replace_where<T, P>(set: &mut HashSet<T>, element: T, mut predicate: P) -> Option<T>
where
    T: Eq + Hash + Clone,
    P: FnMut(&T) -> bool,
{
    let candidate = set.iter().find(|e| predicate(e)).cloned()?;
    let removed = set.take(&candidate);
    set.insert(element);
    removed
}

// ─── SetExt ──────────────────────────────────────────────────────────────────

/// Method-call form of this module's functions.
pub trait SetExt<T: Eq + Hash> {
    /// See [`changes`]. `self` is the current version.
    #[must_use]
    fn changes_from(&self, previous: &Self, comparator: Comparator<'_, T>) -> SetChanges<T>;

    /// See [`update_where`].
    fn update_where<P: FnMut(&T) -> bool>(&mut self, element: T, predicate: P) -> Option<T>;

    /// See [`replace_where`].
    fn replace_where<P: FnMut(&T) -> bool>(&mut self, element: T, predicate: P) -> Option<T>;
}

impl<T: Eq + Hash + Clone> SetExt<T> for HashSet<T> {
    fn changes_from(&self, previous: &Self, comparator: Comparator<'_, T>) -> SetChanges<T> {
        changes(self, previous, comparator)
    }

    fn update_where<P: FnMut(&T) -> bool>(&mut self, element: T, predicate: P) -> Option<T> {
        update_where(self, element, predicate)
    }

    fn replace_where<P: FnMut(&T) -> bool>(&mut self, element: T, predicate: P) -> Option<T> {
        replace_where(self, element, predicate)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
