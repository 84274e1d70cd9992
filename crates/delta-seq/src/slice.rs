//! Vector and slice helpers.
//!
//! Small, bounds-checked building blocks that sit next to the diff functions:
//! conditional appends, sorted insertion, safe removal, chunking and
//! de-duplication. Nothing here panics on an out-of-range index; misses are
//! reported through `Option` or simply ignored where that is the documented
//! behavior.
//!
//! Element equality is `PartialEq` only, so these work on types that cannot
//! be hashed. The quadratic ones (`dedup_stable`, `unique_elements`,
//! `overlap`) are meant for the short lists they are used on.

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::{Bound, RangeBounds};

// ---------------------------------------------------------------------------
// VecExt
// ---------------------------------------------------------------------------

/// In-place helpers for `Vec<T>`.
pub trait VecExt<T> {
    /// Push `element` unless an equal element is already present.
    ///
    /// Returns whether it was appended, and the member that is in the
    /// vector afterwards (the existing one when nothing was appended).
    fn append_if_new(&mut self, element: T) -> (bool, &T)
    where
        T: PartialEq;

    /// Overwrite the first element equal to `element`, or push it.
    ///
    /// Returns `true` when an existing element was overwritten.
    fn append_or_overwrite(&mut self, element: T) -> bool
    where
        T: PartialEq;

    /// Insert at `index`, or at the end if `index` is past it. Returns the
    /// index actually used.
    fn insert_clamped(&mut self, element: T, index: usize) -> usize;

    /// Remove and return the element at `index`, if it exists.
    fn remove_at(&mut self, index: usize) -> Option<T>;

    /// Remove the first element equal to `element`.
    fn remove_first(&mut self, element: &T) -> Option<T>
    where
        T: PartialEq;

    /// Remove the first element matching `predicate`.
    fn remove_first_where<P: FnMut(&T) -> bool>(&mut self, predicate: P) -> Option<T>;

    /// Pop up to `k` elements from the end, last element first.
    fn pop_last_n(&mut self, k: usize) -> Vec<T>;

    /// Remove every listed index. Out-of-range and duplicate indexes are
    /// ignored; removal runs from the highest index down so the others stay
    /// valid.
    fn remove_indexes(&mut self, indexes: &[usize]);

    /// Remove duplicates, keeping the first occurrence of each value in
    /// its original order.
    fn dedup_stable(&mut self)
    where
        T: PartialEq;

    /// Insert into a vector sorted by `is_before`, returning the index used.
    /// See [`insertion_index`].
    fn insert_sorted<F: FnMut(&T, &T) -> bool>(&mut self, element: T, is_before: F) -> usize;
}

impl<T> VecExt<T> for Vec<T> {
    fn append_if_new(&mut self, element: T) -> (bool, &T)
    where
        T: PartialEq,
    {
        if let Some(i) = self.iter().position(|e| *e == element) {
            return (false, &self[i]);
        }
        let i = self.len();
        self.push(element);
        (true, &self[i])
    }

    fn append_or_overwrite(&mut self, element: T) -> bool
    where
        T: PartialEq,
    {
        if let Some(slot) = self.iter_mut().find(|e| **e == element) {
            *slot = element;
            true
        } else {
            self.push(element);
            false
        }
    }

    fn insert_clamped(&mut self, element: T, index: usize) -> usize {
        let index = index.min(self.len());
        self.insert(index, element);
        index
    }

    fn remove_at(&mut self, index: usize) -> Option<T> {
        (index < self.len()).then(|| self.remove(index))
    }

    fn remove_first(&mut self, element: &T) -> Option<T>
    where
        T: PartialEq,
    {
        self.remove_first_where(|e| e == element)
    }

    fn remove_first_where<P: FnMut(&T) -> bool>(&mut self, predicate: P) -> Option<T> {
        let index = self.iter().position(predicate)?;
        Some(self.remove(index))
    }

    fn pop_last_n(&mut self, k: usize) -> Vec<T> {
        let split = self.len().saturating_sub(k);
        let mut popped = self.split_off(split);
        popped.reverse();
        popped
    }

    fn remove_indexes(&mut self, indexes: &[usize]) {
        let mut sorted = indexes.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.dedup();
        for index in sorted {
            let _ = self.remove_at(index);
        }
    }

    fn dedup_stable(&mut self)
    where
        T: PartialEq,
    {
        let mut kept: Self = Self::with_capacity(self.len());
        for value in self.drain(..) {
            if !kept.contains(&value) {
                kept.push(value);
            }
        }
        *self = kept;
    }

    fn insert_sorted<F: FnMut(&T, &T) -> bool>(&mut self, element: T, is_before: F) -> usize {
        let index = insertion_index(self, &element, is_before);
        self.insert(index, element);
        index
    }
}

// ---------------------------------------------------------------------------
// Slice functions
// ---------------------------------------------------------------------------

/// Binary-search the index at which `element` belongs in `slice`, which must
/// be sorted by the strict ordering `is_before`.
///
/// If an element that is neither before nor after `element` exists, the
/// index of the first such element hit by the search is returned; otherwise
/// the index where inserting keeps the slice sorted.
///
/// The search window is inclusive (`lo..=hi`, `mid = (lo + hi) / 2`), so
/// in a run of equal elements the first midpoint lands left of center:
/// `[5, 5, 5, 5]` yields 1.
pub fn insertion_index<T, F>(slice: &[T], element: &T, mut is_before: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut lo = 0;
    let Some(mut hi) = slice.len().checked_sub(1) else {
        return 0;
    };
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        if is_before(&slice[mid], element) {
            lo = mid + 1;
        } else if is_before(element, &slice[mid]) {
            match mid.checked_sub(1) {
                Some(below) => hi = below,
                None => break,
            }
        } else {
            return mid;
        }
    }
    lo
}

/// Split into owned chunks of `size` elements; the last may be shorter.
/// A `size` of 0 yields no chunks.
#[must_use]
pub fn chunked<T: Clone>(slice: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }
    slice.chunks(size).map(<[T]>::to_vec).collect()
}

/// Copy of `slice` with duplicates removed, first occurrences kept in order.
#[must_use]
pub fn deduplicated<T: PartialEq + Clone>(slice: &[T]) -> Vec<T> {
    let mut v = slice.to_vec();
    v.dedup_stable();
    v
}

/// Split into the unique values (first occurrences, in order) and the
/// indexes of every later duplicate that was filtered out.
#[must_use]
pub fn unique_elements<T: PartialEq + Clone>(slice: &[T]) -> (Vec<T>, Vec<usize>) {
    let mut uniques: Vec<T> = Vec::new();
    let mut filtered = Vec::new();
    for (i, value) in slice.iter().enumerate() {
        if uniques.contains(value) {
            filtered.push(i);
        } else {
            uniques.push(value.clone());
        }
    }
    (uniques, filtered)
}

/// Indexes of the elements of `slice` that also occur in `other`.
#[must_use]
pub fn overlap<T: PartialEq>(slice: &[T], other: &[T]) -> Vec<usize> {
    slice
        .iter()
        .enumerate()
        .filter_map(|(i, e)| other.contains(e).then_some(i))
        .collect()
}

/// Copy of `slice` with `element` pushed, unless an equal element is
/// already present.
#[must_use]
pub fn appended_if_new<T: PartialEq + Clone>(slice: &[T], element: T) -> Vec<T> {
    let mut v = slice.to_vec();
    if !v.contains(&element) {
        v.push(element);
    }
    v
}

/// Copy of `slice` without any element equal to one in `remove`.
#[must_use]
pub fn filter_out<T: PartialEq + Clone>(slice: &[T], remove: &[T]) -> Vec<T> {
    slice
        .iter()
        .filter(|e| !remove.contains(e))
        .cloned()
        .collect()
}

/// Map each element by the key `key_of` selects. On duplicate keys the
/// later element wins.
#[must_use]
pub fn index_by<T, K, F>(slice: &[T], mut key_of: F) -> HashMap<K, T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    slice.iter().map(|e| (key_of(e), e.clone())).collect()
}

/// Whether every element equals the first. True for 0 or 1 elements.
#[must_use]
pub fn all_equal<T: PartialEq>(slice: &[T]) -> bool {
    slice
        .split_first()
        .is_none_or(|(first, rest)| rest.iter().all(|e| e == first))
}

/// Whether every element of `slice` also occurs in `other`.
#[must_use]
pub fn all_contained_in<T: PartialEq>(slice: &[T], other: &[T]) -> bool {
    slice.iter().all(|e| other.contains(e))
}

/// Subslice for `range`, with both bounds clamped into the slice.
///
/// Negative starts clamp to 0, ends past the slice clamp to its length.
/// Returns `None` when nothing of the range falls inside the slice
/// (including every range over an empty slice).
#[must_use]
pub fn clamped_subslice<T, R: RangeBounds<isize>>(slice: &[T], range: R) -> Option<&[T]> {
    let len = isize::try_from(slice.len()).unwrap_or(isize::MAX);
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e.saturating_add(1),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };

    let start = usize::try_from(start.clamp(0, len)).ok()?;
    let end = usize::try_from(end.clamp(0, len)).ok()?;
    (start < end).then(|| &slice[start..end])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    // ── Appending ───────────────────────────────────────────────────

    #[test]
    fn append_if_new_skips_existing() {
        let mut v = vec![1, 2, 3];
        let (appended, member) = v.append_if_new(2);
        assert!(!appended);
        assert_eq!(*member, 2);
        assert_eq!(v, vec![1, 2, 3]);

        let (appended, member) = v.append_if_new(4);
        assert!(appended);
        assert_eq!(*member, 4);
        assert_eq!(v, vec![1, 2, 3, 4]);
    }

    #[test]
    fn append_or_overwrite_replaces_first_match() {
        #[derive(Debug, Clone)]
        struct Tagged(u8, &'static str);
        impl PartialEq for Tagged {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        let mut v = vec![Tagged(1, "a"), Tagged(2, "b")];
        assert!(v.append_or_overwrite(Tagged(2, "B")));
        assert_eq!(v[1].1, "B");
        assert!(!v.append_or_overwrite(Tagged(3, "c")));
        assert_eq!(v.len(), 3);
    }

    // ── Insertion ───────────────────────────────────────────────────

    #[test]
    fn insert_clamped_past_end_appends() {
        let mut v = vec![1, 2];
        assert_eq!(v.insert_clamped(9, 100), 2);
        assert_eq!(v.insert_clamped(0, 0), 0);
        assert_eq!(v, vec![0, 1, 2, 9]);
    }

    #[test]
    fn insertion_index_finds_slot() {
        let v = [1, 3, 5, 7];
        assert_eq!(insertion_index(&v, &0, |a, b| a < b), 0);
        assert_eq!(insertion_index(&v, &4, |a, b| a < b), 2);
        assert_eq!(insertion_index(&v, &8, |a, b| a < b), 4);
        assert_eq!(insertion_index(&v, &5, |a, b| a < b), 2);
        assert_eq!(insertion_index::<i32, _>(&[], &5, |a, b| a < b), 0);
    }

    #[test]
    fn insertion_index_among_equal_run() {
        let lt = |a: &i32, b: &i32| a < b;
        assert_eq!(insertion_index(&[5, 5, 5, 5], &5, lt), 1);
        assert_eq!(insertion_index(&[1, 3, 3, 3, 7], &3, lt), 2);
        assert_eq!(insertion_index(&[3, 3], &3, lt), 0);
        assert_eq!(insertion_index(&[4], &2, lt), 0);
    }

    #[test]
    fn insert_sorted_lands_inside_equal_run() {
        // Ordered by key only; the payload tells the entries apart.
        let mut v = vec![(5, 'a'), (5, 'b'), (5, 'c'), (5, 'd')];
        let i = v.insert_sorted((5, 'x'), |a, b| a.0 < b.0);
        assert_eq!(i, 1);
        assert_eq!(v, vec![(5, 'a'), (5, 'x'), (5, 'b'), (5, 'c'), (5, 'd')]);
    }

    #[test]
    fn insert_sorted_descending() {
        let mut v = vec![9, 5, 1];
        let i = v.insert_sorted(6, |a, b| a > b);
        assert_eq!(i, 1);
        assert_eq!(v, vec![9, 6, 5, 1]);
    }

    // ── Removal ─────────────────────────────────────────────────────

    #[test]
    fn remove_at_out_of_range_is_none() {
        let mut v = vec!['a', 'b'];
        assert_eq!(v.remove_at(5), None);
        assert_eq!(v.remove_at(0), Some('a'));
        assert_eq!(v, vec!['b']);
    }

    #[test]
    fn remove_first_only_first() {
        let mut v = vec![1, 2, 1, 2];
        assert_eq!(v.remove_first(&2), Some(2));
        assert_eq!(v, vec![1, 1, 2]);
        assert_eq!(v.remove_first(&7), None);
        assert_eq!(v.remove_first_where(|&x| x > 1), Some(2));
        assert_eq!(v, vec![1, 1]);
    }

    #[test]
    fn pop_last_n_returns_last_first() {
        let mut v = vec![1, 2, 3, 4, 5];
        assert_eq!(v.pop_last_n(2), vec![5, 4]);
        assert_eq!(v, vec![1, 2, 3]);
        assert_eq!(v.pop_last_n(10), vec![3, 2, 1]);
        assert!(v.is_empty());
    }

    #[test]
    fn remove_indexes_high_to_low() {
        let mut v = vec!['a', 'b', 'c', 'd', 'e'];
        v.remove_indexes(&[1, 3, 3, 42]);
        assert_eq!(v, vec!['a', 'c', 'e']);
    }

    // ── Duplicates ──────────────────────────────────────────────────

    #[test]
    fn dedup_stable_keeps_first_occurrence() {
        let mut v = vec![3, 1, 3, 2, 1];
        v.dedup_stable();
        assert_eq!(v, vec![3, 1, 2]);
        assert_eq!(deduplicated(&[1, 1, 1]), vec![1]);
    }

    #[test]
    fn unique_elements_reports_filtered_indexes() {
        let (uniques, filtered) = unique_elements(&["a", "b", "a", "c", "b"]);
        assert_eq!(uniques, vec!["a", "b", "c"]);
        assert_eq!(filtered, vec![2, 4]);
    }

    // ── Queries ─────────────────────────────────────────────────────

    #[test]
    fn overlap_indexes() {
        assert_eq!(overlap(&[1, 2, 3, 4], &[4, 2, 9]), vec![1, 3]);
        assert!(overlap(&[1, 2], &[]).is_empty());
    }

    #[test]
    fn all_equal_cases() {
        assert!(all_equal::<u8>(&[]));
        assert!(all_equal(&[7]));
        assert!(all_equal(&[7, 7, 7]));
        assert!(!all_equal(&[7, 7, 8]));
    }

    #[test]
    fn all_contained_in_is_subset_check() {
        assert!(all_contained_in(&[1, 2], &[3, 2, 1]));
        assert!(!all_contained_in(&[1, 4], &[3, 2, 1]));
        assert!(all_contained_in::<u8>(&[], &[]));
    }

    #[test]
    fn chunked_splits_evenly() {
        assert_eq!(chunked(&[1, 2, 3, 4, 5], 2), vec![vec![1, 2], vec![3, 4], vec![5]]);
        assert!(chunked(&[1, 2, 3], 0).is_empty());
        assert!(chunked::<u8>(&[], 3).is_empty());
    }

    // ── clamped_subslice ────────────────────────────────────────────

    #[test]
    fn subslice_within_bounds() {
        let v = [0, 1, 2, 3, 4, 5, 6, 7];
        assert_eq!(clamped_subslice(&v, 0..3), Some(&[0, 1, 2][..]));
    }

    #[test]
    fn subslice_upper_bound_out_of_range() {
        let v = [0, 1, 2, 3, 4, 5, 6, 7];
        assert_eq!(clamped_subslice(&v, 5..=9), Some(&[5, 6, 7][..]));
    }

    #[test]
    fn subslice_both_bounds_out_of_range() {
        let v = [0, 1, 2, 3, 4, 5, 6, 7];
        assert_eq!(clamped_subslice(&v, -5..=9), Some(&v[..]));
    }

    #[test]
    fn subslice_empty_collection_is_none() {
        assert_eq!(clamped_subslice::<i32, _>(&[], -5..=9), None);
    }

    #[test]
    fn subslice_single_element() {
        assert_eq!(clamped_subslice(&[0], 0..=1), Some(&[0][..]));
        assert_eq!(clamped_subslice(&[0], 3..), None);
    }

    // ── Copies ──────────────────────────────────────────────────────

    #[test]
    fn appended_if_new_leaves_source_alone() {
        let v = [1, 2];
        assert_eq!(appended_if_new(&v, 3), vec![1, 2, 3]);
        assert_eq!(appended_if_new(&v, 2), vec![1, 2]);
        assert_eq!(v, [1, 2]);
    }

    #[test]
    fn filter_out_removes_every_listed_value() {
        let v = ['a', 'b', 'a', 'c', 'd'];
        assert_eq!(filter_out(&v, &['a', 'd']), vec!['b', 'c']);
        assert_eq!(filter_out(&v, &[]), v.to_vec());
        assert_eq!(filter_out(&v, &['z']), v.to_vec());
    }

    #[test]
    fn index_by_keeps_last_on_collision() {
        let words = ["apple", "avocado", "banana"];
        let by_initial = index_by(&words, |w| w.as_bytes()[0]);
        assert_eq!(by_initial.len(), 2);
        assert_eq!(by_initial[&b'a'], "avocado");
        assert_eq!(by_initial[&b'b'], "banana");
    }

    // ── Properties ──────────────────────────────────────────────────

    proptest! {
        #[test]
        fn insert_sorted_keeps_order(
            mut values in prop::collection::vec(any::<i16>(), 0..40),
            extra in any::<i16>(),
        ) {
            values.sort_unstable();
            values.insert_sorted(extra, |a, b| a < b);
            prop_assert!(values.windows(2).all(|w| w[0] <= w[1]));
        }

        #[test]
        fn chunks_cover_every_element_once(
            values in prop::collection::vec(any::<u8>(), 0..50),
            size in 1usize..8,
        ) {
            let chunks = chunked(&values, size);
            prop_assert!(chunks.iter().all(|c| !c.is_empty() && c.len() <= size));
            let flat: Vec<u8> = chunks.into_iter().flatten().collect();
            prop_assert_eq!(flat, values);
        }
    }
}
