//! Range checks and clamping for any `PartialOrd` value.

use std::ops::RangeInclusive;

/// Clamp `value` into `range`.
///
/// Unlike `Ord::clamp` this works for floats and does not panic on an
/// inverted range; the lower bound wins in that case.
#[must_use]
pub fn clamp_to<T: PartialOrd + Copy>(value: T, range: &RangeInclusive<T>) -> T {
    let (lo, hi) = (*range.start(), *range.end());
    if value < lo {
        lo
    } else if value > hi {
        if hi < lo { lo } else { hi }
    } else {
        value
    }
}

/// Whether `value` lies in `range` (inclusive).
#[inline]
#[must_use]
pub fn in_range<T: PartialOrd>(value: &T, range: &RangeInclusive<T>) -> bool {
    range.contains(value)
}

/// Whether `value` lies between `a` and `b` (inclusive), in either order.
#[must_use]
pub fn in_range_unordered<T: PartialOrd>(value: &T, a: &T, b: &T) -> bool {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    lo <= value && value <= hi
}
