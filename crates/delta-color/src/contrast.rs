// SPDX-License-Identifier: MIT

//! WCAG 2.0 relative luminance and contrast ratio.
//!
//! - Luminance: `L = 0.2126·R + 0.7152·G + 0.0722·B` over linearized
//!   channels, in [0, 1].
//! - Contrast: `(L_lighter + 0.05) / (L_darker + 0.05)`, in [1, 21].
//!
//! Linearization here uses the WCAG 2.0 breakpoint `0.03928`, which differs
//! from the `0.04045` used for XYZ conversion in [`crate::space`]. The two
//! curves agree to well under one 8-bit step.

use tracing::trace;

use crate::color::Rgba;

const WCAG_BREAKPOINT: f64 = 0.039_28;

/// Minimum ratio for [`ContrastLevel::Normal`] (exclusive).
pub const NORMAL_RATIO: f64 = 4.5;
/// Minimum ratio for [`ContrastLevel::Strict`] (inclusive).
pub const STRICT_RATIO: f64 = 7.0;

#[inline]
fn wcag_linearize(c: f64) -> f64 {
    if c < WCAG_BREAKPOINT {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color per WCAG 2.0. Alpha is ignored.
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Rgba) -> f64 {
    let r = wcag_linearize(color.r);
    let g = wcag_linearize(color.g);
    let b = wcag_linearize(color.b);
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// WCAG contrast ratio between two colors.
///
/// The result is always >= 1.0 regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: Rgba, b: Rgba) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// How much contrast [`is_contrasting`] demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContrastLevel {
    /// WCAG AA for body text: ratio strictly above 4.5.
    #[default]
    Normal,
    /// WCAG AAA for body text: ratio of at least 7.
    Strict,
}

impl ContrastLevel {
    /// The ratio this level is measured against.
    #[must_use]
    pub const fn threshold(self) -> f64 {
        match self {
            Self::Normal => NORMAL_RATIO,
            Self::Strict => STRICT_RATIO,
        }
    }

    /// Whether `ratio` meets this level. Normal is exclusive, Strict inclusive.
    #[must_use]
    pub fn passes(self, ratio: f64) -> bool {
        match self {
            Self::Normal => ratio > NORMAL_RATIO,
            Self::Strict => ratio >= STRICT_RATIO,
        }
    }
}

/// Whether two colors are far enough apart in luminance to satisfy `level`.
#[must_use]
pub fn is_contrasting(a: Rgba, b: Rgba, level: ContrastLevel) -> bool {
    let ratio = contrast_ratio(a, b);
    let pass = level.passes(ratio);
    trace!(%a, %b, ratio, ?level, pass, "contrast check");
    pass
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        let lum = relative_luminance(Rgba::BLACK);
        assert!(approx_eq(lum, 0.0, 1e-12), "Black luminance: {lum}");
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = relative_luminance(Rgba::WHITE);
        assert!(approx_eq(lum, 1.0, 1e-9), "White luminance: {lum}");
    }

    #[test]
    fn luminance_mid_gray() {
        let lum = relative_luminance(Rgba::srgb(0.5, 0.5, 0.5));
        // sRGB 0.5 linearizes to ~0.214
        assert!(approx_eq(lum, 0.214, 0.001), "Mid-gray luminance: {lum}");
    }

    #[test]
    fn luminance_primaries_match_weights() {
        let red = relative_luminance(Rgba::srgb(1.0, 0.0, 0.0));
        let green = relative_luminance(Rgba::srgb(0.0, 1.0, 0.0));
        let blue = relative_luminance(Rgba::srgb(0.0, 0.0, 1.0));
        assert!(approx_eq(red, 0.2126, 1e-9), "Red luminance: {red}");
        assert!(approx_eq(green, 0.7152, 1e-9), "Green luminance: {green}");
        assert!(approx_eq(blue, 0.0722, 1e-9), "Blue luminance: {blue}");
    }

    #[test]
    fn luminance_linear_segment_below_breakpoint() {
        let c = 0.03;
        let lum = relative_luminance(Rgba::srgb(c, c, c));
        assert!(approx_eq(lum, c / 12.92, 1e-12), "Dark gray luminance: {lum}");
    }

    #[test]
    fn luminance_ignores_alpha() {
        let a = relative_luminance(Rgba::srgba(0.2, 0.4, 0.6, 1.0));
        let b = relative_luminance(Rgba::srgba(0.2, 0.4, 0.6, 0.0));
        assert!(approx_eq(a, b, 1e-15));
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(Rgba::BLACK, Rgba::WHITE);
        assert!(approx_eq(ratio, 21.0, 1e-9), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_color_is_1() {
        let c = Rgba::srgb(0.4, 0.7, 0.1);
        let ratio = contrast_ratio(c, c);
        assert!(approx_eq(ratio, 1.0, 1e-12), "Same-color contrast: {ratio}");
    }

    #[test]
    fn contrast_is_symmetric() {
        let a = Rgba::srgb(0.8, 0.2, 0.3);
        let b = Rgba::srgb(0.1, 0.1, 0.4);
        let ab = contrast_ratio(a, b);
        let ba = contrast_ratio(b, a);
        assert!(approx_eq(ab, ba, 1e-12), "Asymmetric: {ab} vs {ba}");
    }

    // ── Levels ──────────────────────────────────────────────────────

    #[test]
    fn black_white_contrasting_at_both_levels() {
        assert!(is_contrasting(Rgba::BLACK, Rgba::WHITE, ContrastLevel::Normal));
        assert!(is_contrasting(Rgba::WHITE, Rgba::BLACK, ContrastLevel::Strict));
    }

    #[test]
    fn same_color_never_contrasting() {
        let c = Rgba::srgb(0.5, 0.5, 0.5);
        assert!(!is_contrasting(c, c, ContrastLevel::Normal));
        assert!(!is_contrasting(c, c, ContrastLevel::Strict));
    }

    #[test]
    fn level_thresholds_at_the_edges() {
        assert!(!ContrastLevel::Normal.passes(4.5));
        assert!(ContrastLevel::Normal.passes(4.500_001));
        assert!(!ContrastLevel::Strict.passes(6.999_999));
        assert!(ContrastLevel::Strict.passes(7.0));
        assert_eq!(ContrastLevel::default(), ContrastLevel::Normal);
        assert!(approx_eq(ContrastLevel::Strict.threshold(), 7.0, f64::EPSILON));
    }

    #[test]
    fn mid_gray_on_white_is_normal_but_not_strict() {
        // #767676 on white is the darkest gray that still passes AA (~4.54).
        let gray = Rgba::rgb8(0x76, 0x76, 0x76);
        let ratio = contrast_ratio(gray, Rgba::WHITE);
        assert!(ratio > 4.5 && ratio < 7.0, "ratio: {ratio}");
        assert!(is_contrasting(gray, Rgba::WHITE, ContrastLevel::Normal));
        assert!(!is_contrasting(gray, Rgba::WHITE, ContrastLevel::Strict));
    }

    // ── Properties ──────────────────────────────────────────────────

    proptest! {
        #[test]
        fn ratio_bounded_and_symmetric(
            r1 in 0.0..=1.0f64, g1 in 0.0..=1.0f64, b1 in 0.0..=1.0f64,
            r2 in 0.0..=1.0f64, g2 in 0.0..=1.0f64, b2 in 0.0..=1.0f64,
        ) {
            let a = Rgba::srgb(r1, g1, b1);
            let b = Rgba::srgb(r2, g2, b2);
            let ab = contrast_ratio(a, b);
            prop_assert!((1.0..=21.0 + 1e-9).contains(&ab));
            prop_assert!((ab - contrast_ratio(b, a)).abs() < 1e-12);
        }

        #[test]
        fn strict_implies_normal(
            r1 in 0.0..=1.0f64, g1 in 0.0..=1.0f64, b1 in 0.0..=1.0f64,
            r2 in 0.0..=1.0f64, g2 in 0.0..=1.0f64, b2 in 0.0..=1.0f64,
        ) {
            let a = Rgba::srgb(r1, g1, b1);
            let b = Rgba::srgb(r2, g2, b2);
            if is_contrasting(a, b, ContrastLevel::Strict) {
                prop_assert!(is_contrasting(a, b, ContrastLevel::Normal));
            }
        }
    }
}
