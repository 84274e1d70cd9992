// SPDX-License-Identifier: MIT
//
// Perceptual color difference (ΔE) in CIE L*a*b*.
//
// Two formulas:
//
//   CIE94      weighted Euclidean distance in L/C/H with chroma-dependent
//              scale factors. Asymmetric: the weights use the first color's
//              chroma (the reference).
//   CIEDE2000  Sharma, Wu & Dalal, "The CIEDE2000 Color-Difference Formula:
//              Implementation Notes, Supplementary Test Data, and
//              Mathematical Observations" (2005). Symmetric.
//
// The formulas are written term for term as published so each line can be
// checked against the paper.
#![allow(clippy::suboptimal_flops)]

use crate::space::Lab;

// ─── CIE94 ───────────────────────────────────────────────────────────────────

/// Application weights for [`cie94_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cie94Weights {
    pub kl: f64,
    pub kc: f64,
    pub kh: f64,
    pub k1: f64,
    pub k2: f64,
}

impl Cie94Weights {
    /// Graphic arts: `kL = 1`, `K1 = 0.045`, `K2 = 0.015`.
    pub const GRAPHIC_ARTS: Self = Self {
        kl: 1.0,
        kc: 1.0,
        kh: 1.0,
        k1: 0.045,
        k2: 0.015,
    };

    /// Textiles: `kL = 2`, `K1 = 0.048`, `K2 = 0.014`.
    pub const TEXTILES: Self = Self {
        kl: 2.0,
        kc: 1.0,
        kh: 1.0,
        k1: 0.048,
        k2: 0.014,
    };
}

impl Default for Cie94Weights {
    fn default() -> Self {
        Self::GRAPHIC_ARTS
    }
}

/// CIE94 ΔE with graphic arts weights. `reference` supplies the chroma used
/// for the scale factors.
#[must_use]
pub fn cie94(reference: Lab, sample: Lab) -> f64 {
    cie94_with(reference, sample, &Cie94Weights::GRAPHIC_ARTS)
}

/// CIE94 ΔE with explicit weights.
///
/// `ΔH` is taken as `√(Δa² + Δb² − ΔC²)` without clamping. When rounding
/// pushes the radicand below zero the square root is NaN; any NaN term is
/// counted as 0 in the final sum, so the result is never NaN for finite
/// input.
#[must_use]
pub fn cie94_with(reference: Lab, sample: Lab, w: &Cie94Weights) -> f64 {
    let delta_l = reference.l - sample.l;
    let delta_a = reference.a - sample.a;
    let delta_b = reference.b - sample.b;

    let c1 = (reference.a.powi(2) + reference.b.powi(2)).sqrt();
    let c2 = (sample.a.powi(2) + sample.b.powi(2)).sqrt();
    let delta_c = c1 - c2;

    let delta_h = (delta_a.powi(2) + delta_b.powi(2) - delta_c.powi(2)).sqrt();

    let sl = 1.0;
    let sc = 1.0 + w.k1 * c1;
    let sh = 1.0 + w.k2 * c1;

    let p1 = (delta_l / (w.kl * sl)).powi(2);
    let p2 = (delta_c / (w.kc * sc)).powi(2);
    let p3 = (delta_h / (w.kh * sh)).powi(2);

    (nan_to_zero(p1) + nan_to_zero(p2) + nan_to_zero(p3)).sqrt()
}

#[inline]
const fn nan_to_zero(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v }
}

// ─── CIEDE2000 ───────────────────────────────────────────────────────────────

/// 25⁷, the chroma pivot of the G and R_C terms.
const POW25_7: f64 = 6_103_515_625.0;

/// Hue angle of `(a', b)` in degrees, normalized to `[0, 360)`.
/// Zero for the neutral point, where the angle is undefined.
#[inline]
fn hue_degrees(b: f64, a_prime: f64) -> f64 {
    if b == 0.0 && a_prime == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a_prime).to_degrees();
    if h < 0.0 { h + 360.0 } else { h }
}

/// CIEDE2000 ΔE with `kL = kC = kH = 1`.
#[must_use]
pub fn ciede2000(lab1: Lab, lab2: Lab) -> f64 {
    let (l1, a1, b1) = (lab1.l, lab1.a, lab1.b);
    let (l2, a2, b2) = (lab2.l, lab2.a, lab2.b);
    let (kl, kc, kh) = (1.0, 1.0, 1.0);

    // Step 1: C', h'
    let c1_ab = (a1 * a1 + b1 * b1).sqrt();
    let c2_ab = (a2 * a2 + b2 * b2).sqrt();
    let c_ab_mean = (c1_ab + c2_ab) / 2.0;
    let c_ab_mean_7 = c_ab_mean.powi(7);

    let g = 0.5 * (1.0 - (c_ab_mean_7 / (c_ab_mean_7 + POW25_7)).sqrt());
    let a1_p = (1.0 + g) * a1;
    let a2_p = (1.0 + g) * a2;

    let c1_p = (a1_p * a1_p + b1 * b1).sqrt();
    let c2_p = (a2_p * a2_p + b2 * b2).sqrt();

    let h1_p = hue_degrees(b1, a1_p);
    let h2_p = hue_degrees(b2, a2_p);

    // Step 2: ΔL', ΔC', ΔH'
    let delta_l_p = l2 - l1;
    let delta_c_p = c2_p - c1_p;

    let c_product = c1_p * c2_p;
    let h_diff = h2_p - h1_p;
    let delta_h_p = if c_product == 0.0 {
        0.0
    } else if h_diff.abs() <= 180.0 {
        h_diff
    } else if h_diff > 180.0 {
        h_diff - 360.0
    } else {
        h_diff + 360.0
    };
    let delta_big_h_p = 2.0 * c_product.sqrt() * (delta_h_p / 2.0).to_radians().sin();

    // Step 3: means, weighting functions, rotation
    let l_p_mean = (l1 + l2) / 2.0;
    let c_p_mean = (c1_p + c2_p) / 2.0;

    let h_sum = h1_p + h2_p;
    let h_p_mean = if c_product == 0.0 {
        h_sum
    } else if (h1_p - h2_p).abs() <= 180.0 {
        h_sum / 2.0
    } else if h_sum < 360.0 {
        (h_sum + 360.0) / 2.0
    } else {
        (h_sum - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (h_p_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_p_mean).to_radians().cos()
        + 0.32 * (3.0 * h_p_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_p_mean - 63.0).to_radians().cos();

    let delta_theta = 30.0 * (-((h_p_mean - 275.0) / 25.0).powi(2)).exp();
    let c_p_mean_7 = c_p_mean.powi(7);
    let rc = 2.0 * (c_p_mean_7 / (c_p_mean_7 + POW25_7)).sqrt();

    let l_offset_sq = (l_p_mean - 50.0).powi(2);
    let sl = 1.0 + (0.015 * l_offset_sq) / (20.0 + l_offset_sq).sqrt();
    let sc = 1.0 + 0.045 * c_p_mean;
    let sh = 1.0 + 0.015 * c_p_mean * t;
    let rt = -(2.0 * delta_theta).to_radians().sin() * rc;

    let p1 = delta_l_p / (kl * sl);
    let p2 = delta_c_p / (kc * sc);
    let p3 = delta_big_h_p / (kh * sh);

    (p1 * p1 + p2 * p2 + p3 * p3 + rt * p2 * p3).sqrt()
}

// ─── Classification ──────────────────────────────────────────────────────────

/// Rough perceptual reading of a ΔE value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeltaECategory {
    /// ΔE < 1: not perceptible to the human eye.
    Imperceptible,
    /// 1 ≤ ΔE < 2: perceptible on close inspection.
    Perceptible,
    /// 2 ≤ ΔE < 10: perceptible at a glance.
    Noticeable,
    /// 10 ≤ ΔE < 50: clearly different colors.
    Distinct,
    /// ΔE ≥ 50: nearly opposite colors.
    Opposite,
}

impl DeltaECategory {
    /// Bucket a ΔE value. NaN counts as `Opposite`.
    #[must_use]
    pub fn from_delta_e(delta_e: f64) -> Self {
        match delta_e {
            d if d < 1.0 => Self::Imperceptible,
            d if d < 2.0 => Self::Perceptible,
            d if d < 10.0 => Self::Noticeable,
            d if d < 50.0 => Self::Distinct,
            _ => Self::Opposite,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
