// SPDX-License-Identifier: MIT
//
// Device-independent color spaces: CIE XYZ and CIE L*a*b*.
//
// Pipeline:
//
//   sRGB (0–1) ──inverse companding, ×100──► linear RGB (0–100)
//              ──3×3 sRGB matrix──────────► XYZ (D65, Y_white = 100)
//              ──white-point normalize, f(t)──► LAB
//
// The matrix coefficients are the four-digit sRGB/D65 values; LAB uses the
// 0.008856 / 7.787 linear-segment constants. ΔE results downstream are pinned
// to these exact numbers.

use crate::color::Rgba;

/// D65 reference white in the same scale as [`Xyz`].
pub const D65_WHITE: Xyz = Xyz {
    x: 95.047,
    y: 100.0,
    z: 108.883,
};

const LAB_EPSILON: f64 = 0.008_856;
const LAB_KAPPA_SLOPE: f64 = 7.787;

/// CIE 1931 tristimulus values, scaled so the D65 white has `y == 100`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// CIE L*a*b* coordinates. `l` is lightness (0–100); `a` runs green→red,
/// `b` blue→yellow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[inline]
    #[must_use]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Chroma: distance from the neutral axis, `√(a² + b²)`.
    #[inline]
    #[must_use]
    pub fn chroma(self) -> f64 {
        self.a.hypot(self.b)
    }
}

// ─── sRGB → XYZ ──────────────────────────────────────────────────────────────

/// Undo sRGB companding for one channel and scale to 0–100.
#[inline]
#[must_use]
pub fn linearize(c: f64) -> f64 {
    let linear = if c > 0.040_45 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    };
    linear * 100.0
}

/// Convert a color sample to XYZ. Alpha is ignored.
#[must_use]
pub fn rgb_to_xyz(color: Rgba) -> Xyz {
    let r = linearize(color.r);
    let g = linearize(color.g);
    let b = linearize(color.b);

    Xyz {
        x: 0.1805f64.mul_add(b, 0.4124f64.mul_add(r, 0.3576 * g)),
        y: 0.0722f64.mul_add(b, 0.2126f64.mul_add(r, 0.7152 * g)),
        z: 0.9505f64.mul_add(b, 0.0193f64.mul_add(r, 0.1192 * g)),
    }
}

// ─── XYZ → LAB ───────────────────────────────────────────────────────────────

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_KAPPA_SLOPE.mul_add(t, 16.0 / 116.0)
    }
}

/// Convert XYZ to LAB relative to [`D65_WHITE`].
#[must_use]
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let fx = lab_f(xyz.x / D65_WHITE.x);
    let fy = lab_f(xyz.y / D65_WHITE.y);
    let fz = lab_f(xyz.z / D65_WHITE.z);

    Lab {
        l: 116.0f64.mul_add(fy, -16.0),
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Shorthand for `xyz_to_lab(rgb_to_xyz(color))`.
#[must_use]
pub fn rgb_to_lab(color: Rgba) -> Lab {
    xyz_to_lab(rgb_to_xyz(color))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
