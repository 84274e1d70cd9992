// SPDX-License-Identifier: MIT
//
// Color sample: normalized sRGB channels with alpha.
//
// `Rgba` is the only stored color type. XYZ and LAB are derived on demand
// (see `space`) and never cached, so a sample can be copied and compared
// freely without keeping representations in sync.
//
//   Rgba ──► linear RGB ×100 ──► XYZ ──► LAB ──► ΔE (CIE94 / CIEDE2000)
//     └───► WCAG luminance ──► contrast ratio

use std::fmt;
use std::str::FromStr;

use crate::contrast::{self, ContrastLevel};
use crate::delta_e;
use crate::error::ParseColorError;
use crate::space::{self, Lab, Xyz};

// ─── Rgba ────────────────────────────────────────────────────────────────────

/// A color sample with sRGB channels and alpha, all in `[0.0, 1.0]`.
///
/// # Examples
///
/// ```
/// use delta_color::{ContrastLevel, Rgba};
///
/// let ink = Rgba::hex("#1a1a1a").unwrap();
/// let paper = Rgba::WHITE;
///
/// assert!(ink.is_contrasting(&paper, ContrastLevel::Strict));
/// assert!(ink.ciede2000(&paper) > 50.0);
/// ```
#[derive(Clone, Copy)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub alpha: f64,
}

impl Rgba {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Opaque color from sRGB channels.
    #[inline]
    #[must_use]
    pub const fn srgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    /// Color from sRGB channels and alpha.
    #[inline]
    #[must_use]
    pub const fn srgba(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        Self { r, g, b, alpha }
    }

    /// Opaque color from 8-bit channels.
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, u8::MAX)
    }

    /// Color from 8-bit channels and alpha.
    #[must_use]
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::srgba(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            f64::from(a) / 255.0,
        )
    }

    /// Color from a packed `0xRRGGBB` integer. Bits above 24 are ignored.
    #[must_use]
    pub fn from_hex_int(hex: u32, opacity: f64) -> Self {
        let [_, r, g, b] = hex.to_be_bytes();
        Self::rgb8(r, g, b).with_alpha(opacity)
    }

    /// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    ///
    /// Returns `None` for anything else; use [`str::parse`] to learn why.
    #[must_use]
    pub fn hex(s: &str) -> Option<Self> {
        parse_hex(s).ok()
    }

    pub const BLACK: Self = Self::srgb(0.0, 0.0, 0.0);

    pub const WHITE: Self = Self::srgb(1.0, 1.0, 1.0);

    pub const TRANSPARENT: Self = Self::srgba(0.0, 0.0, 0.0, 0.0);

    // ─── Alpha & simple transforms ───────────────────────────────────────

    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Whether alpha is at least 1.0.
    #[inline]
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    /// Each color channel mirrored (`1 - c`). Alpha is kept.
    #[must_use]
    pub fn inverted(self) -> Self {
        Self {
            r: 1.0 - self.r,
            g: 1.0 - self.g,
            b: 1.0 - self.b,
            alpha: self.alpha,
        }
    }

    // ─── HSB ─────────────────────────────────────────────────────────────

    /// Hue, saturation and brightness, each in `[0.0, 1.0]`.
    ///
    /// Hue is a fraction of a full turn (0 = red, 1/3 = green, 2/3 = blue)
    /// and is 0 for grays, where it is undefined.
    #[must_use]
    pub fn to_hsb(self) -> (f64, f64, f64) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;

        let sector = if delta <= f64::EPSILON {
            0.0
        } else if (max - self.r).abs() <= f64::EPSILON {
            ((self.g - self.b) / delta).rem_euclid(6.0)
        } else if (max - self.g).abs() <= f64::EPSILON {
            (self.b - self.r) / delta + 2.0
        } else {
            (self.r - self.g) / delta + 4.0
        };
        let saturation = if max <= f64::EPSILON { 0.0 } else { delta / max };

        (sector / 6.0, saturation, max)
    }

    /// Color from hue (fraction of a turn), saturation, brightness and alpha.
    #[must_use]
    pub fn from_hsb(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        let h = (hue.rem_euclid(1.0) * 6.0).rem_euclid(6.0);
        let c = brightness * saturation;
        let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
        let m = brightness - c;

        let (r, g, b) = match h {
            h if h < 1.0 => (c, x, 0.0),
            h if h < 2.0 => (x, c, 0.0),
            h if h < 3.0 => (0.0, c, x),
            h if h < 4.0 => (0.0, x, c),
            h if h < 5.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        Self::srgba(r + m, g + m, b + m, alpha)
    }

    /// HSB hue as a fraction of a turn. See [`Rgba::to_hsb`].
    #[must_use]
    pub fn hue(self) -> f64 {
        self.to_hsb().0
    }

    /// Same hue and saturation with brightness scaled by 0.9. Alpha is kept.
    #[must_use]
    pub fn darker(self) -> Self {
        let (h, s, b) = self.to_hsb();
        Self::from_hsb(h, s, b * DARKER_FACTOR, self.alpha)
    }

    // ─── Derived representations ─────────────────────────────────────────

    /// CIE XYZ tristimulus values (D65, scaled so white has Y = 100).
    #[must_use]
    pub fn to_xyz(self) -> Xyz {
        space::rgb_to_xyz(self)
    }

    /// CIE L*a*b* coordinates relative to the D65 white point.
    #[must_use]
    pub fn to_lab(self) -> Lab {
        space::xyz_to_lab(self.to_xyz())
    }

    /// WCAG relative luminance in `[0.0, 1.0]`.
    #[must_use]
    pub fn luminance(self) -> f64 {
        contrast::relative_luminance(self)
    }

    // ─── Metrics ─────────────────────────────────────────────────────────

    /// CIE94 color difference (graphic arts weights).
    #[must_use]
    pub fn cie94(&self, other: &Self) -> f64 {
        delta_e::cie94(self.to_lab(), other.to_lab())
    }

    /// CIEDE2000 color difference.
    #[must_use]
    pub fn ciede2000(&self, other: &Self) -> f64 {
        delta_e::ciede2000(self.to_lab(), other.to_lab())
    }

    /// WCAG contrast ratio in `[1.0, 21.0]`, independent of argument order.
    #[must_use]
    pub fn contrast_ratio(&self, other: &Self) -> f64 {
        contrast::contrast_ratio(*self, *other)
    }

    /// Whether the pair passes the WCAG threshold for `level`.
    #[must_use]
    pub fn is_contrasting(&self, other: &Self, level: ContrastLevel) -> bool {
        contrast::is_contrasting(*self, *other, level)
    }

    // ─── Output ──────────────────────────────────────────────────────────

    /// 8-bit channels, clamped to the displayable range.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// `#rrggbb`, or `#rrggbbaa` when not opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        if self.is_opaque() {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            let a = to_u8(self.alpha);
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl fmt::Debug for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rgba({:.4}, {:.4}, {:.4}, {:.2})",
            self.r, self.g, self.b, self.alpha
        )
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl PartialEq for Rgba {
    fn eq(&self, other: &Self) -> bool {
        const EPS: f64 = 1e-6;
        (self.r - other.r).abs() < EPS
            && (self.g - other.g).abs() < EPS
            && (self.b - other.b).abs() < EPS
            && (self.alpha - other.alpha).abs() < EPS
    }
}

impl Default for Rgba {
    /// Opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

const DARKER_FACTOR: f64 = 0.9;

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Result<Rgba, ParseColorError> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let len = s.len();
    if !matches!(len, 3 | 4 | 6 | 8) {
        return Err(ParseColorError::InvalidLength(len));
    }

    let mut nibbles = [0u8; 8];
    for (index, found) in s.char_indices() {
        nibbles[index] =
            parse_hex_digit(found).ok_or(ParseColorError::InvalidDigit { index, found })?;
    }

    // Short forms repeat each digit: #abc == #aabbcc.
    let channel = |i: usize| match len {
        3 | 4 => (nibbles[i] << 4) | nibbles[i],
        _ => (nibbles[2 * i] << 4) | nibbles[2 * i + 1],
    };
    let alpha = if matches!(len, 4 | 8) { channel(3) } else { u8::MAX };

    Ok(Rgba::rgba8(channel(0), channel(1), channel(2), alpha))
}

#[inline]
const fn parse_hex_digit(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='f' => Some(c as u8 - b'a' + 10),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

/// Convert a channel (0.0–1.0) to 0–255 with rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Clamp keeps the value in 0.0..=255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
