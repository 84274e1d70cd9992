// SPDX-License-Identifier: MIT
//
// 2D vector with f64 components.
//
// Angles are radians, measured counter-clockwise from +x:
//
//          +y
//           │   ╱ v
//           │  ╱
//           │ ╱ angle
//   ────────┼──────── +x
//
// Scalar `+`/`-` shift both components by the same amount, matching the
// component-wise scalar `*`/`/`.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// A displacement in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub dx: f64,
    pub dy: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Unit vector pointing at `angle` radians. 0 points right.
    #[must_use]
    pub fn from_angle(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin)
    }

    /// Shift by `(dx, dy)` in place and return the result.
    pub fn offset(&mut self, dx: f64, dy: f64) -> Self {
        self.dx += dx;
        self.dy += dy;
        *self
    }

    /// Euclidean length.
    #[inline]
    #[must_use]
    pub fn length(self) -> f64 {
        self.dx.hypot(self.dy)
    }

    #[inline]
    #[must_use]
    pub fn length_squared(self) -> f64 {
        self.dx.mul_add(self.dx, self.dy * self.dy)
    }

    /// Same direction with length 1. The zero vector stays zero.
    #[must_use]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > 0.0 { self / len } else { Self::ZERO }
    }

    /// Normalize in place and return the result.
    pub fn normalize(&mut self) -> Self {
        *self = self.normalized();
        *self
    }

    /// Length of `self - other`.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// Direction in radians, in `[-π, π]`.
    #[inline]
    #[must_use]
    pub fn angle(self) -> f64 {
        self.dy.atan2(self.dx)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((dx, dy): (f64, f64)) -> Self {
        Self::new(dx, dy)
    }
}

// ─── Operators ───────────────────────────────────────────────────────────────

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.dx - rhs.dx, self.dy - rhs.dy)
    }
}

impl Add<f64> for Vector2 {
    type Output = Self;

    fn add(self, rhs: f64) -> Self::Output {
        Self::new(self.dx + rhs, self.dy + rhs)
    }
}

impl Sub<f64> for Vector2 {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self::Output {
        Self::new(self.dx - rhs, self.dy - rhs)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.dx * rhs, self.dy * rhs)
    }
}

impl Div<f64> for Vector2 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.dx / rhs, self.dy / rhs)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl AddAssign<f64> for Vector2 {
    fn add_assign(&mut self, rhs: f64) {
        *self = *self + rhs;
    }
}

impl SubAssign<f64> for Vector2 {
    fn sub_assign(&mut self, rhs: f64) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl DivAssign<f64> for Vector2 {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
