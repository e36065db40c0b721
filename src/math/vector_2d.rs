use std::fmt;
use std::ops::{Div, Mul};

use super::{Point2, VectorOps};

/// A direction and magnitude in the plane.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Neg,
)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl_exact_hash!(Vector2 { x, y });
impl_approx_eq!(Vector2 { x, y });

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const X_AXIS: Self = Self::new(1.0, 0.0);
    pub const Y_AXIS: Self = Self::new(0.0, 1.0);

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The vector pointing from `p0` to `p1`.
    #[must_use]
    pub fn between(p0: &Point2, p1: &Point2) -> Self {
        Self::new(p1.x - p0.x, p1.y - p0.y)
    }

    /// Scalar cross product `self.x * other.y - self.y * other.x`.
    ///
    /// Zero exactly when the vectors are parallel; its sign tells the turn
    /// direction from `self` to `other`.
    #[must_use]
    pub fn perp_dot(&self, other: &Self) -> f64 {
        self.x * other.y - self.y * other.x
    }
}

impl VectorOps for Vector2 {
    fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    fn normalize(&mut self) {
        let length = self.length();
        self.x /= length;
        self.y /= length;
    }

    fn negate(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
    }

    /// Compares `u.x * v.y` with `u.y * v.x`, so axis-aligned vectors need no
    /// division.
    #[allow(clippy::float_cmp)]
    fn are_parallel(u: &Self, v: &Self) -> bool {
        u.x * v.y == u.y * v.x
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;

    fn mul(self, v: Vector2) -> Vector2 {
        v * self
    }
}

impl Div<f64> for Vector2 {
    type Output = Self;

    fn div(self, s: f64) -> Self {
        Self::new(self.x / s, self.y / s)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{} | L={}", self.x, self.y, self.length())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn v(x: f64, y: f64) -> Vector2 {
        Vector2::new(x, y)
    }

    #[test]
    fn length_and_normalize() {
        let mut u = v(3.0, 4.0);
        assert_relative_eq!(u.length(), 5.0);
        u.normalize();
        assert_relative_eq!(u, v(0.6, 0.8));
        assert_relative_eq!(u.length(), 1.0);
    }

    #[test]
    fn normalizing_zero_yields_nan() {
        let mut zero = Vector2::ZERO;
        assert!(!zero.is_valid());
        zero.normalize();
        assert!(zero.x.is_nan() && zero.y.is_nan());
    }

    #[test]
    fn parallel_without_division() {
        // The slope form divides by x, so vertical vectors were undefined.
        assert!(Vector2::are_parallel(&v(0.0, 1.0), &v(0.0, -5.0)));
        assert!(Vector2::are_parallel(&v(2.0, 1.0), &v(-4.0, -2.0)));
        assert!(!Vector2::are_parallel(&v(0.0, 1.0), &v(1.0, 0.0)));
        assert!(!Vector2::are_parallel(&v(1.0, 1.0), &v(1.0, 2.0)));
    }

    #[test]
    fn perp_dot_sign_gives_turn_direction() {
        assert_relative_eq!(Vector2::X_AXIS.perp_dot(&Vector2::Y_AXIS), 1.0);
        assert_relative_eq!(Vector2::Y_AXIS.perp_dot(&Vector2::X_AXIS), -1.0);
    }

    #[test]
    fn between_points() {
        let d = Vector2::between(&Point2::new(1.0, 1.0), &Point2::new(4.0, -1.0));
        assert_eq!(d, v(3.0, -2.0));
    }

    #[test]
    fn operators_return_new_values() {
        let a = v(1.0, 2.0);
        let b = v(3.0, -1.0);
        assert_eq!(a + b, v(4.0, 1.0));
        assert_eq!(a - b, v(-2.0, 3.0));
        assert_eq!(-a, v(-1.0, -2.0));
        assert_eq!(2.0 * a, v(2.0, 4.0));
        assert_eq!(a / 2.0, v(0.5, 1.0));
        assert_eq!(a, v(1.0, 2.0));
    }

    #[test]
    fn display_shows_length() {
        assert_eq!(v(3.0, 4.0).to_string(), "3,4 | L=5");
    }
}
