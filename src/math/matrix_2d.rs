use std::fmt;
use std::ops::Mul;

use super::Vector2;
use crate::error::{MatrixError, Result};

/// Row-major 2x2 matrix.
///
/// ```text
/// | a b |
/// | c d |
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Neg,
)]
pub struct Matrix2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl_exact_hash!(Matrix2 { a, b, c, d });
impl_approx_eq!(Matrix2 { a, b, c, d });

impl Default for Matrix2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix2 {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Counter-clockwise rotation by `angle` radians.
    #[must_use]
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, -sin, sin, cos)
    }

    #[must_use]
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy)
    }

    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Computes the inverse as `(1 / det) * adjugate`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Singular`] when the determinant is exactly zero.
    #[allow(clippy::float_cmp)]
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == 0.0 {
            tracing::debug!(matrix = %self, "rejected inverse of singular matrix");
            return Err(MatrixError::Singular { dimension: 2 }.into());
        }
        Ok(Self::new(self.d, -self.b, -self.c, self.a) * (1.0 / det))
    }

    /// Replaces `self` with its inverse. Leaves `self` untouched on error.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Singular`] when the determinant is exactly zero.
    pub fn invert(&mut self) -> Result<()> {
        *self = self.inverse()?;
        Ok(())
    }

    #[must_use]
    pub const fn transpose(&self) -> Self {
        Self::new(self.a, self.c, self.b, self.d)
    }
}

impl Mul for Matrix2 {
    type Output = Self;

    fn mul(self, m: Self) -> Self {
        Self::new(
            self.a * m.a + self.b * m.c,
            self.a * m.b + self.b * m.d,
            self.c * m.a + self.d * m.c,
            self.c * m.b + self.d * m.d,
        )
    }
}

impl Mul<Vector2> for Matrix2 {
    type Output = Vector2;

    fn mul(self, v: Vector2) -> Vector2 {
        Vector2::new(self.a * v.x + self.b * v.y, self.c * v.x + self.d * v.y)
    }
}

impl Mul<f64> for Matrix2 {
    type Output = Self;

    fn mul(self, s: f64) -> Self {
        Self::new(self.a * s, self.b * s, self.c * s, self.d * s)
    }
}

impl Mul<Matrix2> for f64 {
    type Output = Matrix2;

    fn mul(self, m: Matrix2) -> Matrix2 {
        m * self
    }
}

impl fmt::Display for Matrix2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{};{},{}] | det={}",
            self.a,
            self.b,
            self.c,
            self.d,
            self.determinant()
        )
    }
}
