use std::fmt;
use std::ops::Mul;

use super::{Point2, Vector2, Vector3, VectorOps};
use crate::error::{MatrixError, Result};

/// Row-major 3x3 matrix.
///
/// ```text
/// | a b c |
/// | d e f |
/// | g h i |
/// ```
///
/// Doubles as a 3D linear map and as an affine map of the plane in
/// homogeneous coordinates (see [`Matrix3::translation`]).
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
pub struct Matrix3 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
    pub g: f64,
    pub h: f64,
    pub i: f64,
}

impl_exact_hash!(Matrix3 { a, b, c, d, e, f, g, h, i });
impl_approx_eq!(Matrix3 { a, b, c, d, e, f, g, h, i });

impl Default for Matrix3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[allow(clippy::many_single_char_names, clippy::too_many_arguments)]
impl Matrix3 {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(
        a: f64,
        b: f64,
        c: f64,
        d: f64,
        e: f64,
        f: f64,
        g: f64,
        h: f64,
        i: f64,
    ) -> Self {
        Self {
            a,
            b,
            c,
            d,
            e,
            f,
            g,
            h,
            i,
        }
    }

    /// Rotation about the X axis by `angle` radians.
    #[must_use]
    pub fn rotation_x(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(1.0, 0.0, 0.0, 0.0, cos, -sin, 0.0, sin, cos)
    }

    /// Rotation about the Y axis by `angle` radians.
    #[must_use]
    pub fn rotation_y(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, 0.0, sin, 0.0, 1.0, 0.0, -sin, 0.0, cos)
    }

    /// Rotation about the Z axis by `angle` radians.
    #[must_use]
    pub fn rotation_z(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, -sin, 0.0, sin, cos, 0.0, 0.0, 0.0, 1.0)
    }

    /// Rotation by `angle` radians about `axis` (Rodrigues' formula).
    ///
    /// The axis is normalized on a copy; a zero axis yields NaN entries.
    #[must_use]
    #[allow(clippy::suspicious_operation_groupings)]
    #[rustfmt::skip]
    pub fn rotation_axis_angle(angle: f64, axis: Vector3) -> Self {
        let Vector3 { x, y, z } = axis.normalized();
        let (sin, cos) = angle.sin_cos();
        let t = 1.0 - cos;

        Self::new(
            cos + x * x * t,     x * y * t - z * sin, x * z * t + y * sin,
            y * x * t + z * sin, cos + y * y * t,     y * z * t - x * sin,
            z * x * t - y * sin, z * y * t + x * sin, cos + z * z * t,
        )
    }

    /// Planar scale in homogeneous form.
    #[must_use]
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, 1.0)
    }

    /// Planar translation in homogeneous form.
    #[must_use]
    pub const fn translation(x: f64, y: f64) -> Self {
        Self::new(1.0, 0.0, x, 0.0, 1.0, y, 0.0, 0.0, 1.0)
    }

    /// Shear along X: `x' = x + tan(angle) * y`.
    #[must_use]
    pub fn shear_x(angle: f64) -> Self {
        Self::new(1.0, angle.tan(), 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0)
    }

    /// Shear along Y: `y' = y + tan(angle) * x`.
    #[must_use]
    pub fn shear_y(angle: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, angle.tan(), 1.0, 0.0, 0.0, 0.0, 1.0)
    }

    #[must_use]
    pub const fn reflect_about_origin() -> Self {
        Self::new(-1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0)
    }

    #[must_use]
    pub const fn reflect_about_x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0)
    }

    #[must_use]
    pub const fn reflect_about_y_axis() -> Self {
        Self::new(-1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0)
    }

    /// Cofactor expansion along the first row.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.a * (self.e * self.i - self.f * self.h) - self.b * (self.d * self.i - self.f * self.g)
            + self.c * (self.d * self.h - self.e * self.g)
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
            return Err(MatrixError::Singular { dimension: 3 }.into());
        }
        Ok(self.adjugate() * (1.0 / det))
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

    /// Transpose of the cofactor matrix.
    #[must_use]
    pub fn adjugate(&self) -> Self {
        let Self {
            a,
            b,
            c,
            d,
            e,
            f,
            g,
            h,
            i,
        } = *self;
        Self::new(
            e * i - f * h,
            c * h - b * i,
            b * f - c * e,
            f * g - d * i,
            a * i - c * g,
            c * d - a * f,
            d * h - e * g,
            b * g - a * h,
            a * e - b * d,
        )
    }

    #[must_use]
    pub const fn transpose(&self) -> Self {
        Self::new(
            self.a, self.d, self.g, self.b, self.e, self.h, self.c, self.f, self.i,
        )
    }

    /// Applies the planar affine map to a point (`w = 1`).
    #[must_use]
    pub fn transform_point(&self, p: &Point2) -> Point2 {
        let v = *self * Vector3::new(p.x, p.y, 1.0);
        Point2::new(v.x, v.y)
    }

    /// Applies the planar affine map to a vector (`w = 0`, ignores translation).
    #[must_use]
    pub fn transform_vector(&self, v: &Vector2) -> Vector2 {
        let r = *self * Vector3::new(v.x, v.y, 0.0);
        Vector2::new(r.x, r.y)
    }
}

impl Mul for Matrix3 {
    type Output = Self;

    fn mul(self, m: Self) -> Self {
        Self::new(
            self.a * m.a + self.b * m.d + self.c * m.g,
            self.a * m.b + self.b * m.e + self.c * m.h,
            self.a * m.c + self.b * m.f + self.c * m.i,
            self.d * m.a + self.e * m.d + self.f * m.g,
            self.d * m.b + self.e * m.e + self.f * m.h,
            self.d * m.c + self.e * m.f + self.f * m.i,
            self.g * m.a + self.h * m.d + self.i * m.g,
            self.g * m.b + self.h * m.e + self.i * m.h,
            self.g * m.c + self.h * m.f + self.i * m.i,
        )
    }
}

impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        Vector3::new(
            self.a * v.x + self.b * v.y + self.c * v.z,
            self.d * v.x + self.e * v.y + self.f * v.z,
            self.g * v.x + self.h * v.y + self.i * v.z,
        )
    }
}

impl Mul<f64> for Matrix3 {
    type Output = Self;

    fn mul(self, s: f64) -> Self {
        Self::new(
            self.a * s,
            self.b * s,
            self.c * s,
            self.d * s,
            self.e * s,
            self.f * s,
            self.g * s,
            self.h * s,
            self.i * s,
        )
    }
}

impl Mul<Matrix3> for f64 {
    type Output = Matrix3;

    fn mul(self, m: Matrix3) -> Matrix3 {
        m * self
    }
}

impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{},{};{},{},{};{},{},{}] | det={}",
            self.a,
            self.b,
            self.c,
            self.d,
            self.e,
            self.f,
            self.g,
            self.h,
            self.i,
            self.determinant()
        )
    }
}
