use std::fmt;
use std::ops::Mul;

use super::{Matrix3, Point3, Vector3, Vector4};
use crate::error::{MatrixError, Result};

/// Row-major 4x4 matrix, the homogeneous form of a 3D affine map.
///
/// ```text
/// | a b c d |
/// | e f g h |
/// | i j k l |
/// | m n o p |
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
pub struct Matrix4 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
    pub g: f64,
    pub h: f64,
    pub i: f64,
    pub j: f64,
    pub k: f64,
    pub l: f64,
    pub m: f64,
    pub n: f64,
    pub o: f64,
    pub p: f64,
}

impl_exact_hash!(Matrix4 { a, b, c, d, e, f, g, h, i, j, k, l, m, n, o, p });
impl_approx_eq!(Matrix4 { a, b, c, d, e, f, g, h, i, j, k, l, m, n, o, p });

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Embeds a 3x3 linear map: zero-pads the new row and column, `p = 1`.
impl From<Matrix3> for Matrix4 {
    fn from(m: Matrix3) -> Self {
        Self::new(
            m.a, m.b, m.c, 0.0, m.d, m.e, m.f, 0.0, m.g, m.h, m.i, 0.0, 0.0, 0.0, 0.0, 1.0,
        )
    }
}

/// 2x2 minors of the top two rows (`s`) and bottom two rows (`c`), shared by
/// the determinant and the inverse.
struct Minors {
    s: [f64; 6],
    c: [f64; 6],
}

impl Minors {
    fn determinant(&self) -> f64 {
        let Self { s, c } = self;
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }
}

#[allow(clippy::many_single_char_names, clippy::too_many_arguments)]
impl Matrix4 {
    pub const IDENTITY: Self = Self::new(
        1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
    );
    pub const ZERO: Self = Self::new(
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    );

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
        j: f64,
        k: f64,
        l: f64,
        m: f64,
        n: f64,
        o: f64,
        p: f64,
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
            j,
            k,
            l,
            m,
            n,
            o,
            p,
        }
    }

    #[must_use]
    pub fn rotation_x(angle: f64) -> Self {
        Matrix3::rotation_x(angle).into()
    }

    #[must_use]
    pub fn rotation_y(angle: f64) -> Self {
        Matrix3::rotation_y(angle).into()
    }

    #[must_use]
    pub fn rotation_z(angle: f64) -> Self {
        Matrix3::rotation_z(angle).into()
    }

    /// Rotation about an axis through the origin; see
    /// [`Matrix3::rotation_axis_angle`].
    #[must_use]
    pub fn rotation_axis_angle(angle: f64, axis: Vector3) -> Self {
        Matrix3::rotation_axis_angle(angle, axis).into()
    }

    #[must_use]
    pub fn shear_x(angle: f64) -> Self {
        Matrix3::shear_x(angle).into()
    }

    #[must_use]
    pub fn shear_y(angle: f64) -> Self {
        Matrix3::shear_y(angle).into()
    }

    #[must_use]
    pub const fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self::new(
            sx, 0.0, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, 0.0, sz, 0.0, 0.0, 0.0, 0.0, 1.0,
        )
    }

    #[must_use]
    pub const fn translation(x: f64, y: f64, z: f64) -> Self {
        Self::new(
            1.0, 0.0, 0.0, x, 0.0, 1.0, 0.0, y, 0.0, 0.0, 1.0, z, 0.0, 0.0, 0.0, 1.0,
        )
    }

    fn minors(&self) -> Minors {
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
            j,
            k,
            l,
            m,
            n,
            o,
            p,
        } = *self;
        Minors {
            s: [
                a * f - e * b,
                a * g - e * c,
                a * h - e * d,
                b * g - f * c,
                b * h - f * d,
                c * h - g * d,
            ],
            c: [
                i * n - m * j,
                i * o - m * k,
                i * p - m * l,
                j * o - n * k,
                j * p - n * l,
                k * p - o * l,
            ],
        }
    }

    /// Full cofactor expansion by 2x2 minors (Laplace along the top two rows).
    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.minors().determinant()
    }

    /// Computes the inverse as `(1 / det) * adjugate`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Singular`] when the determinant is exactly zero.
    #[allow(clippy::float_cmp)]
    pub fn inverse(&self) -> Result<Self> {
        let minors = self.minors();
        let det = minors.determinant();
        if det == 0.0 {
            tracing::debug!(matrix = %self, "rejected inverse of singular matrix");
            return Err(MatrixError::Singular { dimension: 4 }.into());
        }

        let Self {
            a,
            b,
            c: m02,
            d,
            e,
            f,
            g,
            h,
            i,
            j,
            k,
            l,
            m,
            n,
            o,
            p,
        } = *self;
        let Minors { s, c } = minors;
        let adjugate = Self::new(
            f * c[5] - g * c[4] + h * c[3],
            -b * c[5] + m02 * c[4] - d * c[3],
            n * s[5] - o * s[4] + p * s[3],
            -j * s[5] + k * s[4] - l * s[3],
            -e * c[5] + g * c[2] - h * c[1],
            a * c[5] - m02 * c[2] + d * c[1],
            -m * s[5] + o * s[2] - p * s[1],
            i * s[5] - k * s[2] + l * s[1],
            e * c[4] - f * c[2] + h * c[0],
            -a * c[4] + b * c[2] - d * c[0],
            m * s[4] - n * s[2] + p * s[0],
            -i * s[4] + j * s[2] - l * s[0],
            -e * c[3] + f * c[1] - g * c[0],
            a * c[3] - b * c[1] + m02 * c[0],
            -m * s[3] + n * s[1] - o * s[0],
            i * s[3] - j * s[1] + k * s[0],
        );
        Ok(adjugate * (1.0 / det))
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
        Self::new(
            self.a, self.e, self.i, self.m, self.b, self.f, self.j, self.n, self.c, self.g,
            self.k, self.o, self.d, self.h, self.l, self.p,
        )
    }

    /// Transforms a point (`w = 1`), dividing by the resulting `w` when it is
    /// not one.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn transform_point(&self, point: &Point3) -> Point3 {
        let r = *self * Vector4::new(point.x, point.y, point.z, 1.0);
        if r.w == 1.0 {
            Point3::new(r.x, r.y, r.z)
        } else {
            Point3::new(r.x / r.w, r.y / r.w, r.z / r.w)
        }
    }

    /// Transforms a direction (`w = 0`, ignores translation).
    #[must_use]
    pub fn transform_vector(&self, v: &Vector3) -> Vector3 {
        (*self * Vector4::from_vector3(*v, 0.0)).xyz()
    }
}

impl Mul for Matrix4 {
    type Output = Self;

    fn mul(self, x: Self) -> Self {
        Self::new(
            self.a * x.a + self.b * x.e + self.c * x.i + self.d * x.m,
            self.a * x.b + self.b * x.f + self.c * x.j + self.d * x.n,
            self.a * x.c + self.b * x.g + self.c * x.k + self.d * x.o,
            self.a * x.d + self.b * x.h + self.c * x.l + self.d * x.p,
            self.e * x.a + self.f * x.e + self.g * x.i + self.h * x.m,
            self.e * x.b + self.f * x.f + self.g * x.j + self.h * x.n,
            self.e * x.c + self.f * x.g + self.g * x.k + self.h * x.o,
            self.e * x.d + self.f * x.h + self.g * x.l + self.h * x.p,
            self.i * x.a + self.j * x.e + self.k * x.i + self.l * x.m,
            self.i * x.b + self.j * x.f + self.k * x.j + self.l * x.n,
            self.i * x.c + self.j * x.g + self.k * x.k + self.l * x.o,
            self.i * x.d + self.j * x.h + self.k * x.l + self.l * x.p,
            self.m * x.a + self.n * x.e + self.o * x.i + self.p * x.m,
            self.m * x.b + self.n * x.f + self.o * x.j + self.p * x.n,
            self.m * x.c + self.n * x.g + self.o * x.k + self.p * x.o,
            self.m * x.d + self.n * x.h + self.o * x.l + self.p * x.p,
        )
    }
}

impl Mul<Vector4> for Matrix4 {
    type Output = Vector4;

    fn mul(self, v: Vector4) -> Vector4 {
        Vector4::new(
            self.a * v.x + self.b * v.y + self.c * v.z + self.d * v.w,
            self.e * v.x + self.f * v.y + self.g * v.z + self.h * v.w,
            self.i * v.x + self.j * v.y + self.k * v.z + self.l * v.w,
            self.m * v.x + self.n * v.y + self.o * v.z + self.p * v.w,
        )
    }
}

/// Multiplies every coefficient.
impl Mul<f64> for Matrix4 {
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
            self.j * s,
            self.k * s,
            self.l * s,
            self.m * s,
            self.n * s,
            self.o * s,
            self.p * s,
        )
    }
}

impl Mul<Matrix4> for f64 {
    type Output = Matrix4;

    fn mul(self, m: Matrix4) -> Matrix4 {
        m * self
    }
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{},{},{};{},{},{},{};{},{},{},{};{},{},{},{}] | det={}",
            self.a,
            self.b,
            self.c,
            self.d,
            self.e,
            self.f,
            self.g,
            self.h,
            self.i,
            self.j,
            self.k,
            self.l,
            self.m,
            self.n,
            self.o,
            self.p,
            self.determinant()
        )
    }
}
