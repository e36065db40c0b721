use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::{Vector3, VectorOps};

/// A homogeneous vector `(x, y, z, w)`.
///
/// The metric side (`dot`, `length`, `normalize`, `negate`, `are_parallel`)
/// works on `x, y, z` and leaves `w` alone. The arithmetic operators (`+`,
/// `-`, `* f64`, `/ f64`) always produce `w = 1.0`, whatever the inputs' `w`.
/// [`Neg`] and matrix products carry `w` through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl_exact_hash!(Vector4 { x, y, z, w });
impl_approx_eq!(Vector4 { x, y, z, w });

impl Vector4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Lifts a 3D vector with an explicit `w`.
    #[must_use]
    pub const fn from_vector3(v: Vector3, w: f64) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Drops `w`.
    #[must_use]
    pub const fn xyz(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl VectorOps for Vector4 {
    fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }

    fn normalize(&mut self) {
        let length = self.length();
        self.x /= length;
        self.y /= length;
        self.z /= length;
    }

    fn negate(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
    }

    fn are_parallel(u: &Self, v: &Self) -> bool {
        Vector3::are_parallel(&u.xyz(), &v.xyz())
    }
}

impl Add for Vector4 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, 1.0)
    }
}

impl Sub for Vector4 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, 1.0)
    }
}

impl Neg for Vector4 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }
}

impl Mul<f64> for Vector4 {
    type Output = Self;

    fn mul(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, 1.0)
    }
}

impl Mul<Vector4> for f64 {
    type Output = Vector4;

    fn mul(self, v: Vector4) -> Vector4 {
        v * self
    }
}

impl Div<f64> for Vector4 {
    type Output = Self;

    fn div(self, s: f64) -> Self {
        Self::new(self.x / s, self.y / s, self.z / s, 1.0)
    }
}

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{} | L={}",
            self.x,
            self.y,
            self.z,
            self.w,
            self.length()
        )
    }
}
