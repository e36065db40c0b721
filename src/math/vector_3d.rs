use std::fmt;
use std::ops::{Div, Mul};

use super::{Point3, VectorOps};
use crate::geometry::Segment3;

/// A direction and magnitude in space.
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
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl_exact_hash!(Vector3 { x, y, z });
impl_approx_eq!(Vector3 { x, y, z });

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const X_AXIS: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y_AXIS: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z_AXIS: Self = Self::new(0.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The vector pointing from `p0` to `p1`.
    #[must_use]
    pub fn between(p0: &Point3, p1: &Point3) -> Self {
        Self::new(p1.x - p0.x, p1.y - p0.y, p1.z - p0.z)
    }

    /// The direction of a segment, from `p0` to `p1`.
    #[must_use]
    pub fn from_segment(segment: &Segment3) -> Self {
        Self::between(&segment.p0, &segment.p1)
    }

    /// Right-handed cross product.
    #[must_use]
    pub fn cross(u: &Self, v: &Self) -> Self {
        Self::new(
            u.y * v.z - u.z * v.y,
            u.z * v.x - u.x * v.z,
            u.x * v.y - u.y * v.x,
        )
    }

    /// Cross product scaled to unit length (NaN for parallel inputs).
    #[must_use]
    pub fn cross_normalized(u: &Self, v: &Self) -> Self {
        Self::cross(u, v).normalized()
    }
}

impl VectorOps for Vector3 {
    fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
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

    /// True when the cross product has zero length.
    fn are_parallel(u: &Self, v: &Self) -> bool {
        !Self::cross(u, v).is_valid()
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        v * self
    }
}

impl Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, s: f64) -> Self {
        Self::new(self.x / s, self.y / s, self.z / s)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{} | L={}", self.x, self.y, self.z, self.length())
    }
}
