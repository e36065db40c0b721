use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use super::{DistanceTo, Point2, ProjectTo, Vector3, VectorOps};
use crate::geometry::{Plane, Segment3};

/// A position in space.
///
/// `+` between points is coordinate-wise, for centroid-style affine
/// combinations. `-` between points yields a vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, derive_more::Add)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl_exact_hash!(Point3 { x, y, z });
impl_approx_eq!(Point3 { x, y, z });

impl Point3 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance between two points.
    #[must_use]
    pub fn distance_between(a: &Self, b: &Self) -> f64 {
        a.distance_to(b)
    }

    /// The position vector of this point.
    #[must_use]
    pub const fn coords(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl From<Point2> for Point3 {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y, 0.0)
    }
}

impl DistanceTo<Point3> for Point3 {
    fn distance_to(&self, other: &Point3) -> f64 {
        Vector3::between(self, other).length()
    }
}

/// Distance to the infinite line through the segment.
impl DistanceTo<Segment3> for Point3 {
    fn distance_to(&self, segment: &Segment3) -> f64 {
        self.distance_to(&self.project_to(segment))
    }
}

/// Signed distance, positive on the side the normal points to.
///
/// Computed as `(N·P + D) / |N|`. The equation keeps `N` at unit length, so
/// the division is by one.
impl DistanceTo<Plane> for Point3 {
    fn distance_to(&self, plane: &Plane) -> f64 {
        let equation = plane.equation();
        let normal = equation.normal();
        (normal.dot(&self.coords()) + equation.d()) / normal.length()
    }
}

/// Projects onto the infinite line through the segment.
///
/// The result is not clamped to `[p0, p1]`; callers wanting the closest point
/// of the bounded segment clamp the parameter themselves.
impl ProjectTo<Segment3> for Point3 {
    type Output = Point3;

    fn project_to(&self, segment: &Segment3) -> Point3 {
        let direction = segment.direction();
        let to_point = Vector3::between(&segment.p0, self);
        segment.p0 + direction * (to_point.dot(&direction) / direction.dot(&direction))
    }
}

impl ProjectTo<Plane> for Point3 {
    type Output = Point3;

    fn project_to(&self, plane: &Plane) -> Point3 {
        let normal = plane.normal();
        let distance = Vector3::between(plane.origin(), self).dot(&normal);
        *self - normal * distance
    }
}

impl Add<Vector3> for Point3 {
    type Output = Self;

    fn add(self, v: Vector3) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl Sub<Vector3> for Point3 {
    type Output = Self;

    fn sub(self, v: Vector3) -> Self {
        Self::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }
}

impl Sub for Point3 {
    type Output = Vector3;

    fn sub(self, rhs: Self) -> Vector3 {
        Vector3::between(&rhs, &self)
    }
}

impl Mul<f64> for Point3 {
    type Output = Self;

    fn mul(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Mul<Point3> for f64 {
    type Output = Point3;

    fn mul(self, p: Point3) -> Point3 {
        p * self
    }
}

impl Div<f64> for Point3 {
    type Output = Self;

    fn div(self, s: f64) -> Self {
        Self::new(self.x / s, self.y / s, self.z / s)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}
