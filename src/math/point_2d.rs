use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use super::{DistanceTo, ProjectTo, Vector2, VectorOps};
use crate::geometry::Segment2;

/// A position in the plane.
///
/// `+` between points is coordinate-wise, for centroid-style affine
/// combinations. `-` between points yields a vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, derive_more::Add)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl_exact_hash!(Point2 { x, y });
impl_approx_eq!(Point2 { x, y });

impl Point2 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points.
    #[must_use]
    pub fn distance_between(a: &Self, b: &Self) -> f64 {
        a.distance_to(b)
    }
}

impl DistanceTo<Point2> for Point2 {
    fn distance_to(&self, other: &Point2) -> f64 {
        Vector2::between(self, other).length()
    }
}

/// Projects onto the infinite line through the segment (not clamped to the
/// endpoints).
impl ProjectTo<Segment2> for Point2 {
    type Output = Point2;

    fn project_to(&self, segment: &Segment2) -> Point2 {
        let direction = segment.direction();
        let to_point = Vector2::between(&segment.p0, self);
        segment.p0 + direction * (to_point.dot(&direction) / direction.dot(&direction))
    }
}

/// Distance to the infinite line through the segment.
impl DistanceTo<Segment2> for Point2 {
    fn distance_to(&self, segment: &Segment2) -> f64 {
        self.distance_to(&self.project_to(segment))
    }
}

impl Add<Vector2> for Point2 {
    type Output = Self;

    fn add(self, v: Vector2) -> Self {
        Self::new(self.x + v.x, self.y + v.y)
    }
}

impl Sub<Vector2> for Point2 {
    type Output = Self;

    fn sub(self, v: Vector2) -> Self {
        Self::new(self.x - v.x, self.y - v.y)
    }
}

impl Sub for Point2 {
    type Output = Vector2;

    fn sub(self, rhs: Self) -> Vector2 {
        Vector2::between(&rhs, &self)
    }
}

impl Mul<f64> for Point2 {
    type Output = Self;

    fn mul(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s)
    }
}

impl Mul<Point2> for f64 {
    type Output = Point2;

    fn mul(self, p: Point2) -> Point2 {
        p * self
    }
}

impl Div<f64> for Point2 {
    type Output = Self;

    fn div(self, s: f64) -> Self {
        Self::new(self.x / s, self.y / s)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
