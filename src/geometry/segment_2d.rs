use std::fmt;

use crate::math::intersect_2d::{segment_segment_intersect_2d, SegmentIntersection2};
use crate::math::{Point2, Vector2, VectorOps};

/// A bounded planar segment from `p0` to `p1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Segment2 {
    pub p0: Point2,
    pub p1: Point2,
}

impl_approx_eq!(Segment2 { p0, p1 });

impl Segment2 {
    #[must_use]
    pub const fn new(p0: Point2, p1: Point2) -> Self {
        Self { p0, p1 }
    }

    #[must_use]
    pub const fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    /// Segment from the origin to the tip of `v`.
    #[must_use]
    pub fn from_vector(v: Vector2) -> Self {
        Self::new(Point2::ORIGIN, Point2::ORIGIN + v)
    }

    #[must_use]
    pub fn direction(&self) -> Vector2 {
        Vector2::between(&self.p0, &self.p1)
    }

    #[must_use]
    pub fn mid_point(&self) -> Point2 {
        self.p0 + self.direction() / 2.0
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().length()
    }

    /// Whether both endpoints coincide exactly.
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.p0 == self.p1
    }

    /// `p0 + t * direction`. `t` is not restricted to `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.p0 + self.direction() * t
    }

    /// Crossing of `a` and `b`, or of their supporting lines when
    /// `infinite` is set. `None` for parallel inputs.
    #[must_use]
    pub fn intersection(a: &Self, b: &Self, infinite: bool) -> Option<SegmentIntersection2> {
        segment_segment_intersect_2d(a, b, infinite)
    }
}

impl fmt::Display for Segment2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} | L={}", self.p0, self.p1, self.length())
    }
}
