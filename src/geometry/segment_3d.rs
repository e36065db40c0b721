use std::fmt;

use crate::math::intersect_3d::{segment_segment_intersect_3d, SegmentIntersection3};
use crate::math::{Point3, Vector3, VectorOps};

/// A bounded segment in space from `p0` to `p1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Segment3 {
    pub p0: Point3,
    pub p1: Point3,
}

impl_approx_eq!(Segment3 { p0, p1 });

impl Segment3 {
    #[must_use]
    pub const fn new(p0: Point3, p1: Point3) -> Self {
        Self { p0, p1 }
    }

    #[must_use]
    pub const fn from_coords(x0: f64, y0: f64, z0: f64, x1: f64, y1: f64, z1: f64) -> Self {
        Self::new(Point3::new(x0, y0, z0), Point3::new(x1, y1, z1))
    }

    /// Segment from the origin to the tip of `v`.
    #[must_use]
    pub fn from_vector(v: Vector3) -> Self {
        Self::new(Point3::ORIGIN, Point3::ORIGIN + v)
    }

    #[must_use]
    pub fn direction(&self) -> Vector3 {
        Vector3::from_segment(self)
    }

    #[must_use]
    pub fn mid_point(&self) -> Point3 {
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
    pub fn point_at(&self, t: f64) -> Point3 {
        self.p0 + self.direction() * t
    }

    /// Distance between the infinite lines through `a` and `b`.
    ///
    /// Computed as `|(b.p0 - a.p0) · (dA × dB)| / |dA × dB|`. Parallel lines
    /// (and zero-length segments) make the cross product vanish and the
    /// result is NaN.
    #[must_use]
    pub fn distance_between(a: &Self, b: &Self) -> f64 {
        let normal = Vector3::cross(&a.direction(), &b.direction());
        let offset = Vector3::between(&a.p0, &b.p0);
        (offset.dot(&normal) / normal.length()).abs()
    }

    /// Crossing of two coplanar segments, or of their supporting lines when
    /// `infinite` is set.
    ///
    /// Skew, parallel and degenerate pairs yield `None`.
    #[must_use]
    pub fn intersection(a: &Self, b: &Self, infinite: bool) -> Option<SegmentIntersection3> {
        segment_segment_intersect_3d(a, b, infinite)
    }
}

impl fmt::Display for Segment3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} | L={}", self.p0, self.p1, self.length())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn derived_quantities() {
        let s = Segment3::from_coords(0.0, 0.0, 0.0, 2.0, 3.0, 6.0);
        assert_relative_eq!(s.length(), 7.0);
        assert_eq!(s.mid_point(), p(1.0, 1.5, 3.0));
        assert_eq!(s.point_at(2.0), p(4.0, 6.0, 12.0));
        assert!(!s.is_point());
        assert_relative_eq!(Segment3::new(p(1.0, 1.0, 1.0), p(1.0, 1.0, 1.0)).length(), 0.0);
    }

    #[test]
    fn from_vector_starts_at_origin() {
        let s = Segment3::from_vector(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(s, Segment3::from_coords(0.0, 0.0, 0.0, 1.0, 2.0, 3.0));
    }

    #[test]
    fn distance_between_skew_lines() {
        let a = Segment3::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let b = Segment3::new(p(0.0, 1.0, 1.0), p(0.0, 1.0, 2.0));
        assert_relative_eq!(Segment3::distance_between(&a, &b), 1.0);
        assert_relative_eq!(Segment3::distance_between(&b, &a), 1.0);
    }

    #[test]
    fn distance_between_crossing_lines_is_zero() {
        let a = Segment3::new(p(-1.0, 0.0, 2.0), p(1.0, 0.0, 2.0));
        let b = Segment3::new(p(0.0, -1.0, 2.0), p(0.0, 1.0, 2.0));
        assert_relative_eq!(Segment3::distance_between(&a, &b), 0.0);
    }

    #[test]
    fn distance_between_parallel_lines_is_nan() {
        let a = Segment3::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let b = Segment3::new(p(0.0, 1.0, 0.0), p(2.0, 1.0, 0.0));
        assert!(Segment3::distance_between(&a, &b).is_nan());
    }

    #[test]
    fn intersection_delegates() {
        let a = Segment3::new(p(-1.0, 0.0, 2.0), p(1.0, 0.0, 2.0));
        let b = Segment3::new(p(0.0, -1.0, 2.0), p(0.0, 1.0, 2.0));
        let hit = Segment3::intersection(&a, &b, false).unwrap();
        assert_relative_eq!(hit.point_on_a, p(0.0, 0.0, 2.0), epsilon = 1e-12);
    }

    #[test]
    fn display_includes_length() {
        assert_eq!(
            Segment3::from_coords(0.0, 0.0, 0.0, 2.0, 3.0, 6.0).to_string(),
            "0,0,0 -> 2,3,6 | L=7"
        );
    }
}
