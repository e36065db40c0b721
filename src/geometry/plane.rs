use std::fmt;

use super::{PlaneEquation, Segment3};
use crate::error::{GeometryError, Result};
use crate::math::intersect_3d::plane_plane_intersect;
use crate::math::{DistanceTo, Matrix3, Point2, Point3, Vector2, Vector3, VectorOps};

/// An infinite plane with a local 2D frame.
///
/// `axis_x`, `axis_y` and the equation normal form a right-handed
/// orthonormal triple. Every mutator regenerates the frame from the normal.
///
/// Local coordinates: `P(u, v) = origin + u * axis_x + v * axis_y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Plane {
    origin: Point3,
    equation: PlaneEquation,
    axis_x: Vector3,
    axis_y: Vector3,
}

impl Plane {
    /// Plane through `origin` with the given normal (normalized on the way
    /// in). A zero normal yields NaN coefficients; see [`Plane::try_new`].
    #[must_use]
    pub fn new(origin: Point3, normal: Vector3) -> Self {
        let mut plane = Self {
            origin,
            equation: PlaneEquation::new(origin, normal),
            axis_x: Vector3::ZERO,
            axis_y: Vector3::ZERO,
        };
        plane.regen();
        plane
    }

    /// Like [`Plane::new`], rejecting normals without a positive length.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] for a zero or NaN normal.
    pub fn try_new(origin: Point3, normal: Vector3) -> Result<Self> {
        if !normal.is_valid() {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self::new(origin, normal))
    }

    /// Plane through the world origin.
    #[must_use]
    pub fn from_normal(normal: Vector3) -> Self {
        Self::new(Point3::ORIGIN, normal)
    }

    /// Plane through `origin` spanned by `x` and `y`; the normal is `x × y`.
    ///
    /// Only the normal is kept: the frame is regenerated, so it need not
    /// match the given axes.
    #[must_use]
    pub fn from_axes(origin: Point3, x: Vector3, y: Vector3) -> Self {
        Self::new(origin, Vector3::cross(&x, &y))
    }

    /// Plane through three points, with origin `p` and normal
    /// `(q - p) × (r - p)`.
    #[must_use]
    pub fn from_points(p: Point3, q: Point3, r: Point3) -> Self {
        Self::from_axes(p, q - p, r - p)
    }

    /// Like [`Plane::from_points`], rejecting collinear points.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] when the three points do not
    /// span a plane.
    pub fn try_from_points(p: Point3, q: Point3, r: Point3) -> Result<Self> {
        let normal = Vector3::cross(&(q - p), &(r - p));
        if !normal.is_valid() {
            return Err(
                GeometryError::Degenerate(format!("points {p}, {q} and {r} are collinear")).into(),
            );
        }
        Ok(Self::new(p, normal))
    }

    // ── well-known planes (through the world origin) ──

    /// Normal `+Z`.
    #[must_use]
    pub fn xy() -> Self {
        Self::from_normal(Vector3::Z_AXIS)
    }

    /// Normal `-Z`.
    #[must_use]
    pub fn yx() -> Self {
        Self::from_normal(-Vector3::Z_AXIS)
    }

    /// Normal `+X`.
    #[must_use]
    pub fn yz() -> Self {
        Self::from_normal(Vector3::X_AXIS)
    }

    /// Normal `-X`.
    #[must_use]
    pub fn zy() -> Self {
        Self::from_normal(-Vector3::X_AXIS)
    }

    /// Normal `-Y`.
    #[must_use]
    pub fn xz() -> Self {
        Self::from_normal(-Vector3::Y_AXIS)
    }

    /// Normal `+Y`.
    #[must_use]
    pub fn zx() -> Self {
        Self::from_normal(Vector3::Y_AXIS)
    }

    #[must_use]
    pub const fn origin(&self) -> &Point3 {
        &self.origin
    }

    #[must_use]
    pub const fn equation(&self) -> &PlaneEquation {
        &self.equation
    }

    /// Unit normal.
    #[must_use]
    pub const fn normal(&self) -> Vector3 {
        self.equation.normal()
    }

    #[must_use]
    pub const fn axis_x(&self) -> Vector3 {
        self.axis_x
    }

    #[must_use]
    pub const fn axis_y(&self) -> Vector3 {
        self.axis_y
    }

    /// Rebuilds the local frame from the normal.
    ///
    /// The reference axis is `Z`, or `X` when the normal is parallel to `Z`.
    /// Then `axis_x = N × ref` and `axis_y = N × axis_x`, both normalized.
    pub fn regen(&mut self) {
        let normal = self.normal();
        let reference = if Vector3::are_parallel(&Vector3::Z_AXIS, &normal) {
            tracing::trace!(%normal, "normal parallel to Z, using X as reference axis");
            Vector3::X_AXIS
        } else {
            Vector3::Z_AXIS
        };
        self.axis_x = Vector3::cross_normalized(&normal, &reference);
        self.axis_y = Vector3::cross_normalized(&normal, &self.axis_x);
    }

    /// Reverses the normal, keeping the plane in place.
    pub fn flip(&mut self) {
        self.equation.negate();
        self.regen();
    }

    /// Components of `v` along the local axes.
    #[must_use]
    pub fn project_vector(&self, v: &Vector3) -> Vector2 {
        Vector2::new(v.dot(&self.axis_x), v.dot(&self.axis_y))
    }

    /// Local coordinates of `p` relative to the origin. The offset along the
    /// normal is dropped.
    #[must_use]
    pub fn project_point(&self, p: &Point3) -> Point2 {
        let local = self.project_vector(&Vector3::between(&self.origin, p));
        Point2::new(local.x, local.y)
    }

    /// The point at local coordinates `(u, v)`.
    #[must_use]
    pub fn point_at(&self, u: f64, v: f64) -> Point3 {
        self.origin + self.axis_x * u + self.axis_y * v
    }

    /// Line shared by two planes, as a unit-length segment. `None` when the
    /// normals are parallel.
    #[must_use]
    pub fn intersection(a: &Self, b: &Self) -> Option<Segment3> {
        plane_plane_intersect(a, b)
    }

    // ── rigid motions ──

    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.translate_by(Vector3::new(dx, dy, dz));
    }

    pub fn translate_by(&mut self, offset: Vector3) {
        self.translate_to(self.origin + offset);
    }

    /// Moves the origin to `origin`. The normal and frame are unchanged.
    pub fn translate_to(&mut self, origin: Point3) {
        self.origin = origin;
        self.equation.set_point(origin);
    }

    /// Rotates by `angle` radians about `axis` through the world origin.
    pub fn rotate(&mut self, angle: f64, axis: Vector3) {
        self.rotate_about(angle, axis, Point3::ORIGIN);
    }

    /// Rotates by `angle` radians about `axis` through `center`.
    pub fn rotate_about(&mut self, angle: f64, axis: Vector3, center: Point3) {
        let rotation = Matrix3::rotation_axis_angle(angle, axis);
        self.origin = center + rotation * (self.origin - center);
        self.equation = PlaneEquation::new(self.origin, rotation * self.normal());
        self.regen();
    }
}

/// Signed distance, positive on the side the normal points to.
impl DistanceTo<Point3> for Plane {
    fn distance_to(&self, point: &Point3) -> f64 {
        point.distance_to(self)
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Origin = {} | Normal = {}", self.origin, self.equation)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::error::AnageoError;
    use crate::math::ProjectTo;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    fn assert_orthonormal_frame(plane: &Plane) {
        let (x, y, n) = (plane.axis_x(), plane.axis_y(), plane.normal());
        assert_relative_eq!(x.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(y.length(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x.dot(&y), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x.dot(&n), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y.dot(&n), 0.0, epsilon = 1e-12);
    }

    // ── construction ──

    #[test]
    fn well_known_normals() {
        assert_eq!(Plane::xy().normal(), Vector3::Z_AXIS);
        assert_eq!(Plane::yx().normal(), -Vector3::Z_AXIS);
        assert_eq!(Plane::yz().normal(), Vector3::X_AXIS);
        assert_eq!(Plane::zy().normal(), -Vector3::X_AXIS);
        assert_eq!(Plane::xz().normal(), -Vector3::Y_AXIS);
        assert_eq!(Plane::zx().normal(), Vector3::Y_AXIS);
    }

    #[test]
    fn frames_are_orthonormal() {
        for plane in [
            Plane::xy(),
            Plane::yx(),
            Plane::yz(),
            Plane::zy(),
            Plane::xz(),
            Plane::zx(),
            Plane::new(p(1.0, 2.0, 3.0), v(1.0, -2.0, 0.5)),
        ] {
            assert_orthonormal_frame(&plane);
        }
    }

    #[test]
    fn xy_frame_uses_x_reference() {
        let plane = Plane::xy();
        assert_eq!(plane.axis_x(), v(0.0, 1.0, 0.0));
        assert_eq!(plane.axis_y(), v(-1.0, 0.0, 0.0));
    }

    #[test]
    fn new_normalizes_normal() {
        let plane = Plane::new(p(0.0, 0.0, 2.0), v(0.0, 0.0, 4.0));
        assert_eq!(plane.normal(), v(0.0, 0.0, 1.0));
        assert_relative_eq!(plane.equation().d(), -2.0);
        assert_eq!(*plane.origin(), p(0.0, 0.0, 2.0));
    }

    #[test]
    fn from_points_keeps_first_point_as_origin() {
        let plane = Plane::from_points(p(1.0, 1.0, 1.0), p(2.0, 1.0, 1.0), p(1.0, 2.0, 1.0));
        assert_eq!(*plane.origin(), p(1.0, 1.0, 1.0));
        assert_eq!(plane.normal(), v(0.0, 0.0, 1.0));
        assert_relative_eq!(plane.distance_to(&p(0.0, 0.0, 3.0)), 2.0);
    }

    #[test]
    fn from_axes_normal_is_cross_product() {
        let plane = Plane::from_axes(Point3::ORIGIN, v(0.0, 2.0, 0.0), v(0.0, 0.0, 3.0));
        assert_eq!(plane.normal(), Vector3::X_AXIS);
    }

    #[test]
    fn try_new_rejects_zero_normal() {
        let err = Plane::try_new(Point3::ORIGIN, Vector3::ZERO).unwrap_err();
        assert!(matches!(err, AnageoError::Geometry(GeometryError::ZeroVector)));
        assert!(Plane::try_new(Point3::ORIGIN, v(0.0, 0.0, 1.0)).is_ok());
    }

    #[test]
    fn try_from_points_rejects_collinear() {
        let err = Plane::try_from_points(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0), p(2.0, 2.0, 2.0))
            .unwrap_err();
        assert!(matches!(err, AnageoError::Geometry(GeometryError::Degenerate(_))));
    }

    // ── projection ──

    #[test]
    fn project_point_and_back() {
        let plane = Plane::xy();
        let local = plane.project_point(&p(1.0, 2.0, 5.0));
        assert_relative_eq!(local, Point2::new(2.0, -1.0));
        assert_relative_eq!(plane.point_at(local.x, local.y), p(1.0, 2.0, 0.0));
    }

    #[test]
    fn point_at_round_trips_on_oblique_plane() {
        let plane = Plane::new(p(1.0, -1.0, 2.0), v(1.0, 1.0, 1.0));
        let on_plane = plane.point_at(0.75, -2.5);
        assert_abs_diff_eq!(plane.distance_to(&on_plane), 0.0, epsilon = 1e-12);
        assert_relative_eq!(plane.project_point(&on_plane), Point2::new(0.75, -2.5), epsilon = 1e-12);
    }

    #[test]
    fn project_vector_drops_normal_component() {
        let plane = Plane::yz();
        let local = plane.project_vector(&v(9.0, 2.0, 3.0));
        assert_relative_eq!(local.length(), 13.0_f64.sqrt(), epsilon = 1e-12);
    }

    // ── distance ──

    #[test]
    fn signed_distance_both_ways() {
        let plane = Plane::xy();
        assert_relative_eq!(plane.distance_to(&p(1.0, 1.0, 1.0)), 1.0);
        assert_relative_eq!(plane.distance_to(&p(1.0, 1.0, -1.0)), -1.0);
    }

    // ── mutation ──

    #[test]
    fn flip_reverses_normal_and_sign() {
        let mut plane = Plane::new(p(0.0, 0.0, 1.0), v(0.0, 0.0, 1.0));
        plane.flip();
        assert_eq!(plane.normal(), v(0.0, 0.0, -1.0));
        assert_relative_eq!(plane.distance_to(&p(0.0, 0.0, 3.0)), -2.0);
        assert_orthonormal_frame(&plane);
    }

    #[test]
    fn translate_moves_plane_along_normal() {
        let mut plane = Plane::xy();
        plane.translate(0.0, 0.0, 2.0);
        assert_eq!(*plane.origin(), p(0.0, 0.0, 2.0));
        assert_relative_eq!(plane.distance_to(&p(0.0, 0.0, 3.0)), 1.0);

        plane.translate_by(v(1.0, 0.0, -1.0));
        assert_relative_eq!(plane.distance_to(&p(0.0, 0.0, 3.0)), 2.0);

        plane.translate_to(p(5.0, 5.0, -4.0));
        assert_relative_eq!(plane.distance_to(&p(0.0, 0.0, 3.0)), 7.0);
        assert_eq!(plane.normal(), Vector3::Z_AXIS);
    }

    #[test]
    fn rotate_about_world_axis() {
        let mut plane = Plane::xy();
        plane.rotate(FRAC_PI_2, Vector3::X_AXIS);
        assert_relative_eq!(plane.normal(), v(0.0, -1.0, 0.0), epsilon = 1e-12);
        assert_orthonormal_frame(&plane);
    }

    #[test]
    fn rotate_about_offset_center() {
        let mut plane = Plane::yz();
        plane.rotate_about(PI, Vector3::Z_AXIS, p(1.0, 0.0, 0.0));
        assert_relative_eq!(*plane.origin(), p(2.0, 0.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(plane.normal(), v(-1.0, 0.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(plane.distance_to(&p(2.0, 5.0, 5.0)), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn projected_point_lies_on_plane() {
        let plane = Plane::new(p(0.0, 3.0, 0.0), v(0.0, 1.0, 2.0));
        let projected = p(4.0, -1.0, 7.0).project_to(&plane);
        assert_abs_diff_eq!(plane.distance_to(&projected), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn intersection_delegates() {
        let line = Plane::intersection(&Plane::xy(), &Plane::yz()).unwrap();
        assert_relative_eq!(line.direction().length(), 1.0);
        assert_relative_eq!(line.direction().y.abs(), 1.0);
        assert!(Plane::intersection(&Plane::xy(), &Plane::yx()).is_none());
    }

    #[test]
    fn equal_planes_collapse_in_a_set() {
        let mut planes = std::collections::HashSet::new();
        planes.insert(Plane::xy());
        planes.insert(Plane::xy());
        planes.insert(Plane::yz());
        assert_eq!(planes.len(), 2);
    }

    #[test]
    fn display_shows_origin_and_equation() {
        let plane = Plane::new(p(0.0, 0.0, 2.0), v(0.0, 0.0, 1.0));
        assert_eq!(plane.to_string(), "Origin = 0,0,2 | Normal = 0,0,1,-2 | L=1");
    }
}
