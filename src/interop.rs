//! Explicit conversions to and from [`nalgebra`].
//!
//! Matrices map row by row: `a` is `(0, 0)`, `b` is `(0, 1)` and so on.

use crate::geometry::Plane;
use crate::math::{Matrix2, Matrix3, Matrix4, Point2, Point3, Vector2, Vector3, Vector4};

pub type NaVector2 = nalgebra::Vector2<f64>;
pub type NaVector3 = nalgebra::Vector3<f64>;
pub type NaVector4 = nalgebra::Vector4<f64>;
pub type NaPoint2 = nalgebra::Point2<f64>;
pub type NaPoint3 = nalgebra::Point3<f64>;
pub type NaMatrix2 = nalgebra::Matrix2<f64>;
pub type NaMatrix3 = nalgebra::Matrix3<f64>;
pub type NaMatrix4 = nalgebra::Matrix4<f64>;

// ── vectors and points ──

#[must_use]
pub fn vector2_to_nalgebra(v: &Vector2) -> NaVector2 {
    NaVector2::new(v.x, v.y)
}

#[must_use]
pub fn vector2_from_nalgebra(v: &NaVector2) -> Vector2 {
    Vector2::new(v.x, v.y)
}

#[must_use]
pub fn vector3_to_nalgebra(v: &Vector3) -> NaVector3 {
    NaVector3::new(v.x, v.y, v.z)
}

#[must_use]
pub fn vector3_from_nalgebra(v: &NaVector3) -> Vector3 {
    Vector3::new(v.x, v.y, v.z)
}

#[must_use]
pub fn vector4_to_nalgebra(v: &Vector4) -> NaVector4 {
    NaVector4::new(v.x, v.y, v.z, v.w)
}

#[must_use]
pub fn vector4_from_nalgebra(v: &NaVector4) -> Vector4 {
    Vector4::new(v.x, v.y, v.z, v.w)
}

#[must_use]
pub fn point2_to_nalgebra(p: &Point2) -> NaPoint2 {
    NaPoint2::new(p.x, p.y)
}

#[must_use]
pub fn point2_from_nalgebra(p: &NaPoint2) -> Point2 {
    Point2::new(p.x, p.y)
}

#[must_use]
pub fn point3_to_nalgebra(p: &Point3) -> NaPoint3 {
    NaPoint3::new(p.x, p.y, p.z)
}

#[must_use]
pub fn point3_from_nalgebra(p: &NaPoint3) -> Point3 {
    Point3::new(p.x, p.y, p.z)
}

// ── matrices ──

#[must_use]
pub fn matrix2_to_nalgebra(m: &Matrix2) -> NaMatrix2 {
    NaMatrix2::new(m.a, m.b, m.c, m.d)
}

#[must_use]
pub fn matrix2_from_nalgebra(m: &NaMatrix2) -> Matrix2 {
    Matrix2::new(m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)])
}

#[must_use]
#[rustfmt::skip]
pub fn matrix3_to_nalgebra(m: &Matrix3) -> NaMatrix3 {
    NaMatrix3::new(
        m.a, m.b, m.c,
        m.d, m.e, m.f,
        m.g, m.h, m.i,
    )
}

#[must_use]
#[rustfmt::skip]
pub fn matrix3_from_nalgebra(m: &NaMatrix3) -> Matrix3 {
    Matrix3::new(
        m[(0, 0)], m[(0, 1)], m[(0, 2)],
        m[(1, 0)], m[(1, 1)], m[(1, 2)],
        m[(2, 0)], m[(2, 1)], m[(2, 2)],
    )
}

#[must_use]
#[rustfmt::skip]
pub fn matrix4_to_nalgebra(m: &Matrix4) -> NaMatrix4 {
    NaMatrix4::new(
        m.a, m.b, m.c, m.d,
        m.e, m.f, m.g, m.h,
        m.i, m.j, m.k, m.l,
        m.m, m.n, m.o, m.p,
    )
}

#[must_use]
#[rustfmt::skip]
pub fn matrix4_from_nalgebra(m: &NaMatrix4) -> Matrix4 {
    Matrix4::new(
        m[(0, 0)], m[(0, 1)], m[(0, 2)], m[(0, 3)],
        m[(1, 0)], m[(1, 1)], m[(1, 2)], m[(1, 3)],
        m[(2, 0)], m[(2, 1)], m[(2, 2)], m[(2, 3)],
        m[(3, 0)], m[(3, 1)], m[(3, 2)], m[(3, 3)],
    )
}

// ── planes ──

/// Origin and unit normal of the plane.
#[must_use]
pub fn plane_to_nalgebra(plane: &Plane) -> (NaPoint3, nalgebra::Unit<NaVector3>) {
    (
        point3_to_nalgebra(plane.origin()),
        nalgebra::Unit::new_normalize(vector3_to_nalgebra(&plane.normal())),
    )
}

#[must_use]
pub fn plane_from_nalgebra(origin: &NaPoint3, normal: &nalgebra::Unit<NaVector3>) -> Plane {
    Plane::new(point3_from_nalgebra(origin), vector3_from_nalgebra(&normal.into_inner()))
}
