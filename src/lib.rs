//! Analytic geometry kernel: vectors, points, matrices, segments and planes,
//! with the distance, projection and intersection queries between them.

pub mod error;
#[macro_use]
pub mod math;
pub mod geometry;
pub mod interop;

pub use error::{AnageoError, Result};
pub use geometry::{Plane, PlaneEquation, Segment2, Segment3, SegmentIntersection2, SegmentIntersection3};
pub use math::{
    DistanceTo, Matrix2, Matrix3, Matrix4, Point2, Point3, ProjectTo, Vector2, Vector3, Vector4,
    VectorOps, TOLERANCE,
};
