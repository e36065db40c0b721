pub mod plane;
pub mod plane_equation;
pub mod segment_2d;
pub mod segment_3d;

pub use plane::Plane;
pub use plane_equation::PlaneEquation;
pub use segment_2d::Segment2;
pub use segment_3d::Segment3;

pub use crate::math::intersect_2d::SegmentIntersection2;
pub use crate::math::intersect_3d::SegmentIntersection3;
