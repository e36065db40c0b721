/// Implements exact-value `Hash` + `Eq` for a coordinate record.
///
/// Coordinates hash by bit pattern with `-0.0` folded onto `0.0`, so values
/// that compare equal hash equally. NaN coordinates never compare equal,
/// not even to themselves.
macro_rules! impl_exact_hash {
    ($ty:ty { $($field:ident),+ }) => {
        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                $( $crate::math::hash_coord(self.$field, state); )+
            }
        }
    };
}

/// Implements `approx::AbsDiffEq` and `approx::RelativeEq` field by field.
macro_rules! impl_approx_eq {
    ($ty:ty { $($field:ident),+ }) => {
        impl approx::AbsDiffEq for $ty {
            type Epsilon = f64;

            fn default_epsilon() -> f64 {
                <f64 as approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
                $( approx::AbsDiffEq::abs_diff_eq(&self.$field, &other.$field, epsilon) )&&+
            }
        }

        impl approx::RelativeEq for $ty {
            fn default_max_relative() -> f64 {
                <f64 as approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
                $( approx::RelativeEq::relative_eq(&self.$field, &other.$field, epsilon, max_relative) )&&+
            }
        }
    };
}

pub mod intersect_2d;
pub mod intersect_3d;
mod matrix_2d;
mod matrix_3d;
mod matrix_4d;
mod point_2d;
mod point_3d;
mod vector_2d;
mod vector_3d;
mod vector_4d;

pub use matrix_2d::Matrix2;
pub use matrix_3d::Matrix3;
pub use matrix_4d::Matrix4;
pub use point_2d::Point2;
pub use point_3d::Point3;
pub use vector_2d::Vector2;
pub use vector_3d::Vector3;
pub use vector_4d::Vector4;

/// Geometric tolerance for the few predicates that cannot be exact.
///
/// Everything else (parallelism, orthogonality, singularity, equality)
/// compares exactly.
pub const TOLERANCE: f64 = 1e-10;

/// Capability set shared by the 2, 3 and 4 component vectors.
pub trait VectorOps: Copy {
    /// Dot product.
    fn dot(&self, other: &Self) -> f64;

    /// Euclidean norm.
    fn length(&self) -> f64;

    /// Divides every component by the length, in place.
    ///
    /// A zero-length vector has no direction: its components become NaN.
    /// Check [`is_valid`](VectorOps::is_valid) first when it matters.
    fn normalize(&mut self);

    /// Flips the sign of every component, in place.
    fn negate(&mut self);

    /// Whether the vector has a strictly positive length.
    fn is_valid(&self) -> bool {
        self.length() > 0.0
    }

    /// Returns a normalized copy.
    #[must_use]
    fn normalized(&self) -> Self {
        let mut copy = *self;
        copy.normalize();
        copy
    }

    /// Whether the dot product is exactly zero.
    #[allow(clippy::float_cmp)]
    fn are_orthogonal(u: &Self, v: &Self) -> bool {
        u.dot(v) == 0.0
    }

    /// Whether the two vectors share a direction (or one is zero).
    fn are_parallel(u: &Self, v: &Self) -> bool;
}

/// Distance from `self` to another geometric object.
pub trait DistanceTo<Other: ?Sized> {
    fn distance_to(&self, other: &Other) -> f64;
}

/// Orthogonal projection of `self` onto another geometric object.
pub trait ProjectTo<Target: ?Sized> {
    type Output;

    fn project_to(&self, target: &Target) -> Self::Output;
}

#[allow(clippy::float_cmp)]
pub(crate) fn hash_coord<H: std::hash::Hasher>(value: f64, state: &mut H) {
    use std::hash::Hash;

    let folded = if value == 0.0 { 0.0 } else { value };
    folded.to_bits().hash(state);
}
