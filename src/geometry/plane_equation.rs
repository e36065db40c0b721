use std::fmt;
use std::hash::{Hash, Hasher};

use crate::math::{hash_coord, Point3, Vector3, VectorOps};

/// Implicit form `n · X + d = 0` of a plane.
///
/// The normal is kept at unit length and `d == -(n · point)` holds after
/// every mutator. `point` is the point the equation was generated from.
#[derive(Debug, Clone, Copy)]
pub struct PlaneEquation {
    normal: Vector3,
    d: f64,
    point: Point3,
}

impl PlaneEquation {
    /// Equation of the plane through `point` with the given normal. The
    /// normal is normalized first, so a zero normal yields NaN coefficients.
    #[must_use]
    pub fn new(point: Point3, normal: Vector3) -> Self {
        let mut equation = Self {
            normal: normal.normalized(),
            d: 0.0,
            point,
        };
        equation.update_equation();
        equation
    }

    /// Equation `a·x + b·y + c·z + d = 0`.
    ///
    /// Coefficients are rescaled by `1 / |(a, b, c)|`, so the same plane is
    /// described with a unit normal. The generating point becomes the foot of
    /// the perpendicular from the world origin.
    #[must_use]
    pub fn from_coefficients(a: f64, b: f64, c: f64, d: f64) -> Self {
        let raw = Vector3::new(a, b, c);
        let length = raw.length();
        let normal = raw / length;
        let d = d / length;
        Self {
            normal,
            d,
            point: Point3::ORIGIN + normal * -d,
        }
    }

    #[must_use]
    pub const fn normal(&self) -> Vector3 {
        self.normal
    }

    #[must_use]
    pub const fn d(&self) -> f64 {
        self.d
    }

    #[must_use]
    pub const fn point(&self) -> Point3 {
        self.point
    }

    /// `n · p + d`: zero on the plane, positive on the side the normal
    /// points to.
    #[must_use]
    pub fn evaluate(&self, p: &Point3) -> f64 {
        self.normal.dot(&p.coords()) + self.d
    }

    /// Recomputes `d` from the current normal and point.
    pub fn update_equation(&mut self) {
        self.d = -self.normal.dot(&self.point.coords());
    }

    /// Replaces the normal (normalized on the way in) and resyncs `d`.
    pub fn set_normal(&mut self, normal: Vector3) {
        self.normal = normal.normalized();
        self.update_equation();
    }

    /// Moves the generating point and resyncs `d`.
    pub fn set_point(&mut self, point: Point3) {
        self.point = point;
        self.update_equation();
    }

    /// Flips the normal and resyncs `d`.
    pub fn negate(&mut self) {
        self.normal.negate();
        self.update_equation();
    }
}

/// Compares the normal and `d`. Two equations generated from different
/// points of the same plane are equal.
impl PartialEq for PlaneEquation {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.normal == other.normal && self.d == other.d
    }
}

impl Eq for PlaneEquation {}

impl Hash for PlaneEquation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normal.hash(state);
        hash_coord(self.d, state);
    }
}

impl fmt::Display for PlaneEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{} | L={}",
            self.normal.x,
            self.normal.y,
            self.normal.z,
            self.d,
            self.normal.length()
        )
    }
}
