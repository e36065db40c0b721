use super::intersect_2d::{line_line_intersect_2d, within_unit};
use super::{Matrix2, Point3, Vector2, Vector3, VectorOps, TOLERANCE};
use crate::geometry::{Plane, Segment3};

/// Crossing of two coplanar spatial segments (or of their supporting lines).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentIntersection3 {
    /// The crossing as reached along the first segment.
    pub point_on_a: Point3,
    /// The crossing as reached along the second segment. Differs from
    /// `point_on_a` by at most the coplanarity tolerance.
    pub point_on_b: Point3,
    pub t_a: f64,
    pub t_b: f64,
}

/// Computes the line shared by two planes.
///
/// Returns `None` when the normals are parallel (parallel or coincident
/// planes). Otherwise the segment starts at a point of the line and ends one
/// unit further along `N1 × N2`.
///
/// The point is found by setting the coordinate on the dominant axis of the
/// direction to zero and solving both plane equations for the other two. The
/// 2x2 determinant of that system is the dominant direction component, so it
/// is never zero here.
#[must_use]
pub fn plane_plane_intersect(a: &Plane, b: &Plane) -> Option<Segment3> {
    let na = a.normal();
    let nb = b.normal();

    if Vector3::are_parallel(&na, &nb) {
        tracing::debug!(%a, %b, "planes are parallel");
        return None;
    }

    let direction = Vector3::cross(&na, &nb);
    let rhs = Vector2::new(-a.equation().d(), -b.equation().d());
    let (ax, ay, az) = (direction.x.abs(), direction.y.abs(), direction.z.abs());

    let origin = if ax >= ay && ax >= az {
        let yz = solve(Matrix2::new(na.y, na.z, nb.y, nb.z), rhs)?;
        Point3::new(0.0, yz.x, yz.y)
    } else if ay >= az {
        let xz = solve(Matrix2::new(na.x, na.z, nb.x, nb.z), rhs)?;
        Point3::new(xz.x, 0.0, xz.y)
    } else {
        let xy = solve(Matrix2::new(na.x, na.y, nb.x, nb.y), rhs)?;
        Point3::new(xy.x, xy.y, 0.0)
    };

    Some(Segment3::new(origin, origin + direction.normalized()))
}

fn solve(m: Matrix2, rhs: Vector2) -> Option<Vector2> {
    m.inverse().ok().map(|inv| inv * rhs)
}

/// Segment-segment intersection in space.
///
/// The supporting lines must be coplanar: their distance has to be within
/// [`TOLERANCE`]. Parallel or degenerate inputs make that distance NaN and are
/// rejected. Coplanar lines are then expressed in the plane through `a.p0`
/// spanned by both directions and solved there.
///
/// With `infinite` unset both parameters must lie in `[0, 1]` (with
/// tolerance slack); they are then clamped.
#[must_use]
pub fn segment_segment_intersect_3d(
    a: &Segment3,
    b: &Segment3,
    infinite: bool,
) -> Option<SegmentIntersection3> {
    let distance = Segment3::distance_between(a, b);
    if distance.is_nan() || distance > TOLERANCE {
        tracing::debug!(distance, "segments are not coplanar");
        return None;
    }

    let (da, db) = (a.direction(), b.direction());
    let shared = Plane::from_axes(a.p0, da, db);

    let (mut t_a, mut t_b) = line_line_intersect_2d(
        &shared.project_point(&a.p0),
        &shared.project_vector(&da),
        &shared.project_point(&b.p0),
        &shared.project_vector(&db),
    )?;

    if !infinite {
        if !(within_unit(t_a) && within_unit(t_b)) {
            tracing::debug!(t_a, t_b, "crossing lies outside the segments");
            return None;
        }
        t_a = t_a.clamp(0.0, 1.0);
        t_b = t_b.clamp(0.0, 1.0);
    }

    Some(SegmentIntersection3 {
        point_on_a: a.point_at(t_a),
        point_on_b: b.point_at(t_b),
        t_a,
        t_b,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::math::DistanceTo;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    fn seg(a: Point3, b: Point3) -> Segment3 {
        Segment3::new(a, b)
    }

    fn assert_on_both(line: &Segment3, a: &Plane, b: &Plane) {
        for point in [line.p0, line.p1] {
            assert_abs_diff_eq!(point.distance_to(a), 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(point.distance_to(b), 0.0, epsilon = 1e-12);
        }
    }

    // ── plane_plane_intersect ──

    #[test]
    fn xy_and_xz_meet_along_x_axis() {
        let (xy, xz) = (Plane::xy(), Plane::zx());
        let line = plane_plane_intersect(&xy, &xz).unwrap();
        let direction = line.direction();
        assert_relative_eq!(direction.length(), 1.0);
        assert_relative_eq!(direction.x.abs(), 1.0);
        assert_on_both(&line, &xy, &xz);
    }

    #[test]
    fn offset_planes_meet_along_z_axis() {
        let a = Plane::new(p(1.0, 0.0, 0.0), v(1.0, 0.0, 0.0));
        let b = Plane::new(p(0.0, 2.0, 0.0), v(0.0, 1.0, 0.0));
        let line = plane_plane_intersect(&a, &b).unwrap();
        // Dominant axis is z, so the start point has z = 0.
        assert_relative_eq!(line.p0, p(1.0, 2.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(line.direction(), v(0.0, 0.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn oblique_planes_share_a_line() {
        let a = Plane::new(p(0.0, 0.0, 3.0), v(1.0, 2.0, 2.0));
        let b = Plane::new(p(-1.0, 4.0, 0.0), v(-3.0, 0.5, 1.0));
        let line = plane_plane_intersect(&a, &b).unwrap();
        assert_on_both(&line, &a, &b);
        assert_abs_diff_eq!(line.direction().dot(&a.normal()), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(line.direction().dot(&b.normal()), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn parallel_planes_have_no_line() {
        let a = Plane::xy();
        let b = Plane::new(p(0.0, 0.0, 5.0), v(0.0, 0.0, 1.0));
        assert!(plane_plane_intersect(&a, &b).is_none());
        assert!(plane_plane_intersect(&a, &Plane::yx()).is_none());
        assert!(plane_plane_intersect(&a, &a).is_none());
    }

    // ── segment_segment_intersect_3d ──

    #[test]
    fn near_coplanar_lines_within_tolerance_cross() {
        let a = seg(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let lifted = seg(p(0.5, -1.0, 5e-11), p(0.5, 1.0, 5e-11));
        assert_relative_eq!(Segment3::distance_between(&a, &lifted), 5e-11, epsilon = 1e-20);

        let hit = segment_segment_intersect_3d(&a, &lifted, false).unwrap();
        assert_relative_eq!(hit.point_on_a, p(0.5, 0.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(hit.point_on_b, p(0.5, 0.0, 5e-11), epsilon = 1e-12);
        assert_relative_eq!(hit.t_a, 0.5, epsilon = 1e-12);
        assert_relative_eq!(hit.t_b, 0.5, epsilon = 1e-12);

        let skew = seg(p(0.5, -1.0, 1e-6), p(0.5, 1.0, 1e-6));
        assert!(segment_segment_intersect_3d(&a, &skew, false).is_none());
    }

    #[test]
    fn crossing_segments_in_space() {
        let a = seg(p(0.0, 0.0, 1.0), p(2.0, 2.0, 1.0));
        let b = seg(p(0.0, 2.0, 1.0), p(2.0, 0.0, 1.0));
        let hit = segment_segment_intersect_3d(&a, &b, false).unwrap();
        assert_relative_eq!(hit.point_on_a, p(1.0, 1.0, 1.0), epsilon = 1e-12);
        assert_relative_eq!(hit.point_on_b, p(1.0, 1.0, 1.0), epsilon = 1e-12);
        assert_relative_eq!(hit.t_a, 0.5, epsilon = 1e-12);
        assert_relative_eq!(hit.t_b, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn tilted_plane_crossing() {
        let a = seg(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0));
        let b = seg(p(1.0, 0.0, 0.0), p(0.0, 1.0, 1.0));
        let hit = segment_segment_intersect_3d(&a, &b, false).unwrap();
        assert_relative_eq!(hit.point_on_a, p(0.5, 0.5, 0.5), epsilon = 1e-12);
        assert_relative_eq!(hit.t_b, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn skew_segments_do_not_meet() {
        let a = seg(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let b = seg(p(0.0, 1.0, 1.0), p(0.0, 1.0, 2.0));
        assert!(segment_segment_intersect_3d(&a, &b, true).is_none());
    }

    #[test]
    fn parallel_segments_are_rejected() {
        let a = seg(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let b = seg(p(0.0, 1.0, 0.0), p(1.0, 1.0, 0.0));
        assert!(segment_segment_intersect_3d(&a, &b, true).is_none());
    }

    #[test]
    fn bounded_miss_but_infinite_hit() {
        let a = seg(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let b = seg(p(3.0, 0.0, 1.0), p(3.0, 0.0, 2.0));
        assert!(segment_segment_intersect_3d(&a, &b, false).is_none());

        let hit = segment_segment_intersect_3d(&a, &b, true).unwrap();
        assert_relative_eq!(hit.point_on_a, p(3.0, 0.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(hit.t_a, 3.0, epsilon = 1e-12);
        assert_relative_eq!(hit.t_b, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_segment_is_rejected() {
        let a = seg(p(1.0, 1.0, 1.0), p(1.0, 1.0, 1.0));
        let b = seg(p(0.0, 0.0, 0.0), p(2.0, 2.0, 2.0));
        assert!(segment_segment_intersect_3d(&a, &b, true).is_none());
    }
}
