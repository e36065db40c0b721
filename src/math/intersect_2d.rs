use super::{Point2, Vector2, VectorOps, TOLERANCE};
use crate::geometry::Segment2;

/// Crossing of two planar segments (or of their supporting lines).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentIntersection2 {
    /// The crossing point.
    pub point: Point2,
    /// Parameter of the crossing along the first segment (`p0 + t * dir`).
    pub t_a: f64,
    /// Parameter of the crossing along the second segment.
    pub t_b: f64,
}

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` unless the
/// directions are parallel (which includes a zero direction).
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    if Vector2::are_parallel(d1, d2) {
        return None;
    }
    let cross = d1.perp_dot(d2);
    let delta = *p2 - *p1;
    let t = delta.perp_dot(d2) / cross;
    let u = delta.perp_dot(d1) / cross;
    Some((t, u))
}

/// Whether a segment parameter lies in `[0, 1]`, with [`TOLERANCE`] slack so
/// shared endpoints count.
pub(crate) fn within_unit(t: f64) -> bool {
    (-TOLERANCE..=1.0 + TOLERANCE).contains(&t)
}

/// Segment-segment intersection in the plane.
///
/// With `infinite` set, the segments stand for their supporting lines and
/// any crossing is accepted. Otherwise both parameters must fall inside the
/// segments; they are then clamped to `[0, 1]`.
///
/// Parallel and collinear pairs have no single crossing and yield `None`.
#[must_use]
pub fn segment_segment_intersect_2d(
    a: &Segment2,
    b: &Segment2,
    infinite: bool,
) -> Option<SegmentIntersection2> {
    let Some((mut t_a, mut t_b)) =
        line_line_intersect_2d(&a.p0, &a.direction(), &b.p0, &b.direction())
    else {
        tracing::debug!(%a, %b, "segments are parallel");
        return None;
    };

    if !infinite {
        if !(within_unit(t_a) && within_unit(t_b)) {
            tracing::debug!(t_a, t_b, "crossing lies outside the segments");
            return None;
        }
        t_a = t_a.clamp(0.0, 1.0);
        t_b = t_b.clamp(0.0, 1.0);
    }

    Some(SegmentIntersection2 {
        point: a.point_at(t_a),
        t_a,
        t_b,
    })
}
