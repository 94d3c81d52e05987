//! Geometry primitives: normals, containment tests and segment intersection
//!
//! Everything here works on raw `DVec2` values. The typed wrappers in
//! [`crate::types`] delegate to these functions.

use glam::{DVec2, dvec2};

use crate::routing::defaults::POINT_EPSILON;

/// The x-axis unit vector, used to classify normals as horizontal or vertical
pub const X_AXIS: DVec2 = DVec2::X;

/// Normal of a direction vector: `(v.y, -v.x)`.
///
/// A horizontal direction has a vertical normal and vice versa. The zero
/// vector maps to the zero vector.
#[inline]
pub fn vector_normal(v: DVec2) -> DVec2 {
    dvec2(v.y, -v.x)
}

/// Normalized direction from `from` to `to`, or zero when the points coincide.
#[inline]
pub fn direction(from: DVec2, to: DVec2) -> DVec2 {
    (to - from).normalize_or_zero()
}

/// Point equality with a small absolute tolerance
#[inline]
pub fn points_equal(a: DVec2, b: DVec2) -> bool {
    a.abs_diff_eq(b, POINT_EPSILON)
}

/// Inclusive point-in-box test: points on an edge count as inside
#[inline]
pub fn point_in_box(p: DVec2, min: DVec2, max: DVec2) -> bool {
    p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
}

/// Inclusive point-in-triangle test.
///
/// Uses the sign of the cross product against each edge: the point is inside
/// when it is never strictly on both sides. Points on an edge or vertex count
/// as inside, and the winding of `a`, `b`, `c` does not matter.
pub fn point_in_triangle(p: DVec2, a: DVec2, b: DVec2, c: DVec2) -> bool {
    let d1 = (b - a).perp_dot(p - a);
    let d2 = (c - b).perp_dot(p - b);
    let d3 = (a - c).perp_dot(p - c);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    !(has_neg && has_pos)
}

/// Bounded intersection of two finite segments `a0→a1` and `b0→b1`.
///
/// Returns `None` for parallel (including collinear) and degenerate segments,
/// and when the crossing lies outside either segment. Endpoints count as
/// touching.
///
/// When a segment is axis-aligned, the matching coordinate of the result is
/// copied from it so that axis-aligned inputs give exact answers; the router
/// compares coordinates exactly.
pub fn segments_intersect_at(a0: DVec2, a1: DVec2, b0: DVec2, b1: DVec2) -> Option<DVec2> {
    let da = a1 - a0;
    let db = b1 - b0;

    let cross = da.perp_dot(db);
    if cross.abs() < f64::EPSILON {
        return None;
    }

    let delta = b0 - a0;
    let t = delta.perp_dot(db) / cross;
    let u = delta.perp_dot(da) / cross;

    let eps = POINT_EPSILON;
    if t < -eps || t > 1.0 + eps || u < -eps || u > 1.0 + eps {
        return None;
    }

    let mut hit = a0 + da * t.clamp(0.0, 1.0);
    for (s0, s1) in [(a0, a1), (b0, b1)] {
        if s0.x == s1.x {
            hit.x = s0.x;
        }
        if s0.y == s1.y {
            hit.y = s0.y;
        }
    }
    Some(hit)
}

/// Rotate `p` around `center` by `angle` radians
#[inline]
pub fn rotate_around(p: DVec2, center: DVec2, angle: f64) -> DVec2 {
    if angle == 0.0 {
        return p;
    }
    center + DVec2::from_angle(angle).rotate(p - center)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_swaps_axes() {
        assert_eq!(vector_normal(dvec2(1.0, 0.0)), dvec2(0.0, -1.0));
        assert_eq!(vector_normal(dvec2(0.0, 1.0)), dvec2(1.0, 0.0));
        assert_eq!(vector_normal(DVec2::ZERO).dot(X_AXIS), 0.0);
    }

    #[test]
    fn direction_of_coincident_points_is_zero() {
        let p = dvec2(4.0, 4.0);
        assert_eq!(direction(p, p), DVec2::ZERO);
        assert_eq!(direction(p, dvec2(4.0, 10.0)), dvec2(0.0, 1.0));
    }

    #[test]
    fn points_equal_tolerates_rounding() {
        assert!(points_equal(dvec2(0.1 + 0.2, 1.0), dvec2(0.3, 1.0)));
        assert!(!points_equal(dvec2(0.0, 0.0), dvec2(0.001, 0.0)));
    }

    #[test]
    fn triangle_contains_interior_edges_and_vertices() {
        let (a, b, c) = (dvec2(0.0, 0.0), dvec2(40.0, 0.0), dvec2(20.0, 20.0));
        assert!(point_in_triangle(dvec2(20.0, 5.0), a, b, c));
        assert!(point_in_triangle(dvec2(20.0, 0.0), a, b, c));
        assert!(point_in_triangle(dvec2(40.0, 0.0), a, b, c));
        assert!(!point_in_triangle(dvec2(40.0, 20.0), a, b, c));
        // Winding does not matter
        assert!(point_in_triangle(dvec2(20.0, 5.0), c, b, a));
    }

    #[test]
    fn crossing_segments_intersect() {
        let hit = segments_intersect_at(
            dvec2(-30.0, 20.0),
            dvec2(270.0, 20.0),
            dvec2(0.0, 40.0),
            dvec2(0.0, 0.0),
        );
        assert_eq!(hit, Some(dvec2(0.0, 20.0)));
    }

    #[test]
    fn touching_endpoint_counts() {
        let hit = segments_intersect_at(
            dvec2(40.0, 20.0),
            dvec2(80.0, 20.0),
            dvec2(40.0, 0.0),
            dvec2(40.0, 40.0),
        );
        assert_eq!(hit, Some(dvec2(40.0, 20.0)));
    }

    #[test]
    fn parallel_and_disjoint_segments_do_not_intersect() {
        // Collinear
        assert_eq!(
            segments_intersect_at(dvec2(0.0, 0.0), dvec2(10.0, 0.0), dvec2(5.0, 0.0), dvec2(20.0, 0.0)),
            None
        );
        // Would cross beyond the end of the first segment
        assert_eq!(
            segments_intersect_at(dvec2(0.0, 0.0), dvec2(10.0, 0.0), dvec2(20.0, -5.0), dvec2(20.0, 5.0)),
            None
        );
        // Degenerate
        assert_eq!(
            segments_intersect_at(dvec2(1.0, 1.0), dvec2(1.0, 1.0), dvec2(0.0, 0.0), dvec2(2.0, 2.0)),
            None
        );
    }

    #[test]
    fn diagonal_intersection() {
        let hit = segments_intersect_at(dvec2(0.0, 0.0), dvec2(10.0, 10.0), dvec2(0.0, 10.0), dvec2(10.0, 0.0))
            .expect("diagonals cross");
        assert!(points_equal(hit, dvec2(5.0, 5.0)));
    }

    #[test]
    fn rotate_quarter_turn() {
        let p = rotate_around(dvec2(10.0, 0.0), DVec2::ZERO, std::f64::consts::FRAC_PI_2);
        assert!(points_equal(p, dvec2(0.0, 10.0)));
        assert_eq!(rotate_around(dvec2(3.0, 4.0), DVec2::ZERO, 0.0), dvec2(3.0, 4.0));
    }
}
