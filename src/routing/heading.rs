//! Heading resolution: which side of its shape each endpoint uses
//!
//! A bound endpoint takes the side of its bounding box it sits closest to,
//! decided by splitting the box into four triangles that meet at its center.
//! An unbound endpoint gets a heading derived from the straight line between
//! the two endpoints.

use glam::DVec2;

use crate::geometry::point_in_triangle;
use crate::types::{Aabb, Heading, WorldPoint};

/// Side of `aabb` that `point` belongs to.
///
/// Triangles are tested in top, right, bottom order (edges and vertices
/// count as inside); anything else is `Left`. The order is fixed so that
/// points on a shared diagonal always resolve the same way.
pub fn heading_for_box(aabb: &Aabb, point: WorldPoint) -> Heading {
    let p = point.vec();
    let mid = aabb.center().vec();
    let (tl, tr) = (aabb.top_left().vec(), aabb.top_right().vec());
    let (br, bl) = (aabb.bottom_right().vec(), aabb.bottom_left().vec());

    if point_in_triangle(p, tl, tr, mid) {
        Heading::Up
    } else if point_in_triangle(p, tr, br, mid) {
        Heading::Right
    } else if point_in_triangle(p, br, bl, mid) {
        Heading::Down
    } else {
        Heading::Left
    }
}

/// Headings for both endpoints; an absent box yields an absent heading
pub fn resolve_headings(
    boxes: (Option<Aabb>, Option<Aabb>),
    (start, end): (WorldPoint, WorldPoint),
) -> (Option<Heading>, Option<Heading>) {
    (
        boxes.0.map(|b| heading_for_box(&b, start)),
        boxes.1.map(|b| heading_for_box(&b, end)),
    )
}

/// Fill in headings for unbound endpoints.
///
/// `approach` is the direction of the arrow's last raw segment (into the end
/// point). Free ends are placed on the axis perpendicular to the other end's
/// heading so that two free ends meet with a single turn.
pub fn complete_headings(
    (start_heading, end_heading): (Option<Heading>, Option<Heading>),
    (start, end): (WorldPoint, WorldPoint),
    approach: DVec2,
) -> (Heading, Heading) {
    let start_heading = start_heading.unwrap_or_else(|| match end_heading {
        Some(other) => perpendicular_toward(other, end - start),
        None => Heading::from_vector(end - start),
    });
    let end_heading = end_heading.unwrap_or_else(|| perpendicular_toward(start_heading, -approach));
    (start_heading, end_heading)
}

/// Heading on the axis perpendicular to `other`, signed by `toward`'s
/// component on that axis. Falls back to `toward`'s dominant axis when that
/// component is zero.
fn perpendicular_toward(other: Heading, toward: DVec2) -> Heading {
    let component = if other.is_horizontal() { toward.y } else { toward.x };
    match (other.is_horizontal(), component) {
        (_, c) if c == 0.0 => Heading::from_vector(toward),
        (true, c) if c > 0.0 => Heading::Down,
        (true, _) => Heading::Up,
        (false, c) if c > 0.0 => Heading::Right,
        (false, _) => Heading::Left,
    }
}
