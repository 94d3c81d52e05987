//! Boundary extension: push an attachment point out to the edge of the
//! bounding box it sits in, along its heading.

use crate::geometry::segments_intersect_at;
use crate::types::{Aabb, Heading, Segment, WorldPoint};

/// Which end of a stub segment is the real attachment point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubAnchor {
    Start,
    End,
}

/// The outward stub for an attachment point: `(attach, attach + heading)`
pub fn outward_stub(attach: WorldPoint, heading: Heading) -> Segment {
    Segment::new(attach, attach + heading.vector())
}

/// Where the stub crosses the boundary of the boxes containing its
/// attachment point.
///
/// Only boxes containing the attachment point are considered. The probe
/// reaches as far as the widest (horizontal stub) or tallest (vertical stub)
/// of them, and the answer is the *first* crossing found walking boxes in
/// order and each box's edges top, right, bottom, left. That is not
/// necessarily the nearest crossing when several boxes overlap.
///
/// Returns the attachment point unchanged when no box contains it or the
/// probe crosses nothing.
pub fn boundary_exit(stub: Segment, anchor: StubAnchor, boxes: &[Aabb]) -> WorldPoint {
    let (attach, other) = match anchor {
        StubAnchor::Start => (stub.start, stub.end),
        StubAnchor::End => (stub.end, stub.start),
    };
    let direction = (other - attach).normalize_or_zero();

    let containing: Vec<&Aabb> = boxes.iter().filter(|b| b.contains(attach)).collect();
    if containing.is_empty() {
        return attach;
    }

    let horizontal = direction.x.abs() >= direction.y.abs();
    let min_dist = containing
        .iter()
        .map(|b| if horizontal { b.width() } else { b.height() })
        .fold(0.0, f64::max);

    let probe_end = attach + direction * min_dist;
    containing
        .iter()
        .flat_map(|b| b.edges())
        .find_map(|edge| segments_intersect_at(attach.vec(), probe_end.vec(), edge.start.vec(), edge.end.vec()))
        .map(WorldPoint)
        .unwrap_or(attach)
}

/// The first joint of a stub: the boundary exit plus `clearance` along the
/// heading
pub fn stub_point(attach: WorldPoint, heading: Heading, boxes: &[Aabb], clearance: f64) -> (WorldPoint, WorldPoint) {
    let exit = boundary_exit(outward_stub(attach, heading), StubAnchor::Start, boxes);
    (exit, exit + heading.vector() * clearance)
}
