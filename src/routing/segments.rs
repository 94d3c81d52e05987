//! Segment assembly: run the kernel from the start stub to the end stub,
//! then tidy up the joints.

use super::kernel;
use super::observer::{JointKind, RouteObserver};
use crate::config::RouterConfig;
use crate::geometry::points_equal;
use crate::log::{trace, warn};
use crate::types::{Aabb, Segment, WorldPoint};

/// Grow a path from the `start` stub until it meets the head of the `end`
/// stub, then append the `end` stub.
///
/// At most `config.step_limit` kernel steps run. If the frontier still has
/// not met the end stub by then, the end stub is appended anyway and the
/// closing segment may be diagonal; this is reported as a warning and through
/// [`RouteObserver::step_limit_reached`].
pub fn assemble_segments(
    start: &[WorldPoint],
    end: &[WorldPoint],
    boxes: &[Aabb],
    config: &RouterConfig,
    observer: &mut dyn RouteObserver,
) -> Vec<WorldPoint> {
    let (Some(_), Some(&goal)) = (start.last(), end.first()) else {
        return start.iter().chain(end).copied().collect();
    };

    let mut points = Vec::with_capacity(start.len() + config.step_limit + end.len());
    points.extend_from_slice(start);

    let mut converged = false;
    for steps in 0..config.step_limit {
        let Some(next) = kernel::step(&points, end, boxes, config.deadlock_nudge, observer) else {
            break;
        };
        if next.exactly_eq(goal) {
            trace!(steps, "frontier met the end stub");
            converged = true;
            break;
        }
        if let Some(&last) = points.last() {
            observer.segment(Segment::new(last, next));
        }
        observer.joint(next, JointKind::Step);
        points.push(next);
    }

    if !converged {
        let frontier = points.last().copied().unwrap_or(goal);
        warn!(
            steps = config.step_limit,
            frontier = %frontier,
            target = %goal,
            "elbow route did not converge, closing the path directly"
        );
        observer.step_limit_reached(config.step_limit, frontier);
    }

    if let Some(&last) = points.last() {
        observer.segment(Segment::new(last, goal));
    }
    points.extend_from_slice(end);
    points
}

/// Remove redundant joints.
///
/// Drops points that coincide with their predecessor and middle points of
/// three consecutive points sharing a row or a column (which also folds a
/// segment that doubles back over the previous one). The first and last
/// points are kept exactly as given.
pub fn simplify_joints(points: &[WorldPoint]) -> Vec<WorldPoint> {
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return Vec::new();
    };

    let mut out: Vec<WorldPoint> = Vec::with_capacity(points.len());
    for &p in points {
        while let &[.., a, b] = out.as_slice() {
            if !points_equal(b.vec(), p.vec()) && collinear(a, b, p) {
                out.pop();
            } else {
                break;
            }
        }
        if out.last().is_some_and(|q| points_equal(q.vec(), p.vec())) {
            continue;
        }
        out.push(p);
    }

    if out.len() < 2 {
        return vec![first, last];
    }
    if let Some(tail) = out.last_mut() {
        *tail = last;
    }
    out
}

fn collinear(a: WorldPoint, b: WorldPoint, c: WorldPoint) -> bool {
    (a.x() == b.x() && b.x() == c.x()) || (a.y() == b.y() && b.y() == c.y())
}
