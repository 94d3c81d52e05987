//! Step kernel: grow an orthogonal path by one joint.
//!
//! Each step picks one leg of an L toward the target, stops that leg at the
//! first obstacle face it would cross, and jogs sideways when the result
//! would face the target stub head-on from the wrong side.

use glam::{DVec2, dvec2};

use super::observer::RouteObserver;
use crate::geometry::{X_AXIS, direction, segments_intersect_at, vector_normal};
use crate::log::debug;
use crate::types::{Aabb, WorldPoint};

/// Produce the next joint of `path` toward `target`.
///
/// `path` ends in the current frontier point; `target` starts with the point
/// the frontier has to reach, followed by the rest of the end stub. Returns
/// `None` only when either slice is empty.
pub fn step(
    path: &[WorldPoint],
    target: &[WorldPoint],
    boxes: &[Aabb],
    deadlock_nudge: f64,
    observer: &mut dyn RouteObserver,
) -> Option<WorldPoint> {
    let current = *path.last()?;
    let goal = *target.first()?;

    // With a single point there is no last segment: the first move is
    // unconstrained and treated like one following a horizontal segment.
    let start_vector = match path {
        [.., previous, last] => direction(previous.vec(), last.vec()),
        _ => DVec2::ZERO,
    };
    let end_vector = match target {
        [first, second, ..] => direction(first.vec(), second.vec()),
        _ => DVec2::ZERO,
    };

    let candidate = turn(current, goal, start_vector, end_vector);
    let candidate = clip_to_obstacles(current, candidate, boxes);
    Some(escape_deadlock(current, candidate, goal, end_vector, deadlock_nudge, observer))
}

/// Pick one leg of the L from `current` to `goal`.
///
/// After a vertical segment (its normal is horizontal) the leg keeps the
/// column and moves to the goal's row; otherwise it keeps the row and moves
/// to the goal's column. When that leg goes nowhere or would double back
/// over the last segment, the other leg is taken, provided it goes somewhere.
/// The other leg is also preferred when the straight one would end up facing
/// the end stub head-on and the other would not.
fn turn(current: WorldPoint, goal: WorldPoint, start_vector: DVec2, end_vector: DVec2) -> WorldPoint {
    let along_row = WorldPoint::new(goal.x(), current.y());
    let along_column = WorldPoint::new(current.x(), goal.y());

    let last_was_vertical = vector_normal(start_vector).dot(X_AXIS) != 0.0;
    let (straight, turned) = if last_was_vertical {
        (along_column, along_row)
    } else {
        (along_row, along_column)
    };
    if turned.exactly_eq(current) {
        return straight;
    }

    let stalls = straight.exactly_eq(current);
    let doubles_back = direction(current.vec(), straight.vec()).dot(start_vector) < 0.0;
    if stalls || doubles_back {
        return turned;
    }

    if faces_stub_head_on(straight, goal, end_vector) && !faces_stub_head_on(turned, goal, end_vector) {
        turned
    } else {
        straight
    }
}

/// `point` shares exactly one of the goal's row or column, and reaching the
/// goal from it would mean moving against the end stub's direction.
fn faces_stub_head_on(point: WorldPoint, goal: WorldPoint, end_vector: DVec2) -> bool {
    let same_row = point.y() == goal.y();
    let same_column = point.x() == goal.x();
    same_row != same_column && direction(point.vec(), goal.vec()).dot(end_vector) == -1.0
}

/// Stop the move `current → candidate` at the nearest obstacle face it
/// crosses.
///
/// A crossing at `current` itself does not count as blocking, so a frontier
/// sitting on a face can leave it.
fn clip_to_obstacles(current: WorldPoint, candidate: WorldPoint, boxes: &[Aabb]) -> WorldPoint {
    let nearest = boxes
        .iter()
        .flat_map(|b| b.edges())
        .filter_map(|edge| {
            segments_intersect_at(current.vec(), candidate.vec(), edge.start.vec(), edge.end.vec())
        })
        .map(WorldPoint)
        .min_by(|a, b| {
            a.distance_squared(current)
                .total_cmp(&b.distance_squared(current))
        });

    // The hit lies on the move itself, so it is the point at that distance
    // along the travel direction; its off-axis coordinate is exact.
    match nearest {
        Some(hit) if !hit.exactly_eq(current) => hit,
        _ => candidate,
    }
}

/// Break a stalemate where `candidate` shares exactly one of the goal's row
/// or column but sits on the wrong side of it: reaching the goal would mean
/// arriving opposite to the end stub's direction.
///
/// The jog goes across the shared row (or column). It is applied to
/// `current` when the move was along the shared line, otherwise to the
/// candidate, so the produced segment stays axis-aligned.
fn escape_deadlock(
    current: WorldPoint,
    candidate: WorldPoint,
    goal: WorldPoint,
    end_vector: DVec2,
    nudge: f64,
    observer: &mut dyn RouteObserver,
) -> WorldPoint {
    if !faces_stub_head_on(candidate, goal, end_vector) {
        return candidate;
    }

    let same_row = candidate.y() == goal.y();
    let travel = candidate - current;
    let (offset, moved_along_line) = if same_row {
        (dvec2(0.0, nudge), travel.x != 0.0)
    } else {
        (dvec2(nudge, 0.0), travel.y != 0.0)
    };
    let base = if moved_along_line { current } else { candidate };
    let nudged = base + offset;

    debug!(from = %candidate, to = %nudged, "deadlock nudge");
    observer.deadlock_nudge(candidate, nudged);
    nudged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::observer::{NoopObserver, RecordingObserver};

    fn pt(x: f64, y: f64) -> WorldPoint {
        WorldPoint::new(x, y)
    }

    fn step_once(path: &[WorldPoint], target: &[WorldPoint], boxes: &[Aabb]) -> WorldPoint {
        step(path, target, boxes, 40.0, &mut NoopObserver).unwrap()
    }

    #[test]
    fn empty_inputs_produce_nothing() {
        assert_eq!(step(&[], &[pt(1.0, 1.0)], &[], 40.0, &mut NoopObserver), None);
        assert_eq!(step(&[pt(1.0, 1.0)], &[], &[], 40.0, &mut NoopObserver), None);
    }

    #[test]
    fn first_move_is_horizontal() {
        let next = step_once(&[pt(0.0, 0.0)], &[pt(100.0, 50.0)], &[]);
        assert_eq!(next, pt(100.0, 0.0));
    }

    #[test]
    fn keeps_going_along_the_last_axis() {
        // After a horizontal stub, move to the goal's column
        let next = step_once(&[pt(0.0, 0.0), pt(30.0, 0.0)], &[pt(100.0, 20.0), pt(100.0, 50.0)], &[]);
        assert_eq!(next, pt(100.0, 0.0));

        // After a vertical stub, move to the goal's row
        let next = step_once(&[pt(0.0, 0.0), pt(0.0, 30.0)], &[pt(70.0, 50.0), pt(100.0, 50.0)], &[]);
        assert_eq!(next, pt(0.0, 50.0));
    }

    #[test]
    fn turns_once_aligned() {
        let next = step_once(
            &[pt(30.0, 0.0), pt(100.0, 0.0)],
            &[pt(100.0, 20.0), pt(100.0, 50.0)],
            &[],
        );
        assert_eq!(next, pt(100.0, 20.0));
    }

    #[test]
    fn turns_instead_of_doubling_back() {
        // Heading right, goal is behind and below
        let next = step_once(&[pt(0.0, 0.0), pt(30.0, 0.0)], &[pt(-50.0, 80.0)], &[]);
        assert_eq!(next, pt(30.0, 80.0));
    }

    #[test]
    fn avoids_lining_up_against_the_end_stub() {
        // The goal's stub arrives from above, the frontier is below it:
        // reaching its column first would leave it facing the stub head-on
        let next = step_once(
            &[pt(200.0, 220.0), pt(170.0, 220.0)],
            &[pt(20.0, -30.0), pt(20.0, 0.0)],
            &[],
        );
        assert_eq!(next, pt(170.0, -30.0));
    }

    #[test]
    fn stops_at_the_nearest_obstacle_face() {
        let wall = Aabb::new(50.0, -10.0, 60.0, 10.0);
        let far = Aabb::new(80.0, -10.0, 90.0, 10.0);
        let next = step_once(&[pt(0.0, 0.0)], &[pt(120.0, 0.0)], &[far, wall]);
        assert_eq!(next, pt(50.0, 0.0));
    }

    #[test]
    fn leaving_a_face_is_not_blocked_by_it() {
        let wall = Aabb::new(50.0, -10.0, 60.0, 10.0);
        let next = step_once(&[pt(0.0, 0.0), pt(60.0, 0.0)], &[pt(120.0, 0.0)], &[wall]);
        assert_eq!(next, pt(120.0, 0.0));
    }

    #[test]
    fn reaching_the_goal_returns_it_exactly() {
        let goal = pt(170.0, 20.0);
        let next = step_once(&[pt(40.0, 20.0), pt(70.0, 20.0)], &[goal, pt(200.0, 20.0)], &[]);
        assert!(next.exactly_eq(goal));
    }

    #[test]
    fn head_on_stalemate_is_nudged_sideways() {
        // Frontier heads left, away from a goal on the same row whose stub
        // points left as well (arrival from the right). The move right is
        // clipped by the start box, leaving the frontier facing the stub
        // from the wrong side.
        let start_box = Aabb::new(0.0, 0.0, 40.0, 40.0);
        let end_box = Aabb::new(200.0, 0.0, 240.0, 40.0);
        let mut observer = RecordingObserver::new();
        let next = step(
            &[pt(0.0, 20.0), pt(-30.0, 20.0)],
            &[pt(270.0, 20.0), pt(240.0, 20.0)],
            &[start_box, end_box],
            40.0,
            &mut observer,
        )
        .unwrap();
        assert_eq!(next, pt(-30.0, 60.0));
        assert_eq!(observer.nudge_count(), 1);
    }

    #[test]
    fn nudge_applies_to_candidate_when_moving_across_the_line() {
        // Moving vertically onto the goal's row, on the wrong side: the stub
        // arrives leftwards but the candidate sits left of the goal
        let mut observer = RecordingObserver::new();
        let next = escape_deadlock(
            pt(200.0, 0.0),
            pt(200.0, 20.0),
            pt(270.0, 20.0),
            dvec2(-1.0, 0.0),
            40.0,
            &mut observer,
        );
        assert_eq!(next, pt(200.0, 60.0));
        assert_eq!(observer.nudge_count(), 1);
    }

    #[test]
    fn approaching_from_the_right_side_is_left_alone() {
        let mut observer = RecordingObserver::new();
        let next = escape_deadlock(
            pt(100.0, 0.0),
            pt(100.0, 20.0),
            pt(170.0, 20.0),
            dvec2(1.0, 0.0),
            40.0,
            &mut observer,
        );
        assert_eq!(next, pt(100.0, 20.0));
        assert_eq!(observer.nudge_count(), 0);
    }
}
