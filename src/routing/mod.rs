//! Elbow routing: turn an arrow's two endpoints into an orthogonal polyline
//! that leaves and enters its bound shapes perpendicular to their sides.
//!
//! The pipeline, per call:
//!
//! 1. [`obstacles`] resolves bindings to bounding boxes
//! 2. [`heading`] picks the side each endpoint leaves from or enters through
//! 3. [`boundary`] builds a stub per endpoint that clears its box
//! 4. [`segments`] runs the [`kernel`] between the stubs and tidies joints
//!
//! Routing is pure: it reads the arrow and the scene and returns new points.

pub mod boundary;
pub mod defaults;
pub mod heading;
pub mod kernel;
pub mod observer;
pub mod obstacles;
pub mod segments;

use glam::DVec2;

use crate::arrow::Arrow;
use crate::config::RouterConfig;
use crate::log::debug;
use crate::scene::Scene;
use crate::types::{Aabb, Heading, LocalPoint, WorldPoint};

use boundary::stub_point;
use heading::{complete_headings, resolve_headings};
use observer::{JointKind, NoopObserver, RouteObserver};
use obstacles::{collect_boxes, obstacle_boxes};
use segments::{assemble_segments, simplify_joints};

/// Route `arrow` with the default configuration.
///
/// Returns the new points in the arrow's local frame. Arrows with fewer than
/// two points are returned unchanged.
pub fn route_elbow_arrow(arrow: &Arrow, scene: &Scene) -> Vec<LocalPoint> {
    route_elbow_arrow_with(arrow, scene, &RouterConfig::default(), &mut NoopObserver)
}

/// Route `arrow` with an explicit configuration, reporting progress to
/// `observer`.
pub fn route_elbow_arrow_with(
    arrow: &Arrow,
    scene: &Scene,
    config: &RouterConfig,
    observer: &mut dyn RouteObserver,
) -> Vec<LocalPoint> {
    let raw = arrow.points();
    let &[first_local, .., last_local] = raw else {
        return raw.to_vec();
    };
    let before_last_local = raw[raw.len() - 2];

    let start = arrow.to_world(first_local);
    let end = arrow.to_world(last_local);
    let approach = match end - arrow.to_world(before_last_local) {
        v if v == DVec2::ZERO => end - start,
        v => v,
    };

    let boxes = obstacle_boxes(arrow, scene);
    let bound = resolve_headings(boxes, (start, end));
    let (start_heading, end_heading) = complete_headings(bound, (start, end), approach);
    debug!(
        start = %start,
        end = %end,
        %start_heading,
        %end_heading,
        start_bound = bound.0.is_some(),
        end_bound = bound.1.is_some(),
        "routing elbow arrow"
    );

    let obstacles = collect_boxes(boxes);
    let start_stub = stub_joint(start, start_heading, bound.0.is_some(), &obstacles, config, observer);
    let end_stub = stub_joint(end, end_heading, bound.1.is_some(), &obstacles, config, observer);

    let world = assemble_segments(&[start, start_stub], &[end_stub, end], &obstacles, config, observer);
    let world = simplify_joints(&world);

    let mut local: Vec<LocalPoint> = world.into_iter().map(|p| arrow.to_local(p)).collect();
    // Endpoints come back bit-for-bit as given, whatever the frame round trip did
    if let Some(p) = local.first_mut() {
        *p = first_local;
    }
    if let Some(p) = local.last_mut() {
        *p = last_local;
    }
    local
}

/// The first joint of the stub leaving (or entering) `attach`.
///
/// Bound endpoints first move out to the edge of the boxes they sit in;
/// free endpoints step straight out by the clearance.
fn stub_joint(
    attach: WorldPoint,
    heading: Heading,
    bound: bool,
    obstacles: &[Aabb],
    config: &RouterConfig,
    observer: &mut dyn RouteObserver,
) -> WorldPoint {
    let stub = if bound {
        let (exit, stub) = stub_point(attach, heading, obstacles, config.self_box_offset);
        observer.joint(exit, JointKind::Boundary);
        stub
    } else {
        attach + heading.vector() * config.self_box_offset
    };
    observer.joint(stub, JointKind::Stub);
    stub
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrow::Binding;
    use crate::routing::observer::RecordingObserver;
    use crate::scene::RectangleShape;

    fn lp(x: f64, y: f64) -> LocalPoint {
        LocalPoint::new(x, y)
    }

    fn two_boxes() -> Scene {
        Scene::new()
            .with_shape("a", RectangleShape::from_corner(0.0, 0.0, 40.0, 40.0))
            .unwrap()
            .with_shape("b", RectangleShape::from_corner(200.0, 0.0, 40.0, 40.0))
            .unwrap()
    }

    #[test]
    fn short_arrows_pass_through() {
        let scene = Scene::new();
        let empty = Arrow::try_new(WorldPoint::ORIGIN, vec![]).unwrap();
        assert!(route_elbow_arrow(&empty, &scene).is_empty());

        let single = Arrow::try_new(WorldPoint::new(5.0, 5.0), vec![lp(1.0, 2.0)]).unwrap();
        assert_eq!(route_elbow_arrow(&single, &scene), vec![lp(1.0, 2.0)]);
    }

    #[test]
    fn facing_sides_route_straight() {
        let arrow = Arrow::try_new(WorldPoint::ORIGIN, vec![lp(40.0, 20.0), lp(200.0, 20.0)])
            .unwrap()
            .with_start_binding(Binding::new("a"))
            .with_end_binding(Binding::new("b"));
        let mut observer = RecordingObserver::new();
        let path = route_elbow_arrow_with(&arrow, &two_boxes(), &RouterConfig::default(), &mut observer);

        assert_eq!(path, vec![lp(40.0, 20.0), lp(200.0, 20.0)]);
        assert_eq!(
            observer.joints(JointKind::Stub),
            vec![WorldPoint::new(70.0, 20.0), WorldPoint::new(170.0, 20.0)]
        );
    }

    #[test]
    fn origin_offset_is_applied_both_ways() {
        // Same layout as above, but the arrow lives at (10, 10)
        let arrow = Arrow::try_new(WorldPoint::new(10.0, 10.0), vec![lp(30.0, 10.0), lp(190.0, 10.0)])
            .unwrap()
            .with_start_binding(Binding::new("a"))
            .with_end_binding(Binding::new("b"));
        let path = route_elbow_arrow(&arrow, &two_boxes());
        assert_eq!(path, vec![lp(30.0, 10.0), lp(190.0, 10.0)]);
    }

    #[test]
    fn free_endpoints_meet_with_one_corner() {
        let arrow = Arrow::try_new(WorldPoint::ORIGIN, vec![lp(0.0, 0.0), lp(100.0, 50.0)]).unwrap();
        let path = route_elbow_arrow(&arrow, &Scene::new());
        assert_eq!(path, vec![lp(0.0, 0.0), lp(100.0, 0.0), lp(100.0, 50.0)]);
    }

    #[test]
    fn boundary_joints_are_reported_for_bound_ends_only() {
        let arrow = Arrow::try_new(WorldPoint::ORIGIN, vec![lp(40.0, 20.0), lp(300.0, 200.0)])
            .unwrap()
            .with_start_binding(Binding::new("a"));
        let mut observer = RecordingObserver::new();
        route_elbow_arrow_with(&arrow, &two_boxes(), &RouterConfig::default(), &mut observer);
        assert_eq!(observer.joints(JointKind::Boundary), vec![WorldPoint::new(40.0, 20.0)]);
    }
}
