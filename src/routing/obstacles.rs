//! Obstacle extraction: resolve an arrow's bindings to bounding boxes

use crate::arrow::{Arrow, Binding};
use crate::log::debug;
use crate::scene::{Scene, shape_bounds};
use crate::types::Aabb;

/// Bounding boxes of the shapes bound to the arrow's start and end.
///
/// A missing binding or a binding to a shape that is not in the scene
/// yields `None` for that side; the endpoint is then routed as unbound.
pub fn obstacle_boxes(arrow: &Arrow, scene: &Scene) -> (Option<Aabb>, Option<Aabb>) {
    (
        bound_box(arrow.start_binding(), scene),
        bound_box(arrow.end_binding(), scene),
    )
}

fn bound_box(binding: Option<&Binding>, scene: &Scene) -> Option<Aabb> {
    let binding = binding?;
    match scene.get(&binding.shape) {
        Some(shape) => Some(shape_bounds(shape, scene)),
        None => {
            debug!(shape = %binding.shape, "bound shape missing from scene, treating endpoint as unbound");
            None
        }
    }
}

/// Every box present, start first
pub fn collect_boxes(boxes: (Option<Aabb>, Option<Aabb>)) -> Vec<Aabb> {
    [boxes.0, boxes.1].into_iter().flatten().collect()
}
