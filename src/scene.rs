//! Scene snapshot: the shapes arrows can be bound to
//!
//! Each shape type knows how to:
//! - Report its center, size and rotation
//! - Calculate its axis-aligned bounding box, taking rotation into account
//!
//! The router only ever borrows a [`Scene`] for the duration of one call.

use std::collections::HashMap;

use enum_dispatch::enum_dispatch;
use glam::dvec2;

use crate::errors::{ElbowError, Result};
use crate::geometry::rotate_around;
use crate::types::{Aabb, ShapeId, WorldPoint};

/// Bounds calculator: every shape can report an axis-aligned bounding box
#[enum_dispatch]
pub trait Bounds {
    /// The center point of the shape
    fn center(&self) -> WorldPoint;

    /// Unrotated width
    fn width(&self) -> f64;

    /// Unrotated height
    fn height(&self) -> f64;

    /// Rotation around the center, in radians (clockwise on a Y-down canvas)
    fn angle(&self) -> f64 {
        0.0
    }

    /// Axis-aligned bounding box of the rotated shape.
    ///
    /// Default implementation rotates the outline vertices; shapes without
    /// vertices override it.
    fn bounds(&self) -> Aabb {
        let mut bb = Aabb::empty();
        for vertex in self.outline() {
            bb.expand_point(vertex);
        }
        bb
    }

    /// Outline vertices after rotation
    fn outline(&self) -> Vec<WorldPoint> {
        let c = self.center().vec();
        let (hw, hh) = (self.width() / 2.0, self.height() / 2.0);
        [dvec2(-hw, -hh), dvec2(hw, -hh), dvec2(hw, hh), dvec2(-hw, hh)]
            .into_iter()
            .map(|offset| WorldPoint(rotate_around(c + offset, c, self.angle())))
            .collect()
    }
}

// ============================================================================
// Shape Types
// ============================================================================

/// A rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleShape {
    pub center: WorldPoint,
    pub width: f64,
    pub height: f64,
    pub angle: f64,
}

impl RectangleShape {
    pub fn new(center: WorldPoint, width: f64, height: f64) -> Self {
        Self { center, width, height, angle: 0.0 }
    }

    /// Build from the top-left corner, the way editors usually store boxes
    pub fn from_corner(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(WorldPoint::new(x + width / 2.0, y + height / 2.0), width, height)
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }
}

impl Bounds for RectangleShape {
    fn center(&self) -> WorldPoint {
        self.center
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn angle(&self) -> f64 {
        self.angle
    }
}

/// An ellipse inscribed in its width x height frame
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseShape {
    pub center: WorldPoint,
    pub width: f64,
    pub height: f64,
    pub angle: f64,
}

impl EllipseShape {
    pub fn new(center: WorldPoint, width: f64, height: f64) -> Self {
        Self { center, width, height, angle: 0.0 }
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }
}

impl Bounds for EllipseShape {
    fn center(&self) -> WorldPoint {
        self.center
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn angle(&self) -> f64 {
        self.angle
    }

    /// Tight box of the rotated ellipse, not of its rotated frame
    fn bounds(&self) -> Aabb {
        let (a, b) = (self.width / 2.0, self.height / 2.0);
        let (sin, cos) = self.angle.sin_cos();
        let hx = ((a * cos).powi(2) + (b * sin).powi(2)).sqrt();
        let hy = ((a * sin).powi(2) + (b * cos).powi(2)).sqrt();
        let c = self.center;
        Aabb::new(c.x() - hx, c.y() - hy, c.x() + hx, c.y() + hy)
    }
}

/// A diamond whose vertices sit at the midpoints of its frame's edges
#[derive(Debug, Clone, PartialEq)]
pub struct DiamondShape {
    pub center: WorldPoint,
    pub width: f64,
    pub height: f64,
    pub angle: f64,
}

impl DiamondShape {
    pub fn new(center: WorldPoint, width: f64, height: f64) -> Self {
        Self { center, width, height, angle: 0.0 }
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }
}

impl Bounds for DiamondShape {
    fn center(&self) -> WorldPoint {
        self.center
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn angle(&self) -> f64 {
        self.angle
    }

    fn outline(&self) -> Vec<WorldPoint> {
        let c = self.center.vec();
        let (hw, hh) = (self.width / 2.0, self.height / 2.0);
        [dvec2(0.0, -hh), dvec2(hw, 0.0), dvec2(0.0, hh), dvec2(-hw, 0.0)]
            .into_iter()
            .map(|offset| WorldPoint(rotate_around(c + offset, c, self.angle)))
            .collect()
    }
}

// ============================================================================
// Shape Enum
// ============================================================================

/// Any shape an arrow can be bound to
#[enum_dispatch(Bounds)]
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Rectangle(RectangleShape),
    Ellipse(EllipseShape),
    Diamond(DiamondShape),
}

impl ShapeKind {
    fn validate(&self, id: &ShapeId) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(ElbowError::InvalidShapeSize { id: id.clone(), width, height });
        }
        if !self.center().is_finite() || !self.angle().is_finite() {
            return Err(ElbowError::NonFiniteShape { id: id.clone() });
        }
        Ok(())
    }
}

// ============================================================================
// Scene
// ============================================================================

/// Read-only snapshot of shape geometry, keyed by identifier
#[derive(Debug, Clone, Default)]
pub struct Scene {
    shapes: HashMap<ShapeId, ShapeKind>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape. Fails if the id is taken or the geometry is invalid.
    pub fn insert(&mut self, id: impl Into<ShapeId>, shape: impl Into<ShapeKind>) -> Result<()> {
        let id = id.into();
        let shape = shape.into();
        shape.validate(&id)?;
        if self.shapes.contains_key(&id) {
            return Err(ElbowError::DuplicateShape { id });
        }
        self.shapes.insert(id, shape);
        Ok(())
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with_shape(mut self, id: impl Into<ShapeId>, shape: impl Into<ShapeKind>) -> Result<Self> {
        self.insert(id, shape)?;
        Ok(self)
    }

    /// Replace the geometry of a shape, returning the previous one if any
    pub fn replace(&mut self, id: impl Into<ShapeId>, shape: impl Into<ShapeKind>) -> Result<Option<ShapeKind>> {
        let id = id.into();
        let shape = shape.into();
        shape.validate(&id)?;
        Ok(self.shapes.insert(id, shape))
    }

    pub fn remove(&mut self, id: &ShapeId) -> Option<ShapeKind> {
        self.shapes.remove(id)
    }

    pub fn get(&self, id: &ShapeId) -> Option<&ShapeKind> {
        self.shapes.get(id)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ShapeId, &ShapeKind)> {
        self.shapes.iter()
    }
}

/// Bounds of a shape within a snapshot.
///
/// The snapshot is unused today; it is part of the signature so that shapes
/// whose extent depends on other shapes (containers, bound text) can be added
/// without touching callers.
pub fn shape_bounds(shape: &ShapeKind, _scene: &Scene) -> Aabb {
    shape.bounds()
}
