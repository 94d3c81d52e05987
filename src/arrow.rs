//! Arrow entity: raw local points, optional bindings and its coordinate frame

use crate::errors::{ElbowError, Result};
use crate::types::{LocalPoint, ShapeId, WorldPoint};

/// Reference from an arrow endpoint to the shape it is attached to.
///
/// Only the identifier is stored; the shape is looked up in a
/// [`Scene`](crate::scene::Scene) when routing and never retained.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Binding {
    pub shape: ShapeId,
}

impl Binding {
    pub fn new(shape: impl Into<ShapeId>) -> Self {
        Self { shape: shape.into() }
    }
}

/// An arrow as stored by the document model
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    origin: WorldPoint,
    points: Vec<LocalPoint>,
    start_binding: Option<Binding>,
    end_binding: Option<Binding>,
}

impl Arrow {
    /// Create an arrow whose local frame sits at `origin`.
    ///
    /// Rejects non-finite coordinates; zero or one point is fine (an arrow
    /// still being drawn).
    pub fn try_new(origin: WorldPoint, points: Vec<LocalPoint>) -> Result<Self> {
        if !origin.is_finite() {
            return Err(ElbowError::NonFiniteOrigin { x: origin.x(), y: origin.y() });
        }
        if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(ElbowError::NonFinitePoint { index, x: p.x(), y: p.y() });
        }
        Ok(Self {
            origin,
            points,
            start_binding: None,
            end_binding: None,
        })
    }

    pub fn with_start_binding(mut self, binding: Binding) -> Self {
        self.start_binding = Some(binding);
        self
    }

    pub fn with_end_binding(mut self, binding: Binding) -> Self {
        self.end_binding = Some(binding);
        self
    }

    pub fn origin(&self) -> WorldPoint {
        self.origin
    }

    pub fn points(&self) -> &[LocalPoint] {
        &self.points
    }

    pub fn start_binding(&self) -> Option<&Binding> {
        self.start_binding.as_ref()
    }

    pub fn end_binding(&self) -> Option<&Binding> {
        self.end_binding.as_ref()
    }

    /// Local frame → canvas
    #[inline]
    pub fn to_world(&self, p: LocalPoint) -> WorldPoint {
        WorldPoint(self.origin.vec() + p.0)
    }

    /// Canvas → local frame; exact inverse of [`to_world`](Self::to_world)
    /// up to floating point rounding
    #[inline]
    pub fn to_local(&self, p: WorldPoint) -> LocalPoint {
        LocalPoint(p.vec() - self.origin.vec())
    }
}
