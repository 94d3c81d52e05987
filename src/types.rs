//! Strongly-typed geometric primitives for elbowr (zero-cost newtypes).
//!
//! Design goals:
//! - Local (arrow frame) and world (canvas) points never mix implicitly
//! - Headings are a closed set of four cardinal directions
//! - Bounding boxes are always axis-aligned, even for rotated shapes

use std::fmt;
use std::ops::{Add, Sub};

use glam::{DVec2, dvec2};

/// A point relative to an arrow's own frame.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[repr(transparent)]
pub struct LocalPoint(pub DVec2);

impl LocalPoint {
    pub const ORIGIN: LocalPoint = LocalPoint(DVec2::ZERO);

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        LocalPoint(DVec2::new(x, y))
    }

    #[inline]
    pub fn x(self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(self) -> f64 {
        self.0.y
    }

    /// Check that both coordinates are finite (not NaN or infinite)
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl fmt::Display for LocalPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.x, self.0.y)
    }
}

/// A point in absolute canvas coordinates.
///
/// Y grows downward, so `Heading::Up` is `(0, -1)`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[repr(transparent)]
pub struct WorldPoint(pub DVec2);

impl WorldPoint {
    pub const ORIGIN: WorldPoint = WorldPoint(DVec2::ZERO);

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        WorldPoint(DVec2::new(x, y))
    }

    #[inline]
    pub fn x(self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(self) -> f64 {
        self.0.y
    }

    /// Get the raw vector (use for math, prefer typed operations elsewhere)
    #[inline]
    pub fn vec(self) -> DVec2 {
        self.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    #[inline]
    pub fn distance_squared(self, other: WorldPoint) -> f64 {
        self.0.distance_squared(other.0)
    }

    /// Same x and same y, compared exactly.
    ///
    /// The router relies on exact equality to detect that the frontier
    /// reached its target: candidates copy coordinates from the target
    /// verbatim, so no tolerance is needed there.
    #[inline]
    pub fn exactly_eq(self, other: WorldPoint) -> bool {
        self.0.x == other.0.x && self.0.y == other.0.y
    }
}

impl fmt::Display for WorldPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.x, self.0.y)
    }
}

/// Translate a world point by a vector
impl Add<DVec2> for WorldPoint {
    type Output = WorldPoint;
    fn add(self, rhs: DVec2) -> WorldPoint {
        WorldPoint(self.0 + rhs)
    }
}

/// Subtract two world points to get the displacement between them
impl Sub<WorldPoint> for WorldPoint {
    type Output = DVec2;
    fn sub(self, rhs: WorldPoint) -> DVec2 {
        self.0 - rhs.0
    }
}

/// Identifier of a shape in a [`Scene`](crate::scene::Scene).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(String);

impl ShapeId {
    pub fn new(id: impl Into<String>) -> Self {
        ShapeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ShapeId {
    fn from(id: &str) -> Self {
        ShapeId(id.to_string())
    }
}

impl From<String> for ShapeId {
    fn from(id: String) -> Self {
        ShapeId(id)
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The side of a shape an arrow departs from or arrives at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Right,
    Down,
    Left,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Right, Heading::Down, Heading::Left];

    /// Unit vector for this heading (Y-down canvas convention)
    pub fn vector(self) -> DVec2 {
        match self {
            Heading::Up => dvec2(0.0, -1.0),
            Heading::Right => dvec2(1.0, 0.0),
            Heading::Down => dvec2(0.0, 1.0),
            Heading::Left => dvec2(-1.0, 0.0),
        }
    }

    /// Snap an arbitrary vector to the heading of its dominant axis.
    ///
    /// Ties go to the horizontal axis, and the zero vector maps to `Right`.
    pub fn from_vector(v: DVec2) -> Heading {
        if v.x.abs() >= v.y.abs() {
            if v.x >= 0.0 { Heading::Right } else { Heading::Left }
        } else if v.y >= 0.0 {
            Heading::Down
        } else {
            Heading::Up
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Heading::Left | Heading::Right)
    }

    pub fn opposite(self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Right => Heading::Left,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heading::Up => "up",
            Heading::Right => "right",
            Heading::Down => "down",
            Heading::Left => "left",
        };
        f.write_str(name)
    }
}

/// An ordered pair of world points. Direction matters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: WorldPoint,
    pub end: WorldPoint,
}

impl Segment {
    pub fn new(start: WorldPoint, end: WorldPoint) -> Self {
        Segment { start, end }
    }

    /// Displacement from start to end
    pub fn vector(&self) -> DVec2 {
        self.end - self.start
    }

    /// Unit direction from start to end, or zero for a degenerate segment
    pub fn direction(&self) -> DVec2 {
        self.vector().normalize_or_zero()
    }

    pub fn length_squared(&self) -> f64 {
        self.vector().length_squared()
    }
}

/// Axis-aligned bounding box in world space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: WorldPoint,
    pub max: WorldPoint,
}

impl Aabb {
    /// Create a box from its extents `(min_x, min_y, max_x, max_y)`
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Aabb {
            min: WorldPoint::new(min_x, min_y),
            max: WorldPoint::new(max_x, max_y),
        }
    }

    /// Create an empty bounding box (will expand on first point)
    pub fn empty() -> Self {
        Aabb {
            min: WorldPoint::new(f64::MAX, f64::MAX),
            max: WorldPoint::new(f64::MIN, f64::MIN),
        }
    }

    /// Check if the box is empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x() > self.max.x() || self.min.y() > self.max.y()
    }

    /// Expand to include a point
    pub fn expand_point(&mut self, p: WorldPoint) {
        self.min = WorldPoint(self.min.0.min(p.0));
        self.max = WorldPoint(self.max.0.max(p.0));
    }

    pub fn width(&self) -> f64 {
        self.max.x() - self.min.x()
    }

    pub fn height(&self) -> f64 {
        self.max.y() - self.min.y()
    }

    pub fn center(&self) -> WorldPoint {
        WorldPoint((self.min.0 + self.max.0) * 0.5)
    }

    pub fn top_left(&self) -> WorldPoint {
        self.min
    }

    pub fn top_right(&self) -> WorldPoint {
        WorldPoint::new(self.max.x(), self.min.y())
    }

    pub fn bottom_right(&self) -> WorldPoint {
        self.max
    }

    pub fn bottom_left(&self) -> WorldPoint {
        WorldPoint::new(self.min.x(), self.max.y())
    }

    /// The four edges, in top, right, bottom, left order, wound clockwise.
    ///
    /// The router depends on this order when it picks the first crossing.
    pub fn edges(&self) -> [Segment; 4] {
        [
            Segment::new(self.top_left(), self.top_right()),
            Segment::new(self.top_right(), self.bottom_right()),
            Segment::new(self.bottom_right(), self.bottom_left()),
            Segment::new(self.bottom_left(), self.top_left()),
        ]
    }

    /// Inclusive containment: points on an edge count as inside
    pub fn contains(&self, p: WorldPoint) -> bool {
        crate::geometry::point_in_box(p.0, self.min.0, self.max.0)
    }
}
