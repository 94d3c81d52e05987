//! Orthogonal "elbow" connector routing for diagram editors.
//!
//! Given an [`Arrow`] whose endpoints may be bound to shapes in a [`Scene`],
//! [`route_elbow_arrow`] produces a polyline made only of horizontal and
//! vertical segments that leaves and enters each bound shape perpendicular
//! to the side it is attached to.
//!
//! ```
//! use elbowr::{Arrow, Binding, LocalPoint, RectangleShape, Scene, WorldPoint, route_elbow_arrow};
//!
//! let scene = Scene::new()
//!     .with_shape("a", RectangleShape::from_corner(0.0, 0.0, 40.0, 40.0))?
//!     .with_shape("b", RectangleShape::from_corner(200.0, 0.0, 40.0, 40.0))?;
//! let arrow = Arrow::try_new(
//!     WorldPoint::ORIGIN,
//!     vec![LocalPoint::new(40.0, 20.0), LocalPoint::new(200.0, 20.0)],
//! )?
//! .with_start_binding(Binding::new("a"))
//! .with_end_binding(Binding::new("b"));
//!
//! let path = route_elbow_arrow(&arrow, &scene);
//! assert_eq!(path, vec![LocalPoint::new(40.0, 20.0), LocalPoint::new(200.0, 20.0)]);
//! # Ok::<(), elbowr::ElbowError>(())
//! ```

pub mod arrow;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod log;
pub mod routing;
pub mod scene;
pub mod types;

pub use arrow::{Arrow, Binding};
pub use config::{RouterConfig, RouterConfigBuilder};
pub use errors::{ElbowError, Result};
pub use routing::observer::{JointKind, NoopObserver, RecordingObserver, RouteEvent, RouteObserver};
pub use routing::{route_elbow_arrow, route_elbow_arrow_with};
pub use scene::{Bounds, DiamondShape, EllipseShape, RectangleShape, Scene, ShapeKind};
pub use types::{Aabb, Heading, LocalPoint, Segment, ShapeId, WorldPoint};
