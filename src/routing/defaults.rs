//! Default routing constants (all distances in canvas units)

/// Hard ceiling on kernel iterations per route
pub const STEP_COUNT_LIMIT: usize = 50;

/// Clearance kept between a shape's bounding box and the first joint of a
/// stub leaving it
pub const MIN_SELF_BOX_OFFSET: f64 = 30.0;

/// Sideways jog used to break a head-on stalemate with the target stub
pub const DEADLOCK_NUDGE: f64 = 40.0;

/// Stub points contributed by each endpoint (attachment point + stub joint)
pub const STUB_POINTS_PER_END: usize = 2;

/// Absolute tolerance for point equality and segment parameter bounds
pub const POINT_EPSILON: f64 = 1e-9;
