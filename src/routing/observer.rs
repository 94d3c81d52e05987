//! Debug observer hook.
//!
//! Routing reports joints, segments and its recovery paths to a
//! [`RouteObserver`]. Nothing in the routing result depends on it; the
//! default [`NoopObserver`] discards everything.

use crate::types::{Segment, WorldPoint};

/// Why a joint was reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JointKind {
    /// Where a stub leaves its shape's bounding box
    Boundary,
    /// The first joint of a stub, clear of its shape
    Stub,
    /// A point produced by one kernel step
    Step,
}

/// Side channel for visualizing or inspecting a routing run
pub trait RouteObserver {
    fn joint(&mut self, _point: WorldPoint, _kind: JointKind) {}

    fn segment(&mut self, _segment: Segment) {}

    /// A head-on stalemate was broken by moving `from` to `to`
    fn deadlock_nudge(&mut self, _from: WorldPoint, _to: WorldPoint) {}

    /// The step ceiling was hit before the frontier met its target
    fn step_limit_reached(&mut self, _steps: usize, _frontier: WorldPoint) {}
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RouteObserver for NoopObserver {}

/// One recorded observer callback
#[derive(Debug, Clone, PartialEq)]
pub enum RouteEvent {
    Joint(WorldPoint, JointKind),
    Segment(Segment),
    DeadlockNudge { from: WorldPoint, to: WorldPoint },
    StepLimitReached { steps: usize, frontier: WorldPoint },
}

/// Observer that keeps every event, in order
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub events: Vec<RouteEvent>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nudge_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, RouteEvent::DeadlockNudge { .. }))
            .count()
    }

    pub fn hit_step_limit(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, RouteEvent::StepLimitReached { .. }))
    }

    pub fn joints(&self, kind: JointKind) -> Vec<WorldPoint> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RouteEvent::Joint(p, k) if *k == kind => Some(*p),
                _ => None,
            })
            .collect()
    }
}

impl RouteObserver for RecordingObserver {
    fn joint(&mut self, point: WorldPoint, kind: JointKind) {
        self.events.push(RouteEvent::Joint(point, kind));
    }

    fn segment(&mut self, segment: Segment) {
        self.events.push(RouteEvent::Segment(segment));
    }

    fn deadlock_nudge(&mut self, from: WorldPoint, to: WorldPoint) {
        self.events.push(RouteEvent::DeadlockNudge { from, to });
    }

    fn step_limit_reached(&mut self, steps: usize, frontier: WorldPoint) {
        self.events.push(RouteEvent::StepLimitReached { steps, frontier });
    }
}
