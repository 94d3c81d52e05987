//! Router configuration
//!
//! Seeded from [`crate::routing::defaults`]. Most callers never build one and
//! use [`RouterConfig::default`] through [`crate::route_elbow_arrow`].

use crate::errors::{ElbowError, Result};
use crate::routing::defaults;

/// Tunables for one routing call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouterConfig {
    /// Maximum number of kernel steps before giving up on convergence
    pub step_limit: usize,
    /// Distance a stub travels past its shape's bounding box
    pub self_box_offset: f64,
    /// Sideways jog applied when the frontier faces its target head-on
    pub deadlock_nudge: f64,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            step_limit: defaults::STEP_COUNT_LIMIT,
            self_box_offset: defaults::MIN_SELF_BOX_OFFSET,
            deadlock_nudge: defaults::DEADLOCK_NUDGE,
        }
    }
}

impl RouterConfig {
    pub fn builder() -> RouterConfigBuilder {
        RouterConfigBuilder { config: Self::default() }
    }

    /// Upper bound on the number of points a routed path can have
    pub fn max_path_len(&self) -> usize {
        self.step_limit + 2 * defaults::STUB_POINTS_PER_END
    }
}

/// Builder for [`RouterConfig`] that validates on [`build`](Self::build)
#[derive(Debug, Clone)]
pub struct RouterConfigBuilder {
    config: RouterConfig,
}

impl RouterConfigBuilder {
    pub fn step_limit(mut self, step_limit: usize) -> Self {
        self.config.step_limit = step_limit;
        self
    }

    pub fn self_box_offset(mut self, offset: f64) -> Self {
        self.config.self_box_offset = offset;
        self
    }

    pub fn deadlock_nudge(mut self, nudge: f64) -> Self {
        self.config.deadlock_nudge = nudge;
        self
    }

    pub fn build(self) -> Result<RouterConfig> {
        let config = self.config;
        if config.step_limit == 0 {
            return Err(ElbowError::InvalidConfig {
                field: "step_limit",
                value: 0.0,
                reason: "must be at least 1",
            });
        }
        check_distance("self_box_offset", config.self_box_offset)?;
        check_distance("deadlock_nudge", config.deadlock_nudge)?;
        Ok(config)
    }
}

fn check_distance(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        Err(ElbowError::InvalidConfig { field, value, reason: "must be finite" })
    } else if value <= 0.0 {
        Err(ElbowError::InvalidConfig { field, value, reason: "must be positive" })
    } else {
        Ok(())
    }
}
