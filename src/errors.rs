//! Error types with rich diagnostics using miette
//!
//! Routing itself never fails: a missing shape degrades to an unbound
//! endpoint and the step ceiling degrades to a partial path. These errors
//! cover building the inputs (arrows, scenes, router configuration).

use miette::Diagnostic;
use thiserror::Error;

use crate::types::ShapeId;

/// Errors raised while constructing routing inputs
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ElbowError {
    #[error("arrow point {index} is not finite: ({x}, {y})")]
    #[diagnostic(
        code(elbowr::arrow::non_finite_point),
        help("arrow points must not contain NaN or infinite coordinates")
    )]
    NonFinitePoint { index: usize, x: f64, y: f64 },

    #[error("arrow origin is not finite: ({x}, {y})")]
    #[diagnostic(code(elbowr::arrow::non_finite_origin))]
    NonFiniteOrigin { x: f64, y: f64 },

    #[error("shape `{id}` has an invalid size {width}x{height}")]
    #[diagnostic(
        code(elbowr::scene::invalid_shape_size),
        help("width and height must be finite and non-negative")
    )]
    InvalidShapeSize { id: ShapeId, width: f64, height: f64 },

    #[error("shape `{id}` has a non-finite position or rotation")]
    #[diagnostic(code(elbowr::scene::non_finite_shape))]
    NonFiniteShape { id: ShapeId },

    #[error("shape `{id}` is already in the scene")]
    #[diagnostic(
        code(elbowr::scene::duplicate_shape),
        help("use `Scene::replace` to update the geometry of an existing shape")
    )]
    DuplicateShape { id: ShapeId },

    #[error("invalid router config: `{field}` = {value} ({reason})")]
    #[diagnostic(code(elbowr::config::invalid))]
    InvalidConfig {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Convenience alias used throughout the crate
pub type Result<T, E = ElbowError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = ElbowError::DuplicateShape { id: ShapeId::from("box-a") };
        assert_eq!(err.to_string(), "shape `box-a` is already in the scene");

        let err = ElbowError::NonFinitePoint { index: 2, x: f64::NAN, y: 1.0 };
        assert_eq!(err.to_string(), "arrow point 2 is not finite: (NaN, 1)");
    }

    #[test]
    fn diagnostics_carry_codes() {
        let err = ElbowError::InvalidConfig {
            field: "step_limit",
            value: 0.0,
            reason: "must be at least 1",
        };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("elbowr::config::invalid"));
    }
}
