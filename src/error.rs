//! Error types for building a simulation.
//!
//! The step itself is infallible; everything here is reported while loading
//! a scenario or constructing bodies.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Radius is zero, negative or not finite.
    #[error("body radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    /// Mass is zero, negative or not finite.
    #[error("body mass must be positive and finite, got {0}")]
    InvalidMass(f64),

    /// A position or velocity list does not have two components.
    #[error("body {index}: `{field}` must have 2 components, got {len}")]
    BadVector {
        index: usize,
        field: &'static str,
        len: usize,
    },

    #[error("screen size must be positive and finite, got {width}x{height}")]
    InvalidBounds { width: f64, height: f64 },

    #[error("sub-steps per tick must be at least 1")]
    ZeroSubsteps,

    /// Damping factor outside `(0, 1]`.
    #[error("friction factor must lie in (0, 1], got {0}")]
    InvalidFriction(f64),

    #[error("pointer spring constant must be finite and non-negative, got {0}")]
    InvalidSpring(f64),

    #[error("spring clamp must be finite and positive, got {0}")]
    InvalidClamp(f64),

    #[error("tick interval must be at least 1 ms")]
    ZeroTickInterval,

    #[error("failed to parse scenario: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
}
