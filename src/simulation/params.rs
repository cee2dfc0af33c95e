//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the runtime settings:
//! - screen size (the reflecting box),
//! - sub-steps per tick and the host tick interval,
//! - pointer spring constant (and an optional clamp) and friction damping
//!
//! Restitution is not a parameter: collisions are always perfectly elastic.

use crate::error::SimError;

/// Coefficient of restitution for body/body contacts
pub const RESTITUTION: f64 = 1.0;

pub const DEFAULT_WIDTH: f64 = 320.0;
pub const DEFAULT_HEIGHT: f64 = 450.0;
pub const DEFAULT_SUBSTEPS: usize = 5;
pub const DEFAULT_POINTER_SPRING: f64 = 0.0001;
pub const DEFAULT_FRICTION: f64 = 0.999;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub width: f64, // screen width
    pub height: f64, // screen height
    pub substeps: usize, // sub-steps per external tick (K)
    pub pointer_spring: f64, // spring constant of the pointer pull
    pub spring_clamp: Option<f64>, // max velocity change per sub-step from the spring
    pub friction: f64, // multiplicative velocity damping per sub-step
    pub tick_interval_ms: u64, // host timer period
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            substeps: DEFAULT_SUBSTEPS,
            pointer_spring: DEFAULT_POINTER_SPRING,
            spring_clamp: None,
            friction: DEFAULT_FRICTION,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl Parameters {
    /// Reject settings the step cannot run with
    pub fn validate(&self) -> Result<(), SimError> {
        let size_ok = |s: f64| s.is_finite() && s > 0.0;
        if !size_ok(self.width) || !size_ok(self.height) {
            return Err(SimError::InvalidBounds {
                width: self.width,
                height: self.height,
            });
        }
        if self.substeps == 0 {
            return Err(SimError::ZeroSubsteps);
        }
        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(SimError::InvalidFriction(self.friction));
        }
        if !(self.pointer_spring.is_finite() && self.pointer_spring >= 0.0) {
            return Err(SimError::InvalidSpring(self.pointer_spring));
        }
        if let Some(clamp) = self.spring_clamp {
            if !(clamp.is_finite() && clamp > 0.0) {
                return Err(SimError::InvalidClamp(clamp));
            }
        }
        if self.tick_interval_ms == 0 {
            return Err(SimError::ZeroTickInterval);
        }
        Ok(())
    }
}
