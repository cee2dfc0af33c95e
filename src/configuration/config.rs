//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ParametersConfig`] – screen size, sub-steps, pointer spring, friction
//! - [`BodyConfig`]       – initial state for each circle
//! - [`ScenarioConfig`]   – top-level wrapper loaded from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:              # every field is optional
//!   width: 320.0
//!   height: 450.0
//!   substeps: 5            # sub-steps per tick
//!   pointer_spring: 0.0001 # spring constant of the pointer pull
//!   spring_clamp: null     # optional cap on |dv| per sub-step
//!   friction: 0.999        # velocity damping per sub-step
//!   tick_interval_ms: 20   # host timer period
//!
//! bodies:
//!   - x: [100.0, 100.0]
//!     radius: 30.0
//!     m: 0.5
//!   - x: [100.0, 300.0]
//!     v: [1.0, -0.5]       # optional, defaults to rest
//!     radius: 52.0
//!     m: 1.5
//! ```
//!
//! [`build_world`](crate::simulation::scenario::build_world) turns this into
//! the runtime `World`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::SimError;
use crate::simulation::params::{
    DEFAULT_FRICTION, DEFAULT_HEIGHT, DEFAULT_POINTER_SPRING, DEFAULT_SUBSTEPS,
    DEFAULT_TICK_INTERVAL_MS, DEFAULT_WIDTH,
};

/// Global parameters for a scenario; missing fields take the defaults
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ParametersConfig {
    pub width: f64,
    pub height: f64,
    pub substeps: usize,
    pub pointer_spring: f64,
    pub spring_clamp: Option<f64>,
    pub friction: f64,
    pub tick_interval_ms: u64,
}

impl Default for ParametersConfig {
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

/// Initial state of one circle
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    pub x: Vec<f64>, // center position, 2 components
    #[serde(default)]
    pub v: Option<Vec<f64>>, // initial velocity, 2 components, rest if absent
    pub radius: f64,
    pub m: f64, // mass
}

impl BodyConfig {
    pub fn at_rest(x: f64, y: f64, radius: f64, m: f64) -> Self {
        Self {
            x: vec![x, y],
            v: None,
            radius,
            m,
        }
    }
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl Default for ScenarioConfig {
    /// Three light circles and one heavy one on a 320x450 screen
    fn default() -> Self {
        Self {
            parameters: ParametersConfig::default(),
            bodies: vec![
                BodyConfig::at_rest(100.0, 100.0, 30.0, 0.5),
                BodyConfig::at_rest(250.0, 100.0, 30.0, 0.5),
                BodyConfig::at_rest(130.0, 170.0, 30.0, 0.5),
                BodyConfig::at_rest(100.0, 300.0, 52.0, 1.5),
            ],
        }
    }
}

impl ScenarioConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, SimError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }
}
