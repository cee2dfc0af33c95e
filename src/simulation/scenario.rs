//! Build a ready-to-run `World` from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - parameters (`Parameters`), validated
//! - body registry (`System`) with every body validated
//! - the default force set (pointer spring, then friction)

use tracing::info;

use crate::configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};
use crate::error::SimError;
use crate::simulation::engine::World;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

pub fn build_world(cfg: &ScenarioConfig) -> Result<World, SimError> {
    let parameters = build_parameters(&cfg.parameters);
    parameters.validate()?;

    // Bodies: map `BodyConfig` -> runtime `Body`, rejecting bad geometry
    let bodies = cfg
        .bodies
        .iter()
        .enumerate()
        .map(|(i, bc)| build_body(i, bc))
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        bodies = bodies.len(),
        width = parameters.width,
        height = parameters.height,
        substeps = parameters.substeps,
        "scenario built"
    );

    Ok(World::new(System::new(bodies), parameters))
}

fn build_parameters(p_cfg: &ParametersConfig) -> Parameters {
    Parameters {
        width: p_cfg.width,
        height: p_cfg.height,
        substeps: p_cfg.substeps,
        pointer_spring: p_cfg.pointer_spring,
        spring_clamp: p_cfg.spring_clamp,
        friction: p_cfg.friction,
        tick_interval_ms: p_cfg.tick_interval_ms,
    }
}

fn build_body(index: usize, bc: &BodyConfig) -> Result<Body, SimError> {
    let x = vec2(index, "x", &bc.x)?;
    let v = match &bc.v {
        Some(v) => vec2(index, "v", v)?,
        None => NVec2::zeros(),
    };
    Body::new(x, v, bc.radius, bc.m)
}

fn vec2(index: usize, field: &'static str, xs: &[f64]) -> Result<NVec2, SimError> {
    match xs {
        [x, y] => Ok(NVec2::new(*x, *y)),
        _ => Err(SimError::BadVector {
            index,
            field,
            len: xs.len(),
        }),
    }
}
