pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::SimError;

pub use simulation::states::{Body, BodyId, Motion, System, NVec2};
pub use simulation::params::{Parameters, RESTITUTION};
pub use simulation::pointer::PointerState;
pub use simulation::forces::{Force, ForceSet, Friction, PointerSpring};
pub use simulation::collision::{Bounds, WallHit, resolve_pair, resolve_pairs, resolve_boundary, resolve_boundaries};
pub use simulation::integrator::euler_integrator;
pub use simulation::engine::{World, StepReport, TickReport};
pub use simulation::render::{Canvas, CommandBuffer, DrawCommand};
pub use simulation::scenario::build_world;

pub use configuration::config::{ScenarioConfig, ParametersConfig, BodyConfig};

pub use visualization::{ballsim_vis2d::run_2d, headless::run_headless};

pub use benchmark::benchmark::bench_substeps;
