//! Runtime bundle and sub-step controller
//!
//! `World` owns everything the step mutates: the body registry, the pointer
//! state, the parameters and the force set. Hosts call [`World::update`] from
//! their fixed-rate timer and [`World::render`] when they want a frame.

use bevy::prelude::Resource;
use tracing::trace;

use crate::simulation::collision::{resolve_boundaries, resolve_pairs, Bounds};
use crate::simulation::forces::ForceSet;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::pointer::PointerState;
use crate::simulation::render::{render_system, Canvas};
use crate::simulation::states::{BodyId, NVec2, System};

/// Counts from a single sub-step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub pair_contacts: usize,
    pub wall_contacts: usize,
    pub moved: usize,
}

/// Counts summed over the sub-steps of one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    pub pair_contacts: usize,
    pub wall_contacts: usize,
}

/// The whole simulation state, inserted into Bevy as a `Resource` by the
/// viewer and owned directly by the headless runner
#[derive(Resource)]
pub struct World {
    pub system: System,
    pub pointer: PointerState,
    pub parameters: Parameters,
    pub forces: ForceSet,
    bounds: Bounds,
    ticks: u64,
}

impl World {
    /// Bundle `system` with the default force set for `parameters`
    pub fn new(system: System, parameters: Parameters) -> Self {
        let forces = ForceSet::from_parameters(&parameters);
        Self::with_forces(system, parameters, forces)
    }

    /// Bundle `system` with a caller-provided force set
    pub fn with_forces(system: System, parameters: Parameters, forces: ForceSet) -> Self {
        let bounds = Bounds::new(parameters.width, parameters.height);
        Self {
            system,
            pointer: PointerState::new(),
            parameters,
            forces,
            bounds,
            ticks: 0,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Ticks completed so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// One pass of forces, pair collisions, wall collisions and integration
    pub fn substep(&mut self) -> StepReport {
        self.forces.apply_all(&self.pointer, &mut self.system);
        let pair_contacts = resolve_pairs(&mut self.system);
        let wall_contacts = resolve_boundaries(&mut self.system, &self.bounds);
        let moved = euler_integrator(&mut self.system);
        StepReport {
            pair_contacts,
            wall_contacts,
            moved,
        }
    }

    /// Timer entry point: run `parameters.substeps` sub-steps
    pub fn update(&mut self) -> TickReport {
        let mut report = TickReport::default();
        for _ in 0..self.parameters.substeps {
            let step = self.substep();
            report.pair_contacts += step.pair_contacts;
            report.wall_contacts += step.wall_contacts;
        }
        self.ticks += 1;
        report.tick = self.ticks;

        trace!(
            tick = report.tick,
            pairs = report.pair_contacts,
            walls = report.wall_contacts,
            "tick"
        );
        report
    }

    /// Draw every body and, while holding, the pointer line
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        render_system(&self.system, &self.pointer, canvas);
    }

    /// Hit test at `(x, y)`, for hosts handling a pointer press
    pub fn body_at(&self, x: f64, y: f64) -> Option<BodyId> {
        self.system.body_at(NVec2::new(x, y))
    }

    pub fn begin_hold(&mut self, body: Option<BodyId>) {
        self.pointer.begin_hold(body);
    }

    pub fn update_pointer(&mut self, x: f64, y: f64) {
        self.pointer.update_pointer(x, y);
    }

    pub fn end_hold(&mut self) {
        self.pointer.end_hold();
    }
}
