//! Core state types for the circle simulation.
//!
//! - `Body`   a single rigid circle (position, velocity, radius, mass)
//! - `BodyId` stable index of a body inside its `System`
//! - `Motion` one-shot per-sub-step translation flag
//! - `System` the fixed body registry
//!
//! Positions and velocities are in screen units, with the origin at the
//! top-left corner and y growing downward. Velocities are displacement per
//! sub-step, there is no separate time step.

use nalgebra::Vector2;

use crate::error::SimError;

pub type NVec2 = Vector2<f64>;

/// Index of a body in its [`System`]
///
/// Ids are only minted by the registry. Looking up an id that does not
/// belong to a registry yields `None` instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(usize);

impl BodyId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Whether a body may translate at the end of the current sub-step
///
/// `Resolved` is set by the collision stage and suppresses translation only;
/// a resolved body is still tested against every other pair and wall.
/// The integrator resets it to `Free`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Motion {
    #[default]
    Free,
    Resolved,
}

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position of the center
    pub v: NVec2, // velocity (displacement per sub-step)
    radius: f64,
    m: f64,
    motion: Motion,
}

impl Body {
    /// Create a body; radius and mass must be positive and finite
    pub fn new(x: NVec2, v: NVec2, radius: f64, m: f64) -> Result<Self, SimError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::InvalidRadius(radius));
        }
        if !(m.is_finite() && m > 0.0) {
            return Err(SimError::InvalidMass(m));
        }
        Ok(Self {
            x,
            v,
            radius,
            m,
            motion: Motion::Free,
        })
    }

    /// Resting body at `(x, y)`
    pub fn at_rest(x: f64, y: f64, radius: f64, m: f64) -> Result<Self, SimError> {
        Self::new(NVec2::new(x, y), NVec2::zeros(), radius, m)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn is_free(&self) -> bool {
        self.motion == Motion::Free
    }

    pub(crate) fn mark_resolved(&mut self) {
        self.motion = Motion::Resolved;
    }

    pub(crate) fn release(&mut self) {
        self.motion = Motion::Free;
    }

    /// One-step-ahead position `x + v`
    pub fn predicted(&self) -> NVec2 {
        self.x + self.v
    }

    /// Point-in-circle test, boundary inclusive
    pub fn contains(&self, point: NVec2) -> bool {
        (self.x - point).norm_squared() <= self.radius * self.radius
    }

    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }
}

/// Fixed collection of bodies
///
/// Bodies are handed out as slices only, so the set cannot grow or shrink
/// once the registry is built.
#[derive(Debug, Clone, Default)]
pub struct System {
    bodies: Vec<Body>,
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id.0)
    }

    pub fn ids(&self) -> impl Iterator<Item = BodyId> {
        (0..self.bodies.len()).map(BodyId)
    }

    /// Id of the body at `index`, if there is one
    pub fn id_at(&self, index: usize) -> Option<BodyId> {
        (index < self.bodies.len()).then_some(BodyId(index))
    }

    /// Hit test: first body (in registry order) containing the point
    pub fn body_at(&self, point: NVec2) -> Option<BodyId> {
        self.bodies
            .iter()
            .position(|b| b.contains(point))
            .map(BodyId)
    }
}
