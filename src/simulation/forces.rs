//! Force stage: velocity contributors applied once per sub-step
//!
//! Each contributor implements [`Force`] and edits velocities in place.
//! A [`ForceSet`] runs its terms in insertion order, so the default set
//! adds the pointer spring before friction damps everything.

use crate::simulation::params::Parameters;
use crate::simulation::pointer::PointerState;
use crate::simulation::states::System;

/// Ordered collection of velocity contributors
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Pointer spring followed by friction, configured from `params`
    pub fn from_parameters(params: &Parameters) -> Self {
        Self::new()
            .with(PointerSpring {
                k: params.pointer_spring,
                max_speed_change: params.spring_clamp,
            })
            .with(Friction {
                damping: params.friction,
            })
    }

    /// Append a term; it runs after every term already in the set
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Run every term, in order, against `sys`
    pub fn apply_all(&self, pointer: &PointerState, sys: &mut System) {
        for term in &self.terms {
            term.apply(pointer, sys);
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::from_parameters(&Parameters::default())
    }
}

/// A velocity contributor; implementations never move bodies
pub trait Force {
    fn apply(&self, pointer: &PointerState, sys: &mut System);
}

/// Kinematic spring pulling the held body toward the pointer
///
/// `dv = (pointer - x) * k / m`. Nothing bounds the pull when the pointer is
/// far away unless `max_speed_change` is set, in which case `|dv|` is capped.
pub struct PointerSpring {
    pub k: f64,
    pub max_speed_change: Option<f64>,
}

impl Force for PointerSpring {
    fn apply(&self, pointer: &PointerState, sys: &mut System) {
        // A stale id simply finds no body
        let Some(body) = pointer.held().and_then(|id| sys.get_mut(id)) else {
            return;
        };

        let mut dv = (pointer.position() - body.x) * self.k / body.mass();
        if let Some(cap) = self.max_speed_change {
            let len = dv.norm();
            if len > cap {
                dv *= cap / len;
            }
        }
        body.v += dv;
    }
}

/// Uniform multiplicative damping of every velocity
pub struct Friction {
    pub damping: f64,
}

impl Force for Friction {
    fn apply(&self, _pointer: &PointerState, sys: &mut System) {
        for b in sys.bodies_mut() {
            b.v *= self.damping;
        }
    }
}
