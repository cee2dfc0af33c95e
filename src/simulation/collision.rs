//! Collision stage: predicted body/body contacts and wall reflection
//!
//! Detection uses the one-step-ahead position `x + v`, so contacts are
//! resolved before the circles visibly overlap. A resolved body keeps its new
//! velocity but is marked `Motion::Resolved`, which stops the integrator from
//! translating it this sub-step. It is still tested against later pairs and
//! walls.

use tracing::debug;

use crate::simulation::params::RESTITUTION;
use crate::simulation::states::{Body, NVec2, System};

/// Predicted centers closer than this are treated as coincident
pub const DEGENERATE_EPSILON: f64 = 1e-9;

/// Axis-aligned reflecting box `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Would a circle centered at `cx` touch the left or right wall?
    pub fn crosses_left_or_right(&self, cx: f64, radius: f64) -> bool {
        cx + radius >= self.width || cx - radius <= 0.0
    }

    /// Would a circle centered at `cy` touch the top or bottom wall?
    pub fn crosses_top_or_bottom(&self, cy: f64, radius: f64) -> bool {
        cy + radius >= self.height || cy - radius <= 0.0
    }
}

/// Which axes a wall contact reflected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallHit {
    pub x: bool,
    pub y: bool,
}

impl WallHit {
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

/// Unit normal pointing from body 2 toward body 1
///
/// Predicted centers give the normal. When they coincide the current centers
/// are used instead, and when those coincide too the normal is `+x`.
fn collision_normal(a: &Body, b: &Body, predicted: NVec2) -> NVec2 {
    let d2 = predicted.norm_squared();
    if d2 > DEGENERATE_EPSILON * DEGENERATE_EPSILON {
        return predicted / d2.sqrt();
    }

    let current = a.x - b.x;
    let c2 = current.norm_squared();
    debug!(
        x1 = a.x.x, y1 = a.x.y, x2 = b.x.x, y2 = b.x.y,
        "coincident predicted centers, using fallback normal"
    );
    if c2 > DEGENERATE_EPSILON * DEGENERATE_EPSILON {
        current / c2.sqrt()
    } else {
        NVec2::x()
    }
}

/// Resolve a predicted overlap between two bodies
///
/// Returns the signed impulse magnitude `J` when the pair was in contact.
/// `J = (e + 1) * ((v1 - v2) . n) * m1 m2 / (m1 + m2)`, applied as
/// `v1 -= J/m1 n`, `v2 += J/m2 n`; tangential components are untouched.
pub fn resolve_pair(a: &mut Body, b: &mut Body) -> Option<f64> {
    let delta = a.predicted() - b.predicted();
    let reach = a.radius() + b.radius();
    if delta.norm_squared() > reach * reach {
        return None;
    }

    let n = collision_normal(a, b, delta);
    let (m1, m2) = (a.mass(), b.mass());
    let approach = (a.v - b.v).dot(&n);
    let impulse = (RESTITUTION + 1.0) * approach * m1 * m2 / (m1 + m2);

    a.v -= n * (impulse / m1);
    b.v += n * (impulse / m2);

    a.mark_resolved();
    b.mark_resolved();
    Some(impulse)
}

/// Run [`resolve_pair`] over every unordered pair `(i, j)`, `i < j`
///
/// Returns the number of contacts resolved.
pub fn resolve_pairs(sys: &mut System) -> usize {
    let bodies = sys.bodies_mut();
    let n = bodies.len();
    let mut contacts = 0;

    for i in 0..n {
        // left holds i, right starts at i + 1
        let (left, right) = bodies.split_at_mut(i + 1);
        let bi = &mut left[i];
        for bj in right.iter_mut() {
            if resolve_pair(bi, bj).is_some() {
                contacts += 1;
            }
        }
    }
    contacts
}

/// Reflect a body off the walls it is about to touch
///
/// The two axes are checked independently, so a corner flips both.
pub fn resolve_boundary(body: &mut Body, bounds: &Bounds) -> WallHit {
    let p = body.predicted();
    let r = body.radius();
    let mut hit = WallHit::default();

    if bounds.crosses_left_or_right(p.x, r) {
        body.v.x = -body.v.x;
        body.mark_resolved();
        hit.x = true;
    }
    if bounds.crosses_top_or_bottom(p.y, r) {
        body.v.y = -body.v.y;
        body.mark_resolved();
        hit.y = true;
    }
    hit
}

/// Run [`resolve_boundary`] over every body; returns how many touched a wall
pub fn resolve_boundaries(sys: &mut System, bounds: &Bounds) -> usize {
    let mut touched = 0;
    for b in sys.bodies_mut() {
        if resolve_boundary(b, bounds).any() {
            touched += 1;
        }
    }
    touched
}
