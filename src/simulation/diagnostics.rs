//! Conserved quantities and overlap measurements used by the headless
//! runner, the benchmark and the tests.

use super::collision::Bounds;
use super::states::{NVec2, System};

/// Σ m·v over all bodies
pub fn total_momentum(sys: &System) -> NVec2 {
    sys.bodies()
        .iter()
        .fold(NVec2::zeros(), |acc, b| acc + b.momentum())
}

/// Σ ½ m |v|² over all bodies
pub fn total_kinetic_energy(sys: &System) -> f64 {
    sys.bodies().iter().map(|b| b.kinetic_energy()).sum()
}

/// Deepest current penetration, body/body or body/wall, in screen units
///
/// Zero when nothing overlaps. Measured on current (not predicted) positions.
pub fn max_overlap(sys: &System, bounds: &Bounds) -> f64 {
    let bodies = sys.bodies();
    let mut worst: f64 = 0.0;

    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            let depth = a.radius() + b.radius() - (a.x - b.x).norm();
            worst = worst.max(depth);
        }

        let r = a.radius();
        let walls = [
            r - a.x.x,                  // left
            a.x.x + r - bounds.width,   // right
            r - a.x.y,                  // top
            a.x.y + r - bounds.height,  // bottom
        ];
        for depth in walls {
            worst = worst.max(depth);
        }
    }
    worst
}
