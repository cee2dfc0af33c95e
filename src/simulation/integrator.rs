//! Position integration for one sub-step
//!
//! Explicit Euler with the per-sub-step velocity: `x += v` for free bodies.
//! Bodies resolved by the collision stage skip the move once and are
//! released for the next sub-step.

use super::states::System;

/// Advance free bodies by their velocity and reset every motion flag
///
/// Returns how many bodies actually moved.
pub fn euler_integrator(sys: &mut System) -> usize {
    let mut moved = 0;
    for b in sys.bodies_mut() {
        if b.is_free() {
            b.x += b.v;
            moved += 1;
        } else {
            // Keep the corrected velocity, drop the stale displacement
            b.release();
        }
    }
    moved
}
