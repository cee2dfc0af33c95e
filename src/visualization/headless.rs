//! Window-less runner: ticks the world and logs conserved quantities.

use tracing::info;

use crate::simulation::diagnostics::{max_overlap, total_kinetic_energy, total_momentum};
use crate::simulation::engine::World;
use crate::simulation::render::CommandBuffer;

/// Run `ticks` ticks, logging a summary every `log_every` ticks (0 = never)
pub fn run_headless(world: &mut World, ticks: u64, log_every: u64) {
    let mut frame = CommandBuffer::new();
    let mut contacts = 0;

    for _ in 0..ticks {
        let report = world.update();
        contacts += report.pair_contacts + report.wall_contacts;

        if log_every > 0 && report.tick % log_every == 0 {
            world.render(&mut frame);
            let p = total_momentum(&world.system);
            info!(
                tick = report.tick,
                energy = total_kinetic_energy(&world.system),
                px = p.x,
                py = p.y,
                overlap = max_overlap(&world.system, &world.bounds()),
                contacts,
                drawn = frame.circles(),
                "headless"
            );
            contacts = 0;
        }
    }
}
