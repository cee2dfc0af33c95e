use std::time::Instant;

use crate::simulation::diagnostics::{max_overlap, total_kinetic_energy};
use crate::simulation::engine::World;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};
use crate::error::SimError;

/// Fixed scene for the benchmark: a fast ring of circles aimed at the center
pub fn ring_scene(n: usize, speed: f64) -> Result<System, SimError> {
    let center = NVec2::new(200.0, 200.0);
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let angle = i as f64 / n as f64 * std::f64::consts::TAU;
        let dir = NVec2::new(angle.cos(), angle.sin());
        // deterministic masses, no rand needed
        let m = 0.5 + (i % 3) as f64 * 0.5;
        bodies.push(Body::new(center + dir * 140.0, -dir * speed, 18.0, m)?);
    }
    Ok(System::new(bodies))
}

/// Time ticks and record the worst overlap for several sub-step counts
///
/// Every run covers the same number of sub-steps, so the physical time is
/// equal and only the split into ticks changes.
pub fn bench_substeps() -> Result<(), SimError> {
    let ks = [1, 2, 5, 10, 20];
    let total_substeps = 4000;

    for k in ks {
        let params = Parameters {
            width: 400.0,
            height: 400.0,
            substeps: k,
            friction: 1.0,
            ..Parameters::default()
        };
        params.validate()?;

        let mut world = World::new(ring_scene(8, 3.0)?, params);
        let bounds = world.bounds();
        let e0 = total_kinetic_energy(&world.system);
        let ticks = total_substeps / k;

        let mut worst: f64 = 0.0;
        let t0 = Instant::now();
        for _ in 0..ticks {
            world.update();
            worst = worst.max(max_overlap(&world.system, &bounds));
        }
        let elapsed = t0.elapsed().as_secs_f64();

        let drift = (total_kinetic_energy(&world.system) - e0).abs() / e0;
        println!(
            "K = {k:2}, ticks = {ticks:5}, per tick = {:9.3} us, max overlap = {:8.4}, energy drift = {:.2e}",
            elapsed / ticks as f64 * 1e6,
            worst,
            drift
        );
    }
    Ok(())
}
