//! Sudden death
//!
//! Once the population is thin enough, render size and collision divisor grow
//! by a fixed step every frame. Size grows faster in relative terms, so the
//! collision radius widens and the run is forced to finish.

use super::state::{SimEvent, Simulation};
use crate::consts::{SUDDEN_DEATH_FLOOR, SUDDEN_DEATH_FRACTION};

/// Whether `remaining` survivors out of `initial` puts the run in sudden death
#[inline]
pub fn in_sudden_death(remaining: usize, initial: usize) -> bool {
    remaining <= initial / SUDDEN_DEATH_FRACTION || remaining <= SUDDEN_DEATH_FLOOR
}

/// Re-evaluate the trigger and apply one frame of growth if it holds
pub fn escalate(sim: &mut Simulation) {
    let remaining = sim.remaining();
    if !in_sudden_death(remaining, sim.initial_count) {
        sim.sudden_death = false;
        return;
    }

    if !sim.sudden_death {
        log::info!("SUDDEN DEATH! {} particles remain", remaining);
        sim.events.push(SimEvent::SuddenDeath { remaining });
        sim.sudden_death = true;
    }

    sim.particle_size += sim.sudden_death_step;
    sim.collision_divisor += sim.sudden_death_step;
}

/// Manual growth from the "grow particle size" input
pub fn grow(sim: &mut Simulation) {
    sim.particle_size += sim.grow_step;
    log::debug!("Particle size now {:.3}", sim.particle_size);
}
