//! Per-frame simulation step
//!
//! One call runs the whole frame to completion: collisions, eliminations,
//! motion, sudden death, buffer rebuild and the winner check, in that order.

use super::state::{SimPhase, Simulation};
use super::{elimination, escalation, motion, win};

/// Inputs for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Seconds since the previous frame
    pub delta: f32,
    /// Manual "grow particle size" signal
    pub grow_particle_size: bool,
}

impl FrameInput {
    pub fn new(delta: f32) -> Self {
        Self {
            delta,
            ..Default::default()
        }
    }
}

/// Advance the simulation by one frame
pub fn tick(sim: &mut Simulation, input: &FrameInput) {
    sim.events.clear();
    sim.frame += 1;

    let dt = if input.delta.is_finite() {
        input.delta.max(0.0)
    } else {
        0.0
    };

    if input.grow_particle_size {
        escalation::grow(sim);
    }

    if sim.phase == SimPhase::Running {
        elimination::resolve_collisions(sim);
    }

    motion::integrate_all(sim.particles.iter_mut(), &sim.arena, dt);

    if sim.phase == SimPhase::Running {
        escalation::escalate(sim);
    }

    sim.vertices.sync(&sim.particles);

    win::check_winner(sim);
}
