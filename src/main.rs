//! Last Particle entry point
//!
//! Headless host loop: feeds fixed frame times into the simulation until a
//! single particle is left. Pass a particle count or a `.json` settings file.

use last_particle::consts::*;
use last_particle::sim::{FrameInput, SimEvent, SimPhase, Simulation, color_code, tick};
use last_particle::{Settings, renderer::PointVertex};

/// Log a population update every this many frames
const REPORT_EVERY: u64 = 600;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_args(std::env::args());
    log::info!("Last Particle starting with {} particles", settings.initial_count);

    let mut sim = Simulation::new(&settings);
    let input = FrameInput::new(SIM_DT);
    let mut eliminations = 0usize;

    while sim.frame < MAX_FRAMES {
        tick(&mut sim, &input);

        for event in &sim.events {
            if matches!(event, SimEvent::Eliminated { .. }) {
                eliminations += 1;
            }
            match serde_json::to_string(event) {
                Ok(json) => log::debug!("frame {} event {}", sim.frame, json),
                Err(e) => log::warn!("Could not serialize {:?}: {}", event, e),
            }
        }

        if sim.frame % REPORT_EVERY == 0 {
            log::info!(
                "t={:.0}s remaining={} size={:.3} radius={:.4} points={}",
                sim.frame as f32 * SIM_DT,
                sim.remaining(),
                sim.particle_size,
                sim.collision_radius(),
                PointVertex::slice(&sim.vertices).len()
            );
        }

        if sim.phase == SimPhase::Won {
            break;
        }
    }

    match sim.winner() {
        Some(winner) => println!(
            "Winner: particle {} ColorCode: {} after {} frames ({} eliminations, seed {})",
            winner.id,
            color_code(winner.color),
            sim.frame,
            eliminations,
            sim.seed
        ),
        None => {
            log::warn!(
                "No winner after {} frames, {} particles remain",
                sim.frame,
                sim.remaining()
            );
            std::process::exit(1);
        }
    }
}
