//! Winner detection
//!
//! `Running -> Won` the first frame exactly one particle is left. The
//! announcement is latched; the background assignment is idempotent.

use glam::Vec3;

use super::state::{SimEvent, SimPhase, Simulation};

/// Printable color triple, e.g. `(0.25, 1, 0.5)`
pub fn color_code(color: Vec3) -> String {
    format!("({}, {}, {})", color.x, color.y, color.z)
}

/// Check for a single survivor. Returns true on the frame the winner is declared.
pub fn check_winner(sim: &mut Simulation) -> bool {
    let [survivor] = sim.particles.as_slice() else {
        return false;
    };
    let (id, color) = (survivor.id, survivor.color);

    sim.background = color.extend(1.0);
    sim.phase = SimPhase::Won;

    if sim.winner_declared {
        return false;
    }
    sim.winner_declared = true;

    log::info!("WE HAVE A WINNER! ColorCode: {}", color_code(color));
    sim.events.push(SimEvent::Winner { id, color });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::state::Particle;
    use glam::Vec4;

    #[test]
    fn test_color_code() {
        assert_eq!(color_code(Vec3::new(0.25, 1.0, 0.5)), "(0.25, 1, 0.5)");
    }

    #[test]
    fn test_no_winner_with_two() {
        let particles = vec![
            Particle::new(0, Vec3::ZERO, Vec3::ZERO, Vec3::X),
            Particle::new(1, Vec3::ONE, Vec3::ZERO, Vec3::Y),
        ];
        let mut sim = Simulation::from_particles(&Settings::default(), particles);
        assert!(!check_winner(&mut sim));
        assert_eq!(sim.phase, SimPhase::Running);
        assert!(sim.winner().is_none());
    }

    #[test]
    fn test_winner_latched() {
        let color = Vec3::new(0.2, 0.4, 0.6);
        let particles = vec![Particle::new(0, Vec3::ZERO, Vec3::ZERO, color)];
        let mut sim = Simulation::from_particles(&Settings::default(), particles);

        assert!(check_winner(&mut sim));
        for _ in 0..100 {
            assert!(!check_winner(&mut sim));
        }
        let announcements = sim
            .events
            .iter()
            .filter(|e| matches!(e, SimEvent::Winner { .. }))
            .count();
        assert_eq!(announcements, 1);
        assert_eq!(sim.background, Vec4::new(0.2, 0.4, 0.6, 1.0));
        assert_eq!(sim.phase, SimPhase::Won);
        assert_eq!(sim.winner().map(|p| p.id), Some(0));
    }
}
