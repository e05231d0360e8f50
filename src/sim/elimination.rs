//! Elimination of colliding particles
//!
//! Pairs are resolved in enumeration order against the frame-start snapshot.
//! A pair is skipped once either member has already been knocked out this
//! frame, and the store is compacted a single time at the end.

use super::collision::{CollisionPair, find_colliding_pairs};
use super::state::{SimEvent, Simulation};
use crate::settings::EliminationPolicy;

/// Which member of a pair loses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loser {
    First,
    Second,
}

/// Decide the loser of a pair from a uniform draw in `[0, 1]`
#[inline]
pub fn choose_loser(policy: EliminationPolicy, draw: f32) -> Loser {
    if policy.removes_second(draw) {
        Loser::Second
    } else {
        Loser::First
    }
}

/// Detect and resolve this frame's collisions. Returns the eliminated ids.
pub fn resolve_collisions(sim: &mut Simulation) -> Vec<u32> {
    let pairs = find_colliding_pairs(sim.particles.as_slice(), sim.collision_radius());
    resolve_pairs(sim, &pairs)
}

/// Resolve an already-collected list of pairs
pub fn resolve_pairs(sim: &mut Simulation, pairs: &[CollisionPair]) -> Vec<u32> {
    if pairs.is_empty() {
        return Vec::new();
    }

    let mut eliminated = vec![false; sim.particles.len()];
    let mut removed = Vec::new();

    for pair in pairs {
        if eliminated[pair.first] || eliminated[pair.second] {
            continue;
        }

        let draw = sim.draw_unit();
        let (loser, winner) = match choose_loser(sim.policy, draw) {
            Loser::First => (pair.first, pair.second),
            Loser::Second => (pair.second, pair.first),
        };
        eliminated[loser] = true;

        let particles = sim.particles.as_slice();
        let (loser_id, winner_id) = (particles[loser].id, particles[winner].id);
        log::debug!("Particle {} eliminated by {}", loser_id, winner_id);
        removed.push(loser_id);
        sim.events.push(SimEvent::Eliminated {
            survivor: winner_id,
            eliminated: loser_id,
        });
    }

    sim.particles.compact(&eliminated);
    removed
}
