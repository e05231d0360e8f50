//! Pairwise collision detection
//!
//! Every unordered pair is tested against one shared radius derived from the
//! global render size. Quadratic in population, which only ever shrinks.

use glam::Vec3;

use super::state::Particle;

/// A colliding pair, by slot index into the frame-start store (`first < second`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionPair {
    pub first: usize,
    pub second: usize,
}

/// Strictly closer than `radius`
#[inline]
pub fn collides(a: Vec3, b: Vec3, radius: f32) -> bool {
    a.distance(b) < radius
}

/// Collect all colliding pairs, ordered by `first` then `second`
pub fn find_colliding_pairs(particles: &[Particle], radius: f32) -> Vec<CollisionPair> {
    let mut pairs = Vec::new();
    for (i, a) in particles.iter().enumerate() {
        for (j, b) in particles.iter().enumerate().skip(i + 1) {
            if collides(a.position, b.position, radius) {
                pairs.push(CollisionPair { first: i, second: j });
            }
        }
    }
    pairs
}
