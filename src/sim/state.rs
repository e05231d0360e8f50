//! Simulation state and core types
//!
//! The `Simulation` aggregate owns every piece of mutable state: the particle
//! store, the arena, the scalar render/collision parameters, the win latch and
//! the RNG.

use glam::{Vec3, Vec4};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::buffer::VertexBuffer;
use crate::consts::*;
use crate::settings::{ArenaBounds, EliminationPolicy, Settings};

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimPhase {
    /// More than one particle left
    Running,
    /// A single survivor has been declared (terminal)
    Won,
}

/// Something that happened during a frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SimEvent {
    /// A collision knocked out `eliminated`; `survivor` was the other party
    Eliminated { survivor: u32, eliminated: u32 },
    /// First frame of sudden death
    SuddenDeath { remaining: usize },
    /// The run has a winner
    Winner { id: u32, color: Vec3 },
}

/// A single particle
#[derive(Debug, Clone)]
pub struct Particle {
    /// Stable identifier, unique for the run
    pub id: u32,
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    /// Assigned at spawn, never changes
    pub color: Vec3,
    /// Shape tag (stored only)
    pub shape: u8,
    /// Stored only
    pub lifespan: f32,
}

impl Particle {
    pub fn new(id: u32, position: Vec3, velocity: Vec3, color: Vec3) -> Self {
        Self {
            id,
            position,
            velocity,
            acceleration: SPAWN_ACCELERATION,
            color,
            shape: 0,
            lifespan: 1.0,
        }
    }

    /// Value equality on position and color (ids ignored)
    #[inline]
    pub fn same_value(&self, other: &Particle) -> bool {
        self.position == other.position && self.color == other.color
    }
}

/// Ordered collection of live particles
///
/// Never grows after spawning. Order matters only for the flat buffer layout.
#[derive(Debug, Clone, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
    next_id: u32,
}

impl ParticleStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
            next_id: 0,
        }
    }

    /// Allocate a new particle ID
    pub fn next_particle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a particle during spawning, giving it a fresh id
    pub(crate) fn push(&mut self, mut particle: Particle) {
        particle.id = self.next_particle_id();
        self.particles.push(particle);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Particle> {
        self.particles.iter_mut()
    }

    pub fn get(&self, id: u32) -> Option<&Particle> {
        self.particles.iter().find(|p| p.id == id)
    }

    /// Remove by stable id, keeping survivor order. Returns the removed particle.
    pub fn remove(&mut self, id: u32) -> Option<Particle> {
        let index = self.particles.iter().position(|p| p.id == id)?;
        Some(self.particles.remove(index))
    }

    /// Remove the first particle equal to `target` by position and color
    pub fn remove_matching(&mut self, target: &Particle) -> Option<Particle> {
        let index = self.particles.iter().position(|p| p.same_value(target))?;
        Some(self.particles.remove(index))
    }

    /// Drop every particle whose slot is flagged, in one compaction pass
    pub(crate) fn compact(&mut self, eliminated: &[bool]) {
        debug_assert_eq!(eliminated.len(), self.particles.len());
        let mut flags = eliminated.iter();
        self.particles.retain(|_| !flags.next().copied().unwrap_or(false));
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Population at spawn
    pub initial_count: usize,
    pub phase: SimPhase,
    pub particles: ParticleStore,
    pub arena: ArenaBounds,
    /// Point render size
    pub particle_size: f32,
    /// Collision radius is `particle_size / collision_divisor`
    pub collision_divisor: f32,
    pub sudden_death_step: f32,
    pub grow_step: f32,
    pub policy: EliminationPolicy,
    /// Renderer clear color
    pub background: Vec4,
    /// Set once, the frame the winner is announced
    pub winner_declared: bool,
    /// Whether sudden death was active last frame
    pub sudden_death: bool,
    /// Frames advanced so far
    pub frame: u64,
    /// Interleaved position/color data for the renderer
    pub vertices: VertexBuffer,
    /// Events from the most recent frame
    pub events: Vec<SimEvent>,
    pub(crate) rng: Pcg32,
}

impl Simulation {
    /// Create a simulation and spawn its population
    pub fn new(settings: &Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        let mut sim = Self::empty(settings, seed);
        sim.spawn(settings.initial_count);
        log::info!(
            "Spawned {} particles (seed {}, policy {})",
            sim.particles.len(),
            seed,
            sim.policy.as_str()
        );
        sim
    }

    /// Create a simulation from explicit particles (no random spawning).
    ///
    /// Particles are renumbered `0..n` in the given order; incoming ids are ignored.
    pub fn from_particles(settings: &Settings, particles: Vec<Particle>) -> Self {
        let mut sim = Self::empty(settings, settings.seed.unwrap_or(0));
        sim.initial_count = particles.len();
        for p in particles {
            sim.particles.push(p);
        }
        sim.vertices.sync(&sim.particles);
        sim
    }

    fn empty(settings: &Settings, seed: u64) -> Self {
        Self {
            seed,
            initial_count: settings.initial_count,
            phase: SimPhase::Running,
            particles: ParticleStore::with_capacity(settings.initial_count),
            arena: settings.arena,
            particle_size: settings.particle_size,
            collision_divisor: settings.collision_divisor,
            sudden_death_step: settings.sudden_death_step,
            grow_step: settings.grow_step,
            policy: settings.policy,
            background: Vec4::from_array(BACKGROUND),
            winner_declared: false,
            sudden_death: false,
            frame: 0,
            vertices: VertexBuffer::default(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    fn spawn(&mut self, count: usize) {
        for _ in 0..count {
            let rng = &mut self.rng;

            let position = Vec3::new(
                rng.random::<f32>() * 2.0 - 1.0,
                rng.random::<f32>() * 2.0 - 1.0,
                0.0,
            );
            let color = Vec3::new(rng.random(), rng.random(), rng.random());
            let shape = rng.random_range(0..SHAPE_COUNT);
            let velocity = Vec3::new(
                rng.random_range(-100i32..100) as f32 / 100.0,
                rng.random_range(-100i32..100) as f32 / 100.0,
                0.0,
            );

            let mut particle = Particle::new(0, position, velocity, color);
            particle.shape = shape;
            self.particles.push(particle);
        }
        self.vertices.sync(&self.particles);
    }

    /// Distance below which two particles collide
    #[inline]
    pub fn collision_radius(&self) -> f32 {
        self.particle_size / self.collision_divisor
    }

    /// Remaining population
    #[inline]
    pub fn remaining(&self) -> usize {
        self.particles.len()
    }

    /// The sole survivor once the run is won
    pub fn winner(&self) -> Option<&Particle> {
        match self.phase {
            SimPhase::Won => self.particles.as_slice().first(),
            SimPhase::Running => None,
        }
    }

    /// Uniform draw in `[0, 1]` for elimination decisions
    pub(crate) fn draw_unit(&mut self) -> f32 {
        self.rng.random_range(0.0..=1.0)
    }
}
