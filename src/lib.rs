//! Last Particle - an elimination particle simulation
//!
//! Particles bounce around a walled arena. When two get close enough one of
//! them is knocked out, and the run ends when a single particle is left.
//!
//! Core modules:
//! - `sim`: Frame-synchronous simulation (motion, collisions, elimination, win state)
//! - `renderer`: GPU vertex layout for the flat point buffer
//! - `settings`: Run configuration

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{ArenaBounds, EliminationPolicy, Settings};
pub use sim::{FrameInput, SimEvent, SimPhase, Simulation, tick};

/// Simulation configuration constants
pub mod consts {
    use glam::Vec3;

    /// Host loop frame time (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Frames the headless host runs before giving up on a winner
    pub const MAX_FRAMES: u64 = 60 * 60 * 10;

    /// Arena walls
    pub const LEFT_WALL: f32 = -2.7;
    pub const RIGHT_WALL: f32 = 2.7;
    pub const TOP_WALL: f32 = 2.0;
    pub const BOTTOM_WALL: f32 = -2.0;

    /// Population spawned when nothing else is configured
    pub const DEFAULT_PARTICLE_COUNT: usize = 100;

    /// Point render size; also the numerator of the collision radius
    pub const PARTICLE_SIZE: f32 = 10.0;
    /// Divisor turning render size into collision radius
    pub const COLLISION_DIVISOR: f32 = 100.0;

    /// Per-frame growth of size and divisor during sudden death
    pub const SUDDEN_DEATH_STEP: f32 = 0.005;
    /// Growth applied by the manual "grow" input
    pub const GROW_STEP: f32 = 0.5;

    /// Sudden death starts at `initial / SUDDEN_DEATH_FRACTION` survivors...
    pub const SUDDEN_DEATH_FRACTION: usize = 10;
    /// ...or at this many, whichever comes first
    pub const SUDDEN_DEATH_FLOOR: usize = 5;

    /// Constant downward bias given to every particle
    pub const SPAWN_ACCELERATION: Vec3 = Vec3::new(0.0, -0.05, 0.0);
    /// Number of shape tags (0 triangle, 1 rhombus, 2 hexagon)
    pub const SHAPE_COUNT: u8 = 3;

    /// Clear color before a winner exists
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
