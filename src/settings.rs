//! Run settings
//!
//! Everything the simulation reads once at startup. Loaded from the command
//! line (a population count or a JSON file) with defaults for anything missing.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How the loser of a colliding pair is picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EliminationPolicy {
    /// Remove the first particle unless the draw is exactly 0.0
    #[default]
    FirstUnlessZero,
    /// Remove either particle with equal odds
    FairCoin,
}

impl EliminationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            EliminationPolicy::FirstUnlessZero => "FirstUnlessZero",
            EliminationPolicy::FairCoin => "FairCoin",
        }
    }

    /// Whether a draw in `[0, 1]` removes the second particle of the pair
    pub fn removes_second(&self, draw: f32) -> bool {
        match self {
            EliminationPolicy::FirstUnlessZero => draw == 0.0,
            EliminationPolicy::FairCoin => draw < 0.5,
        }
    }
}

/// The four arena walls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self {
            left: LEFT_WALL,
            right: RIGHT_WALL,
            top: TOP_WALL,
            bottom: BOTTOM_WALL,
        }
    }
}

impl ArenaBounds {
    /// At or beyond the left/right wall
    #[inline]
    pub fn outside_x(&self, x: f32) -> bool {
        x <= self.left || x >= self.right
    }

    /// At or beyond the top/bottom wall
    #[inline]
    pub fn outside_y(&self, y: f32) -> bool {
        y <= self.bottom || y >= self.top
    }
}

/// Simulation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Particles spawned at startup
    pub initial_count: usize,
    /// RNG seed; a random one is picked when absent
    pub seed: Option<u64>,

    // === Sizes ===
    /// Starting point render size
    pub particle_size: f32,
    /// Starting collision divisor
    pub collision_divisor: f32,
    /// Sudden death growth per frame
    pub sudden_death_step: f32,
    /// Manual growth per input signal
    pub grow_step: f32,

    // === Rules ===
    pub policy: EliminationPolicy,
    pub arena: ArenaBounds,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_count: DEFAULT_PARTICLE_COUNT,
            seed: None,

            particle_size: PARTICLE_SIZE,
            collision_divisor: COLLISION_DIVISOR,
            sudden_death_step: SUDDEN_DEATH_STEP,
            grow_step: GROW_STEP,

            policy: EliminationPolicy::default(),
            arena: ArenaBounds::default(),
        }
    }
}

impl Settings {
    /// Default settings with a specific population
    pub fn with_count(initial_count: usize) -> Self {
        Self {
            initial_count,
            ..Self::default()
        }
    }

    /// Parse settings from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Build settings from process arguments (program name first).
    ///
    /// The single optional argument is either a particle count or a path to
    /// a `.json` settings file. Anything unusable is logged and ignored.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Some(arg) = args.into_iter().nth(1) else {
            return Self::default();
        };
        let arg = arg.as_ref();

        if arg.ends_with(".json") {
            return Self::load(Path::new(arg));
        }

        match arg.parse::<usize>() {
            Ok(count) => Self::with_count(count).sanitized(),
            Err(_) => {
                log::warn!("Ignoring argument {arg:?}: expected a particle count or a .json file");
                Self::default()
            }
        }
    }

    /// Clamp values the simulation cannot run with
    pub fn sanitized(mut self) -> Self {
        if self.initial_count == 0 {
            log::warn!("initial_count must be at least 1, using 1");
            self.initial_count = 1;
        }
        if !(self.collision_divisor.is_finite() && self.collision_divisor > 0.0) {
            log::warn!("collision_divisor must be > 0, using {COLLISION_DIVISOR}");
            self.collision_divisor = COLLISION_DIVISOR;
        }
        if !(self.particle_size.is_finite() && self.particle_size >= 0.0) {
            log::warn!("particle_size must be >= 0, using {PARTICLE_SIZE}");
            self.particle_size = PARTICLE_SIZE;
        }
        if !(self.sudden_death_step.is_finite() && self.sudden_death_step >= 0.0) {
            self.sudden_death_step = SUDDEN_DEATH_STEP;
        }
        if !(self.grow_step.is_finite() && self.grow_step >= 0.0) {
            self.grow_step = GROW_STEP;
        }
        if self.arena.left >= self.arena.right || self.arena.bottom >= self.arena.top {
            log::warn!("Degenerate arena {:?}, using defaults", self.arena);
            self.arena = ArenaBounds::default();
        }
        self
    }
}
