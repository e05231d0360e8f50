//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Caller-supplied frame time only
//! - Seeded RNG only, owned by the `Simulation`
//! - Stable iteration order (store order)
//! - No rendering or platform dependencies

pub mod buffer;
pub mod collision;
pub mod elimination;
pub mod escalation;
pub mod motion;
pub mod state;
pub mod tick;
pub mod win;

pub use buffer::{FLOATS_PER_PARTICLE, VertexBuffer};
pub use collision::{CollisionPair, collides, find_colliding_pairs};
pub use elimination::{Loser, choose_loser, resolve_collisions};
pub use escalation::in_sudden_death;
pub use state::{Particle, ParticleStore, SimEvent, SimPhase, Simulation};
pub use tick::{FrameInput, tick};
pub use win::color_code;
