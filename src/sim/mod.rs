//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Delta-time physics with a clamped frame delta
//! - Seeded RNG only
//! - Stable per-frame ordering (bird, pipes, scoring, collision, removal)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, intersects};
pub use spawn::spawn_pipe_pair;
pub use state::{Bird, GamePhase, GameState, Pipe, PipeKind};
pub use tick::{TickInput, tick};
