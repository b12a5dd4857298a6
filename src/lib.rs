//! Flappy Web - a Flappy Bird clone for the browser canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, scoring, spawning)
//! - `config`: Data-driven game tuning
//! - `highscore`: Persisted best score (LocalStorage on web)
//! - `render`: Canvas 2D presentation boundary (wasm only)

pub mod config;
pub mod highscore;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod sim;

pub use config::GameConfig;
pub use highscore::HighScore;
