//! Timed pipe-pair generation
//!
//! The spawner runs on its own timer cadence (`spawn_interval_ms`),
//! independent of the frame loop; its only coordination with the rest of the
//! simulation is appending to the session's pipe collection.

use glam::Vec2;
use rand::Rng;

use super::state::{GamePhase, GameState, Pipe, PipeKind};
use crate::config::GameConfig;

/// Append one top/bottom pipe pair at the right edge of the board.
///
/// The top pipe's y offset is drawn uniformly so that between a quarter and
/// three quarters of it hangs above the screen; the bottom pipe sits exactly
/// `pipe_height + opening_space` below it. No-op once the session is over.
pub fn spawn_pipe_pair(state: &mut GameState, config: &GameConfig) {
    if state.phase == GamePhase::Over {
        return;
    }

    let top_y = -config.pipe_height / 4.0 - state.rng.random::<f32>() * (config.pipe_height / 2.0);
    let spawn_x = config.board_width;

    state
        .pipes
        .push(Pipe::new(Vec2::new(spawn_x, top_y), PipeKind::Top, config));
    state.pipes.push(Pipe::new(
        Vec2::new(spawn_x, top_y + config.pipe_height + config.opening_space),
        PipeKind::Bottom,
        config,
    ));
}
