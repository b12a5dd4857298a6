//! Per-frame simulation step
//!
//! Advances one animation frame. Ordering within a frame is fixed and load
//! bearing: bird update, pipe updates, scoring, collision, off-screen
//! removal. Scoring and collision both read the positions produced earlier
//! in the same frame.

use super::collision::intersects;
use super::state::{GamePhase, GameState};
use crate::config::GameConfig;

/// Input gathered between frames (deterministic; the wall clock is supplied
/// by the caller so tests can control the jump cooldown)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump requested via keyboard, touch, or click
    pub jump: bool,
    /// Wall-clock milliseconds at this frame
    pub now_ms: f64,
}

/// Advance the session by one frame of `dt` milliseconds.
///
/// `dt` is clamped to `[0, max_frame_delta_ms]`: long pauses must not let
/// the bird tunnel through pipes or plummet in one step, and a negative
/// delta must never run physics backward. No-op once the session is over.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, config: &GameConfig) {
    if state.phase == GamePhase::Over {
        return;
    }

    let dt = dt.clamp(0.0, config.max_frame_delta_ms);

    if input.jump {
        state.bird.jump(input.now_ms, config);
    }

    if state.bird.update(dt, config) {
        state.phase = GamePhase::Over;
    }

    for pipe in &mut state.pipes {
        pipe.update(dt, config);
    }

    let bird_box = state.bird.aabb();
    for pipe in &mut state.pipes {
        if !pipe.passed && state.bird.pos.x > pipe.pos.x + pipe.width {
            pipe.passed = true;
            state.score += 0.5;
        }
        if intersects(&bird_box, &pipe.aabb()) {
            state.phase = GamePhase::Over;
        }
    }

    state.pipes.retain(|pipe| !pipe.offscreen());
}
