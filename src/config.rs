//! Data-driven game tuning
//!
//! All gameplay constants live in one structure so the simulation has no
//! ambient globals and tests can run scaled-down variants.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Tuning knobs for one game session.
///
/// Physics are delta-time scaled: velocities advance by `dt / time_unit`
/// steps, where `dt` is the frame delta in milliseconds. Passing a constant
/// `dt` equal to the relevant time unit reproduces fixed-step behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Logical board width in pixels
    pub board_width: f32,
    /// Logical board height in pixels
    pub board_height: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    pub pipe_width: f32,
    pub pipe_height: f32,
    /// Vertical gap between the top and bottom pipe of a pair
    pub opening_space: f32,
    /// Downward acceleration applied to the bird, per gravity time unit
    pub gravity: f32,
    /// Upward velocity set by a jump
    pub jump_power: f32,
    /// Horizontal pipe scroll speed, per scroll time unit
    pub velocity_x: f32,
    /// Milliseconds of frame time per gravity integration step
    pub gravity_time_unit: f32,
    /// Milliseconds of frame time per pipe scroll step
    pub scroll_time_unit: f32,
    /// Cadence of the pipe spawn timer
    pub spawn_interval_ms: f64,
    /// Minimum wall-clock interval between accepted jumps
    pub jump_cooldown_ms: f64,
    /// Frame deltas are clamped to this ceiling to prevent tunneling
    pub max_frame_delta_ms: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 360.0,
            board_height: 640.0,
            bird_width: 34.0,
            bird_height: 24.0,
            pipe_width: 64.0,
            pipe_height: 512.0,
            opening_space: 160.0,
            gravity: 0.4,
            jump_power: 7.0,
            velocity_x: 2.0,
            gravity_time_unit: 20.0,
            scroll_time_unit: 7.0,
            spawn_interval_ms: 870.0,
            jump_cooldown_ms: 100.0,
            max_frame_delta_ms: 100.0,
        }
    }
}

impl GameConfig {
    /// The earlier fixed-step variant's pacing: slower pipe cadence, same
    /// physics constants, intended to be ticked with `dt == time_unit`.
    pub fn classic() -> Self {
        Self {
            spawn_interval_ms: 1500.0,
            ..Self::default()
        }
    }

    /// Bird spawn position (left eighth of the board, vertically centered)
    pub fn bird_start(&self) -> Vec2 {
        Vec2::new(self.board_width / 8.0, self.board_height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_board() {
        let config = GameConfig::default();
        assert_eq!(config.opening_space, config.board_height / 4.0);
        let start = config.bird_start();
        assert_eq!(start.x, 45.0);
        assert_eq!(start.y, 320.0);
    }

    #[test]
    fn test_classic_only_changes_pacing() {
        let classic = GameConfig::classic();
        let default = GameConfig::default();
        assert_eq!(classic.spawn_interval_ms, 1500.0);
        assert_eq!(classic.gravity, default.gravity);
        assert_eq!(classic.jump_power, default.jump_power);
    }
}
