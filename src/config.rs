//! Board and tuning configuration
//!
//! Supplied by the shell at construction time; the simulation never reaches
//! for globals. Serializable so a shell can load overrides from JSON.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Play-field dimensions, timer periods, and physics tuning.
///
/// All fields are overridable; `Default` reproduces the classic 360x640
/// board with its original tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Play-field width in pixels
    pub board_width: f32,
    /// Play-field height in pixels
    pub board_height: f32,

    /// Nominal game-loop ticker period (shell-side)
    pub frame_period_ms: u64,
    /// Nominal pipe-spawn ticker period (shell-side, independent timer)
    pub spawn_period_ms: u64,

    /// Bird bounding-box size
    pub bird_size: Vec2,
    /// Pipe bounding-box size
    pub pipe_size: Vec2,

    /// Velocity change per frame while falling
    pub gravity: f32,
    /// Vertical velocity a jump input overwrites onto the bird
    pub flap_velocity: f32,
    /// Horizontal pipe velocity per frame (negative = leftward)
    pub scroll_velocity: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            frame_period_ms: FRAME_PERIOD_MS,
            spawn_period_ms: SPAWN_PERIOD_MS,
            bird_size: Vec2::new(BIRD_WIDTH, BIRD_HEIGHT),
            pipe_size: Vec2::new(PIPE_WIDTH, PIPE_HEIGHT),
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
            scroll_velocity: SCROLL_VELOCITY,
        }
    }
}

impl BoardConfig {
    /// Where the bird sits: x fixed at one eighth of the board, y centered.
    pub fn bird_start(&self) -> Vec2 {
        Vec2::new(self.board_width / 8.0, self.board_height / 2.0)
    }

    /// Vertical gap between the members of a pipe pair.
    pub fn opening_space(&self) -> f32 {
        self.board_height / 6.0
    }

    /// X position where new pipes appear (just off the right edge).
    pub fn pipe_spawn_x(&self) -> f32 {
        self.board_width
    }

    /// How many game-loop frames elapse between pipe spawns, for shells
    /// that drive both cadences from a single ticker.
    pub fn frames_per_spawn(&self) -> u64 {
        (self.spawn_period_ms / self.frame_period_ms).max(1)
    }
}
