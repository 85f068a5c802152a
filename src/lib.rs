//! Flappy Bird - a single-screen arcade game with a headless simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bird kinematics, pipe spawning,
//!   collision, scoring, game-over transitions)
//! - `config`: Externally supplied board/tuning configuration
//!
//! Rendering, window creation, and input plumbing are a presentation
//! shell's job. The shell drives the simulation through three serialized
//! entry points (`advance_frame`, `spawn_pipe_pair`, `handle_input`) and
//! reads the state back each frame to draw it.

pub mod config;
pub mod sim;

pub use config::BoardConfig;

/// Game configuration constants
pub mod consts {
    /// Play-field width in pixels
    pub const BOARD_WIDTH: f32 = 360.0;
    /// Play-field height in pixels
    pub const BOARD_HEIGHT: f32 = 640.0;

    /// Nominal frame period for the shell's game-loop ticker (1000/60 ms)
    pub const FRAME_PERIOD_MS: u64 = 16;
    /// Nominal period for the shell's pipe-spawn ticker
    pub const SPAWN_PERIOD_MS: u64 = 1500;

    /// Bird sprite dimensions
    pub const BIRD_WIDTH: f32 = 34.0;
    pub const BIRD_HEIGHT: f32 = 24.0;

    /// Pipe sprite dimensions
    pub const PIPE_WIDTH: f32 = 64.0;
    pub const PIPE_HEIGHT: f32 = 512.0;

    /// Gravity added to the bird's vertical velocity each frame
    pub const GRAVITY: f32 = 1.0;
    /// Vertical velocity set (not added) by a jump input
    pub const FLAP_VELOCITY: f32 = -9.0;
    /// Horizontal pipe velocity per frame (negative = leftward scroll)
    pub const SCROLL_VELOCITY: f32 = -4.0;
}
