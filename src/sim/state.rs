//! Game state and core simulation types
//!
//! Everything the shell reads back for rendering lives here. The state is
//! serializable so a shell can snapshot or dump it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::BoardConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended by collision or falling out of the board
    GameOver,
}

/// Which half of a pipe pair an obstacle is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipeRole {
    Top,
    Bottom,
}

/// The player's bird
///
/// X stays fixed for the whole session; scrolling pipes simulate forward
/// flight. Y and vertical velocity change every frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bird {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    /// Bounding-box size
    pub size: Vec2,
    /// Vertical velocity (positive = downward)
    pub velocity_y: f32,
}

impl Bird {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            pos: config.bird_start(),
            size: config.bird_size,
            velocity_y: 0.0,
        }
    }
}

/// A single pipe obstacle
///
/// Pipes always spawn in top/bottom pairs sharing one vertical opening;
/// the pairing is implicit (same spawn frame, same x), not a stored link.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pipe {
    /// Top-left corner; x scrolls leftward, y is fixed at spawn
    pub pos: Vec2,
    /// Bounding-box size
    pub size: Vec2,
    /// Top or bottom member of its pair
    pub role: PipeRole,
    /// One-shot marker so a pipe scores at most once
    pub passed: bool,
}

impl Pipe {
    pub fn new(pos: Vec2, size: Vec2, role: PipeRole) -> Self {
        Self {
            pos,
            size,
            role,
            passed: false,
        }
    }

    /// X coordinate of the pipe's trailing (right) edge.
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

/// Complete game state (deterministic, serializable)
///
/// Exclusively owned by the simulation; the shell reads it for rendering
/// and mutates it only through the `tick` entry points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Board geometry and tuning, fixed at construction
    pub config: BoardConfig,
    /// Current phase
    pub phase: GamePhase,
    /// The one bird of this session
    pub bird: Bird,
    /// Active pipes in spawn order (render/iteration order)
    pub pipes: Vec<Pipe>,
    /// Fractional score accumulator: 0.5 per pipe, 1.0 per pair
    pub score: f32,
    /// Frames advanced since construction or last reset
    pub frame: u64,
}

impl GameState {
    /// Create a fresh session in the `Playing` phase.
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            phase: GamePhase::Playing,
            bird: Bird::new(&config),
            pipes: Vec::new(),
            score: 0.0,
            frame: 0,
        }
    }

    /// Restart the session: bird back to its spawn point, pipes cleared,
    /// score zeroed, phase back to `Playing`.
    ///
    /// The shell owns the tickers; restarting them is its responsibility.
    pub fn reset(&mut self) {
        self.bird = Bird::new(&self.config);
        self.pipes.clear();
        self.score = 0.0;
        self.frame = 0;
        self.phase = GamePhase::Playing;
    }

    /// Score as shown on screen (truncated to a whole number).
    pub fn display_score(&self) -> u32 {
        self.score as u32
    }

    /// Whether the run has ended.
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
