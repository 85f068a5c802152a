//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-frame steps only, no wall-clock reads
//! - Injected RNG only (one draw per pipe spawn)
//! - Stable iteration order (pipes kept in spawn order)
//! - No rendering or platform dependencies
//!
//! The shell serializes all calls into this module; no two entry points
//! ever run concurrently on the same `GameState`.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::rects_overlap;
pub use state::{Bird, GamePhase, GameState, Pipe, PipeRole};
pub use tick::{InputEvent, advance_frame, handle_input, spawn_pipe_pair};
