//! Per-frame simulation advance
//!
//! The three serialized entry points the shell calls: `advance_frame` from
//! the ~60 Hz game-loop ticker, `spawn_pipe_pair` from the independent
//! ~1.5 s spawn ticker, and `handle_input` from key events. The shell is
//! responsible for stopping both tickers once the run ends.

use glam::Vec2;
use rand::Rng;

use super::collision::rects_overlap;
use super::state::{GamePhase, GameState, Pipe, PipeRole};

/// Input events forwarded by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Upward impulse (space/tap). Overwrites the bird's vertical velocity.
    Jump,
    /// Restart request (enter/confirm). Only effective after game over.
    Restart,
}

/// Advance the simulation by one frame. No-op once the run has ended.
pub fn advance_frame(state: &mut GameState) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    state.frame += 1;

    // Bird kinematics: gravity, then displacement, then clamp at the top
    // bound. The bottom bound is not clamped - falling past it is the loss
    // condition checked after the pipe pass.
    state.bird.velocity_y += state.config.gravity;
    state.bird.pos.y += state.bird.velocity_y;
    state.bird.pos.y = state.bird.pos.y.max(0.0);

    let bird_pos = state.bird.pos;
    let bird_size = state.bird.size;
    let scroll = state.config.scroll_velocity;

    // Single pass per pipe: scroll, score, remove, collide - in that order.
    // A pipe that scrolls out this frame is removed before the collision
    // test and therefore never collision-checked.
    let mut i = 0;
    while i < state.pipes.len() {
        let pipe = &mut state.pipes[i];
        pipe.pos.x += scroll;

        // Trailing edge fully behind the bird scores once per pipe. Pairs
        // share an x, so both halves cross in the same frame: +1.0 per pair.
        if !pipe.passed && pipe.trailing_edge() < bird_pos.x {
            pipe.passed = true;
            state.score += 0.5;
        }

        if pipe.trailing_edge() < 0.0 {
            state.pipes.remove(i);
            continue;
        }

        if rects_overlap(bird_pos, bird_size, pipe.pos, pipe.size) {
            state.phase = GamePhase::GameOver;
        }
        i += 1;
    }

    if state.bird.pos.y > state.config.board_height {
        state.phase = GamePhase::GameOver;
    }
}

/// Spawn a top/bottom pipe pair just off the right edge.
///
/// Deliberately unconditional: the spawn ticker keeps its own lifecycle,
/// and the shell stops it on game over. One uniform draw per call decides
/// where the opening sits.
pub fn spawn_pipe_pair<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) {
    let pipe_size = state.config.pipe_size;
    let pipe_height = pipe_size.y;

    // Slide the top pipe up by a quarter to three quarters of its height,
    // so the opening lands somewhere in the middle band of the board.
    let top_y = -pipe_height / 4.0 - rng.random::<f32>() * (pipe_height / 2.0);
    let bottom_y = top_y + pipe_height + state.config.opening_space();
    let x = state.config.pipe_spawn_x();

    state
        .pipes
        .push(Pipe::new(Vec2::new(x, top_y), pipe_size, PipeRole::Top));
    state
        .pipes
        .push(Pipe::new(Vec2::new(x, bottom_y), pipe_size, PipeRole::Bottom));
}

/// Apply a shell input event. Out-of-phase events are silently ignored.
pub fn handle_input(state: &mut GameState, event: InputEvent) {
    match event {
        InputEvent::Jump => {
            // Velocity overwrite, not an additive impulse
            if state.phase == GamePhase::Playing {
                state.bird.velocity_y = state.config.flap_velocity;
            }
        }
        InputEvent::Restart => {
            if state.phase == GamePhase::GameOver {
                state.reset();
            }
        }
    }
}
