//! Flappy Bird headless demo shell
//!
//! A minimal stand-in for a real presentation shell: it drives the two
//! cadences (frame advance and pipe spawning) from a single loop, feeds
//! the simulation autopilot jump inputs, and logs what a renderer would
//! draw. Usage: `flappy-bird [seed] [config.json]`.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::time::{SystemTime, UNIX_EPOCH};

use flappy_bird::BoardConfig;
use flappy_bird::sim::{GameState, InputEvent, PipeRole, advance_frame, handle_input, spawn_pipe_pair};

/// Demo run length: one minute of simulated play at 60 Hz.
const MAX_FRAMES: u64 = 3600;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    let config = match args.next() {
        Some(path) => load_config(&path),
        None => BoardConfig::default(),
    };

    log::info!(
        "Flappy Bird (headless) starting: seed {}, board {}x{}",
        seed,
        config.board_width,
        config.board_height
    );

    let frames_per_spawn = config.frames_per_spawn();
    let mut state = GameState::new(config);
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut last_display_score = 0;

    for frame in 0..MAX_FRAMES {
        // Independent spawn cadence, derived from the config periods.
        // Stopped once the run ends, as the shell contract requires.
        if frame % frames_per_spawn == 0 && !state.is_game_over() {
            spawn_pipe_pair(&mut state, &mut rng);
            log::debug!("spawned pipe pair ({} pipes active)", state.pipes.len());
        }

        if autopilot_wants_flap(&state) {
            handle_input(&mut state, InputEvent::Jump);
        }

        advance_frame(&mut state);

        if state.display_score() != last_display_score {
            last_display_score = state.display_score();
            log::info!("score: {}", last_display_score);
        }

        if state.is_game_over() {
            log::info!(
                "game over at frame {} with score {}",
                state.frame,
                state.display_score()
            );
            break;
        }
    }

    if !state.is_game_over() {
        log::info!(
            "survived {} frames with score {}",
            state.frame,
            state.display_score()
        );
    }

    if let Ok(json) = serde_json::to_string(&state) {
        log::debug!("final state: {json}");
    }
}

/// Load a board config from JSON, falling back to defaults on any error.
fn load_config(path: &str) -> BoardConfig {
    match std::fs::read_to_string(path).map_err(|e| e.to_string()).and_then(|json| {
        serde_json::from_str::<BoardConfig>(&json).map_err(|e| e.to_string())
    }) {
        Ok(config) => {
            log::info!("loaded config from {path}");
            config
        }
        Err(e) => {
            log::warn!("failed to load config from {path}: {e}; using defaults");
            BoardConfig::default()
        }
    }
}

/// Decide whether the autopilot flaps this frame.
///
/// Steers the bird's center toward the nearest upcoming opening (or the
/// board's midline when no pipe is ahead), flapping whenever the bird is
/// below target and sinking.
fn autopilot_wants_flap(state: &GameState) -> bool {
    if state.is_game_over() {
        return false;
    }

    let bird_center = state.bird.pos.y + state.bird.size.y / 2.0;
    let target = state
        .pipes
        .iter()
        .filter(|p| p.role == PipeRole::Top && p.trailing_edge() >= state.bird.pos.x)
        .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x))
        .map(|top| top.pos.y + top.size.y + state.config.opening_space() / 2.0)
        .unwrap_or(state.config.board_height / 2.0);

    bird_center > target && state.bird.velocity_y >= 0.0
}
