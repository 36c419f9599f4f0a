//! Fountain Jump headless demo driver
//!
//! Runs a scripted session against the deterministic core: a few seconds of
//! play with periodic held jumps, the crash into the answer challenge, one
//! wrong answer, then the winning one. Useful for eyeballing the simulation
//! (RUST_LOG=debug) without a graphics backend.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use funsui_jump::consts::FRAME_MS;
use funsui_jump::render::build_scene;
use funsui_jump::sim::{GamePhase, GameState, tick};
use funsui_jump::{InputState, Settings};

/// Hold the jump for this many ticks out of every cycle
const HOLD_TICKS: usize = 20;
const CYCLE_TICKS: usize = 75;
/// Give up if the scripted run somehow survives this long
const MAX_TICKS: usize = 60 * 60 * 5;

fn main() {
    env_logger::init();

    let settings = Settings::load(Path::new(Settings::FILE_NAME));
    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });

    let mut state = GameState::new(seed);
    let mut input = InputState::new();
    state.start();

    let mut ticks = 0usize;
    while state.phase == GamePhase::Playing && ticks < MAX_TICKS {
        // Scripted input: hold a jump at the start of every cycle
        match ticks % CYCLE_TICKS {
            0 => input.on_press_start(),
            HOLD_TICKS => input.on_press_end(),
            _ => {}
        }

        let snapshot = input.take_tick_input();
        tick(&mut state, &snapshot, FRAME_MS);
        ticks += 1;
    }

    let scene = build_scene(&state, &settings);
    println!(
        "run over after {ticks} ticks: score {}, difficulty {}, {} vertices in final frame",
        state.score,
        state.difficulty,
        scene.vertices.len()
    );

    if state.phase == GamePhase::AnswerChallenge {
        if let Some(feedback) = state.feedback {
            println!("{}", feedback.as_str());
        }

        state.submit_answer("ふん");
        if let Some(feedback) = state.feedback {
            println!("guessed wrong: {}", feedback.as_str());
        }

        state.submit_answer("ふんすい");
    }

    match state.phase {
        GamePhase::Clear => println!("challenge cleared!"),
        phase => println!("finished in phase {phase:?}"),
    }
}
