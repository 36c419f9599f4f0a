//! Per-frame simulation update
//!
//! Core update that advances a run deterministically. One call per display
//! tick; outside the Playing phase it is a no-op, so driving the loop
//! unconditionally is safe.

use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::rects_overlap;
use super::state::{GamePhase, GameState, Obstacle, ObstacleKind};
use crate::consts::*;
use crate::frames_for;

/// Input snapshot for a single tick (deterministic)
///
/// `press`/`release` are edges delivered since the last tick; `held` is the
/// current held-state flag. The simulation never sees torn input: the driver
/// drains its device events into one of these per tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump input went down this tick
    pub press: bool,
    /// Jump input went up this tick
    pub release: bool,
    /// Jump input is currently held
    pub held: bool,
}

/// Obstacle spawn interval for a difficulty level (ms)
pub fn spawn_interval_ms(difficulty: u8) -> f32 {
    match difficulty {
        0 | 1 => 2000.0,
        2 => 1500.0,
        3 => 1000.0,
        _ => 800.0,
    }
}

/// Pick what (if anything) to spawn
///
/// A coin flip chooses sky vs ground placement. Sky yields a bird only once
/// difficulty reaches 2; below that the pick degrades to a grounded rock.
/// Ground placement is a fair rock/log coin. At difficulty 0 a final coin
/// discards half of all attempts so the opening stays sparse.
pub fn decide_spawn(rng: &mut Pcg32, difficulty: u8) -> Option<ObstacleKind> {
    let sky = rng.random_bool(0.5);

    let kind = if sky && difficulty >= 2 {
        ObstacleKind::Bird
    } else if !sky {
        if rng.random_bool(0.5) {
            ObstacleKind::Rock
        } else {
            ObstacleKind::Log
        }
    } else {
        ObstacleKind::Rock
    };

    if difficulty == 0 && rng.random_bool(0.5) {
        return None;
    }

    Some(kind)
}

/// Advance the letter track by one tick
///
/// While a letter is visible it drifts leftward at 20% of the run speed
/// (parallax). Once it is gone, idle time accumulates; past the wait
/// threshold the next letter is revealed (raising difficulty and speed), or,
/// with the sequence exhausted, the track and run parameters reset so the
/// course loops.
fn update_letters(state: &mut GameState, dt_ms: f32, frames: f32) {
    if state.letters.current.is_some() {
        state.letters.letter_x -= state.speed * LETTER_SCROLL_FACTOR * frames;
        if state.letters.letter_x < LETTER_OFFSCREEN_X {
            state.letters.current = None;
            state.letters.wait_ms = 0.0;
        }
        return;
    }

    state.letters.wait_ms += dt_ms.clamp(0.0, MAX_TICK_MS);
    if state.letters.wait_ms <= LETTER_WAIT_MS {
        return;
    }

    if state.letters.next_index < STAGE_LETTERS.len() {
        state.letters.current = Some(state.letters.next_index);
        state.letters.letter_x = WORLD_WIDTH;
        state.letters.next_index += 1;

        state.difficulty = state.letters.next_index as u8;
        state.speed += SPEED_INCREMENT;
        log::debug!(
            "letter {} revealed, difficulty {}, speed {:.1}",
            STAGE_LETTERS[state.letters.next_index - 1],
            state.difficulty,
            state.speed
        );
    } else {
        // Whole word shown: loop the course
        log::debug!("letter sequence exhausted, looping run");
        state.reset_run();
    }
}

/// Advance the game state by one tick of `dt_ms` milliseconds
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    if state.phase != GamePhase::Playing {
        return;
    }

    let frames = frames_for(dt_ms);

    // Input edges act on the player before physics
    if input.press {
        state.player.start_jump();
    }
    if input.release {
        state.player.end_jump();
    }

    state.distance += state.speed * frames;
    state.score = state.distance as u64;

    update_letters(state, dt_ms, frames);
    state.player.update(frames, input.held);

    // Obstacles: advance, cull, then collide against the forgiving hit-box
    let hit_box = state.player.hit_box();
    let mut crashed = false;
    for obstacle in &mut state.obstacles {
        obstacle.advance(frames);
        if !obstacle.marked_for_deletion && rects_overlap(&hit_box, &obstacle.bounds()) {
            crashed = true;
        }
    }
    // Marked obstacles leave the pool before any spawn decision
    state.obstacles.retain(|o| !o.marked_for_deletion);

    if crashed {
        state.game_over();
        return;
    }

    // Spawn timer; the accumulator resets even when the roll discards
    state.spawn_wait_ms += dt_ms.clamp(0.0, MAX_TICK_MS);
    if state.spawn_wait_ms > spawn_interval_ms(state.difficulty) {
        state.spawn_wait_ms = 0.0;
        let difficulty = state.difficulty;
        if let Some(kind) = decide_spawn(&mut state.rng, difficulty) {
            state.obstacles.push(Obstacle::spawn(kind, state.speed));
        }
    }
}
