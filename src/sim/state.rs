//! Game state and core simulation types
//!
//! The `GameState` owns every mutable session value: the player, the active
//! obstacles, the letter track, and the run globals (speed, distance, score,
//! difficulty). Everything is serializable for replay/determinism checks.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for an explicit start
    Title,
    /// Active run
    Playing,
    /// Crashed; the secret-word challenge gates the win
    AnswerChallenge,
    /// Challenge answered correctly
    Clear,
}

/// Player-facing feedback from the last transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    /// An obstacle collision ended the run
    Crashed,
    /// The submitted answer did not match
    Incorrect,
}

impl Feedback {
    pub fn as_str(&self) -> &'static str {
        match self {
            Feedback::Crashed => "You crashed!",
            Feedback::Incorrect => "Incorrect, try again",
        }
    }
}

/// Vertical resting position of the player sprite's top edge
pub const PLAYER_GROUND_Y: f32 = WORLD_HEIGHT - GROUND_BAND_HEIGHT - PLAYER_HEIGHT;

/// The controlled entity: fixed lane, vertical physics only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top edge of the sprite
    pub y: f32,
    /// Vertical velocity (px/frame, negative = ascending)
    pub vy: f32,
    pub is_jumping: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            y: PLAYER_GROUND_Y,
            vy: 0.0,
            is_jumping: false,
        }
    }
}

impl Player {
    /// Advance vertical physics by `frames` frame units
    ///
    /// Variable jump height: while ascending with the jump input held, the
    /// effective weight drops to 30% of base, so a longer hold floats higher.
    /// Landing snaps to the ground line and zeroes velocity.
    pub fn update(&mut self, frames: f32, input_held: bool) {
        let mut weight = PLAYER_WEIGHT;
        if self.is_jumping && self.vy < 0.0 && input_held {
            weight *= HOLD_WEIGHT_FACTOR;
        }

        self.vy += weight * frames;
        self.y += self.vy * frames;

        if self.y >= PLAYER_GROUND_Y {
            self.y = PLAYER_GROUND_Y;
            self.vy = 0.0;
            self.is_jumping = false;
        } else {
            self.is_jumping = true;
        }
    }

    /// Begin a jump; no-op while airborne (no double jump)
    pub fn start_jump(&mut self) {
        if !self.is_jumping {
            self.vy = JUMP_VELOCITY;
            self.is_jumping = true;
        }
    }

    /// Cut the jump short: an early release clamps the ascent
    pub fn end_jump(&mut self) {
        if self.vy < JUMP_CUT_VELOCITY {
            self.vy = JUMP_CUT_VELOCITY;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Full sprite bounds (for drawing)
    pub fn bounds(&self) -> Rect {
        Rect::new(PLAYER_X, self.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Collision rectangle, inset from the sprite bounds on all sides
    pub fn hit_box(&self) -> Rect {
        self.bounds().inset(HITBOX_INSET)
    }
}

/// Obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Grounded boulder
    Rock,
    /// Grounded, tall and narrow
    Log,
    /// Flying; forces a sustained jump and moves faster than the ground
    Bird,
}

impl ObstacleKind {
    pub fn size(&self) -> Vec2 {
        match self {
            ObstacleKind::Rock => Vec2::new(50.0, 50.0),
            ObstacleKind::Log => Vec2::new(30.0, 60.0),
            ObstacleKind::Bird => Vec2::new(50.0, 50.0),
        }
    }
}

/// A scrolling obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Own horizontal speed, captured at spawn time (px/frame)
    pub speed_x: f32,
    /// Set once the trailing edge leaves the field; removed before the next
    /// spawn decision, never drawn or collision-checked again
    pub marked_for_deletion: bool,
}

impl Obstacle {
    /// Spawn at the right edge of the field at the current forward speed
    pub fn spawn(kind: ObstacleKind, speed: f32) -> Self {
        let size = kind.size();
        let (y, speed_x) = match kind {
            ObstacleKind::Bird => (BIRD_Y, speed + BIRD_SPEED_BONUS),
            _ => (WORLD_HEIGHT - GROUND_BAND_HEIGHT - size.y, speed),
        };
        Self {
            kind,
            pos: Vec2::new(WORLD_WIDTH, y),
            size,
            speed_x,
            marked_for_deletion: false,
        }
    }

    /// Scroll leftward; mark for deletion once fully off-screen
    pub fn advance(&mut self, frames: f32) {
        self.pos.x -= self.speed_x * frames;
        if self.pos.x < -self.size.x {
            self.marked_for_deletion = true;
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }
}

/// Staged letter progression ("background" of the run)
///
/// Letters reveal one at a time; each reveal raises difficulty and speed.
/// The reveal trigger is elapsed idle time between letters, not distance:
/// `checkpoints` is advisory data and is not consulted by the trigger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LetterTrack {
    /// Index of the next letter to reveal; only increases until reset
    pub next_index: usize,
    /// Index into `STAGE_LETTERS` of the currently visible letter
    pub current: Option<usize>,
    /// Horizontal offset of the visible letter
    pub letter_x: f32,
    /// Idle accumulator while no letter is visible (ms)
    pub wait_ms: f32,
    /// Advisory distance checkpoints (unused by the reveal trigger)
    pub checkpoints: [f32; 4],
}

impl Default for LetterTrack {
    fn default() -> Self {
        Self {
            next_index: 0,
            current: None,
            letter_x: 0.0,
            wait_ms: 0.0,
            checkpoints: [1000.0, 2500.0, 4000.0, 5500.0],
        }
    }
}

impl LetterTrack {
    /// The glyph currently on screen, if any
    pub fn current_letter(&self) -> Option<&'static str> {
        self.current.map(|i| STAGE_LETTERS[i])
    }

    /// Whether every stage letter has been revealed and scrolled away
    pub fn exhausted(&self) -> bool {
        self.current.is_none() && self.next_index >= STAGE_LETTERS.len()
    }

    /// Explicit wrap-to-start; the only way the index goes backward
    pub fn reset(&mut self) {
        *self = Self {
            checkpoints: self.checkpoints,
            ..Self::default()
        };
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn RNG; all randomness draws from here
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Forward speed (px/frame); non-decreasing within a run
    pub speed: f32,
    /// Cumulative distance scrolled
    pub distance: f32,
    /// Score shown on the HUD (tracks distance)
    pub score: u64,
    /// 0-4, equal to stage letters revealed; gates obstacle variety
    pub difficulty: u8,
    /// Obstacle spawn accumulator (ms)
    pub spawn_wait_ms: f32,
    pub player: Player,
    /// Active obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub letters: LetterTrack,
    /// Message surface for the challenge screen
    pub feedback: Option<Feedback>,
    /// A failed answer makes the retry affordance available
    pub retry_available: bool,
}

impl GameState {
    /// Create a new session on the title screen
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Title,
            speed: START_SPEED,
            distance: 0.0,
            score: 0,
            difficulty: 0,
            spawn_wait_ms: 0.0,
            player: Player::default(),
            obstacles: Vec::new(),
            letters: LetterTrack::default(),
            feedback: None,
            retry_available: false,
        }
    }

    /// Reset the run parameters while keeping the session (and its RNG)
    ///
    /// Called on start/retry, and again when the letter sequence wraps so the
    /// course loops from its gentle opening pacing.
    pub fn reset_run(&mut self) {
        self.speed = START_SPEED;
        self.distance = 0.0;
        self.score = 0;
        self.difficulty = 0;
        self.spawn_wait_ms = 0.0;
        self.player.reset();
        self.obstacles.clear();
        self.letters.reset();
    }

    /// Title -> Playing (also the retry path); resets everything run-scoped
    pub fn start(&mut self) {
        self.reset_run();
        self.feedback = None;
        self.retry_available = false;
        self.phase = GamePhase::Playing;
        log::info!("run started (seed {})", self.seed);
    }

    /// Explicit restart from the challenge or clear screen
    pub fn retry(&mut self) {
        self.start();
    }

    /// Playing -> AnswerChallenge on collision; idempotent
    pub(crate) fn game_over(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::AnswerChallenge;
            self.feedback = Some(Feedback::Crashed);
            log::info!("crashed at distance {:.0}", self.distance);
        }
    }

    /// Check a submitted answer against the secret word
    ///
    /// Only meaningful in `AnswerChallenge`; anywhere else the submission is
    /// ignored. Surrounding whitespace is trimmed, the comparison is exact
    /// (case- and width-sensitive). A mismatch keeps the phase and arms the
    /// retry affordance.
    pub fn submit_answer(&mut self, answer: &str) {
        if self.phase != GamePhase::AnswerChallenge {
            return;
        }
        if answer.trim() == SECRET_WORD {
            self.phase = GamePhase::Clear;
            self.feedback = None;
            log::info!("challenge cleared");
        } else {
            self.feedback = Some(Feedback::Incorrect);
            self.retry_available = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_starts_grounded() {
        let p = Player::default();
        assert_eq!(p.y, PLAYER_GROUND_Y);
        assert!(!p.is_jumping);
    }

    #[test]
    fn test_no_double_jump() {
        let mut p = Player::default();
        p.start_jump();
        assert!(p.is_jumping);
        assert_eq!(p.vy, JUMP_VELOCITY);

        p.update(1.0, true);
        let (vy, y) = (p.vy, p.y);
        p.start_jump();
        assert_eq!(p.vy, vy);
        assert_eq!(p.y, y);
        assert!(p.is_jumping);
    }

    #[test]
    fn test_end_jump_clamps_ascent_only() {
        let mut p = Player::default();
        p.start_jump();
        p.end_jump();
        assert_eq!(p.vy, JUMP_CUT_VELOCITY);

        // Descending: release does nothing
        p.vy = 3.0;
        p.end_jump();
        assert_eq!(p.vy, 3.0);
    }

    #[test]
    fn test_held_jump_reduces_weight_while_ascending() {
        let mut held = Player::default();
        let mut released = Player::default();
        held.start_jump();
        released.start_jump();

        held.update(1.0, true);
        released.update(1.0, false);

        // Held: vy = -12 + 0.3, released: vy = -12 + 1.0
        assert!((held.vy - (JUMP_VELOCITY + PLAYER_WEIGHT * HOLD_WEIGHT_FACTOR)).abs() < 1e-6);
        assert!((released.vy - (JUMP_VELOCITY + PLAYER_WEIGHT)).abs() < 1e-6);
        assert!(held.vy < released.vy);
    }

    #[test]
    fn test_ground_clamp() {
        let mut p = Player::default();
        // Force a downward overshoot
        p.y = PLAYER_GROUND_Y - 1.0;
        p.vy = 50.0;
        p.is_jumping = true;
        p.update(1.0, false);
        assert_eq!(p.y, PLAYER_GROUND_Y);
        assert_eq!(p.vy, 0.0);
        assert!(!p.is_jumping);
    }

    #[test]
    fn test_hit_box_inset() {
        let p = Player::default();
        let sprite = p.bounds();
        let hit = p.hit_box();
        assert_eq!(hit.x, sprite.x + HITBOX_INSET);
        assert_eq!(hit.y, sprite.y + HITBOX_INSET);
        assert_eq!(hit.width, sprite.width - 2.0 * HITBOX_INSET);
        assert_eq!(hit.height, sprite.height - 2.0 * HITBOX_INSET);
    }

    #[test]
    fn test_obstacle_spawn_placement() {
        let rock = Obstacle::spawn(ObstacleKind::Rock, 5.0);
        assert_eq!(rock.pos.x, WORLD_WIDTH);
        assert_eq!(rock.pos.y, WORLD_HEIGHT - GROUND_BAND_HEIGHT - 50.0);
        assert_eq!(rock.speed_x, 5.0);

        let log = Obstacle::spawn(ObstacleKind::Log, 5.0);
        assert_eq!(log.size, Vec2::new(30.0, 60.0));
        assert_eq!(log.pos.y, WORLD_HEIGHT - GROUND_BAND_HEIGHT - 60.0);

        let bird = Obstacle::spawn(ObstacleKind::Bird, 5.0);
        assert_eq!(bird.pos.y, BIRD_Y);
        assert_eq!(bird.speed_x, 5.0 + BIRD_SPEED_BONUS);
    }

    #[test]
    fn test_submit_answer_matches_secret_word() {
        let mut state = GameState::new(7);
        state.start();
        state.game_over();
        assert_eq!(state.phase, GamePhase::AnswerChallenge);
        assert_eq!(state.feedback, Some(Feedback::Crashed));

        state.submit_answer("  ふんすい \n");
        assert_eq!(state.phase, GamePhase::Clear);
        assert_eq!(state.feedback, None);
    }

    #[test]
    fn test_submit_answer_mismatch_arms_retry() {
        let mut state = GameState::new(7);
        state.start();
        state.game_over();

        state.submit_answer("ふん");
        assert_eq!(state.phase, GamePhase::AnswerChallenge);
        assert_eq!(state.feedback, Some(Feedback::Incorrect));
        assert!(state.retry_available);

        state.submit_answer("ふんすいX");
        assert_eq!(state.phase, GamePhase::AnswerChallenge);

        state.submit_answer("");
        assert_eq!(state.phase, GamePhase::AnswerChallenge);
    }

    #[test]
    fn test_submit_answer_ignored_outside_challenge() {
        let mut state = GameState::new(7);
        state.submit_answer("ふんすい");
        assert_eq!(state.phase, GamePhase::Title);

        state.start();
        state.submit_answer("ふんすい");
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_retry_resets_run() {
        let mut state = GameState::new(7);
        state.start();
        state.speed = 11.0;
        state.distance = 4200.0;
        state.difficulty = 3;
        state.obstacles.push(Obstacle::spawn(ObstacleKind::Rock, 11.0));
        state.letters.next_index = 3;
        state.game_over();
        state.submit_answer("wrong");
        assert!(state.retry_available);

        state.retry();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.speed, START_SPEED);
        assert_eq!(state.distance, 0.0);
        assert_eq!(state.difficulty, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.letters.next_index, 0);
        assert_eq!(state.feedback, None);
        assert!(!state.retry_available);
    }

    #[test]
    fn test_game_over_idempotent() {
        let mut state = GameState::new(7);
        state.start();
        state.game_over();
        state.game_over();
        assert_eq!(state.phase, GamePhase::AnswerChallenge);
        assert_eq!(state.feedback, Some(Feedback::Crashed));
    }

    #[test]
    fn test_letter_track_reset_preserves_checkpoints() {
        let mut track = LetterTrack::default();
        track.next_index = 4;
        track.current = Some(3);
        track.letter_x = -250.0;
        track.reset();
        assert_eq!(track.next_index, 0);
        assert_eq!(track.current, None);
        assert_eq!(track.checkpoints, [1000.0, 2500.0, 4000.0, 5500.0]);
    }
}
