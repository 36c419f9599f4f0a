//! Fountain Jump - a side-scrolling reflex runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, obstacles, letter track, game state)
//! - `input`: Abstract press/release contract with held-state snapshotting
//! - `render`: Read-only scene building (vertices + text draws)
//! - `settings`: Data-driven preferences

pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use input::InputState;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions in pixels
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 450.0;

    /// Height of the ground band at the bottom of the field
    pub const GROUND_BAND_HEIGHT: f32 = 50.0;

    /// Reference frame duration; physics constants are tuned per 60 Hz frame
    pub const FRAME_MS: f32 = 1000.0 / 60.0;
    /// Delta-time cap against stalled clocks (prevents tunneling)
    pub const MAX_TICK_MS: f32 = 100.0;

    /// Player sprite
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    /// Fixed horizontal lane
    pub const PLAYER_X: f32 = 100.0;
    /// Base gravity weight (px/frame²)
    pub const PLAYER_WEIGHT: f32 = 1.0;
    /// Gravity factor while ascending with the jump input held
    pub const HOLD_WEIGHT_FACTOR: f32 = 0.3;
    /// Initial jump velocity (kept light so short taps stay short)
    pub const JUMP_VELOCITY: f32 = -12.0;
    /// Releasing early clamps ascent to this velocity
    pub const JUMP_CUT_VELOCITY: f32 = -5.0;
    /// Hit-box inset from the sprite bounds on all sides
    pub const HITBOX_INSET: f32 = 10.0;

    /// Forward speed at the start of a run (px/frame)
    pub const START_SPEED: f32 = 5.0;
    /// Speed gained each time a stage letter is revealed
    pub const SPEED_INCREMENT: f32 = 1.5;

    /// Bird obstacles fly faster than the ground scrolls
    pub const BIRD_SPEED_BONUS: f32 = 2.0;
    /// Bird altitude: too high for a tap, clearable with a held jump
    pub const BIRD_Y: f32 = WORLD_HEIGHT - 130.0;

    /// Stage letters revealed in order over a run
    pub const STAGE_LETTERS: [&str; 4] = ["ふ", "ん", "す", "い"];
    /// The secret word gating the answer challenge
    pub const SECRET_WORD: &str = "ふんすい";
    /// Letters scroll at this fraction of the obstacle speed (parallax)
    pub const LETTER_SCROLL_FACTOR: f32 = 0.2;
    /// A letter is gone once its offset passes this (glyph is ~200 px wide)
    pub const LETTER_OFFSCREEN_X: f32 = -300.0;
    /// Idle time between one letter leaving and the next appearing
    pub const LETTER_WAIT_MS: f32 = 2000.0;
}

/// Convert a tick delta to 60 Hz frame units, clamped against
/// zero/negative/stalled clocks.
#[inline]
pub fn frames_for(dt_ms: f32) -> f32 {
    dt_ms.clamp(0.0, consts::MAX_TICK_MS) / consts::FRAME_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_for_clamps_degenerate_deltas() {
        assert_eq!(frames_for(-5.0), 0.0);
        assert_eq!(frames_for(0.0), 0.0);
        assert!((frames_for(consts::FRAME_MS) - 1.0).abs() < 1e-6);
        // Stalled clock: capped, not unbounded
        assert!((frames_for(10_000.0) - consts::MAX_TICK_MS / consts::FRAME_MS).abs() < 1e-6);
    }
}
