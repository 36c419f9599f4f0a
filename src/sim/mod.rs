//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Delta-time driven, clamped against degenerate clocks
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::rects_overlap;
pub use rect::Rect;
pub use state::{Feedback, GamePhase, GameState, LetterTrack, Obstacle, ObstacleKind, Player};
pub use tick::{TickInput, decide_spawn, spawn_interval_ms, tick};
