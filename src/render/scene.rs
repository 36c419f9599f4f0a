//! Scene assembly from simulation state
//!
//! `build_scene` reads the game state and produces everything a backend
//! needs for one frame: a triangle list plus positioned text draws. The
//! state is taken by shared reference; rendering feeds nothing back.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, ObstacleKind, Rect};

/// A positioned piece of text for the backend's glyph renderer
#[derive(Debug, Clone, PartialEq)]
pub struct TextDraw {
    pub text: String,
    /// Baseline-left anchor
    pub pos: Vec2,
    pub size_px: f32,
    pub color: [f32; 4],
}

/// One frame of draw data
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub vertices: Vec<Vertex>,
    pub texts: Vec<TextDraw>,
}

/// Stage letters draw at this font size
const LETTER_SIZE_PX: f32 = 200.0;
/// Baseline height of the stage letter glyphs
const LETTER_BASELINE_Y: f32 = 300.0;

/// Build the draw data for the current state
pub fn build_scene(state: &GameState, settings: &Settings) -> Scene {
    let mut scene = Scene::default();

    // Ground band across the bottom
    let ground = Rect::new(
        0.0,
        WORLD_HEIGHT - GROUND_BAND_HEIGHT,
        WORLD_WIDTH,
        GROUND_BAND_HEIGHT,
    );
    scene.vertices.extend(shapes::rect(&ground, colors::GROUND));

    // Stage letter scrolls behind the action
    if let Some(letter) = state.letters.current_letter() {
        let color = if settings.high_contrast {
            colors::HUD
        } else {
            colors::LETTER
        };
        scene.texts.push(TextDraw {
            text: letter.to_string(),
            pos: Vec2::new(state.letters.letter_x, LETTER_BASELINE_Y),
            size_px: LETTER_SIZE_PX,
            color,
        });
    }

    // Player: five-point gold star filling the sprite bounds
    let sprite = state.player.bounds();
    scene.vertices.extend(shapes::star(
        sprite.center(),
        5,
        sprite.width / 2.0,
        sprite.width / 4.0,
        colors::PLAYER,
    ));

    for obstacle in &state.obstacles {
        let bounds = obstacle.bounds();
        match obstacle.kind {
            ObstacleKind::Rock => scene.vertices.extend(shapes::circle(
                bounds.center(),
                bounds.width / 2.0,
                colors::ROCK,
                24,
            )),
            ObstacleKind::Log => scene.vertices.extend(shapes::rect(&bounds, colors::LOG)),
            // Beak-forward silhouette pointing left, into the scroll
            ObstacleKind::Bird => scene.vertices.extend(shapes::triangle(
                Vec2::new(bounds.x, bounds.y),
                Vec2::new(bounds.right(), bounds.y + bounds.height / 2.0),
                Vec2::new(bounds.x, bounds.bottom()),
                colors::BIRD,
            )),
        }
    }

    if settings.show_hud {
        scene.texts.push(TextDraw {
            text: format!("SCORE {:>6}", state.score),
            pos: Vec2::new(16.0, 32.0),
            size_px: 24.0,
            color: colors::HUD,
        });

        let overlay = match state.phase {
            GamePhase::Title => Some("ふんすいジャンプ！ - press start"),
            GamePhase::AnswerChallenge => state.feedback.map(|f| f.as_str()),
            GamePhase::Clear => Some("CLEAR!"),
            GamePhase::Playing => None,
        };
        if let Some(text) = overlay {
            scene.texts.push(TextDraw {
                text: text.to_string(),
                pos: Vec2::new(WORLD_WIDTH / 2.0 - 160.0, WORLD_HEIGHT / 2.0),
                size_px: 32.0,
                color: colors::HUD,
            });
        }
    }

    scene
}
