//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color, upload-ready for a GPU backend
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    /// Gold star player
    pub const PLAYER: [f32; 4] = [1.0, 0.843, 0.0, 1.0];
    /// Grey rock
    pub const ROCK: [f32; 4] = [0.333, 0.333, 0.333, 1.0];
    /// Brown log
    pub const LOG: [f32; 4] = [0.545, 0.271, 0.075, 1.0];
    /// Black bird silhouette
    pub const BIRD: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    /// Brown ground band
    pub const GROUND: [f32; 4] = [0.396, 0.263, 0.129, 1.0];
    /// Stage letters render translucent behind the action
    pub const LETTER: [f32; 4] = [1.0, 1.0, 1.0, 0.5];
    /// HUD text
    pub const HUD: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
