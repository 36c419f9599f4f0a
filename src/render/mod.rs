//! Read-only scene building
//!
//! Turns the current simulation state into draw data (triangle lists plus
//! text draws). Strictly a consumer: nothing here mutates the simulation.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{Scene, TextDraw, build_scene};
pub use vertex::Vertex;
