//! Shape generation for 2D primitives
//!
//! Every generator emits a flat triangle list so the whole scene can be drawn
//! in one buffer.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (r.x, r.y);
    let (x1, y1) = (r.right(), r.bottom());
    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a single filled triangle
pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
    ]
}

/// Generate vertices for a filled star polygon
///
/// Alternates between `spikes` outer points and inner points, fanned from the
/// center. Screen coordinates (y grows downward), first spike pointing up.
pub fn star(
    center: Vec2,
    spikes: u32,
    outer_radius: f32,
    inner_radius: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let points = spikes * 2;
    let step = PI / spikes as f32;
    let mut vertices = Vec::with_capacity((points * 3) as usize);

    let point_at = |i: u32| -> Vec2 {
        let radius = if i % 2 == 0 {
            outer_radius
        } else {
            inner_radius
        };
        // Start at the top; y is negated for screen coordinates
        let angle = -PI / 2.0 + i as f32 * step;
        Vec2::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    };

    for i in 0..points {
        let a = point_at(i);
        let b = point_at((i + 1) % points);
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
    }

    vertices
}
