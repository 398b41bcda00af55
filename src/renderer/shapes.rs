//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::Color;
use super::draw_list::DrawCommand;
use super::vertex::Vertex;
use crate::sim::{Circle, Rect};

/// Segments used for circles when tessellating a frame
pub const CIRCLE_SEGMENTS: u32 = 24;

/// Generate vertices for a filled axis-aligned rectangle (two triangles)
pub fn rect(rect: &Rect, color: Color) -> Vec<Vertex> {
    let (l, r, t, b) = (rect.left(), rect.right(), rect.top(), rect.bottom());
    vec![
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
    ]
}

/// Generate vertices for a filled circle as a fan of `segments` triangles
pub fn circle(shape: &Circle, color: Color, segments: u32) -> Vec<Vertex> {
    let step = TAU / segments as f32;
    let rim: Vec<Vec2> = (0..=segments)
        .map(|i| shape.center + Vec2::from_angle(i as f32 * step) * shape.radius)
        .collect();

    let hub = Vertex::new(shape.center.x, shape.center.y, color);
    rim.windows(2)
        .flat_map(|edge| {
            [
                hub,
                Vertex::new(edge[0].x, edge[0].y, color),
                Vertex::new(edge[1].x, edge[1].y, color),
            ]
        })
        .collect()
}

/// Turn a recorded frame into a triangle list in playfield pixels
///
/// Clear and text commands produce no geometry: the backend clears the target
/// itself and text goes through its font renderer.
pub fn tessellate(commands: &[DrawCommand]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for cmd in commands {
        match cmd {
            DrawCommand::Rect { rect: r, color } => vertices.extend(rect(r, *color)),
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => {
                let shape = Circle::new(center.x, center.y, *radius);
                vertices.extend(circle(&shape, *color, CIRCLE_SEGMENTS));
            }
            DrawCommand::Clear(_) | DrawCommand::Text { .. } => {}
        }
    }
    vertices
}
