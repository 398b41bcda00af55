//! Recording render surface

use glam::Vec2;

use super::{Color, RenderSurface};
use crate::sim::Rect;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Rect { rect: Rect, color: Color },
    Circle { center: Vec2, radius: f32, color: Color },
    Text { text: String, center: Vec2, color: Color },
}

/// Render surface that keeps the commands of the last presented frame
#[derive(Debug, Default)]
pub struct DrawList {
    /// Commands of the frame being built
    pending: Vec<DrawCommand>,
    /// Commands of the last presented frame
    presented: Vec<DrawCommand>,
    /// Number of frames presented so far
    pub frames: u64,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the last presented frame
    pub fn commands(&self) -> &[DrawCommand] {
        &self.presented
    }

    /// Text strings of the last presented frame, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.presented
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl RenderSurface for DrawList {
    fn clear(&mut self, color: Color) {
        self.pending.clear();
        self.pending.push(DrawCommand::Clear(color));
    }

    fn draw_rect(&mut self, rect: &Rect, color: Color) {
        self.pending.push(DrawCommand::Rect { rect: *rect, color });
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.pending.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, center: Vec2, color: Color) {
        self.pending.push(DrawCommand::Text {
            text: text.to_owned(),
            center,
            color,
        });
    }

    fn present(&mut self) {
        self.presented = std::mem::take(&mut self.pending);
        self.frames += 1;
    }
}
