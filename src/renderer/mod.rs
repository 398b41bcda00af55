//! Rendering module
//!
//! The game draws through the `RenderSurface` trait. A windowed backend
//! implements it against its own graphics API; `DrawList` records commands for
//! headless runs and tests, and `shapes` turns a recorded frame into triangles
//! for a GPU backend to upload.

pub mod draw_list;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use draw_list::{DrawCommand, DrawList};
pub use scene::draw_scene;
pub use vertex::{Vertex, colors};

use glam::Vec2;

use crate::sim::Rect;

/// RGBA, each channel 0-1
pub type Color = [f32; 4];

/// Something the game can draw a frame onto
pub trait RenderSurface {
    /// Start a frame by filling everything with `color`
    fn clear(&mut self, color: Color);

    fn draw_rect(&mut self, rect: &Rect, color: Color);

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Draw `text` centred on `center`
    fn draw_text(&mut self, text: &str, center: Vec2, color: Color);

    /// Show the finished frame
    fn present(&mut self);
}
