//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
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

    /// Map playfield pixels (origin top-left, y down) to normalized device coordinates
    pub fn to_ndc(self, width: f32, height: f32) -> Self {
        let x = self.position[0] / width * 2.0 - 1.0;
        let y = 1.0 - self.position[1] / height * 2.0;
        Self::new(x, y, self.color)
    }
}

/// Colors for game elements
pub mod colors {
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

    pub const BACKGROUND: [f32; 4] = WHITE;
    pub const WALL: [f32; 4] = BLACK;
    pub const PADDLE: [f32; 4] = RED;
    pub const BALL: [f32; 4] = BLUE;
    pub const BLOCK_FULL: [f32; 4] = RED;
    pub const BLOCK_DAMAGED: [f32; 4] = BLUE;
    pub const BLOCK_CRITICAL: [f32; 4] = GREEN;
    pub const TIMER_TEXT: [f32; 4] = WHITE;
    pub const MESSAGE_TEXT: [f32; 4] = BLACK;
    pub const LIFE_RING: [f32; 4] = WHITE;
    pub const LIFE: [f32; 4] = BLUE;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_ndc_corners() {
        let top_left = Vertex::new(0.0, 0.0, colors::RED).to_ndc(800.0, 600.0);
        assert_eq!(top_left.position, [-1.0, 1.0]);

        let bottom_right = Vertex::new(800.0, 600.0, colors::RED).to_ndc(800.0, 600.0);
        assert_eq!(bottom_right.position, [1.0, -1.0]);
        assert_eq!(bottom_right.color, colors::RED);
    }

    #[test]
    fn test_vertex_is_tightly_packed() {
        let verts = [Vertex::new(1.0, 2.0, colors::BLUE); 2];
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), 2 * 6 * std::mem::size_of::<f32>());
    }
}
