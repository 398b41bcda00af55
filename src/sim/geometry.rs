//! Geometry primitives for the playfield
//!
//! Everything on screen is either an axis-aligned rectangle (walls, paddle,
//! blocks) or a circle (the ball). Vectors are `glam::Vec2`; addition,
//! subtraction and magnitude come from glam, normalization lives here because
//! the zero vector has a defined meaning (an unlaunched ball).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Normalize a vector, returning the zero vector when its magnitude is exactly 0
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    let magnitude = v.length();
    if magnitude == 0.0 {
        return Vec2::ZERO;
    }
    v / magnitude
}

/// Axis-aligned rectangle, positioned by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height (both > 0)
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "rect must have positive size");
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Move the rect in place (size unchanged)
    #[inline]
    pub fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }
}

/// Circle positioned by its centre
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            radius,
        }
    }

    /// Move the circle in place (radius unchanged)
    #[inline]
    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
    }
}
