//! Ball reflection and english
//!
//! Reflection works one axis at a time: for each axis the direction gets
//! `d * n * 2 * -n` added, which for axis-aligned unit normals flips the sign
//! of the colliding axis and leaves the other alone. The result is always
//! renormalized, so a stationary ball stays stationary.

use glam::Vec2;

use super::collision::rect_circle_overlap;
use super::geometry::{Rect, normalize};
use super::state::Ball;

/// Reflect a direction off a contact normal
#[inline]
pub fn reflect_direction(direction: Vec2, normal: Vec2) -> Vec2 {
    let reflected = Vec2::new(
        direction.x + direction.x * normal.x * 2.0 * -normal.x,
        direction.y + direction.y * normal.y * 2.0 * -normal.y,
    );
    normalize(reflected)
}

/// Add the paddle's horizontal intent (-1, 0 or 1) to a direction
#[inline]
pub fn apply_english(direction: Vec2, paddle_direction: f32) -> Vec2 {
    normalize(Vec2::new(direction.x + paddle_direction, direction.y))
}

/// Test the ball against a rectangle and reflect it on contact
///
/// Returns true if the ball touched the rectangle.
pub fn hit_ball(ball: &mut Ball, rect: &Rect) -> bool {
    match rect_circle_overlap(rect, &ball.circle) {
        Some(normal) => {
            ball.direction = reflect_direction(ball.direction, normal);
            true
        }
        None => false,
    }
}
