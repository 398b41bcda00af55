//! Collision detection between the ball and rectangles
//!
//! The ball is tested as its bounding box against each rectangle. This is an
//! AABB vs expanded-AABB test, not exact circle geometry: a ball near a
//! rectangle corner registers a hit slightly before the true circle would.

use glam::Vec2;

use super::geometry::{Circle, Rect};

/// Test whether a circle touches a rectangle
///
/// Returns the contact normal when the circle's extents (`center ± radius`)
/// overlap the rectangle's extents on both axes, `None` otherwise.
///
/// The normal names the side of the rectangle the centre lies beyond. Checks
/// run in a fixed order and the first match wins: left, right, top, bottom.
/// A centre inside the rectangle's extent gives the zero normal.
pub fn rect_circle_overlap(rect: &Rect, circle: &Circle) -> Option<Vec2> {
    let c = circle.center;
    let r = circle.radius;

    let touching = c.x + r > rect.left()
        && c.y + r > rect.top()
        && c.x - r < rect.right()
        && c.y - r < rect.bottom();
    if !touching {
        return None;
    }

    let normal = if c.x < rect.left() {
        Vec2::NEG_X
    } else if c.x > rect.right() {
        Vec2::X
    } else if c.y < rect.top() {
        Vec2::NEG_Y
    } else if c.y > rect.bottom() {
        Vec2::Y
    } else {
        Vec2::ZERO
    };

    Some(normal)
}
