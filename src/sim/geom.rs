//! Circle-vs-rectangle intersection for paddle collisions
//!
//! The paddles are axis-aligned rectangles and the ball is a circle, so the
//! whole collision story reduces to one closest-point test.

use glam::Vec2;

/// Closest point to `center` inside the axis-aligned rectangle with top-left
/// `origin` and extent `w` x `h` (each coordinate clamped independently).
#[inline]
pub fn closest_point_on_rect(center: Vec2, origin: Vec2, w: f32, h: f32) -> Vec2 {
    Vec2::new(
        center.x.clamp(origin.x, origin.x + w),
        center.y.clamp(origin.y, origin.y + h),
    )
}

/// Check whether a circle overlaps an axis-aligned rectangle.
///
/// True when the squared distance from the circle center to the closest
/// point on the rectangle is within `radius` squared. Pure, no error cases:
/// all inputs are finite by construction of the callers.
#[inline]
pub fn circle_rect_intersects(center: Vec2, radius: f32, origin: Vec2, w: f32, h: f32) -> bool {
    let closest = closest_point_on_rect(center, origin, w, h);
    center.distance_squared(closest) <= radius * radius
}
