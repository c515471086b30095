//! Collision detection and response
//!
//! Ball vs paddle is a circle against an axis-aligned rectangle; walls are
//! infinite planes described by their inward normal.

use glam::Vec2;

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Closest point of the rectangle to `p`
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max())
    }
}

/// Circle vs rectangle overlap (touching counts)
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.closest_point(center);
    center.distance_squared(closest) <= radius * radius
}

/// Reflect velocity off a surface with given normal
pub fn reflect_velocity(vel: Vec2, normal: Vec2) -> Vec2 {
    vel - 2.0 * vel.dot(normal) * normal
}

/// Reflect only when moving into the surface, so a ball that is still past
/// the wall on the next tick keeps heading back into the field
pub fn bounce_off_wall(vel: Vec2, inward_normal: Vec2) -> Vec2 {
    if vel.dot(inward_normal) < 0.0 {
        reflect_velocity(vel, inward_normal)
    } else {
        vel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_rect_overlap_center_hit() {
        let paddle = Rect::new(450.0, 650.0, 100.0, 15.0);
        assert!(circle_rect_overlap(Vec2::new(500.0, 645.0), 10.0, &paddle));
        assert!(circle_rect_overlap(Vec2::new(500.0, 655.0), 10.0, &paddle));
    }

    #[test]
    fn test_circle_rect_corner_miss() {
        let paddle = Rect::new(450.0, 650.0, 100.0, 15.0);
        // Inside the bounding box of the circle, but outside its radius from the corner
        assert!(!circle_rect_overlap(Vec2::new(442.0, 642.0), 10.0, &paddle));
        assert!(circle_rect_overlap(Vec2::new(445.0, 645.0), 10.0, &paddle));
    }

    #[test]
    fn test_circle_rect_clear_miss() {
        let paddle = Rect::new(450.0, 650.0, 100.0, 15.0);
        assert!(!circle_rect_overlap(Vec2::new(500.0, 600.0), 10.0, &paddle));
        assert!(!circle_rect_overlap(Vec2::new(300.0, 655.0), 10.0, &paddle));
    }

    #[test]
    fn test_reflect_velocity() {
        // Ball moving right, hits vertical wall (normal pointing left)
        let velocity = Vec2::new(100.0, 0.0);
        let normal = Vec2::new(-1.0, 0.0);

        let reflected = reflect_velocity(velocity, normal);
        assert!((reflected.x - (-100.0)).abs() < 0.001);
        assert!(reflected.y.abs() < 0.001);
    }

    #[test]
    fn test_bounce_off_wall_only_when_approaching() {
        let left_wall = Vec2::X;
        assert_eq!(bounce_off_wall(Vec2::new(-3.0, 2.0), left_wall), Vec2::new(3.0, 2.0));
        assert_eq!(bounce_off_wall(Vec2::new(3.0, 2.0), left_wall), Vec2::new(3.0, 2.0));
    }
}
