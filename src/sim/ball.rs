//! Ball entity and its variants

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Rgb;
use crate::consts::{BALL_RADIUS, PADDLE_ENGLISH};

use super::collision::{Rect, bounce_off_wall, circle_rect_overlap};
use super::paddle::Paddle;

/// Ball variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BallVariant {
    #[default]
    Normal,
    Fast,
    Slow,
    DoublePoints,
    ExtraLife,
}

/// Effect triggered when a ball of a given variant hits the paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideEffect {
    /// Paddle speed x1.5 for the rest of the session
    BoostPaddle,
    /// Activate the score multiplier
    ActivateMultiplier,
    /// +1 life
    GrantLife,
}

impl BallVariant {
    pub const ALL: [BallVariant; 5] = [
        BallVariant::Normal,
        BallVariant::Fast,
        BallVariant::Slow,
        BallVariant::DoublePoints,
        BallVariant::ExtraLife,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BallVariant::Normal => "Normal",
            BallVariant::Fast => "Fast",
            BallVariant::Slow => "Slow",
            BallVariant::DoublePoints => "Double Points",
            BallVariant::ExtraLife => "Extra Life",
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            BallVariant::Normal => [255, 255, 255],
            BallVariant::Fast => [255, 100, 100],
            BallVariant::Slow => [100, 200, 255],
            BallVariant::DoublePoints => [255, 255, 0],
            BallVariant::ExtraLife => [0, 255, 0],
        }
    }

    /// Points added on top of the difficulty's per-hit value
    pub fn bonus_points(self) -> u64 {
        match self {
            BallVariant::Normal => 0,
            BallVariant::Fast => 10,
            BallVariant::Slow => 5,
            BallVariant::DoublePoints => 20,
            BallVariant::ExtraLife => 15,
        }
    }

    /// Initial per-axis speed at a given level
    pub fn launch_speed(self, level: u32) -> f32 {
        match self {
            BallVariant::Normal | BallVariant::DoublePoints => 5.0,
            BallVariant::Fast => 7.0 * (1.0 + 0.1 * level as f32),
            BallVariant::Slow => 3.0,
            BallVariant::ExtraLife => 4.0,
        }
    }

    /// Side-effect table
    pub fn side_effect(self) -> Option<SideEffect> {
        match self {
            BallVariant::Normal | BallVariant::Fast => None,
            BallVariant::Slow => Some(SideEffect::BoostPaddle),
            BallVariant::DoublePoints => Some(SideEffect::ActivateMultiplier),
            BallVariant::ExtraLife => Some(SideEffect::GrantLife),
        }
    }
}

/// A ball. Once `active` is false it is dead and must be replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub active: bool,
    pub variant: BallVariant,
}

impl Ball {
    pub fn new(variant: BallVariant, pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius: BALL_RADIUS,
            active: true,
            variant,
        }
    }

    pub fn bonus_points(&self) -> u64 {
        self.variant.bonus_points()
    }

    pub fn color(&self) -> Rgb {
        self.variant.color()
    }

    /// Move one tick, bounce off side and top walls, die past the bottom
    pub fn advance(&mut self, screen_width: f32, screen_height: f32) {
        if !self.active {
            return;
        }
        self.pos += self.vel;

        if self.pos.x <= 0.0 {
            self.vel = bounce_off_wall(self.vel, Vec2::X);
        } else if self.pos.x >= screen_width {
            self.vel = bounce_off_wall(self.vel, Vec2::NEG_X);
        }
        if self.pos.y <= 0.0 {
            self.vel = bounce_off_wall(self.vel, Vec2::Y);
        }
        if self.pos.y >= screen_height {
            self.active = false;
        }
    }

    /// True if an active, descending ball overlaps the paddle
    pub fn hits(&self, paddle: &Paddle) -> bool {
        if !self.active || self.vel.y <= 0.0 {
            return false;
        }
        let rect = Rect::new(paddle.x, paddle.y, paddle.width(), paddle.height);
        circle_rect_overlap(self.pos, self.radius, &rect)
    }

    /// Send the ball back up, steering by the offset from the paddle center
    pub fn bounce_off(&mut self, paddle: &Paddle) {
        self.vel.y = -self.vel.y.abs();
        self.vel.x = (self.pos.x - paddle.center_x()) * PADDLE_ENGLISH;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball::new(BallVariant::Normal, Vec2::new(x, y), Vec2::new(vx, vy))
    }

    #[test]
    fn test_ball_serializes_with_vectors_as_pairs() {
        let ball = Ball::new(BallVariant::ExtraLife, Vec2::new(120.0, 80.0), Vec2::new(-4.5, 6.0));
        let json = serde_json::to_value(&ball).unwrap();
        assert_eq!(json["pos"], serde_json::json!([120.0, 80.0]));
        assert_eq!(json["vel"], serde_json::json!([-4.5, 6.0]));
        assert_eq!(json["variant"], "ExtraLife");

        let restored: Ball = serde_json::from_value(json).unwrap();
        assert_eq!(restored, ball);
    }

    #[test]
    fn test_side_effect_table() {
        assert_eq!(BallVariant::Normal.side_effect(), None);
        assert_eq!(BallVariant::Fast.side_effect(), None);
        assert_eq!(BallVariant::Slow.side_effect(), Some(SideEffect::BoostPaddle));
        assert_eq!(
            BallVariant::DoublePoints.side_effect(),
            Some(SideEffect::ActivateMultiplier)
        );
        assert_eq!(BallVariant::ExtraLife.side_effect(), Some(SideEffect::GrantLife));
    }

    #[test]
    fn test_fast_ball_scales_with_level() {
        assert!((BallVariant::Fast.launch_speed(1) - 7.7).abs() < 1e-4);
        assert!((BallVariant::Fast.launch_speed(3) - 9.1).abs() < 1e-4);
    }

    #[test]
    fn test_wall_bounces() {
        let mut ball = ball_at(2.0, 100.0, -5.0, -5.0);
        ball.advance(1000.0, 700.0);
        assert!(ball.vel.x > 0.0);

        let mut ball = ball_at(998.0, 100.0, 5.0, 5.0);
        ball.advance(1000.0, 700.0);
        assert!(ball.vel.x < 0.0);

        let mut ball = ball_at(100.0, 3.0, 5.0, -5.0);
        ball.advance(1000.0, 700.0);
        assert!(ball.vel.y > 0.0);
        assert!(ball.active);
    }

    #[test]
    fn test_ball_dies_past_bottom() {
        let mut ball = ball_at(100.0, 697.0, 0.0, 5.0);
        ball.advance(1000.0, 700.0);
        assert!(!ball.active);

        // Dead balls no longer move
        let pos = ball.pos;
        ball.advance(1000.0, 700.0);
        assert_eq!(ball.pos, pos);
    }

    #[test]
    fn test_hit_requires_descending_ball() {
        let paddle = Paddle::default();
        assert!(ball_at(500.0, 645.0, 0.0, 5.0).hits(&paddle));
        assert!(!ball_at(500.0, 645.0, 0.0, -5.0).hits(&paddle));
        assert!(!ball_at(200.0, 645.0, 0.0, 5.0).hits(&paddle));
    }

    #[test]
    fn test_bounce_off_center_goes_straight_up() {
        let paddle = Paddle::default();
        let mut ball = ball_at(500.0, 645.0, 3.0, 5.0);
        ball.bounce_off(&paddle);
        assert_eq!(ball.vel, Vec2::new(0.0, -5.0));

        let mut ball = ball_at(540.0, 645.0, 0.0, 5.0);
        ball.bounce_off(&paddle);
        assert!((ball.vel.x - 4.0).abs() < 1e-4);
    }
}
