//! The player's paddle and its mode table

use serde::{Deserialize, Serialize};

use crate::Rgb;
use crate::consts::{MAGNET_MIN_Y, MAGNET_PULL, MAGNET_RANGE, PADDLE_HEIGHT, PADDLE_START_X, PADDLE_Y};

use super::ball::Ball;

/// Paddle modes, selectable at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaddleMode {
    #[default]
    Normal,
    Fast,
    Wide,
    Magnet,
    Shield,
}

/// Fixed tuning for one paddle mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeProfile {
    pub color: Rgb,
    pub speed: f32,
    pub width: f32,
    pub description: &'static str,
}

impl PaddleMode {
    pub const ALL: [PaddleMode; 5] = [
        PaddleMode::Normal,
        PaddleMode::Fast,
        PaddleMode::Wide,
        PaddleMode::Magnet,
        PaddleMode::Shield,
    ];

    /// Static lookup table
    pub fn profile(self) -> ModeProfile {
        match self {
            PaddleMode::Normal => ModeProfile {
                color: [0, 255, 0],
                speed: 8.0,
                width: 100.0,
                description: "Balanced",
            },
            PaddleMode::Fast => ModeProfile {
                color: [255, 255, 0],
                speed: 12.0,
                width: 80.0,
                description: "Faster, narrower",
            },
            PaddleMode::Wide => ModeProfile {
                color: [255, 0, 0],
                speed: 6.0,
                width: 150.0,
                description: "Wider, slower",
            },
            PaddleMode::Magnet => ModeProfile {
                color: [0, 0, 255],
                speed: 8.0,
                width: 100.0,
                description: "Pulls a nearby ball toward the center",
            },
            PaddleMode::Shield => ModeProfile {
                color: [255, 0, 255],
                speed: 7.0,
                width: 120.0,
                description: "Returns the ball harder",
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaddleMode::Normal => "Normal",
            PaddleMode::Fast => "Fast",
            PaddleMode::Wide => "Wide",
            PaddleMode::Magnet => "Magnet",
            PaddleMode::Shield => "Shield",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(PaddleMode::Normal),
            "fast" => Some(PaddleMode::Fast),
            "wide" => Some(PaddleMode::Wide),
            "magnet" => Some(PaddleMode::Magnet),
            "shield" => Some(PaddleMode::Shield),
            _ => None,
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge (fixed)
    pub y: f32,
    pub height: f32,
    mode: PaddleMode,
    /// Session-wide speed multiplier (Slow ball reward)
    speed_boost: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: PADDLE_START_X,
            y: PADDLE_Y,
            height: PADDLE_HEIGHT,
            mode: PaddleMode::Normal,
            speed_boost: 1.0,
        }
    }
}

impl Paddle {
    pub fn mode(&self) -> PaddleMode {
        self.mode
    }

    pub fn width(&self) -> f32 {
        self.mode.profile().width
    }

    pub fn color(&self) -> Rgb {
        self.mode.profile().color
    }

    /// Effective horizontal speed (pixels per tick)
    pub fn speed(&self) -> f32 {
        self.mode.profile().speed * self.speed_boost
    }

    pub fn speed_boost(&self) -> f32 {
        self.speed_boost
    }

    pub fn boost_speed(&mut self, factor: f32) {
        self.speed_boost *= factor;
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width() / 2.0
    }

    /// Switch mode and re-clamp to the playfield (width may change)
    pub fn set_mode(&mut self, mode: PaddleMode, screen_width: f32) {
        self.mode = mode;
        self.clamp(screen_width);
    }

    /// Name-based mode switch; unknown names are ignored
    pub fn set_mode_by_name(&mut self, name: &str, screen_width: f32) -> bool {
        match PaddleMode::from_name(name) {
            Some(mode) => {
                self.set_mode(mode, screen_width);
                true
            }
            None => {
                log::warn!("Ignoring unknown paddle mode '{}'", name);
                false
            }
        }
    }

    /// Apply one tick of horizontal movement
    pub fn step(&mut self, left: bool, right: bool, screen_width: f32) {
        let speed = self.speed();
        if left {
            self.x -= speed;
        }
        if right {
            self.x += speed;
        }
        self.clamp(screen_width);
    }

    /// Keep the paddle inside [0, screen_width - width]
    pub fn clamp(&mut self, screen_width: f32) {
        let max_x = (screen_width - self.width()).max(0.0);
        self.x = self.x.clamp(0.0, max_x);
    }

    /// Magnet pull: nudge a nearby ball's horizontal velocity toward the center.
    /// Returns true if the ball was affected.
    pub fn attract(&self, ball: &mut Ball) -> bool {
        if self.mode != PaddleMode::Magnet || !ball.active {
            return false;
        }
        let offset = ball.pos.x - self.center_x();
        if offset.abs() < MAGNET_RANGE && ball.pos.y > MAGNET_MIN_Y {
            ball.vel.x -= offset * MAGNET_PULL;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ball::BallVariant;
    use glam::Vec2;
    use proptest::prelude::*;

    #[test]
    fn test_mode_table() {
        let mut paddle = Paddle::default();
        paddle.set_mode(PaddleMode::Wide, 1000.0);
        assert_eq!(paddle.width(), 150.0);
        assert_eq!(paddle.speed(), 6.0);
        assert_eq!(paddle.color(), [255, 0, 0]);
    }

    #[test]
    fn test_unknown_mode_name_is_ignored() {
        let mut paddle = Paddle::default();
        assert!(!paddle.set_mode_by_name("turbo", 1000.0));
        assert_eq!(paddle.mode(), PaddleMode::Normal);
        assert!(paddle.set_mode_by_name("Shield", 1000.0));
        assert_eq!(paddle.mode(), PaddleMode::Shield);
    }

    #[test]
    fn test_paddle_state_survives_json() {
        let mut paddle = Paddle::default();
        paddle.set_mode(PaddleMode::Shield, 1000.0);
        paddle.boost_speed(1.5);

        let text = serde_json::to_string(&paddle).unwrap();
        assert!(text.contains("\"mode\":\"Shield\""));
        let restored: Paddle = serde_json::from_str(&text).unwrap();
        assert_eq!(restored, paddle);
        assert_eq!(restored.speed(), paddle.speed());
    }

    #[test]
    fn test_widening_at_right_edge_stays_in_bounds() {
        let mut paddle = Paddle::default();
        paddle.x = 900.0;
        paddle.set_mode(PaddleMode::Wide, 1000.0);
        assert_eq!(paddle.x, 850.0);
    }

    #[test]
    fn test_speed_boost_survives_mode_change() {
        let mut paddle = Paddle::default();
        paddle.boost_speed(1.5);
        paddle.set_mode(PaddleMode::Fast, 1000.0);
        assert!((paddle.speed() - 18.0).abs() < 1e-4);
    }

    #[test]
    fn test_magnet_pulls_toward_center() {
        let mut paddle = Paddle::default();
        paddle.set_mode(PaddleMode::Magnet, 1000.0);
        let mut ball = Ball::new(BallVariant::Normal, Vec2::new(600.0, 500.0), Vec2::new(0.0, 5.0));

        assert!(paddle.attract(&mut ball));
        // center is 500, offset 100 -> -5
        assert!((ball.vel.x + 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_magnet_ignores_far_or_high_ball() {
        let mut paddle = Paddle::default();
        paddle.set_mode(PaddleMode::Magnet, 1000.0);

        let mut far = Ball::new(BallVariant::Normal, Vec2::new(800.0, 500.0), Vec2::ZERO);
        assert!(!paddle.attract(&mut far));

        let mut high = Ball::new(BallVariant::Normal, Vec2::new(520.0, 100.0), Vec2::ZERO);
        assert!(!paddle.attract(&mut high));

        paddle.set_mode(PaddleMode::Normal, 1000.0);
        let mut near = Ball::new(BallVariant::Normal, Vec2::new(520.0, 500.0), Vec2::ZERO);
        assert!(!paddle.attract(&mut near));
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_in_bounds(
            moves in proptest::collection::vec((any::<bool>(), any::<bool>(), 0usize..5), 0..200)
        ) {
            let mut paddle = Paddle::default();
            for (left, right, mode) in moves {
                paddle.set_mode(PaddleMode::ALL[mode], 1000.0);
                paddle.step(left, right, 1000.0);
                prop_assert!(paddle.x >= 0.0);
                prop_assert!(paddle.x <= 1000.0 - paddle.width());
            }
        }
    }
}
