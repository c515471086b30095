//! Ball factory
//!
//! Picks a variant by weighted roll and builds a fresh ball at the spawn point.

use glam::Vec2;
use rand::Rng;

use crate::consts::{BALL_SPAWN_X, BALL_SPAWN_Y};

use super::ball::{Ball, BallVariant};

/// Base weights, in [`BallVariant::ALL`] order
const BASE_WEIGHTS: [i32; 5] = [40, 20, 15, 15, 10];
/// Weight moved from one category to the next per extra level
const WEIGHT_SHIFT: i32 = 5;

pub struct BallFactory;

impl BallFactory {
    /// Variant weights for a level.
    ///
    /// Each level past the first moves `WEIGHT_SHIFT` from category `i` to
    /// `i + 1`, walking down the table once. Weights are clamped at zero.
    pub fn variant_weights(level: u32) -> [u32; 5] {
        let mut weights = BASE_WEIGHTS;
        let steps = level.saturating_sub(1) as usize;
        for i in 0..steps.min(weights.len() - 1) {
            weights[i] -= WEIGHT_SHIFT;
            weights[i + 1] += WEIGHT_SHIFT;
        }
        weights.map(|w| w.max(0) as u32)
    }

    /// Weighted random variant for a level
    pub fn random_variant<R: Rng>(level: u32, rng: &mut R) -> BallVariant {
        let weights = Self::variant_weights(level);
        let total: u32 = weights.iter().sum();
        if total == 0 {
            return BallVariant::Normal;
        }

        let mut roll = rng.random_range(0..total);
        for (variant, weight) in BallVariant::ALL.iter().zip(weights) {
            if roll < weight {
                return *variant;
            }
            roll -= weight;
        }
        BallVariant::Normal
    }

    /// Build a ball of the given variant at the spawn point, heading up-right
    pub fn create(variant: BallVariant, level: u32) -> Ball {
        let speed = variant.launch_speed(level);
        Ball::new(
            variant,
            Vec2::new(BALL_SPAWN_X, BALL_SPAWN_Y),
            Vec2::new(speed, -speed),
        )
    }

    /// Build a random-variant ball
    pub fn create_random<R: Rng>(level: u32, rng: &mut R) -> Ball {
        let variant = Self::random_variant(level, rng);
        log::debug!("Spawning {} ball (level {})", variant.as_str(), level);
        Self::create(variant, level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_level_one_weights() {
        assert_eq!(BallFactory::variant_weights(1), [40, 20, 15, 15, 10]);
        assert_eq!(BallFactory::variant_weights(0), [40, 20, 15, 15, 10]);
    }

    #[test]
    fn test_weights_shift_per_level() {
        assert_eq!(BallFactory::variant_weights(2), [35, 25, 15, 15, 10]);
        assert_eq!(BallFactory::variant_weights(3), [35, 20, 20, 15, 10]);
        assert_eq!(BallFactory::variant_weights(5), [35, 20, 15, 15, 15]);
    }

    #[test]
    fn test_weights_saturate_at_high_levels() {
        let at_five = BallFactory::variant_weights(5);
        assert_eq!(BallFactory::variant_weights(50), at_five);
        assert_eq!(at_five.iter().sum::<u32>(), 100);
    }

    #[test]
    fn test_random_variant_is_deterministic() {
        let mut a = Pcg32::seed_from_u64(7);
        let mut b = Pcg32::seed_from_u64(7);
        for level in 1..20 {
            assert_eq!(
                BallFactory::random_variant(level, &mut a),
                BallFactory::random_variant(level, &mut b)
            );
        }
    }

    #[test]
    fn test_random_variant_covers_all() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2000 {
            seen.insert(BallFactory::random_variant(1, &mut rng));
        }
        assert_eq!(seen.len(), BallVariant::ALL.len());
    }

    #[test]
    fn test_create_sets_variant_fields() {
        let ball = BallFactory::create(BallVariant::Slow, 1);
        assert!(ball.active);
        assert_eq!(ball.bonus_points(), 5);
        assert_eq!(ball.vel, Vec2::new(3.0, -3.0));
        assert_eq!(ball.pos, Vec2::new(BALL_SPAWN_X, BALL_SPAWN_Y));
    }
}
