//! Simulation events and the trackers that observe them
//!
//! Every published event reaches all trackers. Trackers are independent of
//! one another and ignore events they do not understand.

use serde_json::{Value, json};

/// Event published by the simulation
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Ball returned by the paddle
    Hit { points: u64, combo: u32 },
    /// Ball fell past the bottom edge
    BallLost,
    /// New level reached
    LevelUp { level: u32 },
    /// Last life lost
    GameOver,
    /// Event from outside the known set
    Other { tag: String, payload: Value },
}

impl GameEvent {
    pub fn tag(&self) -> &str {
        match self {
            GameEvent::Hit { .. } => "hit",
            GameEvent::BallLost => "ball_lost",
            GameEvent::LevelUp { .. } => "level_up",
            GameEvent::GameOver => "game_over",
            GameEvent::Other { tag, .. } => tag,
        }
    }

    pub fn payload(&self) -> Value {
        match self {
            GameEvent::Hit { points, combo } => json!({ "points": points, "combo": combo }),
            GameEvent::LevelUp { level } => json!({ "level": level }),
            GameEvent::BallLost | GameEvent::GameOver => json!({}),
            GameEvent::Other { payload, .. } => payload.clone(),
        }
    }

    /// Build an event from a tag and payload. Missing payload fields read as 0;
    /// unknown tags become [`GameEvent::Other`].
    pub fn from_tagged(tag: &str, payload: Value) -> Self {
        match tag {
            "hit" => GameEvent::Hit {
                points: u64_field(&payload, "points"),
                combo: u32_field(&payload, "combo"),
            },
            "ball_lost" => GameEvent::BallLost,
            "level_up" => GameEvent::LevelUp {
                level: u32_field(&payload, "level"),
            },
            "game_over" => GameEvent::GameOver,
            _ => GameEvent::Other {
                tag: tag.to_string(),
                payload,
            },
        }
    }
}

fn u64_field(payload: &Value, name: &str) -> u64 {
    payload.get(name).and_then(Value::as_u64).unwrap_or(0)
}

fn u32_field(payload: &Value, name: &str) -> u32 {
    u32::try_from(u64_field(payload, name)).unwrap_or(u32::MAX)
}

/// Receives every published event
pub trait Observer {
    fn notify(&mut self, event: &GameEvent);
}

/// Combo streak tracking
#[derive(Debug, Clone, Default)]
pub struct ScoreTracker {
    combo: u32,
    best_combo: u32,
}

impl ScoreTracker {
    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn best_combo(&self) -> u32 {
        self.best_combo
    }
}

impl Observer for ScoreTracker {
    fn notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Hit { combo, .. } => {
                self.combo = *combo;
                self.best_combo = self.best_combo.max(*combo);
                if *combo > 0 && combo.is_multiple_of(10) {
                    log::info!("{} hits in a row!", combo);
                }
            }
            GameEvent::BallLost => {
                if self.combo > 0 {
                    log::debug!("Combo broken at {}", self.combo);
                }
                self.combo = 0;
            }
            _ => {}
        }
    }
}

/// Hit / miss counters
#[derive(Debug, Clone, Default)]
pub struct StatsTracker {
    hits: u32,
    misses: u32,
}

impl StatsTracker {
    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    pub fn total(&self) -> u32 {
        self.hits + self.misses
    }

    /// Hits as a percentage of all shots (0 when nothing happened yet)
    pub fn accuracy(&self) -> f32 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.hits as f32 / total as f32 * 100.0
        }
    }
}

impl Observer for StatsTracker {
    fn notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Hit { .. } => self.hits += 1,
            GameEvent::BallLost => self.misses += 1,
            GameEvent::GameOver => {
                log::info!(
                    "Final stats: {} shots, {} hits, {} misses, {:.1}% accuracy",
                    self.total(),
                    self.hits,
                    self.misses,
                    self.accuracy()
                );
            }
            _ => {}
        }
    }
}

/// One-shot badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Achievement {
    Combo5,
    Combo10,
    Level3,
    Level5,
}

impl Achievement {
    pub fn title(&self) -> &'static str {
        match self {
            Achievement::Combo5 => "Combo x5",
            Achievement::Combo10 => "Combo x10",
            Achievement::Level3 => "Reached level 3",
            Achievement::Level5 => "Reached level 5",
        }
    }
}

/// Unlocks each badge at most once per session
#[derive(Debug, Clone, Default)]
pub struct AchievementTracker {
    unlocked: Vec<Achievement>,
}

impl AchievementTracker {
    /// Unlocked badges in unlock order
    pub fn unlocked(&self) -> &[Achievement] {
        &self.unlocked
    }

    pub fn is_unlocked(&self, achievement: Achievement) -> bool {
        self.unlocked.contains(&achievement)
    }

    fn unlock(&mut self, achievement: Achievement) -> bool {
        if self.is_unlocked(achievement) {
            return false;
        }
        log::info!("Achievement unlocked: {}", achievement.title());
        self.unlocked.push(achievement);
        true
    }
}

impl Observer for AchievementTracker {
    fn notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Hit { combo, .. } => {
                if *combo >= 5 {
                    self.unlock(Achievement::Combo5);
                }
                if *combo >= 10 {
                    self.unlock(Achievement::Combo10);
                }
            }
            GameEvent::LevelUp { level } => {
                if *level >= 3 {
                    self.unlock(Achievement::Level3);
                }
                if *level >= 5 {
                    self.unlock(Achievement::Level5);
                }
            }
            _ => {}
        }
    }
}

/// Sound cue names for the audio layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Hit,
    Miss,
    LevelUp,
    GameOver,
}

/// Stateless sink mapping events to sound cues
#[derive(Debug, Clone, Copy, Default)]
pub struct SoundTracker;

impl SoundTracker {
    pub fn cue(event: &GameEvent) -> Option<SoundCue> {
        match event {
            GameEvent::Hit { .. } => Some(SoundCue::Hit),
            GameEvent::BallLost => Some(SoundCue::Miss),
            GameEvent::LevelUp { .. } => Some(SoundCue::LevelUp),
            GameEvent::GameOver => Some(SoundCue::GameOver),
            GameEvent::Other { .. } => None,
        }
    }
}

impl Observer for SoundTracker {
    fn notify(&mut self, event: &GameEvent) {
        if let Some(cue) = Self::cue(event) {
            log::debug!("Sound cue: {:?}", cue);
        }
    }
}

/// Fans each event out to the four trackers
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    pub score: ScoreTracker,
    pub stats: StatsTracker,
    pub achievements: AchievementTracker,
    pub sound: SoundTracker,
}

impl EventBus {
    pub fn publish(&mut self, event: &GameEvent) {
        log::debug!("Event {} {}", event.tag(), event.payload());
        let observers: [&mut dyn Observer; 4] = [
            &mut self.score,
            &mut self.stats,
            &mut self.achievements,
            &mut self.sound,
        ];
        for observer in observers {
            observer.notify(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn hit(combo: u32) -> GameEvent {
        GameEvent::Hit { points: 10, combo }
    }

    #[test]
    fn test_combo_tracking() {
        let mut bus = EventBus::default();
        bus.publish(&hit(1));
        bus.publish(&hit(2));
        bus.publish(&hit(3));
        assert_eq!(bus.score.combo(), 3);

        bus.publish(&GameEvent::BallLost);
        assert_eq!(bus.score.combo(), 0);
        assert_eq!(bus.score.best_combo(), 3);
    }

    #[test]
    fn test_accuracy() {
        let mut bus = EventBus::default();
        assert_eq!(bus.stats.accuracy(), 0.0);

        bus.publish(&hit(1));
        bus.publish(&hit(2));
        bus.publish(&hit(3));
        bus.publish(&GameEvent::BallLost);
        assert_eq!(bus.stats.total(), 4);
        assert!((bus.stats.accuracy() - 75.0).abs() < 1e-4);
    }

    #[test]
    fn test_achievements_unlock_once() {
        let mut bus = EventBus::default();
        for combo in 1..=12 {
            bus.publish(&hit(combo));
        }
        bus.publish(&GameEvent::BallLost);
        for combo in 1..=12 {
            bus.publish(&hit(combo));
        }
        bus.publish(&GameEvent::LevelUp { level: 3 });
        bus.publish(&GameEvent::LevelUp { level: 5 });
        bus.publish(&GameEvent::LevelUp { level: 6 });

        assert_eq!(
            bus.achievements.unlocked(),
            &[
                Achievement::Combo5,
                Achievement::Combo10,
                Achievement::Level3,
                Achievement::Level5
            ]
        );
    }

    #[test]
    fn test_level_jump_unlocks_both() {
        let mut tracker = AchievementTracker::default();
        tracker.notify(&GameEvent::LevelUp { level: 5 });
        assert!(tracker.is_unlocked(Achievement::Level3));
        assert!(tracker.is_unlocked(Achievement::Level5));
    }

    #[test]
    fn test_unknown_event_is_ignored() {
        let mut bus = EventBus::default();
        bus.publish(&hit(4));
        let event = GameEvent::from_tagged("powerup_spawned", json!({ "combo": 99 }));
        assert_eq!(event.tag(), "powerup_spawned");
        bus.publish(&event);

        assert_eq!(bus.score.combo(), 4);
        assert_eq!(bus.stats.total(), 1);
        assert!(bus.achievements.unlocked().is_empty());
        assert_eq!(SoundTracker::cue(&event), None);
    }

    #[test]
    fn test_from_tagged_known_events() {
        assert_eq!(
            GameEvent::from_tagged("hit", json!({ "points": 20, "combo": 2 })),
            GameEvent::Hit { points: 20, combo: 2 }
        );
        assert_eq!(
            GameEvent::from_tagged("level_up", json!({})),
            GameEvent::LevelUp { level: 0 }
        );
        assert_eq!(GameEvent::from_tagged("ball_lost", Value::Null), GameEvent::BallLost);
        assert_eq!(GameEvent::from_tagged("game_over", json!({})), GameEvent::GameOver);
    }

    #[test]
    fn test_payload_shape() {
        let payload = GameEvent::Hit { points: 30, combo: 4 }.payload();
        assert_eq!(payload["points"], 30);
        assert_eq!(payload["combo"], 4);
    }

    proptest! {
        #[test]
        fn prop_badges_never_duplicate(
            events in proptest::collection::vec((0u32..15, any::<bool>()), 0..100)
        ) {
            let mut tracker = AchievementTracker::default();
            for (value, is_level) in events {
                let event = if is_level {
                    GameEvent::LevelUp { level: value }
                } else {
                    GameEvent::Hit { points: 1, combo: value }
                };
                tracker.notify(&event);
            }
            let unlocked = tracker.unlocked();
            for (i, a) in unlocked.iter().enumerate() {
                prop_assert!(!unlocked[i + 1..].contains(a));
            }
        }
    }
}
