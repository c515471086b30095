//! Fixed timestep simulation tick
//!
//! One call to [`Simulation::tick`] advances the session by exactly one
//! frame. The step order below is load-bearing: input edges, paddle, magnet,
//! ball, hit, loss, level, multiplier.

use crate::consts::{MODE_KEY_COUNT, SHIELD_BOOST, SLOW_BALL_PADDLE_BOOST};
use crate::settings::Settings;

use super::ball::{BallVariant, SideEffect};
use super::command::{Command, CommandHistory};
use super::difficulty::Difficulty;
use super::events::{EventBus, GameEvent};
use super::paddle::PaddleMode;
use super::state::GameSession;

/// Adapted input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Mode-select keys, one slot per entry of [`MODE_KEY_MODES`]
    pub mode_keys: [bool; MODE_KEY_COUNT],
}

/// Paddle mode selected by each mode key slot
pub const MODE_KEY_MODES: [PaddleMode; MODE_KEY_COUNT] = [
    PaddleMode::Fast,
    PaddleMode::Wide,
    PaddleMode::Magnet,
    PaddleMode::Normal,
    PaddleMode::Shield,
];

/// Figures carried from a finished session into the game over screen
#[derive(Debug, Clone, PartialEq)]
pub struct FinalStats {
    pub score: u64,
    pub level: u32,
    pub best_combo: u32,
    pub total_shots: u32,
    /// Percent
    pub accuracy: f32,
    pub difficulty: Difficulty,
}

/// Result of a tick
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    Running,
    GameOver(FinalStats),
}

/// A running play-through: session, command log and event trackers
#[derive(Debug, Clone)]
pub struct Simulation {
    pub session: GameSession,
    pub history: CommandHistory,
    pub bus: EventBus,
    /// Mode keys held on the previous tick (edge detection)
    prev_mode_keys: [bool; MODE_KEY_COUNT],
    /// Events published during the last tick
    events: Vec<GameEvent>,
    time_ticks: u64,
    finished: bool,
}

impl Simulation {
    pub fn new(difficulty: Difficulty, settings: &Settings, seed: u64) -> Self {
        Self {
            session: GameSession::new(difficulty, seed),
            history: CommandHistory::new(settings.history_limit),
            bus: EventBus::default(),
            prev_mode_keys: [false; MODE_KEY_COUNT],
            events: Vec::new(),
            time_ticks: 0,
            finished: false,
        }
    }

    /// Events published during the most recent tick
    pub fn last_events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Run a command through the history
    pub fn execute(&mut self, command: Command) {
        self.history.execute(command, &mut self.session);
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.session)
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.session)
    }

    pub fn final_stats(&self) -> FinalStats {
        FinalStats {
            score: self.session.score,
            level: self.session.level,
            best_combo: self.bus.score.best_combo(),
            total_shots: self.bus.stats.total(),
            accuracy: self.bus.stats.accuracy(),
            difficulty: self.session.strategy(),
        }
    }

    /// Advance one tick
    pub fn tick(&mut self, input: &TickInput, settings: &Settings) -> TickOutcome {
        self.events.clear();
        if self.finished {
            return TickOutcome::GameOver(self.final_stats());
        }
        self.time_ticks += 1;

        let width = settings.screen_width;

        // Mode keys fire on the press edge only
        for (slot, &pressed) in input.mode_keys.iter().enumerate() {
            if pressed && !self.prev_mode_keys[slot] {
                self.change_mode(MODE_KEY_MODES[slot], width);
            }
        }
        self.prev_mode_keys = input.mode_keys;

        let session = &mut self.session;
        session.paddle.step(input.left, input.right, width);
        session.paddle.attract(&mut session.ball);
        session.ball.advance(width, settings.screen_height);

        if self.session.ball.hits(&self.session.paddle) {
            self.paddle_hit(settings);
        }

        if !self.session.ball.active && self.ball_lost(width) {
            return TickOutcome::GameOver(self.final_stats());
        }

        if self.session.score >= self.session.level_threshold() {
            self.level_up();
        }

        self.session.multiplier.tick();
        TickOutcome::Running
    }

    fn publish(&mut self, event: GameEvent) {
        self.bus.publish(&event);
        self.events.push(event);
    }

    fn change_mode(&mut self, mode: PaddleMode, screen_width: f32) {
        self.execute(Command::change_mode(mode, screen_width));
        self.confirm_mode(mode);
    }

    /// Check a mode change took effect and report it
    fn confirm_mode(&self, requested: PaddleMode) -> bool {
        let current = self.session.paddle.mode();
        if current == requested {
            log::info!("Paddle mode: {}", current.as_str());
            true
        } else {
            log::warn!(
                "Paddle mode change to {} did not apply (still {})",
                requested.as_str(),
                current.as_str()
            );
            false
        }
    }

    fn paddle_hit(&mut self, settings: &Settings) {
        let level = self.session.level;
        let variant = self.session.ball.variant;

        let base = self.session.strategy().points_per_hit(level) + self.session.ball.bonus_points();
        let points = self.session.multiplier.apply(base);
        self.execute(Command::add_points(points));

        let combo = self.bus.score.combo() + 1;
        self.publish(GameEvent::Hit { points, combo });

        self.apply_side_effect(variant, settings);

        let session = &mut self.session;
        if session.paddle.mode() == PaddleMode::Shield {
            session.ball.vel.y *= SHIELD_BOOST;
        }
        session.ball.bounce_off(&session.paddle);
    }

    fn apply_side_effect(&mut self, variant: BallVariant, settings: &Settings) {
        let Some(effect) = variant.side_effect() else {
            return;
        };
        log::debug!("{} ball effect: {:?}", variant.as_str(), effect);
        match effect {
            SideEffect::BoostPaddle => self.session.paddle.boost_speed(SLOW_BALL_PADDLE_BOOST),
            SideEffect::ActivateMultiplier => {
                self.session.multiplier.activate(settings.multiplier_ticks());
            }
            SideEffect::GrantLife => self.execute(Command::grant_life()),
        }
    }

    /// Handle a dead ball. Returns true when it cost the last life.
    fn ball_lost(&mut self, screen_width: f32) -> bool {
        self.session.lives = self.session.lives.saturating_sub(1);
        self.publish(GameEvent::BallLost);

        if self.session.lives > 0 {
            self.session.respawn_ball();
            self.session.paddle.set_mode(PaddleMode::Normal, screen_width);
            log::info!("Ball lost, {} lives left", self.session.lives);
            return false;
        }

        self.publish(GameEvent::GameOver);
        self.finished = true;
        log::info!(
            "Game over: score {} at level {}",
            self.session.score,
            self.session.level
        );
        true
    }

    fn level_up(&mut self) {
        self.session.level += 1;
        let level = self.session.level;
        self.publish(GameEvent::LevelUp { level });

        let context = self.session.difficulty;
        context.apply(&mut self.session, level);
        log::info!("Level {}!", level);
    }
}
