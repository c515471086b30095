//! Playing screen: owns the running simulation

use crate::Rgb;
use crate::platform::{DeviceState, InputAdapter, Key};
use crate::settings::Settings;
use crate::sim::{Command, Difficulty, Simulation, TickOutcome};

use super::game_over::GameOverState;
use super::paused::PausedState;
use super::{GameScreen, Transition};

/// Everything the render target shows while playing
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    pub mode: &'static str,
    pub combo: u32,
    /// Whole seconds of multiplier left, if active
    pub multiplier_secs: Option<u32>,
    pub ball_variant: &'static str,
    pub difficulty: &'static str,
    pub input: &'static str,

    // Geometry
    /// Paddle rectangle as (x, y, width, height)
    pub paddle: (f32, f32, f32, f32),
    pub paddle_color: Rgb,
    pub ball_pos: (f32, f32),
    pub ball_radius: f32,
    pub ball_color: Rgb,
}

#[derive(Debug, Clone)]
pub struct PlayState {
    sim: Simulation,
    input: InputAdapter,
}

impl PlayState {
    pub fn new(difficulty: Difficulty, settings: &Settings, seed: u64) -> Self {
        Self {
            sim: Simulation::new(difficulty, settings, seed),
            input: InputAdapter::new(settings.input, settings.screen_width),
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.sim
    }

    pub fn input(&self) -> &InputAdapter {
        &self.input
    }

    pub fn execute(&mut self, command: Command) {
        self.sim.execute(command);
    }

    pub fn undo(&mut self) -> bool {
        self.sim.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.sim.redo()
    }

    pub(super) fn enter(&self) {
        log::info!(
            "Session start: {} with {} lives",
            self.sim.session.strategy().name(),
            self.sim.session.lives
        );
    }

    pub(super) fn exit(&self) {
        log::debug!(
            "Session closed after {} ticks, {} commands in history",
            self.sim.time_ticks(),
            self.sim.history.len()
        );
    }

    pub(super) fn handle_key(&mut self, key: Key) -> Transition {
        match key {
            Key::P | Key::Escape => Transition::Push(GameScreen::Paused(PausedState::new())),
            Key::F1 => {
                self.input.cycle();
                Transition::None
            }
            _ => Transition::None,
        }
    }

    /// Run one simulation tick on the adapted device input
    pub(super) fn update(&mut self, devices: &DeviceState, settings: &Settings) -> Transition {
        let input = self.input.read(devices);
        match self.sim.tick(&input, settings) {
            TickOutcome::Running => Transition::None,
            TickOutcome::GameOver(stats) => {
                Transition::Replace(GameScreen::GameOver(GameOverState::new(stats)))
            }
        }
    }

    pub(super) fn draw(&self, settings: &Settings) -> Hud {
        let session = &self.sim.session;
        let multiplier = session.multiplier;
        let paddle = &session.paddle;
        let ball = &session.ball;
        Hud {
            score: session.score,
            lives: session.lives,
            level: session.level,
            mode: paddle.mode().as_str(),
            combo: self.sim.bus.score.combo(),
            multiplier_secs: multiplier
                .active
                .then(|| multiplier.remaining_secs(settings.fps)),
            ball_variant: ball.variant.as_str(),
            difficulty: session.strategy().name(),
            input: self.input.kind().as_str(),
            paddle: (paddle.x, paddle.y, paddle.width(), paddle.height),
            paddle_color: paddle.color(),
            ball_pos: (ball.pos.x, ball.pos.y),
            ball_radius: ball.radius,
            ball_color: ball.color(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::InputKind;
    use crate::sim::{Ball, BallVariant, PaddleMode};
    use glam::Vec2;

    fn play() -> (PlayState, Settings) {
        let settings = Settings::default();
        (PlayState::new(Difficulty::Normal, &settings, 5), settings)
    }

    #[test]
    fn test_pause_keys_push_overlay() {
        let (mut play, _) = play();
        for key in [Key::P, Key::Escape] {
            assert!(matches!(
                play.handle_key(key),
                Transition::Push(GameScreen::Paused(_))
            ));
        }
    }

    #[test]
    fn test_f1_cycles_input() {
        let (mut play, _) = play();
        assert_eq!(play.input().kind(), InputKind::Keyboard);
        assert!(play.handle_key(Key::F1).is_none());
        assert_eq!(play.input().kind(), InputKind::Mouse);
        play.handle_key(Key::F1);
        assert_eq!(play.input().kind(), InputKind::Keyboard);
    }

    #[test]
    fn test_update_reads_held_keys() {
        let (mut play, settings) = play();
        let start = play.simulation().session.paddle.x;
        let devices = DeviceState::with_keys(&[Key::Right, Key::A]);

        assert!(play.update(&devices, &settings).is_none());
        let session = &play.simulation().session;
        assert_eq!(session.paddle.mode(), PaddleMode::Fast);
        assert_eq!(session.paddle.x, start + 12.0);
    }

    #[test]
    fn test_game_over_replaces_screen() {
        let (mut play, settings) = play();
        let sim = play.simulation_mut();
        sim.session.lives = 1;
        sim.session.score = 70;
        sim.session.ball = Ball::new(BallVariant::Normal, Vec2::new(100.0, 695.0), Vec2::new(0.0, 10.0));

        match play.update(&DeviceState::default(), &settings) {
            Transition::Replace(GameScreen::GameOver(game_over)) => {
                assert_eq!(game_over.stats().score, 70);
            }
            other => panic!("expected game over, got {:?}", other),
        }
    }

    #[test]
    fn test_commands_through_play_state() {
        let (mut play, _) = play();
        play.execute(Command::move_paddle(-100.0, 1000.0));
        assert_eq!(play.simulation().session.paddle.x, 350.0);

        play.execute(Command::switch_difficulty(Difficulty::Extreme));
        assert_eq!(play.simulation().session.strategy(), Difficulty::Extreme);

        assert!(play.undo());
        assert_eq!(play.simulation().session.strategy(), Difficulty::Normal);
        assert!(play.undo());
        assert_eq!(play.simulation().session.paddle.x, 450.0);
        assert!(!play.undo());
        assert!(play.redo());
        assert_eq!(play.simulation().session.paddle.x, 350.0);
    }

    #[test]
    fn test_hud_contents() {
        let (mut play, settings) = play();
        play.simulation_mut().session.multiplier.activate(300);
        let hud = play.draw(&settings);
        assert_eq!(hud.lives, 3);
        assert_eq!(hud.level, 1);
        assert_eq!(hud.mode, "Normal");
        assert_eq!(hud.difficulty, "Normal");
        assert_eq!(hud.input, "Keyboard");
        assert_eq!(hud.multiplier_secs, Some(5));
        assert_eq!(hud.paddle, (450.0, 650.0, 100.0, 15.0));
    }
}
