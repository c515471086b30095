//! Screen state machine
//!
//! Top-level screens are a closed set ([`GameScreen`]). Screens never touch
//! the stack directly: input handling and updates return a [`Transition`]
//! which the [`StateStack`] applies afterwards.

mod game_over;
mod menu;
mod paused;
mod playing;
mod stack;

pub use game_over::{GameOverState, GameOverView, performance_message};
pub use menu::{MenuState, MenuView};
pub use paused::{PausedState, PausedView};
pub use playing::{Hud, PlayState};
pub use stack::StateStack;

use rand::Rng;
use rand_pcg::Pcg32;

use crate::highscores::HighScores;
use crate::platform::{DeviceState, InputEvent, Key};
use crate::settings::Settings;

/// What the stack should do after a screen handled input or updated
#[derive(Debug, Default)]
pub enum Transition {
    #[default]
    None,
    /// Overlay a screen, suspending the current top
    Push(GameScreen),
    /// Drop the top screen and resume the one beneath
    Pop,
    /// Swap the top screen
    Replace(GameScreen),
    /// Drop every screen and start over at the menu
    ReturnToMenu,
    /// Clean shutdown request for the outer loop
    Quit,
}

impl Transition {
    pub fn is_none(&self) -> bool {
        matches!(self, Transition::None)
    }
}

/// Shared resources lent to the active screen
pub struct Context<'a> {
    pub settings: &'a Settings,
    pub high_scores: &'a mut HighScores,
    seeds: &'a mut Pcg32,
}

impl<'a> Context<'a> {
    pub fn new(settings: &'a Settings, high_scores: &'a mut HighScores, seeds: &'a mut Pcg32) -> Self {
        Self {
            settings,
            high_scores,
            seeds,
        }
    }

    /// Seed for a new play session
    pub fn next_seed(&mut self) -> u64 {
        self.seeds.random()
    }
}

/// Data a screen surfaces to the render target
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Menu(MenuView),
    Playing(Hud),
    Paused(PausedView),
    GameOver(GameOverView),
}

/// The top-level screens
#[derive(Debug)]
pub enum GameScreen {
    Menu(MenuState),
    Playing(Box<PlayState>),
    Paused(PausedState),
    GameOver(GameOverState),
}

impl GameScreen {
    pub fn menu() -> Self {
        GameScreen::Menu(MenuState::new())
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameScreen::Menu(_) => "Menu",
            GameScreen::Playing(_) => "Playing",
            GameScreen::Paused(_) => "Paused",
            GameScreen::GameOver(_) => "GameOver",
        }
    }

    pub fn enter(&mut self, ctx: &mut Context) {
        log::info!("Entering {}", self.name());
        match self {
            GameScreen::Playing(play) => play.enter(),
            GameScreen::GameOver(game_over) => game_over.enter(ctx),
            GameScreen::Menu(_) | GameScreen::Paused(_) => {}
        }
    }

    pub fn exit(&mut self, _ctx: &mut Context) {
        log::info!("Leaving {}", self.name());
        if let GameScreen::Playing(play) = self {
            play.exit();
        }
    }

    /// Handle this tick's input events. The first event that asks for a
    /// transition wins; later events are dropped.
    pub fn handle_input(&mut self, events: &[InputEvent], ctx: &mut Context) -> Transition {
        for &InputEvent::KeyDown(key) in events {
            let transition = match self {
                GameScreen::Menu(menu) => menu.handle_key(key, ctx),
                GameScreen::Playing(play) => play.handle_key(key),
                GameScreen::Paused(paused) => paused.handle_key(key),
                GameScreen::GameOver(game_over) => game_over.handle_key(key),
            };
            if !transition.is_none() {
                return transition;
            }
        }
        Transition::None
    }

    pub fn update(&mut self, devices: &DeviceState, ctx: &mut Context) -> Transition {
        match self {
            GameScreen::Playing(play) => play.update(devices, ctx.settings),
            GameScreen::Menu(_) | GameScreen::Paused(_) | GameScreen::GameOver(_) => {
                Transition::None
            }
        }
    }

    pub fn draw(&self, settings: &Settings) -> View {
        match self {
            GameScreen::Menu(menu) => View::Menu(menu.draw()),
            GameScreen::Playing(play) => View::Playing(play.draw(settings)),
            GameScreen::Paused(paused) => View::Paused(paused.draw(settings)),
            GameScreen::GameOver(game_over) => View::GameOver(game_over.draw()),
        }
    }
}

/// Vertical option list cursor shared by the menu screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    index: usize,
    len: usize,
}

impl Selection {
    pub fn new(index: usize, len: usize) -> Self {
        Self {
            index: index.min(len.saturating_sub(1)),
            len,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// Move with Up/W or Down/S, clamped at both ends. Returns true if the
    /// key was a navigation key.
    pub fn navigate(&mut self, key: Key) -> bool {
        match key {
            Key::Up | Key::W => {
                self.index = self.index.saturating_sub(1);
                true
            }
            Key::Down | Key::S => {
                self.index = (self.index + 1).min(self.len.saturating_sub(1));
                true
            }
            _ => false,
        }
    }
}

/// Keys that confirm the highlighted option
pub fn is_confirm(key: Key) -> bool {
    matches!(key, Key::Enter | Key::Space)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_clamps() {
        let mut selection = Selection::new(1, 3);
        assert!(selection.navigate(Key::Up));
        assert!(selection.navigate(Key::W));
        assert_eq!(selection.index(), 0);

        for _ in 0..5 {
            selection.navigate(Key::Down);
        }
        assert_eq!(selection.index(), 2);
        assert!(selection.navigate(Key::S));
        assert_eq!(selection.index(), 2);

        assert!(!selection.navigate(Key::Enter));
        assert!(!selection.select(3));
        assert!(selection.select(0));
        assert_eq!(selection.index(), 0);
    }

    #[test]
    fn test_confirm_keys() {
        assert!(is_confirm(Key::Enter));
        assert!(is_confirm(Key::Space));
        assert!(!is_confirm(Key::P));
    }
}
