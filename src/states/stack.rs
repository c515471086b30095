//! Pushdown stack of screens
//!
//! Only the top screen receives input, updates and draws. Screens beneath
//! it are suspended with their state intact until they become the top again.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::highscores::HighScores;
use crate::platform::{DeviceState, InputEvent};
use crate::settings::Settings;

use super::playing::PlayState;
use super::{Context, GameScreen, Transition, View};

#[derive(Debug)]
pub struct StateStack {
    stack: Vec<GameScreen>,
    settings: Settings,
    high_scores: HighScores,
    /// Source of per-session seeds
    seeds: Pcg32,
    quit: bool,
}

impl StateStack {
    /// New stack with the menu entered
    pub fn new(settings: Settings, seed: u64) -> Self {
        let mut stack = Self {
            stack: Vec::new(),
            settings,
            high_scores: HighScores::new(),
            seeds: Pcg32::seed_from_u64(seed),
            quit: false,
        };
        stack.push(GameScreen::menu());
        stack
    }

    fn parts(&mut self) -> (&mut Vec<GameScreen>, Context<'_>) {
        (
            &mut self.stack,
            Context::new(&self.settings, &mut self.high_scores, &mut self.seeds),
        )
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn top(&self) -> Option<&GameScreen> {
        self.stack.last()
    }

    pub fn top_name(&self) -> Option<&'static str> {
        self.top().map(GameScreen::name)
    }

    /// Names from bottom to top
    pub fn names(&self) -> Vec<&'static str> {
        self.stack.iter().map(GameScreen::name).collect()
    }

    /// The running session, even while suspended under an overlay
    pub fn play_state(&self) -> Option<&PlayState> {
        self.stack.iter().rev().find_map(|screen| match screen {
            GameScreen::Playing(play) => Some(play.as_ref()),
            _ => None,
        })
    }

    pub fn play_state_mut(&mut self) -> Option<&mut PlayState> {
        self.stack.iter_mut().rev().find_map(|screen| match screen {
            GameScreen::Playing(play) => Some(play.as_mut()),
            _ => None,
        })
    }

    /// Set once a screen asked to quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Exit the top screen (if any) and enter `state` in its place
    pub fn replace(&mut self, mut state: GameScreen) {
        let (stack, mut ctx) = self.parts();
        if let Some(mut top) = stack.pop() {
            top.exit(&mut ctx);
        }
        state.enter(&mut ctx);
        stack.push(state);
    }

    /// Enter `state` on top, suspending the current top
    pub fn push(&mut self, mut state: GameScreen) {
        let (stack, mut ctx) = self.parts();
        if let Some(top) = stack.last() {
            log::debug!("Suspending {}", top.name());
        }
        state.enter(&mut ctx);
        stack.push(state);
    }

    /// Exit the top screen and resume the one beneath. Returns false (and
    /// leaves the stack alone) when nothing is beneath.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() < 2 {
            log::warn!("No state beneath {:?}, ignoring pop", self.top_name());
            return false;
        }
        let (stack, mut ctx) = self.parts();
        if let Some(mut top) = stack.pop() {
            top.exit(&mut ctx);
        }
        if let Some(resumed) = stack.last() {
            log::info!("Resuming {}", resumed.name());
        }
        true
    }

    /// Exit every screen, top first, and start over at the menu
    pub fn return_to_menu(&mut self) {
        let (stack, mut ctx) = self.parts();
        while let Some(mut state) = stack.pop() {
            state.exit(&mut ctx);
        }
        let mut menu = GameScreen::menu();
        menu.enter(&mut ctx);
        stack.push(menu);
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::None => {}
            Transition::Push(state) => self.push(state),
            Transition::Pop => {
                self.pop();
            }
            Transition::Replace(state) => self.replace(state),
            Transition::ReturnToMenu => self.return_to_menu(),
            Transition::Quit => {
                log::info!("Quit requested");
                self.quit = true;
            }
        }
    }

    /// Run one frame: the top screen handles this frame's input events, the
    /// resulting transition is applied, then whichever screen is on top
    /// updates once.
    pub fn dispatch(&mut self, events: &[InputEvent], devices: &DeviceState) {
        if self.quit {
            return;
        }

        let (stack, mut ctx) = self.parts();
        let transition = match stack.last_mut() {
            Some(top) => top.handle_input(events, &mut ctx),
            None => Transition::None,
        };
        self.apply(transition);
        if self.quit {
            return;
        }

        let (stack, mut ctx) = self.parts();
        let transition = match stack.last_mut() {
            Some(top) => top.update(devices, &mut ctx),
            None => Transition::None,
        };
        self.apply(transition);
    }

    /// Draw the top screen only
    pub fn render(&self) -> Option<View> {
        self.top().map(|top| top.draw(&self.settings))
    }
}
