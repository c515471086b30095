//! Main menu: difficulty selection

use crate::platform::Key;
use crate::sim::Difficulty;

use super::playing::PlayState;
use super::{Context, GameScreen, Selection, Transition, is_confirm};

#[derive(Debug, Clone, PartialEq)]
pub struct MenuView {
    pub options: Vec<&'static str>,
    pub selected: usize,
    pub description: &'static str,
    /// Special ball chance of the highlighted difficulty at level 1 (percent)
    pub special_prob: u32,
}

#[derive(Debug, Clone)]
pub struct MenuState {
    selection: Selection,
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuState {
    /// Menu with Normal highlighted
    pub fn new() -> Self {
        let normal = Difficulty::ALL
            .iter()
            .position(|d| *d == Difficulty::Normal)
            .unwrap_or(0);
        Self {
            selection: Selection::new(normal, Difficulty::ALL.len()),
        }
    }

    pub fn selected(&self) -> Difficulty {
        Difficulty::ALL[self.selection.index()]
    }

    pub(super) fn handle_key(&mut self, key: Key, ctx: &mut Context) -> Transition {
        if self.selection.navigate(key) {
            return Transition::None;
        }
        if is_confirm(key) {
            return self.start(ctx);
        }
        match key.digit_index() {
            Some(index) if self.selection.select(index) => self.start(ctx),
            _ => Transition::None,
        }
    }

    fn start(&self, ctx: &mut Context) -> Transition {
        let difficulty = self.selected();
        log::info!("Starting game on {}", difficulty.name());
        let seed = ctx.next_seed();
        let play = PlayState::new(difficulty, ctx.settings, seed);
        Transition::Replace(GameScreen::Playing(Box::new(play)))
    }

    pub(super) fn draw(&self) -> MenuView {
        let difficulty = self.selected();
        MenuView {
            options: Difficulty::ALL.iter().map(Difficulty::name).collect(),
            selected: self.selection.index(),
            description: difficulty.description(),
            special_prob: difficulty.special_prob(1),
        }
    }
}
