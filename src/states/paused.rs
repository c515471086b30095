//! Pause overlay

use crate::Rgb;
use crate::platform::Key;
use crate::settings::Settings;

use super::{Selection, Transition, is_confirm};

const OPTIONS: [&str; 3] = ["Continue", "Back to Menu", "Quit"];

#[derive(Debug, Clone, PartialEq)]
pub struct PausedView {
    pub options: [&'static str; 3],
    pub selected: usize,
    /// Dim layer painted over the playfield
    pub overlay: Rgb,
    pub overlay_alpha: u8,
}

#[derive(Debug, Clone)]
pub struct PausedState {
    selection: Selection,
}

impl Default for PausedState {
    fn default() -> Self {
        Self::new()
    }
}

impl PausedState {
    pub fn new() -> Self {
        Self {
            selection: Selection::new(0, OPTIONS.len()),
        }
    }

    pub fn selected(&self) -> usize {
        self.selection.index()
    }

    pub(super) fn handle_key(&mut self, key: Key) -> Transition {
        if self.selection.navigate(key) {
            return Transition::None;
        }
        match key {
            Key::P | Key::Escape => Transition::Pop,
            key if is_confirm(key) => match self.selection.index() {
                0 => Transition::Pop,
                1 => Transition::ReturnToMenu,
                _ => Transition::Quit,
            },
            _ => Transition::None,
        }
    }

    pub(super) fn draw(&self, _settings: &Settings) -> PausedView {
        PausedView {
            options: OPTIONS,
            selected: self.selection.index(),
            overlay: [0, 0, 0],
            overlay_alpha: 180,
        }
    }
}
