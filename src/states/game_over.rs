//! Game over screen: final stats and leaderboard rank

use crate::platform::Key;
use crate::sim::FinalStats;

use super::{Context, Selection, Transition, is_confirm};

const OPTIONS: [&str; 3] = ["Play Again", "Back to Menu", "Quit"];

/// Closing remark for a final score
pub fn performance_message(score: u64) -> &'static str {
    match score {
        1000.. => "You are a squash master!",
        500.. => "Excellent game!",
        200.. => "Good job!",
        _ => "Keep practising!",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameOverView {
    pub score: u64,
    pub level: u32,
    pub best_combo: u32,
    pub total_shots: u32,
    pub accuracy: f32,
    pub difficulty: &'static str,
    pub message: &'static str,
    /// Leaderboard position earned by this run
    pub rank: Option<usize>,
    pub options: [&'static str; 3],
    pub selected: usize,
}

#[derive(Debug, Clone)]
pub struct GameOverState {
    stats: FinalStats,
    rank: Option<usize>,
    selection: Selection,
}

impl GameOverState {
    pub fn new(stats: FinalStats) -> Self {
        Self {
            stats,
            rank: None,
            selection: Selection::new(0, OPTIONS.len()),
        }
    }

    pub fn stats(&self) -> &FinalStats {
        &self.stats
    }

    pub fn rank(&self) -> Option<usize> {
        self.rank
    }

    pub(super) fn enter(&mut self, ctx: &mut Context) {
        self.rank = ctx.high_scores.record(&self.stats);
    }

    pub(super) fn handle_key(&mut self, key: Key) -> Transition {
        if self.selection.navigate(key) || !is_confirm(key) {
            return Transition::None;
        }
        match self.selection.index() {
            0 | 1 => Transition::ReturnToMenu,
            _ => Transition::Quit,
        }
    }

    pub(super) fn draw(&self) -> GameOverView {
        let stats = &self.stats;
        GameOverView {
            score: stats.score,
            level: stats.level,
            best_combo: stats.best_combo,
            total_shots: stats.total_shots,
            accuracy: stats.accuracy,
            difficulty: stats.difficulty.name(),
            message: performance_message(stats.score),
            rank: self.rank,
            options: OPTIONS,
            selected: self.selection.index(),
        }
    }
}
