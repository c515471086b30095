//! Reversible commands and the bounded undo/redo history
//!
//! A [`Command`] captures the prior value of the field it mutates when it is
//! executed, so undoing it is an exact inverse. Requests that cannot be
//! honoured (undo without a prior execute, removing a life that is not there)
//! are no-ops.

use std::collections::VecDeque;

use super::difficulty::Difficulty;
use super::paddle::PaddleMode;
use super::state::GameSession;

/// Reversible mutation of a [`GameSession`]
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Switch the paddle mode
    ChangeMode {
        mode: PaddleMode,
        screen_width: f32,
        previous: Option<PaddleMode>,
    },
    /// Add to the score
    AddPoints { points: u64, applied: bool },
    /// Give the player one life
    GrantLife { granted: bool },
    /// Shift the paddle horizontally (clamped to the playfield)
    MoveEntity {
        dx: f32,
        screen_width: f32,
        previous_x: Option<f32>,
    },
    /// Swap the session's difficulty strategy
    SwitchDifficulty {
        strategy: Difficulty,
        previous: Option<Difficulty>,
    },
}

impl Command {
    pub fn change_mode(mode: PaddleMode, screen_width: f32) -> Self {
        Command::ChangeMode {
            mode,
            screen_width,
            previous: None,
        }
    }

    pub fn add_points(points: u64) -> Self {
        Command::AddPoints {
            points,
            applied: false,
        }
    }

    pub fn grant_life() -> Self {
        Command::GrantLife { granted: false }
    }

    pub fn move_paddle(dx: f32, screen_width: f32) -> Self {
        Command::MoveEntity {
            dx,
            screen_width,
            previous_x: None,
        }
    }

    pub fn switch_difficulty(strategy: Difficulty) -> Self {
        Command::SwitchDifficulty {
            strategy,
            previous: None,
        }
    }

    /// Apply the mutation, recording what it replaces
    pub fn execute(&mut self, session: &mut GameSession) {
        match self {
            Command::ChangeMode {
                mode,
                screen_width,
                previous,
            } => {
                *previous = Some(session.paddle.mode());
                session.paddle.set_mode(*mode, *screen_width);
            }
            Command::AddPoints { points, applied } => {
                session.score += *points;
                *applied = true;
            }
            Command::GrantLife { granted } => {
                session.lives += 1;
                *granted = true;
                log::info!("Life granted ({} total)", session.lives);
            }
            Command::MoveEntity {
                dx,
                screen_width,
                previous_x,
            } => {
                *previous_x = Some(session.paddle.x);
                session.paddle.x += *dx;
                session.paddle.clamp(*screen_width);
            }
            Command::SwitchDifficulty { strategy, previous } => {
                *previous = Some(session.difficulty.switch(*strategy));
            }
        }
    }

    /// Revert the last execute. Returns false if there was nothing to revert.
    pub fn undo(&mut self, session: &mut GameSession) -> bool {
        match self {
            Command::ChangeMode {
                screen_width,
                previous,
                ..
            } => match previous.take() {
                Some(mode) => {
                    session.paddle.set_mode(mode, *screen_width);
                    true
                }
                None => false,
            },
            Command::AddPoints { points, applied } => {
                if !*applied {
                    return false;
                }
                session.score = session.score.saturating_sub(*points);
                *applied = false;
                true
            }
            Command::GrantLife { granted } => {
                if !*granted || session.lives == 0 {
                    return false;
                }
                session.lives -= 1;
                *granted = false;
                true
            }
            Command::MoveEntity {
                screen_width,
                previous_x,
                ..
            } => match previous_x.take() {
                Some(x) => {
                    session.paddle.x = x;
                    session.paddle.clamp(*screen_width);
                    true
                }
                None => false,
            },
            Command::SwitchDifficulty { previous, .. } => match previous.take() {
                Some(strategy) => {
                    session.difficulty.switch(strategy);
                    true
                }
                None => false,
            },
        }
    }

    pub fn description(&self) -> String {
        match self {
            Command::ChangeMode { mode, .. } => format!("ChangeMode({})", mode.as_str()),
            Command::AddPoints { points, .. } => format!("AddPoints({})", points),
            Command::GrantLife { .. } => "GrantLife".to_string(),
            Command::MoveEntity { dx, .. } => format!("MoveEntity({:+})", dx),
            Command::SwitchDifficulty { strategy, .. } => {
                format!("SwitchDifficulty({})", strategy.name())
            }
        }
    }
}

/// Default number of commands kept
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Executed commands with an undo/redo cursor.
///
/// `cursor` counts the commands currently applied: 0 means nothing left to
/// undo, `len()` means nothing left to redo.
#[derive(Debug, Clone)]
pub struct CommandHistory {
    commands: VecDeque<Command>,
    cursor: usize,
    limit: usize,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl CommandHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            commands: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT) + 1),
            cursor: 0,
            limit,
        }
    }

    /// Execute and record a command, dropping any redo tail
    pub fn execute(&mut self, mut command: Command, session: &mut GameSession) {
        command.execute(session);
        log::debug!("Executed {}", command.description());

        self.commands.truncate(self.cursor);
        self.commands.push_back(command);
        self.cursor += 1;

        while self.commands.len() > self.limit {
            self.commands.pop_front();
            self.cursor -= 1;
        }
    }

    pub fn undo(&mut self, session: &mut GameSession) -> bool {
        if !self.can_undo() {
            log::warn!("Nothing to undo");
            return false;
        }
        let command = &mut self.commands[self.cursor - 1];
        if !command.undo(session) {
            log::warn!("Could not undo {}", command.description());
            return false;
        }
        log::debug!("Undid {}", command.description());
        self.cursor -= 1;
        true
    }

    pub fn redo(&mut self, session: &mut GameSession) -> bool {
        if !self.can_redo() {
            log::warn!("Nothing to redo");
            return false;
        }
        let command = &mut self.commands[self.cursor];
        command.execute(session);
        log::debug!("Redid {}", command.description());
        self.cursor += 1;
        true
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.commands.len()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.cursor = 0;
    }

    /// Debug listing, newest last, `>` marking the last applied command
    pub fn descriptions(&self) -> Vec<String> {
        self.commands
            .iter()
            .enumerate()
            .map(|(i, command)| {
                let marker = if i + 1 == self.cursor { '>' } else { ' ' };
                format!("{} {}. {}", marker, i + 1, command.description())
            })
            .collect()
    }
}
