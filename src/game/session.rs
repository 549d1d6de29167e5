//! Game session controller
//!
//! A `Session` borrows the word list and owns the random source, the current
//! [`GameState`] and the input cursor. Front ends call its methods in
//! response to input events; each call turns into a [`Command`] applied to the
//! state.

use super::command::Command;
use super::picker::pick_word;
use super::state::{GameState, Status};
use crate::core::{WORD_LENGTH, Word};
use crate::wordlists::WordList;
use rand::Rng;
use tracing::{debug, info, trace};

/// Focused cell in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub column: usize,
}

/// Cursor movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// One player's game, from first secret through any number of restarts
pub struct Session<'a, R> {
    words: &'a WordList,
    rng: R,
    state: GameState,
    cursor: Cursor,
}

impl<'a, R> Session<'a, R> {
    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[inline]
    #[must_use]
    pub const fn words(&self) -> &'a WordList {
        self.words
    }
}

impl<'a, R: Rng> Session<'a, R> {
    /// Start a session with a freshly picked secret
    pub fn new(words: &'a WordList, mut rng: R) -> Self {
        let secret = draw_secret(words, &mut rng);

        Self {
            words,
            rng,
            state: GameState::new(secret),
            cursor: Cursor::default(),
        }
    }

    /// Draw the next secret from the word list
    pub fn select_new_secret_word(&mut self) -> Word {
        draw_secret(self.words, &mut self.rng)
    }

    /// Overwrite a cell and move focus to the next column
    pub fn set_cell(&mut self, row: usize, column: usize, letter: Option<char>) {
        if self.dispatch(Command::SetCell {
            row,
            column,
            letter,
        }) && column + 1 < WORD_LENGTH
        {
            self.cursor = Cursor {
                row,
                column: column + 1,
            };
        }
    }

    /// Raw text input for a cell; only the first character is kept and an
    /// empty string clears the cell
    pub fn handle_input(&mut self, row: usize, column: usize, value: &str) {
        self.set_cell(row, column, value.chars().next());
    }

    /// Type a letter into the focused cell
    pub fn type_letter(&mut self, letter: char) {
        let Cursor { row, column } = self.cursor;
        self.set_cell(row, column, Some(letter));
    }

    /// Clear the focused cell, or step back and clear the previous one if the
    /// focused cell is already empty
    pub fn backspace(&mut self) {
        let Cursor { row, column } = self.cursor;
        let filled = self
            .state
            .guesses()
            .get(row)
            .is_some_and(|r| r.get(column).is_some());

        let column = if !filled && column > 0 {
            column - 1
        } else {
            column
        };

        if self.dispatch(Command::SetCell {
            row,
            column,
            letter: None,
        }) {
            self.cursor.column = column;
        }
    }

    /// Move focus within the existing rows
    pub fn move_cursor(&mut self, direction: Direction) {
        let last_row = self.state.active_row();
        let Cursor { row, column } = self.cursor;

        self.cursor = match direction {
            Direction::Left => Cursor {
                row,
                column: column.saturating_sub(1),
            },
            Direction::Right => Cursor {
                row,
                column: (column + 1).min(WORD_LENGTH - 1),
            },
            Direction::Up => Cursor {
                row: row.saturating_sub(1),
                column,
            },
            Direction::Down => Cursor {
                row: (row + 1).min(last_row),
                column,
            },
        };
    }

    /// Submit a row for evaluation
    pub fn submit_row(&mut self, row: usize) {
        let before = self.state.guess_count();
        if !self.dispatch(Command::SubmitRow { row }) {
            return;
        }

        match self.state.status() {
            Status::Won => info!(
                score = self.state.score(),
                guesses = before + 1,
                "game won"
            ),
            Status::Lost => info!(secret = %self.state.secret(), "game lost"),
            Status::InProgress => {
                debug!(
                    row,
                    feedback = %self.state.feedback()[row],
                    remaining = self.state.remaining_attempts(),
                    "guess evaluated"
                );
                self.cursor = Cursor {
                    row: self.state.active_row(),
                    column: 0,
                };
            }
        }
    }

    /// Submit the last row
    pub fn submit_active_row(&mut self) {
        self.submit_row(self.state.active_row());
    }

    /// Type `text` over the active row and submit it
    ///
    /// Extra characters are dropped; a short guess leaves cells empty, so the
    /// submission is ignored.
    pub fn submit_guess(&mut self, text: &str) {
        let row = self.state.active_row();
        let mut letters = text.trim().chars();
        for column in 0..WORD_LENGTH {
            self.set_cell(row, column, None);
            if let Some(letter) = letters.next() {
                self.set_cell(row, column, Some(letter));
            }
        }
        self.submit_row(row);
    }

    /// Discard the game and start a new one with a fresh secret
    pub fn restart(&mut self) {
        let secret = self.select_new_secret_word();
        self.dispatch(Command::Restart { secret });
        self.cursor = Cursor::default();
        debug!("game restarted");
    }

    fn dispatch(&mut self, command: Command) -> bool {
        match self.state.try_apply(&command) {
            Some(next) => {
                self.state = next;
                true
            }
            None => {
                debug!(?command, "command ignored");
                false
            }
        }
    }
}

fn draw_secret<R: Rng>(words: &WordList, rng: &mut R) -> Word {
    let secret = pick_word(words, rng);
    trace!(secret = %secret, "secret word selected");
    secret
}
