//! Game state value
//!
//! `GameState` is an immutable snapshot of one game: the secret, the guess
//! grid, the feedback grid and the outcome. New states are produced by
//! applying a [`Command`](super::Command).

use crate::core::{MAX_ATTEMPTS, POINTS_PER_SPARE_GUESS, RowFeedback, WORD_LENGTH, Word};

/// One row of the guess grid
///
/// Cells hold one upper-cased character each; `None` is an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Row([Option<char>; WORD_LENGTH]);

impl Row {
    /// A row with every cell empty
    pub const EMPTY: Self = Self([None; WORD_LENGTH]);

    /// Character in a cell, if any
    ///
    /// # Panics
    /// Panics if column >= `WORD_LENGTH`
    #[inline]
    #[must_use]
    pub const fn get(&self, column: usize) -> Option<char> {
        self.0[column]
    }

    pub(crate) fn set(&mut self, column: usize, c: Option<char>) {
        self.0[column] = c;
    }

    /// True once every cell holds a character
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// The row's characters, if it is full
    #[must_use]
    pub fn letters(&self) -> Option<[char; WORD_LENGTH]> {
        let mut letters = ['\0'; WORD_LENGTH];
        for (slot, cell) in letters.iter_mut().zip(self.0) {
            *slot = cell?;
        }
        Some(letters)
    }

    /// Row text with empty cells shown as `_`
    #[must_use]
    pub fn text(&self) -> String {
        self.0.iter().map(|cell| cell.unwrap_or('_')).collect()
    }
}

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

/// Complete state of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(super) secret: Word,
    pub(super) guesses: Vec<Row>,
    pub(super) feedback: Vec<RowFeedback>,
    pub(super) guess_count: usize,
    pub(super) status: Status,
    pub(super) score: u32,
}

impl GameState {
    /// Fresh game: one empty row, no feedback, nothing scored
    ///
    /// # Examples
    /// ```
    /// use dashwords::core::Word;
    /// use dashwords::game::{GameState, Status};
    ///
    /// let state = GameState::new(Word::new("crane").unwrap());
    /// assert_eq!(state.guesses().len(), 1);
    /// assert_eq!(state.status(), Status::InProgress);
    /// assert_eq!(state.score(), 0);
    /// ```
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            guesses: vec![Row::EMPTY],
            feedback: vec![RowFeedback::EMPTY],
            guess_count: 0,
            status: Status::InProgress,
            score: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Rows entered so far, the last one being the active row
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Row] {
        &self.guesses
    }

    /// Feedback per row, parallel to `guesses`
    #[inline]
    #[must_use]
    pub fn feedback(&self) -> &[RowFeedback] {
        &self.feedback
    }

    /// Number of submitted, non-winning rows
    #[inline]
    #[must_use]
    pub const fn guess_count(&self) -> usize {
        self.guess_count
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// The game-over flag: true once the game is won or lost
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != Status::InProgress
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Index of the last row, the only one that can be submitted
    #[inline]
    #[must_use]
    pub fn active_row(&self) -> usize {
        self.guesses.len() - 1
    }

    /// Number of attempts still available
    #[must_use]
    pub const fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS - self.guess_count
    }

    /// Points a win would award right now
    #[must_use]
    pub(super) const fn winning_score(&self) -> u32 {
        (MAX_ATTEMPTS - self.guess_count) as u32 * POINTS_PER_SPARE_GUESS
    }
}
