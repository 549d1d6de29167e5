//! Commands and the state reducer
//!
//! Every change to a game goes through a [`Command`]. Applying a command never
//! mutates the input state; commands whose preconditions fail are ignored.

use super::state::{GameState, Row, Status};
use crate::core::{MAX_ATTEMPTS, RowFeedback, WORD_LENGTH, Word};

/// A single player action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Overwrite one cell; `None` clears it
    SetCell {
        row: usize,
        column: usize,
        letter: Option<char>,
    },
    /// Submit a full row for evaluation
    SubmitRow { row: usize },
    /// Throw the game away and start over with `secret`
    Restart { secret: Word },
}

impl GameState {
    /// Apply a command, returning the resulting state
    ///
    /// Ignored commands return an unchanged copy.
    ///
    /// # Examples
    /// ```
    /// use dashwords::core::Word;
    /// use dashwords::game::{Command, GameState};
    ///
    /// let state = GameState::new(Word::new("crane").unwrap());
    /// let next = state.apply(&Command::SetCell { row: 0, column: 0, letter: Some('c') });
    /// assert_eq!(next.guesses()[0].get(0), Some('C'));
    /// assert_eq!(state.guesses()[0].get(0), None);
    /// ```
    #[must_use]
    pub fn apply(&self, command: &Command) -> Self {
        self.try_apply(command).unwrap_or_else(|| self.clone())
    }

    /// Apply a command, or `None` if its preconditions do not hold
    #[must_use]
    pub fn try_apply(&self, command: &Command) -> Option<Self> {
        match command {
            Command::SetCell {
                row,
                column,
                letter,
            } => self.set_cell(*row, *column, *letter),
            Command::SubmitRow { row } => self.submit_row(*row),
            Command::Restart { secret } => Some(Self::new(secret.clone())),
        }
    }

    fn set_cell(&self, row: usize, column: usize, letter: Option<char>) -> Option<Self> {
        if self.is_over() || row >= self.guesses.len() || column >= WORD_LENGTH {
            return None;
        }

        let mut next = self.clone();
        next.guesses[row].set(column, letter.map(upper_case));
        Some(next)
    }

    fn submit_row(&self, row: usize) -> Option<Self> {
        if self.is_over() || row != self.active_row() {
            return None;
        }

        let guess = self.guesses[row].letters()?;
        let mut next = self.clone();

        if guess == self.secret.letters() {
            // Winning rows keep their (empty) feedback
            next.status = Status::Won;
            next.score = self.winning_score();
            return Some(next);
        }

        next.feedback[row] = RowFeedback::evaluate(&guess, &self.secret);

        if self.guess_count + 1 < MAX_ATTEMPTS {
            next.guesses.push(Row::EMPTY);
            next.feedback.push(RowFeedback::EMPTY);
            next.guess_count += 1;
        } else {
            next.status = Status::Lost;
        }

        Some(next)
    }
}

/// Upper-case a single character, keeping it as-is when the upper-case form
/// is more than one character (`ß`)
fn upper_case(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    fn crane() -> GameState {
        GameState::new(Word::new("crane").unwrap())
    }

    fn type_row(state: &GameState, row: usize, text: &str) -> GameState {
        text.chars()
            .enumerate()
            .fold(state.clone(), |acc, (column, c)| {
                acc.apply(&Command::SetCell {
                    row,
                    column,
                    letter: Some(c),
                })
            })
    }

    fn guess(state: &GameState, text: &str) -> GameState {
        let row = state.active_row();
        type_row(state, row, text).apply(&Command::SubmitRow { row })
    }

    #[test]
    fn set_cell_uppercases() {
        let state = crane().apply(&Command::SetCell {
            row: 0,
            column: 3,
            letter: Some('n'),
        });
        assert_eq!(state.guesses()[0].get(3), Some('N'));
    }

    #[test]
    fn set_cell_none_clears() {
        let state = type_row(&crane(), 0, "ab");
        let state = state.apply(&Command::SetCell {
            row: 0,
            column: 1,
            letter: None,
        });
        assert_eq!(state.guesses()[0].text(), "A____");
    }

    #[test]
    fn set_cell_stores_any_character_upper_cased() {
        let state = crane();
        for (letter, stored) in [('1', '1'), ('é', 'É'), ('?', '?'), ('ß', 'ß')] {
            let next = state.apply(&Command::SetCell {
                row: 0,
                column: 0,
                letter: Some(letter),
            });
            assert_eq!(next.guesses()[0].get(0), Some(stored), "{letter:?}");
        }
    }

    #[test]
    fn set_cell_out_of_range_is_ignored() {
        let state = crane();
        for command in [
            Command::SetCell {
                row: 1,
                column: 0,
                letter: Some('a'),
            },
            Command::SetCell {
                row: 0,
                column: 5,
                letter: Some('a'),
            },
        ] {
            assert_eq!(state.try_apply(&command), None, "{command:?}");
        }
    }

    #[test]
    fn guess_with_non_letter_uses_an_attempt() {
        let state = guess(&crane(), "cran1");
        assert_eq!(state.status(), Status::InProgress);
        assert_eq!(state.guess_count(), 1);
        assert_eq!(state.guesses()[0].text(), "CRAN1");
        assert_eq!(
            state.feedback()[0].tags(),
            &[
                Feedback::Correct,
                Feedback::Correct,
                Feedback::Correct,
                Feedback::Correct,
                Feedback::None,
            ]
        );
        assert_eq!(state.active_row(), 1);
    }

    #[test]
    fn winning_first_guess_scores_25() {
        let state = guess(&crane(), "crane");
        assert_eq!(state.status(), Status::Won);
        assert!(state.is_over());
        assert_eq!(state.score(), 25);
        assert_eq!(state.guesses().len(), 1);
        assert_eq!(state.feedback()[0], RowFeedback::EMPTY);
    }

    #[test]
    fn score_for_every_guess_count() {
        for misses in 0..MAX_ATTEMPTS {
            let mut state = crane();
            for _ in 0..misses {
                state = guess(&state, "slate");
            }
            assert_eq!(state.guess_count(), misses);

            let state = guess(&state, "crane");
            assert_eq!(state.status(), Status::Won);
            assert_eq!(state.score(), ((MAX_ATTEMPTS - misses) * 5) as u32);
        }
    }

    #[test]
    fn miss_colours_row_and_appends_new_one() {
        let state = guess(&crane(), "slate");
        assert_eq!(state.guess_count(), 1);
        assert_eq!(state.guesses().len(), 2);
        assert_eq!(state.active_row(), 1);
        assert_eq!(
            state.feedback()[0].tags(),
            &[
                Feedback::None,
                Feedback::None,
                Feedback::Correct,
                Feedback::None,
                Feedback::Correct,
            ]
        );
        assert_eq!(state.feedback()[1], RowFeedback::EMPTY);
    }

    #[test]
    fn five_misses_lose_with_zero_score() {
        let mut state = crane();
        for _ in 0..MAX_ATTEMPTS {
            state = guess(&state, "slate");
        }
        assert_eq!(state.status(), Status::Lost);
        assert!(state.is_over());
        assert_eq!(state.score(), 0);
        assert_eq!(state.guesses().len(), MAX_ATTEMPTS);
        assert_eq!(state.guess_count(), MAX_ATTEMPTS - 1);
    }

    #[test]
    fn incomplete_row_submission_is_ignored() {
        let state = type_row(&crane(), 0, "cran");
        assert_eq!(state.try_apply(&Command::SubmitRow { row: 0 }), None);
        assert_eq!(state.apply(&Command::SubmitRow { row: 0 }), state);
    }

    #[test]
    fn only_active_row_can_be_submitted() {
        let state = guess(&crane(), "slate");
        assert_eq!(state.try_apply(&Command::SubmitRow { row: 0 }), None);
    }

    #[test]
    fn earlier_rows_stay_editable() {
        let state = guess(&crane(), "slate");
        let state = state.apply(&Command::SetCell {
            row: 0,
            column: 0,
            letter: Some('b'),
        });
        assert_eq!(state.guesses()[0].text(), "BLATE");
        // Feedback belongs to the submitted guess, not the edited letters
        assert_eq!(state.feedback()[0].get(2), Feedback::Correct);
    }

    #[test]
    fn edits_ignored_after_game_over() {
        let state = guess(&crane(), "crane");
        let command = Command::SetCell {
            row: 0,
            column: 0,
            letter: Some('x'),
        };
        assert_eq!(state.try_apply(&command), None);
        assert_eq!(state.guesses()[0].text(), "CRANE");
    }

    #[test]
    fn restart_resets_everything() {
        let mut state = crane();
        for _ in 0..MAX_ATTEMPTS {
            state = guess(&state, "slate");
        }

        let secret = Word::new("bread").unwrap();
        let state = state.apply(&Command::Restart {
            secret: secret.clone(),
        });
        assert_eq!(state, GameState::new(secret));
        assert_eq!(state.guesses(), &[Row::EMPTY]);
        assert_eq!(state.score(), 0);
        assert_eq!(state.status(), Status::InProgress);
    }
}
