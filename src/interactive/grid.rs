//! Grid projection
//!
//! Turns a [`GameState`] into a plain description of what the grid screen
//! shows. Drawing is left to `rendering`; this module only decides content.

use crate::core::{Feedback, WORD_LENGTH};
use crate::game::{Cursor, GameState, Status};

/// One cell as displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub letter: Option<char>,
    pub feedback: Feedback,
    pub editable: bool,
    pub focused: bool,
}

/// Actions offered once the game is over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndAction {
    Restart,
    Leaderboard,
}

impl EndAction {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Restart => "Restart",
            Self::Leaderboard => "Leaderboard",
        }
    }

    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::Restart => 'r',
            Self::Leaderboard => 'l',
        }
    }
}

/// The control region below the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Controls {
    /// Game in progress; submit is enabled once the active row is full
    Submit { enabled: bool },
    /// Terminal state: outcome message plus restart / leaderboard
    Finished {
        won: bool,
        message: String,
        actions: [EndAction; 2],
    },
}

/// Everything the grid screen displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    pub rows: Vec<[CellView; WORD_LENGTH]>,
    pub controls: Controls,
}

/// Project a game state into a grid view
///
/// `cursor` marks the focused cell; it is ignored once the game is over.
#[must_use]
pub fn project(state: &GameState, cursor: Cursor) -> GridView {
    let editable = !state.is_over();

    let rows = state
        .guesses()
        .iter()
        .zip(state.feedback())
        .enumerate()
        .map(|(row_index, (row, feedback))| {
            std::array::from_fn(|column| CellView {
                letter: row.get(column),
                feedback: feedback.get(column),
                editable,
                focused: editable && cursor.row == row_index && cursor.column == column,
            })
        })
        .collect();

    GridView {
        rows,
        controls: controls(state),
    }
}

fn controls(state: &GameState) -> Controls {
    let actions = [EndAction::Restart, EndAction::Leaderboard];
    match state.status() {
        Status::InProgress => Controls::Submit {
            enabled: state.guesses()[state.active_row()].is_full(),
        },
        Status::Won => Controls::Finished {
            won: true,
            message: format!("Congratulations! You've won {} points!", state.score()),
            actions,
        },
        Status::Lost => Controls::Finished {
            won: false,
            message: format!("Sorry, you lost. The word was: {}", state.secret()),
            actions,
        },
    }
}
