//! DashWords
//!
//! A five-letter word guessing game: five attempts, per-letter colour
//! feedback and a score for every attempt left unused.
//!
//! # Quick Start
//!
//! ```rust
//! use dashwords::core::Word;
//! use dashwords::game::{Command, GameState, Status};
//!
//! let state = GameState::new(Word::new("crane").unwrap());
//!
//! // Fill the active row, then submit it
//! let state = "crane".chars().enumerate().fold(state, |state, (column, c)| {
//!     state.apply(&Command::SetCell { row: 0, column, letter: Some(c) })
//! });
//! let state = state.apply(&Command::SubmitRow { row: 0 });
//!
//! assert_eq!(state.status(), Status::Won);
//! assert_eq!(state.score(), 25);
//! ```

// Core domain types
pub mod core;

// Game state controller
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
