//! Core domain types for DashWords
//!
//! Words, per-cell feedback and the fixed game rules. Nothing here knows about
//! game state or rendering.

mod feedback;
mod word;

pub use feedback::{Feedback, RowFeedback};
pub use word::{Word, WordError};

/// Number of letters in every word and every grid row
pub const WORD_LENGTH: usize = 5;

/// Maximum number of rows a player may submit in one game
pub const MAX_ATTEMPTS: usize = 5;

/// Points awarded per attempt left unused on a win
pub const POINTS_PER_SPARE_GUESS: u32 = 5;
