//! Word lists for DashWords
//!
//! Provides the embedded secret-word list and the non-empty `WordList` that a
//! game session draws its secrets from.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{WordList, WordListError};
