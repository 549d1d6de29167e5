//! Game state controller
//!
//! The grid state machine: an immutable [`GameState`], the [`Command`]s that
//! produce new states, secret word selection and the [`Session`] that ties
//! them to player input.

mod command;
mod picker;
mod session;
mod state;
mod stats;

pub use command::Command;
pub use picker::pick_word;
pub use session::{Cursor, Direction, Session};
pub use state::{GameState, Row, Status};
pub use stats::Statistics;
