//! Interactive TUI interface
//!
//! Terminal front end: key handling, the grid projection and ratatui drawing.

mod app;
pub mod grid;
mod rendering;

pub use app::{App, Message, MessageStyle, Route, run_tui};
