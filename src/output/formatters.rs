//! Formatting utilities for terminal output

use crate::core::{Feedback, RowFeedback, WORD_LENGTH};
use crate::game::Row;
use colored::{ColoredString, Colorize};

/// One grid cell, letter on its feedback colour
#[must_use]
pub fn colored_cell(letter: Option<char>, feedback: Feedback) -> ColoredString {
    let text = format!(" {} ", letter.unwrap_or('_'));
    match feedback {
        Feedback::Correct => text.black().on_green().bold(),
        Feedback::Present => text.black().on_yellow().bold(),
        Feedback::None => text.bright_white().bold(),
    }
}

/// A whole grid row as coloured cells
#[must_use]
pub fn colored_row(row: &Row, feedback: RowFeedback) -> String {
    (0..WORD_LENGTH)
        .map(|column| colored_cell(row.get(column), feedback.get(column)).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
