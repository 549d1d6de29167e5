//! Per-cell feedback for a submitted guess
//!
//! Each cell of a submitted row is tagged as:
//! - `None` (letter not in the secret, or not yet evaluated)
//! - `Present` (letter occurs in the secret, wrong position)
//! - `Correct` (letter in the correct position)
//!
//! Presence is a containment check against the secret, not a count of
//! remaining letters: a guess letter repeated more often than it occurs in the
//! secret is marked `Present` every time.

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback tag for a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Feedback {
    #[default]
    None,
    Present,
    Correct,
}

impl Feedback {
    /// Emoji square used in plain-text output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::None => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// Feedback for one grid row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RowFeedback([Feedback; WORD_LENGTH]);

impl RowFeedback {
    /// A row with no feedback yet
    pub const EMPTY: Self = Self([Feedback::None; WORD_LENGTH]);

    /// Build feedback from explicit tags
    #[inline]
    #[must_use]
    pub const fn new(tags: [Feedback; WORD_LENGTH]) -> Self {
        Self(tags)
    }

    /// Evaluate the characters of a submitted row against `secret`
    ///
    /// # Algorithm
    /// 1. Exact pass: tag positions where the characters match as `Correct`
    /// 2. Wrong-position pass: every unmatched position whose character occurs
    ///    anywhere in the secret becomes `Present`
    /// 3. Absence pass: characters absent from the secret are forced to `None`
    ///
    /// Grid cells may hold any character; anything that is not a letter of
    /// the secret ends up `None`.
    ///
    /// # Examples
    /// ```
    /// use dashwords::core::{RowFeedback, Word};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let feedback = RowFeedback::evaluate(&['S', 'L', 'A', 'T', 'E'], &secret);
    ///
    /// // S(none) L(none) A(correct) T(none) E(correct)
    /// assert_eq!(feedback.to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &[char; WORD_LENGTH], secret: &Word) -> Self {
        let answer = secret.letters();
        let mut result = [Feedback::None; WORD_LENGTH];
        let mut matched = [false; WORD_LENGTH];

        for (i, (&g, &a)) in guess.iter().zip(&answer).enumerate() {
            if g == a {
                result[i] = Feedback::Correct;
                matched[i] = true;
            }
        }

        for (i, &g) in guess.iter().enumerate() {
            if !matched[i] && secret.contains(g) {
                result[i] = Feedback::Present;
            }
        }

        for (i, &g) in guess.iter().enumerate() {
            if !secret.contains(g) {
                result[i] = Feedback::None;
            }
        }

        Self(result)
    }

    /// Tags in column order
    #[inline]
    #[must_use]
    pub const fn tags(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    /// Tag for a single column
    ///
    /// # Panics
    /// Panics if column >= `WORD_LENGTH`
    #[inline]
    #[must_use]
    pub const fn get(&self, column: usize) -> Feedback {
        self.0[column]
    }

    /// Count `Correct` cells
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&f| f == Feedback::Correct).count()
    }

    /// Count `Present` cells
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&f| f == Feedback::Present).count()
    }

    /// Feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    #[cfg(test)]
    pub(crate) fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut result = [Feedback::None; WORD_LENGTH];
        for (slot, ch) in result.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => Feedback::Correct,
                'Y' | 'y' | '🟨' => Feedback::Present,
                '-' | '_' | '⬜' => Feedback::None,
                _ => return None,
            };
        }

        Some(Self(result))
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

impl fmt::Display for RowFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}
