//! Guess evaluation command
//!
//! Scores a single guess against a given secret without playing a game.

use crate::core::{RowFeedback, Word, WordError};

/// Result of evaluating one guess
pub struct EvaluationResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: RowFeedback,
    pub solved: bool,
}

/// Evaluate `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
///
/// # Examples
/// ```
/// use dashwords::commands::evaluate_guess;
///
/// let result = evaluate_guess("crane", "slate").unwrap();
/// assert_eq!(result.feedback.to_emoji(), "⬜⬜🟩⬜🟩");
/// assert!(!result.solved);
/// ```
pub fn evaluate_guess(secret: &str, guess: &str) -> Result<EvaluationResult, WordError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    let feedback = RowFeedback::evaluate(&guess.letters(), &secret);
    let solved = guess == secret;

    Ok(EvaluationResult {
        secret,
        guess,
        feedback,
        solved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_case_insensitively() {
        let result = evaluate_guess("CRANE", "trace").unwrap();
        assert_eq!(result.guess.text(), "TRACE");
        assert_eq!(result.feedback, RowFeedback::parse("-GGYG").unwrap());
        assert!(!result.solved);
    }

    #[test]
    fn exact_match_is_solved() {
        let result = evaluate_guess("crane", "crane").unwrap();
        assert!(result.solved);
        assert_eq!(result.feedback.count_correct(), 5);
    }

    #[test]
    fn invalid_words_are_rejected() {
        assert!(matches!(
            evaluate_guess("crane", "cat"),
            Err(WordError::InvalidLength(3))
        ));
        assert!(evaluate_guess("cr4ne", "crane").is_err());
    }
}
