//! Check command
//!
//! Evaluates a single guess against a given secret, outside of any session.

use crate::core::{Feedback, Word};
use crate::error::GameError;

/// Result of checking one guess
pub struct CheckResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either input is not a 5-letter word.
pub fn check_guess(secret: &str, guess: &str) -> Result<CheckResult, GameError> {
    let secret = Word::new(secret.trim())?;
    let guess = Word::new(guess.trim())?;
    let feedback = Feedback::calculate(&guess, &secret);

    Ok(CheckResult {
        secret,
        guess,
        feedback,
    })
}
