//! Core domain types for Wordle
//!
//! Words, per-letter verdicts and the evaluation that produces them.
//! Everything here is pure: no randomness, no I/O, no session state.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterVerdict};
pub use word::{Word, WordError};

/// Number of letters in every word and guess
pub const WORD_LENGTH: usize = 5;

/// Number of guesses a session allows before it is lost
pub const MAX_ATTEMPTS: usize = 6;
