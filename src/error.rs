//! Error types for the game engine

use crate::core::{WORD_LENGTH, WordError};
use crate::storage::StoreError;
use thiserror::Error;

/// Errors surfaced by the game engine
#[derive(Debug, Error)]
pub enum GameError {
    /// The guess does not have exactly `WORD_LENGTH` letters
    #[error("Word must be {expected} letters long, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The guess contains something other than the letters A-Z
    #[error("Word must contain only the letters A-Z")]
    InvalidCharacters,

    /// The session already ended in a win or a loss
    #[error("This game is over, start a new one")]
    SessionOver,

    /// No secret word can be drawn
    #[error("Vocabulary is empty, no secret word can be chosen")]
    EmptyVocabulary,

    /// Statistics could not be loaded at startup
    #[error("Failed to load statistics: {0}")]
    Store(#[from] StoreError),
}

impl GameError {
    /// Whether this error only rejected a single guess
    ///
    /// Rejected guesses consume no attempt and leave the session untouched;
    /// the caller can simply ask for another guess.
    #[must_use]
    pub const fn is_rejected_guess(&self) -> bool {
        matches!(
            self,
            Self::InvalidLength { .. } | Self::InvalidCharacters | Self::SessionOver
        )
    }
}

impl From<WordError> for GameError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength(actual) => Self::InvalidLength {
                expected: WORD_LENGTH,
                actual,
            },
            WordError::NonAscii | WordError::InvalidCharacters => Self::InvalidCharacters,
        }
    }
}
