//! Secret word selection

use crate::core::Word;
use crate::error::GameError;
use crate::wordlists::Vocabulary;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Draws secret words uniformly from a fixed vocabulary
///
/// The random source is injected so games can be replayed from a seed.
#[derive(Debug, Clone)]
pub struct WordSource<R = StdRng> {
    vocabulary: Vocabulary,
    rng: R,
}

impl<R: Rng> WordSource<R> {
    pub const fn new(vocabulary: Vocabulary, rng: R) -> Self {
        Self { vocabulary, rng }
    }

    /// Pick a random secret word
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyVocabulary` if there is nothing to pick from.
    pub fn pick_secret(&mut self) -> Result<Word, GameError> {
        self.vocabulary
            .words()
            .choose(&mut self.rng)
            .cloned()
            .ok_or(GameError::EmptyVocabulary)
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

impl WordSource<StdRng> {
    /// Deterministic source: the same seed yields the same sequence of secrets
    #[must_use]
    pub fn seeded(vocabulary: Vocabulary, seed: u64) -> Self {
        Self::new(vocabulary, StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system
    #[must_use]
    pub fn from_os_rng(vocabulary: Vocabulary) -> Self {
        Self::new(vocabulary, StdRng::from_os_rng())
    }
}
