//! Game sessions, statistics and the facade the front ends talk to
//!
//! ```
//! use wordle_game::game::{Game, SessionStatus, WordSource};
//! use wordle_game::storage::MemoryStore;
//! use wordle_game::wordlists::Vocabulary;
//!
//! let source = WordSource::seeded(Vocabulary::embedded(), 42);
//! let mut game = Game::new(source, MemoryStore::new()).unwrap();
//!
//! let secret = game.session().secret().clone();
//! let outcome = game.guess(secret.text()).unwrap();
//! assert_eq!(outcome.status, SessionStatus::Won);
//! assert_eq!(game.current_statistics().games_played, 1);
//! ```

mod engine;
mod session;
mod source;
mod stats;

pub use engine::GuessEngine;
pub use session::{GuessOutcome, GuessRecord, Session, SessionStatus};
pub use source::WordSource;
pub use stats::{Statistics, StatsSnapshot};

use crate::error::GameError;
use crate::storage::StatsStore;
use rand::Rng;
use rand::rngs::StdRng;

/// A running game: secret selection, the active session and statistics
pub struct Game<S, R = StdRng> {
    source: WordSource<R>,
    engine: GuessEngine,
    store: S,
}

impl<S: StatsStore, R: Rng> Game<S, R> {
    /// Load saved statistics and start the first session
    ///
    /// # Errors
    ///
    /// - `EmptyVocabulary` if no secret can be drawn
    /// - `Store` if saved statistics exist but cannot be read
    pub fn new(mut source: WordSource<R>, store: S) -> Result<Self, GameError> {
        let statistics = store.load()?.unwrap_or_default();
        let secret = source.pick_secret()?;

        tracing::info!(
            vocabulary = source.vocabulary().len(),
            games_played = statistics.games_played(),
            "game ready"
        );
        tracing::trace!(secret = %secret, "first secret chosen");

        Ok(Self {
            source,
            engine: GuessEngine::new(secret, statistics),
            store,
        })
    }

    /// Start a new session, discarding the current one
    ///
    /// # Errors
    ///
    /// Returns `EmptyVocabulary` if no secret can be drawn.
    pub fn new_session(&mut self) -> Result<(), GameError> {
        let secret = self.source.pick_secret()?;
        tracing::info!("new session");
        tracing::trace!(secret = %secret, "secret chosen");
        self.engine.reset(secret);
        Ok(())
    }

    /// Play one guess in the current session
    ///
    /// Surrounding whitespace is ignored and letters are uppercased.
    /// Statistics are saved when the guess ends the session; a failed save is
    /// logged and does not fail the guess.
    ///
    /// # Errors
    ///
    /// Returns a rejection (`GameError::is_rejected_guess`) for malformed
    /// guesses or a finished session; nothing changes in that case.
    pub fn guess(&mut self, text: &str) -> Result<GuessOutcome, GameError> {
        let outcome = self.engine.submit_guess(text.trim())?;

        if outcome.status.is_terminal()
            && let Err(err) = self.store.save(self.engine.statistics())
        {
            tracing::warn!("could not save statistics: {err}");
        }

        Ok(outcome)
    }

    #[must_use]
    pub fn current_statistics(&self) -> StatsSnapshot {
        self.engine.statistics().snapshot()
    }

    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        self.engine.statistics()
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        self.engine.session()
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MAX_ATTEMPTS, Word};
    use crate::storage::{JsonFileStore, MemoryStore, StoreError};
    use crate::wordlists::Vocabulary;

    fn single_word_game(secret: &str, store: MemoryStore) -> Game<MemoryStore> {
        let vocabulary = Vocabulary::new(vec![Word::new(secret).unwrap()]);
        Game::new(WordSource::seeded(vocabulary, 0), store).unwrap()
    }

    /// A valid guess guaranteed to miss `secret`
    fn miss_for(secret: &Word) -> &'static str {
        if secret.text() == "PIANO" { "MOUSE" } else { "PIANO" }
    }

    #[test]
    fn win_then_loss_updates_statistics() {
        let mut game = single_word_game("MEDIA", MemoryStore::new());

        let outcome = game.guess("MEDIA").unwrap();
        assert_eq!(outcome.status, SessionStatus::Won);

        game.new_session().unwrap();
        for _ in 0..MAX_ATTEMPTS {
            game.guess("CHAIR").unwrap();
        }
        assert_eq!(game.session().status(), SessionStatus::Lost);

        let stats = game.statistics();
        assert_eq!(stats.games_played(), 2);
        assert_eq!(stats.wins(), 1);
        assert_eq!(stats.current_streak(), 0);
        assert_eq!(game.current_statistics().win_percentage, 50);
    }

    #[test]
    fn guess_trims_and_normalizes_input() {
        let mut game = single_word_game("MEDIA", MemoryStore::new());
        let outcome = game.guess("  media\n").unwrap();
        assert_eq!(outcome.status, SessionStatus::Won);
    }

    #[test]
    fn rejected_guess_leaves_state_alone() {
        let mut game = single_word_game("MEDIA", MemoryStore::new());
        let before = game.session().clone();

        let err = game.guess("MED").unwrap_err();
        assert!(err.is_rejected_guess());
        assert_eq!(game.session(), &before);
    }

    #[test]
    fn finished_session_saves_statistics() {
        let mut game = single_word_game("MEDIA", MemoryStore::new());
        game.guess("PIANO").unwrap();
        assert_eq!(game.store().saved(), None);

        game.guess("MEDIA").unwrap();
        assert_eq!(game.store().saved(), Some(*game.statistics()));
    }

    #[test]
    fn saved_statistics_are_loaded_on_start() {
        let mut previous = Statistics::new();
        previous.record_outcome(true);
        previous.record_outcome(true);

        let game = single_word_game("MEDIA", MemoryStore::with(previous));
        assert_eq!(game.current_statistics().games_played, 2);
        assert_eq!(game.current_statistics().current_streak, 2);
    }

    #[test]
    fn empty_vocabulary_fails_at_startup() {
        let source = WordSource::seeded(Vocabulary::new(Vec::new()), 0);
        let result = Game::new(source, MemoryStore::new());
        assert!(matches!(result, Err(GameError::EmptyVocabulary)));
    }

    #[test]
    fn unreadable_statistics_fail_at_startup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        std::fs::write(&path, "{").unwrap();

        let source = WordSource::seeded(Vocabulary::embedded(), 0);
        let result = Game::new(source, JsonFileStore::new(&path));
        assert!(matches!(
            result,
            Err(GameError::Store(StoreError::Json { .. }))
        ));
    }

    struct ReadOnlyStore;

    impl StatsStore for ReadOnlyStore {
        fn load(&self) -> Result<Option<Statistics>, StoreError> {
            Ok(None)
        }

        fn save(&self, _statistics: &Statistics) -> Result<(), StoreError> {
            Err(StoreError::Io {
                path: "stats.json".into(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            })
        }
    }

    #[test]
    fn save_failure_does_not_fail_guess() {
        let vocabulary = Vocabulary::new(vec![Word::new("MEDIA").unwrap()]);
        let mut game = Game::new(WordSource::seeded(vocabulary, 0), ReadOnlyStore).unwrap();

        let outcome = game.guess("MEDIA").unwrap();
        assert_eq!(outcome.status, SessionStatus::Won);
        assert_eq!(game.current_statistics().games_played, 1);
    }

    #[test]
    fn seeded_games_replay_identically() {
        let mut a = Game::new(
            WordSource::seeded(Vocabulary::embedded(), 99),
            MemoryStore::new(),
        )
        .unwrap();
        let mut b = Game::new(
            WordSource::seeded(Vocabulary::embedded(), 99),
            MemoryStore::new(),
        )
        .unwrap();

        for _ in 0..5 {
            assert_eq!(a.session().secret(), b.session().secret());
            let miss = miss_for(a.session().secret());
            assert_eq!(a.guess(miss).unwrap(), b.guess(miss).unwrap());
            a.new_session().unwrap();
            b.new_session().unwrap();
        }
    }
}
