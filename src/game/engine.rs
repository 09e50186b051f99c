//! Guess evaluation and the session state machine

use super::session::{GuessOutcome, GuessRecord, Session, SessionStatus};
use super::stats::Statistics;
use crate::core::{Feedback, MAX_ATTEMPTS, Word};
use crate::error::GameError;

/// Owns the active session and the cumulative statistics
///
/// Every transition out of `InProgress` records exactly one outcome.
#[derive(Debug, Clone)]
pub struct GuessEngine {
    session: Session,
    statistics: Statistics,
}

impl GuessEngine {
    #[must_use]
    pub fn new(secret: Word, statistics: Statistics) -> Self {
        Self {
            session: Session::new(secret),
            statistics,
        }
    }

    /// Discard the current session and start over against `secret`
    ///
    /// An unfinished session is dropped without counting as a game.
    pub fn reset(&mut self, secret: Word) {
        if !self.session.status().is_terminal() && self.session.attempts_used() > 0 {
            tracing::debug!(
                attempts = self.session.attempts_used(),
                "abandoning unfinished session"
            );
        }
        self.session = Session::new(secret);
    }

    /// Parse `text` and submit it as a guess
    ///
    /// # Errors
    ///
    /// - `SessionOver` if the session already ended
    /// - `InvalidLength` / `InvalidCharacters` if `text` is not a 5-letter word
    ///
    /// A rejected guess consumes no attempt and changes nothing.
    pub fn submit_guess(&mut self, text: &str) -> Result<GuessOutcome, GameError> {
        self.ensure_in_progress()?;
        let guess = Word::new(text)?;
        self.submit_word(&guess)
    }

    /// Submit an already validated guess
    ///
    /// # Errors
    ///
    /// Returns `SessionOver` if the session already ended.
    pub fn submit_word(&mut self, guess: &Word) -> Result<GuessOutcome, GameError> {
        self.ensure_in_progress()?;

        let feedback = Feedback::calculate(guess, self.session.secret());
        let attempts_used = self.session.attempts_used() + 1;

        let status = if guess == self.session.secret() {
            SessionStatus::Won
        } else if attempts_used == MAX_ATTEMPTS {
            SessionStatus::Lost
        } else {
            SessionStatus::InProgress
        };

        tracing::debug!(
            guess = %guess,
            feedback = %feedback,
            attempt = attempts_used,
            "evaluated guess"
        );

        self.session.record(
            GuessRecord {
                guess: guess.clone(),
                feedback,
            },
            status,
        );

        if status.is_terminal() {
            let won = status == SessionStatus::Won;
            self.statistics.record_outcome(won);
            tracing::info!(
                won,
                attempts = attempts_used,
                games_played = self.statistics.games_played(),
                streak = self.statistics.current_streak(),
                "session finished"
            );
        }

        Ok(GuessOutcome {
            feedback,
            status,
            attempts_used,
        })
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.session.status().is_terminal() {
            return Err(GameError::SessionOver);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterVerdict::{Absent, Correct, Present};

    fn engine(secret: &str) -> GuessEngine {
        GuessEngine::new(Word::new(secret).unwrap(), Statistics::new())
    }

    #[test]
    fn exact_guess_wins_on_first_attempt() {
        let mut engine = engine("MEDIA");
        let outcome = engine.submit_guess("MEDIA").unwrap();

        assert!(outcome.feedback.is_perfect());
        assert_eq!(outcome.status, SessionStatus::Won);
        assert_eq!(outcome.attempts_used, 1);
        assert_eq!(engine.statistics().games_played(), 1);
        assert_eq!(engine.statistics().current_streak(), 1);
    }

    #[test]
    fn anagram_keeps_session_going() {
        let mut engine = engine("TABLE");
        let outcome = engine.submit_guess("BLEAT").unwrap();

        assert_eq!(outcome.feedback.verdicts(), &[Present; 5]);
        assert_eq!(outcome.status, SessionStatus::InProgress);
        assert_eq!(outcome.attempts_used, 1);
        assert_eq!(engine.statistics().games_played(), 0);
    }

    #[test]
    fn duplicate_letters_in_guess() {
        let mut engine = engine("ABCDE");
        let outcome = engine.submit_guess("AABBC").unwrap();

        assert_eq!(
            outcome.feedback.verdicts(),
            &[Correct, Absent, Present, Absent, Present]
        );
    }

    #[test]
    fn short_guess_is_rejected_without_consuming_attempt() {
        let mut engine = engine("MEDIA");
        let err = engine.submit_guess("MEDI").unwrap_err();

        assert!(matches!(
            err,
            GameError::InvalidLength {
                expected: 5,
                actual: 4
            }
        ));
        assert_eq!(engine.session().attempts_used(), 0);
        assert_eq!(engine.session().status(), SessionStatus::InProgress);
    }

    #[test]
    fn non_letters_are_rejected_without_consuming_attempt() {
        let mut engine = engine("MEDIA");
        assert!(matches!(
            engine.submit_guess("M3DIA"),
            Err(GameError::InvalidCharacters)
        ));
        assert_eq!(engine.session().attempts_used(), 0);
    }

    #[test]
    fn lowercase_guess_is_normalized() {
        let mut engine = engine("MEDIA");
        let outcome = engine.submit_guess("media").unwrap();
        assert_eq!(outcome.status, SessionStatus::Won);
    }

    #[test]
    fn six_misses_lose_the_session() {
        let mut engine = engine("MEDIA");

        for attempt in 1..MAX_ATTEMPTS {
            let outcome = engine.submit_guess("CHAIR").unwrap();
            assert_eq!(outcome.status, SessionStatus::InProgress);
            assert_eq!(outcome.attempts_used, attempt);
        }
        assert_eq!(engine.statistics().games_played(), 0);

        let outcome = engine.submit_guess("CHAIR").unwrap();
        assert_eq!(outcome.status, SessionStatus::Lost);
        assert_eq!(outcome.attempts_used, MAX_ATTEMPTS);
        assert_eq!(engine.statistics().games_played(), 1);
        assert_eq!(engine.statistics().current_streak(), 0);
    }

    #[test]
    fn finished_session_rejects_further_guesses() {
        let mut engine = engine("MEDIA");
        for _ in 0..MAX_ATTEMPTS {
            engine.submit_guess("PIANO").unwrap();
        }

        let err = engine.submit_guess("MEDIA").unwrap_err();
        assert!(matches!(err, GameError::SessionOver));
        assert!(err.is_rejected_guess());
        assert_eq!(engine.session().status(), SessionStatus::Lost);
        assert_eq!(engine.session().attempts_used(), MAX_ATTEMPTS);
        // The rejected guess must not record a second outcome
        assert_eq!(engine.statistics().games_played(), 1);
    }

    #[test]
    fn win_on_last_attempt_counts_as_win() {
        let mut engine = engine("MEDIA");
        for _ in 1..MAX_ATTEMPTS {
            engine.submit_guess("PIANO").unwrap();
        }
        let outcome = engine.submit_guess("MEDIA").unwrap();

        assert_eq!(outcome.status, SessionStatus::Won);
        assert_eq!(engine.statistics().wins(), 1);
    }

    #[test]
    fn outcome_recorded_once_per_session() {
        let mut engine = engine("MEDIA");
        engine.submit_guess("MEDIA").unwrap();
        assert!(engine.submit_guess("MEDIA").is_err());
        assert_eq!(engine.statistics().games_played(), 1);

        engine.reset(Word::new("TABLE").unwrap());
        for _ in 0..MAX_ATTEMPTS {
            engine.submit_guess("MOUSE").unwrap();
        }

        let stats = engine.statistics();
        assert_eq!(stats.games_played(), 2);
        assert_eq!(stats.wins(), 1);
        assert_eq!(stats.current_streak(), 0);
    }

    #[test]
    fn reset_discards_unfinished_session() {
        let mut engine = engine("MEDIA");
        engine.submit_guess("PIANO").unwrap();
        engine.reset(Word::new("TABLE").unwrap());

        assert_eq!(engine.session().attempts_used(), 0);
        assert_eq!(engine.session().secret().text(), "TABLE");
        assert_eq!(engine.statistics().games_played(), 0);
    }
}
