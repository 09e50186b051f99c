//! Per-game session state

use crate::core::{Feedback, LetterVerdict, MAX_ATTEMPTS, Word};
use rustc_hash::FxHashMap;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    InProgress,
    Won,
    Lost,
}

impl SessionStatus {
    /// `Won` and `Lost` accept no further guesses
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One consumed attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub feedback: Feedback,
}

/// What the engine reports back for an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    pub feedback: Feedback,
    pub status: SessionStatus,
    pub attempts_used: usize,
}

/// A single round of play against one secret word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    secret: Word,
    status: SessionStatus,
    history: Vec<GuessRecord>,
}

impl Session {
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            status: SessionStatus::InProgress,
            history: Vec::with_capacity(MAX_ATTEMPTS),
        }
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    /// Number of guesses consumed so far
    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.attempts_used()
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Best verdict seen so far for each guessed letter
    ///
    /// A letter once `Correct` somewhere stays `Correct` even if a later guess
    /// placed it wrongly. Letters never guessed are absent from the map.
    #[must_use]
    pub fn letter_hints(&self) -> FxHashMap<u8, LetterVerdict> {
        let mut hints = FxHashMap::default();
        for record in &self.history {
            for (&letter, &verdict) in record.guess.chars().iter().zip(record.feedback.verdicts()) {
                hints
                    .entry(letter)
                    .and_modify(|best: &mut LetterVerdict| *best = (*best).max(verdict))
                    .or_insert(verdict);
            }
        }
        hints
    }

    pub(super) fn record(&mut self, record: GuessRecord, status: SessionStatus) {
        debug_assert!(!self.status.is_terminal(), "session already finished");
        debug_assert!(self.history.len() < MAX_ATTEMPTS, "attempt limit exceeded");
        self.history.push(record);
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(guess: &str, secret: &Word) -> GuessRecord {
        let guess = Word::new(guess).unwrap();
        let feedback = Feedback::calculate(&guess, secret);
        GuessRecord { guess, feedback }
    }

    #[test]
    fn new_session_is_in_progress() {
        let session = Session::new(Word::new("media").unwrap());
        assert_eq!(session.status(), SessionStatus::InProgress);
        assert_eq!(session.attempts_used(), 0);
        assert_eq!(session.attempts_remaining(), MAX_ATTEMPTS);
        assert!(session.history().is_empty());
        assert!(session.letter_hints().is_empty());
    }

    #[test]
    fn terminal_statuses() {
        assert!(!SessionStatus::InProgress.is_terminal());
        assert!(SessionStatus::Won.is_terminal());
        assert!(SessionStatus::Lost.is_terminal());
    }

    #[test]
    fn letter_hints_keep_best_verdict() {
        let secret = Word::new("table").unwrap();
        let mut session = Session::new(secret.clone());

        session.record(record("bleat", &secret), SessionStatus::InProgress);
        session.record(record("cable", &secret), SessionStatus::InProgress);

        let hints = session.letter_hints();
        // B was Present in BLEAT, then Correct in CABLE
        assert_eq!(hints.get(&b'B'), Some(&LetterVerdict::Correct));
        assert_eq!(hints.get(&b'T'), Some(&LetterVerdict::Present));
        assert_eq!(hints.get(&b'C'), Some(&LetterVerdict::Absent));
        assert_eq!(hints.get(&b'Z'), None);
        assert_eq!(session.attempts_used(), 2);
    }
}
