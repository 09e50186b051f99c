//! Wordle feedback calculation and representation
//!
//! Each guessed letter gets one verdict:
//! - `Correct` (green): right letter, right position
//! - `Present` (yellow): letter occurs elsewhere in the secret
//! - `Absent` (gray): no unmatched occurrence remains in the secret

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterVerdict {
    Absent,
    Present,
    Correct,
}

impl LetterVerdict {
    /// Compact symbol: `G`, `Y` or `-`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Verdicts for every position of one guess
///
/// Produced fresh per guess and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterVerdict; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([LetterVerdict::Correct; WORD_LENGTH]);

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// Implements Wordle's exact rules for duplicate letters.
    ///
    /// # Algorithm
    /// 1. Count every letter of the secret
    /// 2. First pass: mark exact matches `Correct` and remove them from the pool
    /// 3. Second pass: left to right over the rest, mark `Present` while the
    ///    pool still holds that letter, consuming one occurrence each time
    ///
    /// All exact matches are consumed before any `Present` is handed out, so a
    /// letter is never reported more often than the secret contains it.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterVerdict::*, Word};
    ///
    /// let secret = Word::new("abcde").unwrap();
    /// let guess = Word::new("aabbc").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret);
    ///
    /// assert_eq!(
    ///     feedback.verdicts(),
    ///     &[Correct, Absent, Present, Absent, Present]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut result = [LetterVerdict::Absent; WORD_LENGTH];
        let mut secret_available = secret.char_counts();

        // First pass: Mark greens (exact position matches)
        // Allow: Index needed to access guess[i], secret[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == secret.char_at(i) {
                result[i] = LetterVerdict::Correct;

                if let Some(count) = secret_available.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: Mark yellows from what the greens left behind
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterVerdict::Correct {
                continue;
            }
            if let Some(count) = secret_available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                result[i] = LetterVerdict::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[LetterVerdict; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is `Correct`
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.0
            .iter()
            .filter(|&&v| v == LetterVerdict::Correct)
            .count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in &self.0 {
            write!(f, "{}", verdict.symbol())?;
        }
        Ok(())
    }
}

/// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
///
/// Accepts:
/// - 'G'/'g'/🟩 for correct
/// - 'Y'/'y'/🟨 for present
/// - '-'/'_'/⬜ for absent
impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(format!("Invalid feedback string: {s}"));
        }

        let mut verdicts = [LetterVerdict::Absent; WORD_LENGTH];
        for (slot, ch) in verdicts.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => LetterVerdict::Correct,
                'Y' | 'y' | '🟨' => LetterVerdict::Present,
                '-' | '_' | '⬜' => LetterVerdict::Absent,
                _ => return Err(format!("Invalid feedback string: {s}")),
            };
        }

        Ok(Self(verdicts))
    }
}
