//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterVerdict, Word};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile, e.g. ` M ` on green
#[must_use]
pub fn letter_tile(letter: u8, verdict: LetterVerdict) -> ColoredString {
    let tile = format!(" {} ", char::from(letter));
    match verdict {
        LetterVerdict::Correct => tile.black().on_green().bold(),
        LetterVerdict::Present => tile.black().on_yellow().bold(),
        LetterVerdict::Absent => tile.white().on_bright_black().bold(),
    }
}

/// Render a guess as a row of colored tiles
#[must_use]
pub fn guess_tiles(guess: &Word, feedback: Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.verdicts())
        .map(|(&letter, &verdict)| letter_tile(letter, verdict).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_tiles_contains_letters_in_order() {
        colored::control::set_override(false);
        let guess = Word::new("media").unwrap();
        let tiles = guess_tiles(&guess, Feedback::PERFECT);
        assert_eq!(tiles, " M   E   D   I   A ");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
