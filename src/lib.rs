//! Wordle Game
//!
//! A terminal Wordle game built around an exact, duplicate-aware guess
//! evaluator and an explicit session state machine.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Feedback, LetterVerdict, Word};
//!
//! let secret = Word::new("table").unwrap();
//! let guess = Word::new("bleat").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &secret);
//! assert_eq!(feedback.verdicts(), &[LetterVerdict::Present; 5]);
//! ```

// Core domain types
pub mod core;

// Engine errors
pub mod error;

// Sessions, statistics and the game facade
pub mod game;

// Statistics persistence
pub mod storage;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
