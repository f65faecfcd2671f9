//! Wordle Advisor
//!
//! Recommends Wordle guesses by expected information gain and narrows the
//! candidate list from observed feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_advisor::core::{Pattern, Word};
//! use wordle_advisor::solver::{best_guess, filter_candidates};
//! use wordle_advisor::wordlists::words_from_slice;
//!
//! let vocabulary = words_from_slice(&["crane", "slate", "adieu", "roate"]);
//!
//! let guess = best_guess(&vocabulary, &vocabulary).unwrap();
//! let feedback = Pattern::calculate(&guess.word, &Word::new("slate").unwrap());
//!
//! let remaining = filter_candidates(&vocabulary, &guess.word, feedback).unwrap();
//! assert!(remaining.contains(&Word::new("slate").unwrap()));
//! ```

// Core domain types
pub mod core;

// Filtering and ranking
pub mod solver;

// Word lists
pub mod wordlists;

// Runtime settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
