//! Core domain types for Wordle
//!
//! Words, feedback patterns and the errors the solver reports. Everything
//! here is pure and free of I/O.

mod error;
mod pattern;
mod word;

pub use error::SolverError;
pub use pattern::{Feedback, Pattern, PatternError};
pub use word::{WORD_LENGTH, Word, WordError};
