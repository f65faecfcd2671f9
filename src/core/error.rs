//! Errors reported by the filtering and ranking operations

use super::{Pattern, Word};
use thiserror::Error;

/// Recoverable solver conditions
///
/// None of these are fatal: the caller decides whether to abort the game or
/// ask for corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// There are no candidates left to filter or rank
    #[error("no candidate words remain; earlier feedback is inconsistent with the word list")]
    EmptyCandidateSet,

    /// No candidate produces the observed pattern for this guess
    #[error("no candidate word gives feedback {pattern} for guess '{guess}'")]
    InconsistentObservation { guess: Word, pattern: Pattern },

    /// There are no allowed guesses to rank
    #[error("the guess vocabulary is empty")]
    EmptyVocabulary,

    /// The game already ended with all-exact feedback
    #[error("the game is already solved; start a new one")]
    AlreadySolved,
}
