//! Round-by-round game state owned by the caller
//!
//! A `Session` holds the candidate set and the observations made so far.
//! The filtering and ranking functions stay pure; this is the only place
//! the candidate set is replaced.

use super::filter::filter_candidates;
use super::ranking::{ScoredGuess, rank_guesses_with};
use crate::core::{Pattern, SolverError, Word};
use tracing::debug;

/// One observed guess and the candidates that existed before it
#[derive(Debug, Clone)]
pub struct Round {
    pub guess: Word,
    pub pattern: Pattern,
    candidates_before: Vec<Word>,
}

impl Round {
    /// Candidate count before this observation was applied
    #[must_use]
    pub fn candidates_before(&self) -> usize {
        self.candidates_before.len()
    }
}

/// State of a single game
#[derive(Debug, Clone)]
pub struct Session<'a> {
    vocabulary: &'a [Word],
    initial: Vec<Word>,
    candidates: Vec<Word>,
    rounds: Vec<Round>,
    solved: bool,
}

impl<'a> Session<'a> {
    /// Start a game
    ///
    /// # Parameters
    /// - `vocabulary`: every allowed guess
    /// - `solutions`: possible answers, or `None` to use the vocabulary
    ///
    /// # Errors
    /// Returns `SolverError::EmptyCandidateSet` if there are no possible
    /// answers and `SolverError::EmptyVocabulary` if there are no guesses.
    pub fn new(vocabulary: &'a [Word], solutions: Option<&[Word]>) -> Result<Self, SolverError> {
        if vocabulary.is_empty() {
            return Err(SolverError::EmptyVocabulary);
        }

        let initial = solutions.unwrap_or(vocabulary).to_vec();
        if initial.is_empty() {
            return Err(SolverError::EmptyCandidateSet);
        }

        Ok(Self {
            vocabulary,
            candidates: initial.clone(),
            initial,
            rounds: Vec::new(),
            solved: false,
        })
    }

    /// Words still consistent with every observation
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &'a [Word] {
        self.vocabulary
    }

    /// Current round number, starting at 1
    #[must_use]
    pub fn round(&self) -> usize {
        self.rounds.len() + 1
    }

    /// Observations made so far
    #[must_use]
    pub fn history(&self) -> &[Round] {
        &self.rounds
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// Rank the vocabulary against the current candidates
    ///
    /// # Errors
    /// Returns `SolverError::EmptyCandidateSet` if no candidates remain.
    pub fn rank_with<F>(&self, on_scored: F) -> Result<Vec<ScoredGuess>, SolverError>
    where
        F: Fn() + Sync,
    {
        rank_guesses_with(&self.candidates, self.vocabulary, on_scored)
    }

    /// Apply the feedback observed for `guess`
    ///
    /// An all-exact pattern on a candidate ends the game with `guess` as the
    /// only candidate. Returns the number of candidates left.
    ///
    /// # Errors
    /// - `SolverError::AlreadySolved` once the game has been solved
    /// - `SolverError::InconsistentObservation` if no candidate fits,
    ///   including all-exact feedback for a word that is not a candidate
    ///
    /// The session is unchanged on error.
    pub fn observe(&mut self, guess: Word, pattern: Pattern) -> Result<usize, SolverError> {
        if self.solved {
            return Err(SolverError::AlreadySolved);
        }

        let remaining = filter_candidates(&self.candidates, &guess, pattern)?;
        let solved = pattern.is_perfect() && remaining.as_slice() == std::slice::from_ref(&guess);

        debug!(
            guess = %guess,
            pattern = %pattern,
            before = self.candidates.len(),
            after = remaining.len(),
            "observation applied"
        );

        let candidates_before = std::mem::replace(&mut self.candidates, remaining);
        self.rounds.push(Round {
            guess,
            pattern,
            candidates_before,
        });
        self.solved = solved;

        Ok(self.candidates.len())
    }

    /// Revert the last observation
    ///
    /// Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(round) = self.rounds.pop() else {
            return false;
        };
        debug!(guess = %round.guess, "observation undone");
        self.candidates = round.candidates_before;
        self.solved = false;
        true
    }

    /// Start a new game over the same word lists
    pub fn reset(&mut self) {
        self.candidates.clone_from(&self.initial);
        self.rounds.clear();
        self.solved = false;
    }
}
