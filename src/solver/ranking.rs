//! Guess ranking by expected information gain
//!
//! Every allowed guess is scored against the current candidates, then the
//! whole list is sorted once. Scoring is parallel; the order is not.

use super::entropy::{pattern_histogram, shannon_entropy};
use crate::core::{SolverError, Word};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// Resolution at which two entropies count as tied, in bits
pub const TIE_RESOLUTION: f64 = 1e-9;

/// A guess with its entropy over the current candidates
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredGuess {
    pub word: Word,
    /// Expected information gain in bits
    pub entropy: f64,
    /// Whether the guess could itself be the answer
    pub in_candidates: bool,
}

impl ScoredGuess {
    /// Entropy rounded to `TIE_RESOLUTION`, used for ordering
    #[must_use]
    pub fn score_key(&self) -> u64 {
        (self.entropy / TIE_RESOLUTION).round() as u64
    }

    /// Expected candidate count after playing this guess, given `total` now
    #[must_use]
    pub fn expected_remaining(&self, total: usize) -> f64 {
        total as f64 / self.entropy.exp2()
    }
}

/// Ranking order: higher entropy first, then candidates, then lexical
#[must_use]
pub fn compare_ranked(a: &ScoredGuess, b: &ScoredGuess) -> Ordering {
    b.score_key()
        .cmp(&a.score_key())
        .then_with(|| b.in_candidates.cmp(&a.in_candidates))
        .then_with(|| a.word.cmp(&b.word))
}

/// Score every word in `vocabulary` against `candidates` and rank them
///
/// Each vocabulary word appears exactly once in the result.
///
/// # Errors
/// Returns `SolverError::EmptyCandidateSet` if `candidates` is empty.
///
/// # Examples
/// ```
/// use wordle_advisor::solver::rank_guesses;
/// use wordle_advisor::wordlists::loader::words_from_slice;
///
/// let vocabulary = words_from_slice(&["aaaaa", "crane", "slate"]);
/// let candidates = words_from_slice(&["slate", "crate", "irate"]);
///
/// let ranked = rank_guesses(&candidates, &vocabulary).unwrap();
/// assert_eq!(ranked.len(), 3);
/// assert_eq!(ranked.last().unwrap().word.text(), "aaaaa");
/// ```
pub fn rank_guesses(
    candidates: &[Word],
    vocabulary: &[Word],
) -> Result<Vec<ScoredGuess>, SolverError> {
    rank_guesses_with(candidates, vocabulary, || {})
}

/// Same as [`rank_guesses`], calling `on_scored` once per scored guess
///
/// The hook may be called from several threads at once.
///
/// # Errors
/// Returns `SolverError::EmptyCandidateSet` if `candidates` is empty.
pub fn rank_guesses_with<F>(
    candidates: &[Word],
    vocabulary: &[Word],
    on_scored: F,
) -> Result<Vec<ScoredGuess>, SolverError>
where
    F: Fn() + Sync,
{
    if candidates.is_empty() {
        return Err(SolverError::EmptyCandidateSet);
    }

    let candidate_set: FxHashSet<&Word> = candidates.iter().collect();

    let mut scored: Vec<ScoredGuess> = vocabulary
        .par_iter()
        .map(|guess| {
            let entropy = shannon_entropy(&pattern_histogram(guess, candidates));
            on_scored();
            ScoredGuess {
                word: guess.clone(),
                entropy,
                in_candidates: candidate_set.contains(guess),
            }
        })
        .collect();

    scored.sort_by(compare_ranked);
    Ok(scored)
}

/// The top-ranked guess
///
/// # Errors
/// Returns `SolverError::EmptyCandidateSet` if `candidates` is empty and
/// `SolverError::EmptyVocabulary` if there is nothing to guess.
pub fn best_guess(candidates: &[Word], vocabulary: &[Word]) -> Result<ScoredGuess, SolverError> {
    rank_guesses(candidates, vocabulary)?
        .into_iter()
        .next()
        .ok_or(SolverError::EmptyVocabulary)
}
