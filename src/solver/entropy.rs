//! Shannon entropy of the feedback distribution a guess induces
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::{Pattern, SolverError, Word};
use rustc_hash::FxHashMap;

/// Partition statistics for a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Largest bucket (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of non-empty buckets
    pub partitions: usize,
}

/// Count candidates per induced pattern, indexed by `Pattern::value`
#[must_use]
pub fn pattern_histogram(guess: &Word, candidates: &[Word]) -> [u32; Pattern::COUNT] {
    let mut counts = [0u32; Pattern::COUNT];
    for candidate in candidates {
        counts[usize::from(Pattern::calculate(guess, candidate).value())] += 1;
    }
    counts
}

/// Group candidates by the pattern they produce with the guess
#[must_use]
pub fn group_by_pattern<'a>(
    guess: &Word,
    candidates: &'a [Word],
) -> FxHashMap<Pattern, Vec<&'a Word>> {
    let mut groups: FxHashMap<Pattern, Vec<&Word>> = FxHashMap::default();
    for candidate in candidates {
        groups
            .entry(Pattern::calculate(guess, candidate))
            .or_default()
            .push(candidate);
    }
    groups
}

/// Calculate Shannon entropy from bucket counts
///
/// H = -Σ p * log₂(p), summed over non-empty buckets.
///
/// # Properties
/// - Returns 0.0 when everything lands in one bucket (or there is nothing)
/// - Maximized for a uniform distribution
/// - Always in range [0, log₂(n)] for n items
///
/// # Examples
/// ```
/// use wordle_advisor::solver::entropy::shannon_entropy;
///
/// let entropy = shannon_entropy(&[25, 25, 0, 25, 25]);
/// assert!((entropy - 2.0).abs() < 1e-12); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy(counts: &[u32]) -> f64 {
    let total: f64 = counts.iter().map(|&c| f64::from(c)).sum();
    if total == 0.0 {
        return 0.0;
    }

    // p * log2(1/p) keeps every term non-negative
    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let count = f64::from(count);
            (count / total) * (total / count).log2()
        })
        .sum()
}

/// Calculate the entropy of `guess` over `candidates`
///
/// # Errors
/// Returns `SolverError::EmptyCandidateSet` when there are no candidates,
/// since the distribution is undefined.
pub fn calculate_entropy(guess: &Word, candidates: &[Word]) -> Result<f64, SolverError> {
    if candidates.is_empty() {
        return Err(SolverError::EmptyCandidateSet);
    }
    Ok(shannon_entropy(&pattern_histogram(guess, candidates)))
}

/// Calculate entropy together with the partition shape
///
/// # Errors
/// Returns `SolverError::EmptyCandidateSet` when there are no candidates.
pub fn calculate_metrics(guess: &Word, candidates: &[Word]) -> Result<GuessMetrics, SolverError> {
    if candidates.is_empty() {
        return Err(SolverError::EmptyCandidateSet);
    }

    let histogram = pattern_histogram(guess, candidates);
    let total = candidates.len() as f64;

    // Σ c² is exact in integers; divide once
    let sum_of_squares: u64 = histogram.iter().map(|&c| u64::from(c).pow(2)).sum();
    let expected_remaining = sum_of_squares as f64 / total;

    Ok(GuessMetrics {
        entropy: shannon_entropy(&histogram),
        expected_remaining,
        max_partition: histogram.iter().max().map_or(0, |&c| c as usize),
        partitions: histogram.iter().filter(|&&c| c > 0).count(),
    })
}
