//! Candidate filtering
//!
//! Keeps the candidates that would have produced the observed feedback.

use crate::core::{Pattern, SolverError, Word};

/// Return the candidates consistent with `observed` for `guess`
///
/// Input order is preserved and the input is not modified.
///
/// # Errors
/// - `SolverError::EmptyCandidateSet` if `candidates` is empty
/// - `SolverError::InconsistentObservation` if no candidate matches
///
/// # Examples
/// ```
/// use wordle_advisor::core::{Pattern, Word};
/// use wordle_advisor::solver::filter_candidates;
/// use wordle_advisor::wordlists::loader::words_from_slice;
///
/// let candidates = words_from_slice(&["crane", "slate", "adieu", "roate"]);
/// let guess = Word::new("crane").unwrap();
/// let observed = Pattern::parse("bbgbg").unwrap();
///
/// let remaining = filter_candidates(&candidates, &guess, observed).unwrap();
/// assert_eq!(remaining, words_from_slice(&["slate"]));
/// ```
pub fn filter_candidates(
    candidates: &[Word],
    guess: &Word,
    observed: Pattern,
) -> Result<Vec<Word>, SolverError> {
    if candidates.is_empty() {
        return Err(SolverError::EmptyCandidateSet);
    }

    let remaining: Vec<Word> = candidates
        .iter()
        .filter(|&candidate| Pattern::calculate(guess, candidate) == observed)
        .cloned()
        .collect();

    if remaining.is_empty() {
        return Err(SolverError::InconsistentObservation {
            guess: guess.clone(),
            pattern: observed,
        });
    }

    Ok(remaining)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn keeps_only_consistent_words_in_order() {
        let candidates = words_from_slice(&["irate", "crate", "grate", "slate", "crane"]);
        let guess = word("crane");
        let observed = Pattern::calculate(&guess, &word("grate"));

        let remaining = filter_candidates(&candidates, &guess, observed).unwrap();
        assert_eq!(remaining, words_from_slice(&["irate", "grate"]));
    }

    #[test]
    fn contains_the_answer_that_produced_the_pattern() {
        let candidates = words_from_slice(&["crane", "slate", "adieu", "roate", "speed"]);
        let guess = word("roate");
        for answer in &candidates {
            let observed = Pattern::calculate(&guess, answer);
            let remaining = filter_candidates(&candidates, &guess, observed).unwrap();
            assert!(remaining.contains(answer));
            assert!(remaining.len() <= candidates.len());
        }
    }

    #[test]
    fn filtering_twice_is_idempotent() {
        let candidates = words_from_slice(&["irate", "crate", "grate", "slate", "crane"]);
        let guess = word("trace");
        let observed = Pattern::calculate(&guess, &word("crate"));

        let once = filter_candidates(&candidates, &guess, observed).unwrap();
        let twice = filter_candidates(&once, &guess, observed).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn perfect_pattern_keeps_only_the_guess() {
        let candidates = words_from_slice(&["irate", "crate", "grate"]);
        let remaining = filter_candidates(&candidates, &word("crate"), Pattern::PERFECT).unwrap();
        assert_eq!(remaining, words_from_slice(&["crate"]));
    }

    #[test]
    fn impossible_pattern_is_inconsistent() {
        let candidates = words_from_slice(&["irate", "crate", "grate"]);
        let guess = word("zzzzz");

        let err = filter_candidates(&candidates, &guess, Pattern::PERFECT).unwrap_err();
        assert_eq!(
            err,
            SolverError::InconsistentObservation {
                guess,
                pattern: Pattern::PERFECT,
            }
        );
    }

    #[test]
    fn empty_input_is_reported() {
        let err = filter_candidates(&[], &word("crane"), Pattern::ALL_ABSENT).unwrap_err();
        assert_eq!(err, SolverError::EmptyCandidateSet);
    }
}
