//! End-to-end scenarios through the public API.

use wordle_advisor::core::{Feedback, Pattern, SolverError, Word};
use wordle_advisor::solver::{Session, best_guess, filter_candidates, rank_guesses};
use wordle_advisor::wordlists::words_from_slice;

fn word(s: &str) -> Word {
    Word::new(s).unwrap()
}

#[test]
fn crane_against_slate_leaves_only_slate() {
    let vocabulary = words_from_slice(&["crane", "slate", "adieu", "roate"]);
    let candidates = vocabulary.clone();

    let pattern = Pattern::calculate(&word("crane"), &word("slate"));
    use Feedback::{Absent, Exact};
    assert_eq!(pattern.feedbacks(), [Absent, Absent, Exact, Absent, Exact]);

    let remaining = filter_candidates(&candidates, &word("crane"), pattern).unwrap();
    assert_eq!(remaining, vec![word("slate")]);

    let best = best_guess(&remaining, &vocabulary).unwrap();
    assert_eq!(best.word, word("slate"));
}

#[test]
fn speed_against_erase_respects_letter_counts() {
    use Feedback::{Absent, Present};
    let pattern = Pattern::calculate(&word("speed"), &word("erase"));
    assert_eq!(pattern.feedbacks(), [Present, Absent, Present, Present, Absent]);
}

#[test]
fn impossible_feedback_is_inconsistent() {
    let candidates = words_from_slice(&["crane", "slate", "adieu", "roate"]);
    let err = filter_candidates(&candidates, &word("zzzzz"), Pattern::PERFECT).unwrap_err();
    assert!(matches!(err, SolverError::InconsistentObservation { .. }));
}

#[test]
fn ranking_empty_candidates_is_reported() {
    let vocabulary = words_from_slice(&["crane", "slate"]);
    assert_eq!(
        rank_guesses(&[], &vocabulary).unwrap_err(),
        SolverError::EmptyCandidateSet
    );
}

#[test]
fn full_game_with_separate_solution_pool() {
    let vocabulary = words_from_slice(&[
        "crane", "slate", "adieu", "roate", "irate", "crate", "grate", "trace", "clamp",
    ]);
    let solutions = words_from_slice(&["irate", "crate", "grate", "trace"]);
    let answer = word("trace");

    let mut session = Session::new(&vocabulary, Some(&solutions)).unwrap();
    while !session.is_solved() {
        assert!(session.round() <= 6, "took too many rounds");
        let ranked = session.rank_with(|| {}).unwrap();
        let guess = ranked[0].word.clone();
        let before = session.candidates().len();
        let pattern = Pattern::calculate(&guess, &answer);
        let after = session.observe(guess, pattern).unwrap();
        assert!(after <= before);
        assert!(session.candidates().contains(&answer));
    }
    assert_eq!(session.candidates(), [answer].as_slice());
}
