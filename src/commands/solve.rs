//! Word solving command
//!
//! Plays a full game against a known answer, always taking the top-ranked
//! guess, and records each step.

use crate::core::{Pattern, Word};
use crate::solver::Session;
use anyhow::{Result, bail};
use tracing::debug;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: Word,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: f64,
    pub expected_remaining: f64,
}

/// Solve a specific word against `vocabulary`
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid or not in the vocabulary
/// - The candidate set becomes empty (cannot happen for a listed target)
pub fn solve_word(config: SolveConfig, vocabulary: &[Word]) -> Result<SolveResult> {
    let target = Word::new(config.target.trim())?;
    if !vocabulary.contains(&target) {
        bail!("target '{target}' is not in the word list");
    }

    let mut session = Session::new(vocabulary, None)?;
    let mut guesses: Vec<GuessStep> = Vec::new();

    while guesses.len() < config.max_guesses {
        let candidates_before = session.candidates().len();

        let ranked = session.rank_with(|| {})?;
        let Some(best) = ranked.into_iter().next() else {
            bail!("no guesses available");
        };

        let pattern = Pattern::calculate(&best.word, &target);
        let candidates_after = session.observe(best.word.clone(), pattern)?;
        debug!(guess = %best.word, %pattern, candidates_after, "solve step");

        guesses.push(GuessStep {
            expected_remaining: best.expected_remaining(candidates_before),
            word: best.word,
            pattern,
            candidates_before,
            candidates_after,
            entropy: best.entropy,
        });

        if session.is_solved() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target,
    })
}
