//! Non-interactive suggestion command
//!
//! Replays a list of observed guesses and ranks what to play next.

use crate::core::{Pattern, SolverError, Word};
use crate::solver::{ScoredGuess, Session};
use anyhow::{Context, anyhow};
use std::str::FromStr;

/// A guess together with the feedback it received, written `crane=bbgbg`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub guess: Word,
    pub pattern: Pattern,
}

impl FromStr for Observation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (guess, pattern) = s
            .split_once(['=', ':'])
            .ok_or_else(|| anyhow!("expected WORD=FEEDBACK, e.g. crane=bbgbg"))?;

        Ok(Self {
            guess: Word::new(guess.trim()).context("invalid guess")?,
            pattern: Pattern::parse(pattern).context("invalid feedback")?,
        })
    }
}

/// Remaining candidates and the full ranking after replaying history
pub struct Suggestion {
    pub candidates: Vec<Word>,
    pub ranked: Vec<ScoredGuess>,
}

/// Replay `history` over `vocabulary` and rank the next guess
///
/// # Errors
/// Returns `SolverError::InconsistentObservation` for the first observation
/// that no remaining word fits, and `SolverError::AlreadySolved` for any
/// observation after an all-green one.
pub fn suggest<F>(
    vocabulary: &[Word],
    history: &[Observation],
    on_scored: F,
) -> Result<Suggestion, SolverError>
where
    F: Fn() + Sync,
{
    let mut session = Session::new(vocabulary, None)?;
    for observation in history {
        session.observe(observation.guess.clone(), observation.pattern)?;
    }

    let ranked = session.rank_with(on_scored)?;
    Ok(Suggestion {
        candidates: session.candidates().to_vec(),
        ranked,
    })
}
