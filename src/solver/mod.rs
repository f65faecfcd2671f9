//! Filtering and ranking
//!
//! The candidate filter and the entropy ranker are pure functions over word
//! slices. `Session` carries the state between rounds.

pub mod entropy;
mod filter;
pub mod ranking;
pub mod session;

pub use filter::filter_candidates;
pub use ranking::{ScoredGuess, best_guess, rank_guesses, rank_guesses_with};
pub use session::{Round, Session};
