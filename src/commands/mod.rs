//! Command implementations

pub mod analyze;
pub mod play;
pub mod solve;
pub mod suggest;

pub use analyze::{AnalysisResult, analyze_word};
pub use play::{PlayOutcome, run_play};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
pub use suggest::{Observation, Suggestion, suggest};
