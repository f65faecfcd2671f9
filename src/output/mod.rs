//! Terminal output formatting
//!
//! Colored rendering of feedback, rankings and command results.

pub mod display;
pub mod formatters;
pub mod progress;

pub use display::{
    print_analysis_result, print_ranking, print_recommendation, print_solve_result,
    print_suggestion,
};
pub use progress::scoring_bar;
