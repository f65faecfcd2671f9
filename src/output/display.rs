//! Display functions for command results

use super::formatters::{colored_guess, entropy_bar, pattern_to_emoji};
use crate::commands::{AnalysisResult, SolveResult, Suggestion};
use crate::solver::ScoredGuess;
use colored::Colorize;

/// Print the top `top_k` ranked guesses as "index word score"
///
/// Guesses that could be the answer are marked with `*`.
pub fn print_ranking(ranked: &[ScoredGuess], top_k: usize) {
    for (i, guess) in ranked.iter().take(top_k).enumerate() {
        let marker = if guess.in_candidates { "*" } else { " " };
        println!(
            "{i:>3} {}{} {:.3}",
            guess.word.text(),
            marker.bright_green(),
            guess.entropy
        );
    }
}

/// Print the recommendation line
pub fn print_recommendation(best: &ScoredGuess, remaining: usize) {
    println!(
        "Suggested next guess: {}  ({:.3} bits, ~{:.1} left)",
        best.word.text().to_uppercase().bright_yellow().bold(),
        best.entropy,
        best.expected_remaining(remaining)
    );
}

/// Print a non-interactive suggestion
pub fn print_suggestion(suggestion: &Suggestion, top_k: usize) {
    let remaining = suggestion.candidates.len();
    println!(
        "\n{} possible word{} remaining.",
        remaining,
        if remaining == 1 { "" } else { "s" }
    );
    if remaining <= 10 {
        let words: Vec<String> = suggestion
            .candidates
            .iter()
            .map(|w| w.text().to_uppercase())
            .collect();
        println!("  {}", words.join(", "));
    }
    println!();
    print_ranking(&suggestion.ranked, top_k);
    if let Some(best) = suggestion.ranked.first() {
        println!();
        print_recommendation(best, remaining);
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&step.word, step.pattern),
            pattern_to_emoji(step.pattern)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Entropy:    {:.3} bits", step.entropy);
            println!("  Expected:   {:.1} candidates", step.expected_remaining);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.metrics.entropy, result.total_candidates, 30);

    println!("\nAgainst {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.metrics.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.metrics.entropy.exp2()
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.metrics.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates ({} patterns)",
        result.metrics.max_partition, result.metrics.partitions
    );
}
