//! Interactive play mode
//!
//! Each round ranks the vocabulary, shows the best guesses, then reads the
//! guess actually played and the feedback it received.

use crate::config::Config;
use crate::core::{Pattern, SolverError, Word};
use crate::output::formatters::feedback_line;
use crate::output::{print_ranking, print_recommendation, scoring_bar};
use crate::solver::Session;
use anyhow::{Result, bail};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

/// How an interactive game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Solved { guesses: usize },
    Quit,
}

/// What the user typed at a prompt
enum Reply<T> {
    Value(T),
    Undo,
    New,
    Quit,
}

/// Run the interactive loop until the word is solved or the user quits
///
/// End of input counts as quitting.
///
/// # Errors
///
/// Returns an error on I/O failure or if ranking is impossible.
pub fn run_play<R: BufRead>(
    session: &mut Session<'_>,
    config: &Config,
    input: &mut R,
) -> Result<PlayOutcome> {
    println!("After each guess, enter the feedback as five letters:");
    println!("  g = green (right spot), y = yellow (wrong spot), b = black (absent)");
    println!("Commands at any prompt: 'undo', 'new', 'quit'\n");

    loop {
        let remaining = session.candidates().len();
        println!("\n{}", format!("Round {}", session.round()).bright_cyan().bold());
        println!("{remaining} possible words remaining.");

        let pb = scoring_bar(session.vocabulary().len(), config.quiet);
        let ranked = session.rank_with(|| pb.inc(1))?;
        pb.finish_and_clear();

        print_ranking(&ranked, config.top_k);
        let Some(best) = ranked.first() else {
            bail!("no guesses available");
        };
        print_recommendation(best, remaining);

        let suggestion = best.word.clone();
        let guess = match read_reply(input, "Enter your guess (blank = suggestion)", |s| {
            if s.is_empty() {
                Ok(suggestion.clone())
            } else {
                Word::new(s).map_err(|e| e.to_string())
            }
        })? {
            Reply::Value(word) => word,
            other => {
                if let Some(outcome) = handle_command(session, other) {
                    return Ok(outcome);
                }
                continue;
            }
        };

        let pattern = match read_reply(input, "Enter result (g=green, y=yellow, b=black)", |s| {
            Pattern::parse(s).map_err(|e| e.to_string())
        })? {
            Reply::Value(pattern) => pattern,
            other => {
                if let Some(outcome) = handle_command(session, other) {
                    return Ok(outcome);
                }
                continue;
            }
        };

        println!("{}", feedback_line(&guess, pattern));

        match session.observe(guess, pattern) {
            Ok(_) if session.is_solved() => {
                let guesses = session.history().len();
                println!(
                    "\n{}",
                    format!(
                        "Solved in {guesses} {}!",
                        if guesses == 1 { "guess" } else { "guesses" }
                    )
                    .bright_green()
                    .bold()
                );
                info!(guesses, "game solved");
                return Ok(PlayOutcome::Solved { guesses });
            }
            Ok(left) => info!(round = session.round() - 1, left, "feedback applied"),
            Err(e @ SolverError::InconsistentObservation { .. }) => {
                warn!(error = %e, "feedback rejected");
                println!(
                    "{}",
                    "No words remaining for that feedback. Check the input and try again."
                        .red()
                );
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Apply a non-value reply; `Some` ends the game
fn handle_command<T>(session: &mut Session<'_>, reply: Reply<T>) -> Option<PlayOutcome> {
    match reply {
        Reply::Value(_) => None,
        Reply::Quit => {
            println!("\nThanks for playing!");
            Some(PlayOutcome::Quit)
        }
        Reply::New => {
            session.reset();
            println!("\nNew game started.");
            None
        }
        Reply::Undo => {
            if session.undo() {
                println!("Undone. Back to round {}.", session.round());
            } else {
                println!("Nothing to undo.");
            }
            None
        }
    }
}

/// Prompt until `parse` accepts the input or a command is entered
fn read_reply<R, T, F>(input: &mut R, prompt: &str, parse: F) -> Result<Reply<T>>
where
    R: BufRead,
    F: Fn(&str) -> Result<T, String>,
{
    loop {
        print!("{prompt}: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(Reply::Quit);
        }

        let line = line.trim().to_lowercase();
        match line.as_str() {
            "quit" | "q" | "exit" => return Ok(Reply::Quit),
            "undo" | "u" => return Ok(Reply::Undo),
            "new" | "n" => return Ok(Reply::New),
            _ => match parse(line.as_str()) {
                Ok(value) => return Ok(Reply::Value(value)),
                Err(message) => println!("{}", message.red()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;
    use std::io::Cursor;

    fn quiet_config() -> Config {
        Config {
            quiet: true,
            top_k: 3,
            ..Config::default()
        }
    }

    fn play(vocabulary: &[Word], script: &str) -> (PlayOutcome, usize) {
        let mut session = Session::new(vocabulary, None).unwrap();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let outcome = run_play(&mut session, &quiet_config(), &mut input).unwrap();
        (outcome, session.round())
    }

    fn vocabulary() -> Vec<Word> {
        words_from_slice(&["crane", "slate", "adieu", "roate"])
    }

    #[test]
    fn solves_in_two_rounds() {
        let (outcome, _) = play(&vocabulary(), "crane\nbbgbg\nslate\nggggg\n");
        assert_eq!(outcome, PlayOutcome::Solved { guesses: 2 });
    }

    #[test]
    fn blank_guess_takes_suggestion() {
        let (outcome, _) = play(&vocabulary(), "\nggggg\n");
        assert_eq!(outcome, PlayOutcome::Solved { guesses: 1 });
    }

    #[test]
    fn end_of_input_quits() {
        let (outcome, round) = play(&vocabulary(), "crane\n");
        assert_eq!(outcome, PlayOutcome::Quit);
        assert_eq!(round, 1);
    }

    #[test]
    fn inconsistent_feedback_repeats_round() {
        let (outcome, round) = play(&vocabulary(), "crane\nggggb\nquit\n");
        assert_eq!(outcome, PlayOutcome::Quit);
        assert_eq!(round, 1);
    }

    #[test]
    fn all_green_for_eliminated_word_repeats_round() {
        let (outcome, round) = play(&vocabulary(), "crane\nbbgbg\nroate\nggggg\nquit\n");
        assert_eq!(outcome, PlayOutcome::Quit);
        assert_eq!(round, 2);
    }

    #[test]
    fn invalid_input_reprompts() {
        let (outcome, _) = play(&vocabulary(), "cranes\ncrane\nbbgbq\nbbgbg\nslate\nggggg\n");
        assert_eq!(outcome, PlayOutcome::Solved { guesses: 2 });
    }

    #[test]
    fn undo_and_new_restore_state() {
        let (outcome, round) = play(&vocabulary(), "crane\nbbgbg\nundo\nq\n");
        assert_eq!(outcome, PlayOutcome::Quit);
        assert_eq!(round, 1);

        let (outcome, round) = play(&vocabulary(), "crane\nbbgbg\nnew\nquit\n");
        assert_eq!(outcome, PlayOutcome::Quit);
        assert_eq!(round, 1);
    }
}
