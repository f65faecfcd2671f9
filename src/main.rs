//! Wordle Advisor - CLI
//!
//! Interactive helper that ranks guesses by expected information gain.

use anyhow::{Context, Result};
use clap::builder::TypedValueParser;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wordle_advisor::{
    commands::{Observation, SolveConfig, analyze_word, run_play, solve_word, suggest},
    config::{Config, DEFAULT_TOP_K},
    core::Word,
    output::{print_analysis_result, print_solve_result, print_suggestion, scoring_bar},
    solver::Session,
};

#[derive(Parser)]
#[command(
    name = "wordle_advisor",
    about = "Wordle helper that suggests the guess with the most expected information",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list of allowed guesses, one per line
    #[arg(short = 'w', long, global = true, default_value = "words.txt")]
    words: PathBuf,

    /// Already-used solutions to exclude (skipped if missing)
    #[arg(short = 's', long, global = true, default_value = "solutions.txt")]
    solutions: PathBuf,

    /// Number of ranked guesses to show
    #[arg(short = 't', long, global = true, default_value_t = DEFAULT_TOP_K,
          value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    top: usize,

    /// Scoring threads (defaults to one per core)
    #[arg(long, global = true)]
    threads: Option<usize>,

    /// More log output (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Hide progress bars and informational logs
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Play,

    /// Rank the next guess for a known history
    Suggest {
        /// Observed guess and feedback, e.g. crane=bbgbg (repeatable, in order)
        #[arg(short, long = "guess")]
        guesses: Vec<Observation>,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and entropy per step
        #[arg(short = 'd', long)]
        details: bool,
    },

    /// Analyze the entropy of a specific word as an opener
    Analyze {
        /// Word to analyze
        word: String,
    },
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            words_path: self.words.clone(),
            solutions_path: self.solutions.clone(),
            top_k: self.top,
            threads: self.threads,
            quiet: self.quiet,
        }
    }

    fn log_filter(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "info",
            (false, 2) => "debug",
            (false, _) => "trace",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.log_filter().into()))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(io::stderr),
        )
        .init();

    let config = cli.config();
    config.configure_thread_pool()?;

    let vocabulary = config.load_vocabulary()?;
    debug!(words = vocabulary.len(), "vocabulary ready");

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&config, &vocabulary),
        Commands::Suggest { guesses } => run_suggest_command(&config, &vocabulary, &guesses),
        Commands::Solve { word, details } => {
            let result = solve_word(SolveConfig::new(word), &vocabulary)?;
            print_solve_result(&result, details);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &vocabulary)?;
            print_analysis_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(config: &Config, vocabulary: &[Word]) -> Result<()> {
    let mut session = Session::new(vocabulary, None)?;
    let stdin = io::stdin();
    run_play(&mut session, config, &mut stdin.lock())?;
    Ok(())
}

fn run_suggest_command(config: &Config, vocabulary: &[Word], history: &[Observation]) -> Result<()> {
    let pb = scoring_bar(vocabulary.len(), config.quiet);
    let suggestion =
        suggest(vocabulary, history, || pb.inc(1)).context("cannot rank from this history")?;
    pb.finish_and_clear();

    print_suggestion(&suggestion, config.top_k);
    Ok(())
}
