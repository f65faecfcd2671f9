//! Runtime configuration
//!
//! Built from command-line flags in `main`; holds the word list locations
//! and display/thread settings the commands need.

use crate::core::Word;
use crate::wordlists::load_vocabulary;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;

/// Default number of ranked guesses to show
pub const DEFAULT_TOP_K: usize = 20;

/// Settings shared by every command
#[derive(Debug, Clone)]
pub struct Config {
    /// Allowed guesses, one per line
    pub words_path: PathBuf,
    /// Previously used solutions to exclude
    pub solutions_path: PathBuf,
    /// Ranked guesses to display
    pub top_k: usize,
    /// Worker threads for scoring; `None` lets rayon decide
    pub threads: Option<usize>,
    /// Hide progress bars
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words_path: PathBuf::from("words.txt"),
            solutions_path: PathBuf::from("solutions.txt"),
            top_k: DEFAULT_TOP_K,
            threads: None,
            quiet: false,
        }
    }
}

impl Config {
    /// Load the vocabulary with used solutions removed
    ///
    /// # Errors
    /// Propagates loader errors.
    pub fn load_vocabulary(&self) -> Result<Vec<Word>> {
        load_vocabulary(&self.words_path, &self.solutions_path)
    }

    /// Size the global rayon pool if a thread count was given
    ///
    /// # Errors
    /// Returns an error if the global pool was already initialized.
    pub fn configure_thread_pool(&self) -> Result<()> {
        if let Some(threads) = self.threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("failed to configure scoring threads")?;
            debug!(threads, "scoring thread pool configured");
        }
        Ok(())
    }
}
