//! Word list loading utilities
//!
//! Reads word files, drops malformed lines and duplicates, and removes
//! solutions that have already been used.

use crate::core::Word;
use anyhow::{Context, Result, bail};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load words from a file
///
/// Lines are trimmed and lowercased. Lines that are not 5 ASCII letters are
/// skipped, and repeated words keep only their first occurrence.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_advisor::wordlists::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    let words = parse_words(&content);
    debug!(path = %path.display(), count = words.len(), "word list loaded");
    Ok(words)
}

/// Load the guess vocabulary and drop every already-used solution
///
/// A missing `used_path` file is not an error: a warning is logged and no
/// words are removed.
///
/// # Errors
///
/// Returns an error if the word list cannot be read, the used-solutions
/// file exists but cannot be read, or no words remain.
pub fn load_vocabulary<P, Q>(words_path: P, used_path: Q) -> Result<Vec<Word>>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let mut words = load_from_file(&words_path)?;
    let used_path = used_path.as_ref();

    match fs::read_to_string(used_path) {
        Ok(content) => {
            let used: FxHashSet<Word> = parse_words(&content).into_iter().collect();
            let before = words.len();
            words.retain(|w| !used.contains(w));
            info!(
                removed = before - words.len(),
                remaining = words.len(),
                "excluded used solutions"
            );
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(
                path = %used_path.display(),
                "used-solutions file not found; skipping used-word filtering"
            );
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("failed to read used solutions {}", used_path.display())
            });
        }
    }

    if words.is_empty() {
        bail!("no usable words in {}", words_path.as_ref().display());
    }

    Ok(words)
}

/// Convert a string slice to a Word vector, with the same rules as files
///
/// # Examples
/// ```
/// use wordle_advisor::wordlists::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "slate", "crane"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    dedup(slice.iter().filter_map(|&s| Word::new(s.trim()).ok()))
}

fn parse_words(content: &str) -> Vec<Word> {
    dedup(content.lines().filter_map(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        Word::new(trimmed)
            .inspect_err(|e| debug!(line = trimmed, error = %e, "skipping word"))
            .ok()
    }))
}

fn dedup(words: impl Iterator<Item = Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words.filter(|w| seen.insert(w.clone())).collect()
}
