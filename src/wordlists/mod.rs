//! Word lists for Wordle solving
//!
//! Word lists are plain text files, one word per line, read at startup.

pub mod loader;

pub use loader::{load_from_file, load_vocabulary, words_from_slice};
