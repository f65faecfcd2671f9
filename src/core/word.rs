//! Five-letter word representation
//!
//! A `Word` is validated once at construction so the feedback and ranking
//! code can index its letters without further checks.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A validated, lowercase, 5-letter word
///
/// Equality, hashing and ordering are by value; ordering is lexical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word '{0}' must contain only letters a-z")]
    InvalidCharacters(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the word is not exactly 5 bytes
    /// long and `WordError::InvalidCharacters` if any byte is not `a`-`z`.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("cranes").is_err());
    /// assert!(Word::new("cr4ne").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().to_lowercase();

        let letters: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.chars().count()))?;

        if !letters.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters(text));
        }

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// True if the two words have no letter in common
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        !self.letters.iter().any(|&l| other.has_letter(l))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.letters(), b"crane");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CrAnE").unwrap();
        assert_eq!(word.text(), "crane");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("toolong"), Err(WordError::InvalidLength(7)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_non_ascii_reports_char_length() {
        // "héllo" is 5 chars but 6 bytes
        assert_eq!(Word::new("héllo"), Err(WordError::InvalidLength(5)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("cran3"),
            Err(WordError::InvalidCharacters(_))
        ));
        assert!(Word::new("cran ").is_err());
        assert!(Word::new("cran!").is_err());
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.letter_at(0), b'c');
        assert_eq!(word.letter_at(4), b'e');
    }

    #[test]
    fn word_disjoint() {
        let crane = Word::new("crane").unwrap();
        assert!(crane.is_disjoint(&Word::new("built").unwrap()));
        assert!(!crane.is_disjoint(&Word::new("slate").unwrap()));
    }

    #[test]
    fn word_ordering_is_lexical() {
        let mut words = vec![
            Word::new("slate").unwrap(),
            Word::new("adieu").unwrap(),
            Word::new("crane").unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["adieu", "crane", "slate"]);
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
