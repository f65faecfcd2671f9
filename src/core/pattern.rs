//! Feedback calculation and the compact pattern representation
//!
//! A pattern encodes the feedback for a guess using base-3 digits:
//! - 0 = Absent (letter not in the answer, after consumed occurrences)
//! - 1 = Present (letter in the answer, wrong position)
//! - 2 = Exact (letter in the correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use thiserror::Error;

/// Feedback symbol for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter occurs in the answer at this position
    Exact,
    /// Letter occurs in the answer at another position
    Present,
    /// Letter does not occur (or all occurrences are already matched)
    Absent,
}

impl Feedback {
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Exact => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Exact,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Parse one symbol of the external feedback encoding
    ///
    /// Accepts `g`/`y`/`b` (any case), `-`/`_`/`x` for absent, and the
    /// 🟩/🟨/⬛/⬜ squares.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_lowercase() {
            'g' | '🟩' => Some(Self::Exact),
            'y' | '🟨' => Some(Self::Present),
            'b' | 'x' | '-' | '_' | '⬛' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    /// The `g`/`y`/`b` code for this symbol
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Exact => 'g',
            Self::Present => 'y',
            Self::Absent => 'b',
        }
    }
}

/// Error type for unparseable feedback strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("feedback must have exactly 5 symbols, got {0}")]
    InvalidLength(usize),
    #[error("invalid feedback symbol '{0}' (use g, y or b)")]
    InvalidSymbol(char),
}

/// Feedback pattern for a guess
///
/// Value range: 0-242 (3^5 = 243 possible patterns). Used as a cheap
/// hashable bucket key by the ranker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u8);

impl Pattern {
    /// All exact (solved)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// All absent
    pub const ALL_ABSENT: Self = Self(0);

    /// Number of distinct patterns
    pub const COUNT: usize = 243;

    /// Create a pattern from a raw value
    ///
    /// Returns `None` if the value is not below 243.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        if (value as usize) < Self::COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if every position is Exact
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Encode per-position symbols
    #[must_use]
    pub fn from_feedbacks(feedbacks: [Feedback; WORD_LENGTH]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for fb in feedbacks {
            pattern += fb.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(pattern)
    }

    /// Decode into per-position symbols, aligned with the guess
    #[must_use]
    pub fn feedbacks(self) -> [Feedback; WORD_LENGTH] {
        let mut val = self.0;
        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for fb in &mut feedbacks {
            *fb = Feedback::from_digit(val % 3);
            val /= 3;
        }
        feedbacks
    }

    /// Calculate the pattern when `guess` is played against `answer`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove those letters from the
    ///    answer's available pool
    /// 2. Second pass, left to right: mark a non-exact position Present if
    ///    its letter is still available, consuming one occurrence
    /// 3. Everything else stays Absent
    ///
    /// Exact matches must be reserved before any Present is assigned, or
    /// repeated guess letters would claim occurrences that belong to a
    /// later exact match.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Feedback, Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// use Feedback::{Absent, Exact};
    /// assert_eq!(pattern.feedbacks(), [Absent, Absent, Exact, Absent, Exact]);
    /// assert_eq!(pattern.value(), 180);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess = guess.letters();
        let answer = answer.letters();

        let mut result = [Feedback::Absent; WORD_LENGTH];
        let mut available = [0u8; 26];

        for (i, (&g, &a)) in guess.iter().zip(answer).enumerate() {
            if g == a {
                result[i] = Feedback::Exact;
            } else {
                available[usize::from(a - b'a')] += 1;
            }
        }

        for (fb, &g) in result.iter_mut().zip(guess) {
            if *fb == Feedback::Exact {
                continue;
            }
            let slot = &mut available[usize::from(g - b'a')];
            if *slot > 0 {
                *fb = Feedback::Present;
                *slot -= 1;
            }
        }

        Self::from_feedbacks(result)
    }

    /// Parse the external feedback encoding, e.g. "bbgbg" or "🟩🟨⬛⬛🟩"
    ///
    /// # Errors
    /// Returns `PatternError` if the input does not have exactly 5 symbols
    /// or contains an unknown symbol.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Pattern;
    ///
    /// let p1 = Pattern::parse("gybbg").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬛⬛🟩").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    pub fn parse(s: &str) -> Result<Self, PatternError> {
        let symbols: Vec<char> = s.trim().chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(PatternError::InvalidLength(symbols.len()));
        }

        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for (fb, &symbol) in feedbacks.iter_mut().zip(&symbols) {
            *fb = Feedback::from_symbol(symbol).ok_or(PatternError::InvalidSymbol(symbol))?;
        }

        Ok(Self::from_feedbacks(feedbacks))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fb in self.feedbacks() {
            write!(f, "{}", fb.code())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Feedback::{Absent, Exact, Present};

    fn pattern(guess: &str, answer: &str) -> Pattern {
        Pattern::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn pattern_perfect_constant() {
        assert_eq!(Pattern::PERFECT.value(), 242);
        assert!(Pattern::PERFECT.is_perfect());
        assert_eq!(Pattern::PERFECT.feedbacks(), [Exact; 5]);
    }

    #[test]
    fn pattern_all_absent() {
        let p = pattern("abcde", "fghij");
        assert_eq!(p, Pattern::ALL_ABSENT);
        assert_eq!(p.feedbacks(), [Absent; 5]);
    }

    #[test]
    fn pattern_self_is_perfect() {
        for word in ["crane", "slate", "speed", "zzzzz", "aaaaa"] {
            assert_eq!(pattern(word, word), Pattern::PERFECT);
        }
    }

    #[test]
    fn pattern_crane_vs_slate() {
        let p = pattern("crane", "slate");
        assert_eq!(p.feedbacks(), [Absent, Absent, Exact, Absent, Exact]);
        assert_eq!(p.value(), 180);
    }

    #[test]
    fn pattern_speed_vs_erase() {
        // ERASE has two E's and one S; no exact matches
        let p = pattern("speed", "erase");
        assert_eq!(p.feedbacks(), [Present, Absent, Present, Present, Absent]);
        assert_eq!(p.value(), 37);
    }

    #[test]
    fn pattern_exact_reserved_before_present() {
        // The second O is exact, so the first O only gets the remaining one
        let p = pattern("robot", "floor");
        assert_eq!(p.feedbacks(), [Present, Present, Absent, Exact, Absent]);
    }

    #[test]
    fn pattern_duplicate_guess_single_answer_letter() {
        // One E in the answer: leftmost non-exact E takes it
        let p = pattern("eerie", "crane");
        assert_eq!(p.feedbacks(), [Absent, Absent, Present, Absent, Exact]);

        let p = pattern("geese", "those");
        assert_eq!(p.feedbacks(), [Absent, Absent, Absent, Exact, Exact]);

        let p = pattern("lever", "hello");
        assert_eq!(p.feedbacks(), [Present, Exact, Absent, Absent, Absent]);
    }

    #[test]
    fn pattern_triple_letter_guess() {
        let p = pattern("eeeee", "geese");
        assert_eq!(p.feedbacks(), [Absent, Exact, Exact, Absent, Exact]);
    }

    #[test]
    fn pattern_feedback_round_trip() {
        for value in 0..=242u8 {
            let p = Pattern::from_value(value).unwrap();
            assert_eq!(Pattern::from_feedbacks(p.feedbacks()), p);
        }
        assert!(Pattern::from_value(243).is_none());
    }

    #[test]
    fn pattern_parse_codes_and_emoji() {
        let p1 = Pattern::parse("gybbg").unwrap();
        let p2 = Pattern::parse("GY--G").unwrap();
        let p3 = Pattern::parse("🟩🟨⬛⬜🟩").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.feedbacks(), [Exact, Present, Absent, Absent, Exact]);
    }

    #[test]
    fn pattern_parse_invalid() {
        assert_eq!(Pattern::parse("gyb"), Err(PatternError::InvalidLength(3)));
        assert_eq!(Pattern::parse("gybbgy"), Err(PatternError::InvalidLength(6)));
        assert_eq!(Pattern::parse("gybqg"), Err(PatternError::InvalidSymbol('q')));
    }

    #[test]
    fn pattern_display_uses_codes() {
        assert_eq!(pattern("crane", "slate").to_string(), "bbgbg");
        assert_eq!(Pattern::parse(&Pattern::PERFECT.to_string()), Ok(Pattern::PERFECT));
    }
}
