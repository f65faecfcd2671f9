//! Word analysis command
//!
//! Measures how much a single guess would reveal against every possible
//! answer.

use crate::core::Word;
use crate::solver::entropy::{GuessMetrics, calculate_metrics};
use anyhow::{Result, bail};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: Word,
    pub metrics: GuessMetrics,
    pub total_candidates: usize,
}

/// Analyze `word` as an opening guess, with the whole vocabulary as candidates
///
/// # Errors
///
/// Returns an error if:
/// - The word is not 5 letters a-z
/// - The word is not in the vocabulary
pub fn analyze_word(word: &str, vocabulary: &[Word]) -> Result<AnalysisResult> {
    let word = Word::new(word.trim())?;

    if !vocabulary.contains(&word) {
        bail!("word '{word}' is not in the word list");
    }

    let metrics = calculate_metrics(&word, vocabulary)?;

    Ok(AnalysisResult {
        word,
        metrics,
        total_candidates: vocabulary.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;

    fn vocabulary() -> Vec<Word> {
        words_from_slice(&["crane", "slate", "adieu", "roate", "irate", "crate"])
    }

    #[test]
    fn analyze_valid_word() {
        let words = vocabulary();
        let result = analyze_word("CRANE", &words).unwrap();

        assert_eq!(result.word.text(), "crane");
        assert_eq!(result.total_candidates, 6);
        assert!(result.metrics.entropy > 0.0);
        assert!(result.metrics.entropy <= (words.len() as f64).log2());
        assert!(result.metrics.expected_remaining >= 1.0);
        assert!(result.metrics.expected_remaining <= words.len() as f64);
    }

    #[test]
    fn analyze_unknown_word() {
        assert!(analyze_word("zzzzz", &vocabulary()).is_err());
    }

    #[test]
    fn analyze_malformed_word() {
        assert!(analyze_word("cranes", &vocabulary()).is_err());
    }
}
