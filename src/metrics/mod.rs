//! Readability and style metrics for a single text
//!
//! Everything here is a pure function of the input string. Counts use
//! regex-based word and sentence splitting, readability uses the standard
//! Flesch formulas over heuristic syllable estimates.

pub mod style;
pub mod syllables;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub use style::{count_adverbs, count_passive_voice, is_adverb};
pub use syllables::count_syllables;

/// Assumed silent reading speed
pub const WORDS_PER_MINUTE: f64 = 200.0;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z'-]+\b").expect("valid regex"));

static SENTENCE_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+\s*").expect("valid regex"));

/// Readability and style measurements of one text
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    /// Words per sentence, one decimal
    pub avg_sentence_length: f64,
    /// U.S. school grade, never negative, one decimal
    pub flesch_kincaid_grade: f64,
    /// 0 (very hard) to 100 (very easy), one decimal
    pub flesch_reading_ease: f64,
    /// Seconds
    pub reading_time: u64,
    pub passive_voice_count: usize,
    pub adverb_count: usize,
    pub syllable_count: usize,
}

impl TextMetrics {
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    pub fn avg_syllables_per_word(&self) -> f64 {
        if self.word_count == 0 {
            0.0
        } else {
            self.syllable_count as f64 / self.word_count as f64
        }
    }
}

/// Extract words: runs of letters, apostrophes and hyphens
pub fn split_words(text: &str) -> Vec<&str> {
    WORD_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Split on terminal punctuation, dropping empty fragments
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_END_RE
        .split(text)
        .filter(|fragment| !fragment.trim().is_empty())
        .collect()
}

/// Analyze a text. Input with no words yields all-zero metrics.
pub fn analyze_text(text: &str) -> TextMetrics {
    let words = split_words(text);
    if words.is_empty() {
        return TextMetrics::default();
    }

    let word_count = words.len();
    // Text without terminal punctuation still counts as one sentence
    let sentence_count = split_sentences(text).len().max(1);
    let syllable_count: usize = words.iter().map(|word| count_syllables(word)).sum();

    let avg_sentence_length = word_count as f64 / sentence_count as f64;
    let avg_syllables_per_word = syllable_count as f64 / word_count as f64;

    let grade = 0.39 * avg_sentence_length + 11.8 * avg_syllables_per_word - 15.59;
    let ease = 206.835 - 1.015 * avg_sentence_length - 84.6 * avg_syllables_per_word;

    let metrics = TextMetrics {
        word_count,
        sentence_count,
        avg_sentence_length: round_to_tenth(avg_sentence_length),
        flesch_kincaid_grade: round_to_tenth(grade.max(0.0)),
        flesch_reading_ease: round_to_tenth(ease.clamp(0.0, 100.0)),
        reading_time: round_half_up(word_count as f64 / WORDS_PER_MINUTE * 60.0) as u64,
        passive_voice_count: count_passive_voice(text),
        adverb_count: count_adverbs(&words),
        syllable_count,
    };

    tracing::debug!(
        words = metrics.word_count,
        sentences = metrics.sentence_count,
        grade = metrics.flesch_kincaid_grade,
        ease = metrics.flesch_reading_ease,
        "analyzed text"
    );

    metrics
}

/// Round to the nearest integer, halves toward positive infinity
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

pub(crate) fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}
