//! Heuristic syllable estimation
//!
//! Counts vowel groups and corrects for a few common silent endings. There is
//! no pronunciation dictionary behind this, so individual words can be off by
//! one; over a paragraph the errors mostly wash out.

use regex::Regex;
use std::sync::LazyLock;

static VOWEL_GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[aeiouy]+").expect("valid regex"));

/// Estimate the syllables in a single word (always at least 1)
pub fn count_syllables(word: &str) -> usize {
    let word: String = word
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase())
        .collect();

    if word.len() <= 2 {
        return 1;
    }

    let mut count = VOWEL_GROUP_RE.find_iter(&word).count();

    // Silent trailing "e", except "-le" as in "table"
    if word.ends_with('e') && !word.ends_with("le") && count > 1 {
        count -= 1;
    }
    if word.ends_with("es") && !word.ends_with("tes") && !word.ends_with("ses") && count > 1 {
        count -= 1;
    }
    if word.ends_with("ed") && !word.ends_with("ted") && !word.ends_with("ded") && count > 1 {
        count -= 1;
    }

    count.max(1)
}
