//! Passive-voice and adverb heuristics
//!
//! Both checks are pattern based. A passive match is an auxiliary followed by
//! a word ending in "ed" or "en"; nothing verifies the word is a participle.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static PASSIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(is|was|were|been|being|are|am|has been|have been|had been|will be|shall be|could be|would be|might be|must be)\s+\w+(ed|en)\b",
    )
    .expect("valid regex")
});

/// Common words ending in "-ly" that are not adverbs
static NON_ADVERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "family", "early", "only", "friendly", "daily", "likely", "lovely", "lonely",
        "holy", "ugly", "silly", "belly", "jelly", "bully", "rally", "reply", "supply",
        "apply", "july", "italy", "assembly", "monthly", "weekly", "yearly", "costly",
        "deadly", "elderly", "orderly", "lively", "timely", "unlikely", "curly", "hilly",
        "chilly", "scholarly", "ally", "anomaly", "butterfly", "comply", "multiply",
        "imply", "rely", "homely", "manly", "worldly",
    ]
    .into_iter()
    .collect()
});

/// Count auxiliary + participle-like word sequences
pub fn count_passive_voice(text: &str) -> usize {
    PASSIVE_RE.find_iter(text).count()
}

/// Whether a word looks like an "-ly" adverb
pub fn is_adverb(word: &str) -> bool {
    let lower = word.to_lowercase();
    lower.len() > 3 && lower.ends_with("ly") && !NON_ADVERBS.contains(lower.as_str())
}

/// Count adverbs among already-extracted words
pub fn count_adverbs<S: AsRef<str>>(words: &[S]) -> usize {
    words.iter().filter(|word| is_adverb(word.as_ref())).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passive_voice_matches() {
        assert_eq!(count_passive_voice("The report was completed yesterday."), 1);
        assert_eq!(count_passive_voice("Mistakes have been hidden."), 1);
        assert_eq!(count_passive_voice("It WAS WRITTEN by hand."), 1);
        assert_eq!(count_passive_voice("The cake was eaten and the tea was poured."), 2);
    }

    #[test]
    fn test_passive_voice_non_matches() {
        assert_eq!(count_passive_voice("We completed the report."), 0);
        assert_eq!(count_passive_voice("It should be noted that this works."), 0);
        assert_eq!(count_passive_voice("This is great."), 0);
    }

    #[test]
    fn test_adverbs() {
        assert!(is_adverb("quickly"));
        assert!(is_adverb("Fundamentally"));
        assert!(!is_adverb("only"));
        assert!(!is_adverb("Friendly"));
        assert!(!is_adverb("fly"));
        assert!(!is_adverb("sly"));
        assert!(!is_adverb("quick"));

        let words = ["We", "really", "truly", "care", "daily"];
        assert_eq!(count_adverbs(&words), 2);
    }
}
