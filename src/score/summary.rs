//! Plain-language summary of a before/after comparison

use crate::metrics::TextMetrics;

/// Grade-level change needed before it is mentioned
const GRADE_THRESHOLD: f64 = 1.0;
/// Sentence-length change (words) needed before it is mentioned
const SENTENCE_LENGTH_THRESHOLD: f64 = 3.0;
/// Scores beyond this are called out as better or worse
const SCORE_THRESHOLD: i32 = 5;
/// Average sentence length that triggers the long-sentence tip
const LONG_SENTENCE_WORDS: f64 = 20.0;

fn word_noun(count: i64) -> &'static str {
    if count == 1 {
        "word"
    } else {
        "words"
    }
}

/// Join phrases as "a", "a and b", or "a, b, and c"
pub fn join_phrases(phrases: &[String]) -> String {
    match phrases {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} and {}", first, second),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    }
}

/// Describe how `after` differs from `before`, closing with a remark chosen
/// by `score` and a tip when the revision still has long sentences.
pub fn generate_summary(before: &TextMetrics, after: &TextMetrics, score: i32) -> String {
    let mut improvements = Vec::new();
    let mut concerns = Vec::new();

    let word_delta = after.word_count as i64 - before.word_count as i64;
    if word_delta < 0 {
        improvements.push(format!(
            "is more concise ({} fewer {})",
            -word_delta,
            word_noun(-word_delta)
        ));
    } else if word_delta > 0 {
        concerns.push(format!("is longer ({} more {})", word_delta, word_noun(word_delta)));
    }

    let grade_delta = after.flesch_kincaid_grade - before.flesch_kincaid_grade;
    if grade_delta < -GRADE_THRESHOLD {
        improvements.push(format!(
            "is easier to read (grade level {:.1} → {:.1})",
            before.flesch_kincaid_grade, after.flesch_kincaid_grade
        ));
    } else if grade_delta > GRADE_THRESHOLD {
        concerns.push(format!(
            "is harder to read (grade level {:.1} → {:.1})",
            before.flesch_kincaid_grade, after.flesch_kincaid_grade
        ));
    }

    let sentence_delta = after.avg_sentence_length - before.avg_sentence_length;
    if sentence_delta < -SENTENCE_LENGTH_THRESHOLD {
        improvements.push("uses shorter sentences".to_string());
    } else if sentence_delta > SENTENCE_LENGTH_THRESHOLD {
        concerns.push("has longer sentences".to_string());
    }

    let passive_delta = after.passive_voice_count as i64 - before.passive_voice_count as i64;
    if passive_delta < 0 {
        improvements.push("uses more active voice".to_string());
    } else if passive_delta > 0 {
        concerns.push("uses more passive voice".to_string());
    }

    let adverb_delta = after.adverb_count as i64 - before.adverb_count as i64;
    if adverb_delta < 0 {
        improvements.push("relies less on adverbs".to_string());
    } else if adverb_delta > 0 {
        concerns.push("uses more adverbs".to_string());
    }

    let mut parts = Vec::new();
    match (improvements.is_empty(), concerns.is_empty()) {
        (true, true) => parts.push("Both versions have similar readability.".to_string()),
        (false, true) => {
            parts.push(format!("The revised version {}.", join_phrases(&improvements)))
        }
        (true, false) => parts.push(format!("The revised version {}.", join_phrases(&concerns))),
        (false, false) => {
            parts.push(format!("The revised version {}.", join_phrases(&improvements)));
            parts.push(format!("However, it {}.", join_phrases(&concerns)));
        }
    }

    let closing = if score > SCORE_THRESHOLD {
        "Overall, this is a clear improvement."
    } else if score < -SCORE_THRESHOLD {
        "Overall, the original version may be more readable."
    } else {
        "Overall, readability is roughly the same."
    };
    parts.push(closing.to_string());

    if after.avg_sentence_length > LONG_SENTENCE_WORDS {
        parts.push("Tip: Consider breaking up long sentences to keep readers engaged.".to_string());
    }

    parts.join(" ")
}
