//! Before/after improvement scoring
//!
//! Five metrics are compared as relative changes, normalized so that a
//! positive value always means "better", and combined with fixed weights.

pub mod summary;

pub use summary::{generate_summary, join_phrases};

use crate::metrics::{round_half_up, TextMetrics};

/// Weight of each metric in the improvement score; the weights sum to 1.0
pub mod weights {
    pub const READING_EASE: f64 = 0.30;
    pub const GRADE_LEVEL: f64 = 0.25;
    pub const SENTENCE_LENGTH: f64 = 0.20;
    pub const PASSIVE_VOICE: f64 = 0.15;
    pub const ADVERBS: f64 = 0.10;
}

/// Penalty fraction applied when a previously absent feature appears
const NEW_FEATURE_PENALTY: f64 = 0.5;

/// Relative change where a higher value is better
fn gain(before: f64, after: f64) -> f64 {
    if before == 0.0 {
        0.0
    } else {
        (after - before) / before
    }
}

/// Relative change where a lower value is better
fn reduction(before: f64, after: f64) -> f64 {
    if before == 0.0 {
        0.0
    } else {
        (before - after) / before
    }
}

/// Weighted reduction of an undesirable count. Going from none to some
/// has no relative change, so it takes a fixed penalty instead.
fn count_reduction(before: usize, after: usize, weight: f64) -> f64 {
    if before == 0 {
        if after > 0 {
            -weight * NEW_FEATURE_PENALTY
        } else {
            0.0
        }
    } else {
        weight * reduction(before as f64, after as f64)
    }
}

/// Signed improvement percentage of `after` over `before`.
///
/// Returns 0 when either text has no words.
pub fn calculate_improvement_score(before: &TextMetrics, after: &TextMetrics) -> i32 {
    if before.word_count == 0 || after.word_count == 0 {
        return 0;
    }

    let mut total = 0.0;
    total += weights::READING_EASE * gain(before.flesch_reading_ease, after.flesch_reading_ease);
    total +=
        weights::GRADE_LEVEL * reduction(before.flesch_kincaid_grade, after.flesch_kincaid_grade);
    total +=
        weights::SENTENCE_LENGTH * reduction(before.avg_sentence_length, after.avg_sentence_length);
    total += count_reduction(
        before.passive_voice_count,
        after.passive_voice_count,
        weights::PASSIVE_VOICE,
    );
    total += count_reduction(before.adverb_count, after.adverb_count, weights::ADVERBS);

    let score = round_half_up(total * 100.0) as i32;
    tracing::debug!(raw = total, score, "calculated improvement score");
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::analyze_text;

    fn metrics(
        ease: f64,
        grade: f64,
        sentence_length: f64,
        passive: usize,
        adverbs: usize,
    ) -> TextMetrics {
        TextMetrics {
            word_count: 20,
            sentence_count: 2,
            avg_sentence_length: sentence_length,
            flesch_kincaid_grade: grade,
            flesch_reading_ease: ease,
            reading_time: 6,
            passive_voice_count: passive,
            adverb_count: adverbs,
            syllable_count: 30,
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        let sum = weights::READING_EASE
            + weights::GRADE_LEVEL
            + weights::SENTENCE_LENGTH
            + weights::PASSIVE_VOICE
            + weights::ADVERBS;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_words_scores_zero() {
        let text = analyze_text("Simple words work well.");
        assert_eq!(calculate_improvement_score(&TextMetrics::default(), &text), 0);
        assert_eq!(calculate_improvement_score(&text, &TextMetrics::default()), 0);
    }

    #[test]
    fn test_identical_metrics_score_zero() {
        let m = metrics(60.0, 8.0, 10.0, 1, 1);
        assert_eq!(calculate_improvement_score(&m, &m), 0);
    }

    #[test]
    fn test_weighted_changes() {
        let before = metrics(50.0, 10.0, 20.0, 2, 4);
        let after = metrics(60.0, 8.0, 15.0, 1, 1);
        // 0.30*0.2 + 0.25*0.2 + 0.20*0.25 + 0.15*0.5 + 0.10*0.75 = 0.31
        assert_eq!(calculate_improvement_score(&before, &after), 31);
        assert_eq!(calculate_improvement_score(&after, &before), -63);
    }

    #[test]
    fn test_new_passive_voice_and_adverbs_are_penalized() {
        let before = metrics(60.0, 8.0, 10.0, 0, 0);
        let after = metrics(60.0, 8.0, 10.0, 3, 1);
        // -(0.15*0.5) - (0.10*0.5) = -0.125
        assert_eq!(calculate_improvement_score(&before, &after), -12);
    }

    #[test]
    fn test_zero_baselines_are_skipped() {
        let before = metrics(0.0, 0.0, 10.0, 0, 0);
        let after = metrics(80.0, 3.0, 10.0, 0, 0);
        assert_eq!(calculate_improvement_score(&before, &after), 0);
    }

    #[test]
    fn test_concise_rewrite_improves() {
        let before =
            analyze_text("It should be noted that our approach is fundamentally different.");
        let after = analyze_text("Our approach is different.");
        assert_eq!(calculate_improvement_score(&before, &after), 37);
    }
}
