//! One-shot comparison of two text versions

use serde::{Deserialize, Serialize};

use crate::diff::{after_view, before_view, DiffGenerator, DiffStats, DisplaySegment};
use crate::metrics::{analyze_text, TextMetrics};
use crate::score::{calculate_improvement_score, generate_summary};

/// Everything a caller needs to render a before/after comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub before_view: Vec<DisplaySegment>,
    pub after_view: Vec<DisplaySegment>,
    pub diff_stats: DiffStats,
    pub before_metrics: TextMetrics,
    pub after_metrics: TextMetrics,
    /// Signed percentage, positive means the revision reads better
    pub improvement_score: i32,
    pub summary: String,
}

impl ComparisonResult {
    pub fn is_improvement(&self) -> bool {
        self.improvement_score > 0
    }
}

/// Diff, analyze and score `before` against `after`
pub fn compare(before: &str, after: &str) -> ComparisonResult {
    let generator = DiffGenerator::default();
    let diff = generator.generate(before, after);
    let before_metrics = analyze_text(before);
    let after_metrics = analyze_text(after);
    let improvement_score = calculate_improvement_score(&before_metrics, &after_metrics);
    let summary = generate_summary(&before_metrics, &after_metrics, improvement_score);

    tracing::debug!(
        algorithm = generator.algorithm_name(),
        changes = diff.stats.total_changes(),
        score = improvement_score,
        "compared texts"
    );

    ComparisonResult {
        before_view: before_view(&diff.operations),
        after_view: after_view(&diff.operations),
        diff_stats: diff.stats,
        before_metrics,
        after_metrics,
        improvement_score,
        summary,
    }
}
