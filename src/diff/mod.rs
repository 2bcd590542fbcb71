//! Word-level diff generation and formatting module
//!
//! Text is tokenized into words, the word sequences are aligned with an LCS
//! table, and the resulting edit script is projected into before/after views
//! for display.

pub mod algorithms;
pub mod formatter;
pub mod generator;
pub mod tokenizer;
pub mod view;

// Re-export the main types for easier use
pub use algorithms::{DiffAlgorithm, DiffOperation, DiffResult, DiffStats, LcsWordDiff};
pub use formatter::{DiffFormat, DiffFormatter, ViewSide};
pub use generator::DiffGenerator;
pub use tokenizer::{tokenize, words, Token, TokenKind};
pub use view::{after_view, before_view, DisplaySegment};

/// Compute the word-level edit script turning `before` into `after`
pub fn compute_diff(before: &str, after: &str) -> Vec<DiffOperation> {
    DiffGenerator::default().generate(before, after).operations
}

/// Convenience function to get diff statistics
pub fn get_diff_stats(before: &str, after: &str) -> DiffStats {
    DiffGenerator::default().generate(before, after).stats
}
