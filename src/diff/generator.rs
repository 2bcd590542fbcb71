use super::algorithms::{DiffAlgorithm, DiffResult, LcsWordDiff};
use super::tokenizer;

/// High-level diff generator working on raw text
pub struct DiffGenerator {
    algorithm: Box<dyn DiffAlgorithm>,
}

impl DiffGenerator {
    /// Create a new diff generator using the LCS word diff
    pub fn new() -> Self {
        Self {
            algorithm: Box::new(LcsWordDiff),
        }
    }

    /// Tokenize both texts and diff their word sequences
    pub fn generate(&self, old: &str, new: &str) -> DiffResult {
        let old_words = tokenizer::words(old);
        let new_words = tokenizer::words(new);
        self.algorithm.diff(&old_words, &new_words)
    }

    /// Get the current algorithm name
    pub fn algorithm_name(&self) -> &str {
        self.algorithm.name()
    }
}

impl Default for DiffGenerator {
    fn default() -> Self {
        Self::new()
    }
}
