use serde::{Deserialize, Serialize};

/// Trait defining a word-sequence diff algorithm interface
pub trait DiffAlgorithm: Send + Sync {
    /// Align two word sequences and produce an edit script
    fn diff(&self, old: &[String], new: &[String]) -> DiffResult;

    /// Get the algorithm name
    fn name(&self) -> &'static str;
}

/// Result of a diff operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffResult {
    pub operations: Vec<DiffOperation>,
    pub stats: DiffStats,
}

/// Individual diff operation carrying one word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum DiffOperation {
    Equal(String),
    Insert(String),
    Delete(String),
}

impl DiffOperation {
    pub fn value(&self) -> &str {
        match self {
            DiffOperation::Equal(word)
            | DiffOperation::Insert(word)
            | DiffOperation::Delete(word) => word,
        }
    }
}

/// Statistics about the diff
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub words_equal: usize,
    pub words_added: usize,
    pub words_removed: usize,
}

impl DiffStats {
    pub fn from_operations(operations: &[DiffOperation]) -> Self {
        let mut stats = Self::default();
        for op in operations {
            match op {
                DiffOperation::Equal(_) => stats.words_equal += 1,
                DiffOperation::Insert(_) => stats.words_added += 1,
                DiffOperation::Delete(_) => stats.words_removed += 1,
            }
        }
        stats
    }

    pub fn total_changes(&self) -> usize {
        self.words_added + self.words_removed
    }

    pub fn net_change(&self) -> isize {
        self.words_added as isize - self.words_removed as isize
    }
}

/// Dynamic-programming LCS length table stored in one flat buffer.
///
/// Cell `(i, j)` holds the LCS length of `old[..i]` and `new[..j]`. Memory is
/// `(m + 1) * (n + 1)` cells, which is fine for short copy but grows
/// quadratically with input size.
struct LcsTable {
    cells: Vec<u32>,
    stride: usize,
}

impl LcsTable {
    fn build(old: &[String], new: &[String]) -> Self {
        let stride = new.len() + 1;
        let mut table = Self {
            cells: vec![0; (old.len() + 1) * stride],
            stride,
        };

        for i in 1..=old.len() {
            for j in 1..=new.len() {
                let value = if old[i - 1] == new[j - 1] {
                    table.get(i - 1, j - 1) + 1
                } else {
                    table.get(i - 1, j).max(table.get(i, j - 1))
                };
                table.cells[i * stride + j] = value;
            }
        }

        table
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.stride + j]
    }
}

/// LCS (Longest Common Subsequence) word diff
///
/// Backtracking prefers an insertion whenever the left and upper cells tie,
/// so among several minimal edit scripts the same one is always chosen.
pub struct LcsWordDiff;

impl LcsWordDiff {
    pub fn operations(&self, old: &[String], new: &[String]) -> Vec<DiffOperation> {
        let table = LcsTable::build(old, new);
        let mut operations = Vec::with_capacity(old.len() + new.len());
        let (mut i, mut j) = (old.len(), new.len());

        while i > 0 || j > 0 {
            if i > 0 && j > 0 && old[i - 1] == new[j - 1] {
                operations.push(DiffOperation::Equal(old[i - 1].clone()));
                i -= 1;
                j -= 1;
            } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
                operations.push(DiffOperation::Insert(new[j - 1].clone()));
                j -= 1;
            } else {
                operations.push(DiffOperation::Delete(old[i - 1].clone()));
                i -= 1;
            }
        }

        operations.reverse();
        operations
    }
}

impl DiffAlgorithm for LcsWordDiff {
    fn diff(&self, old: &[String], new: &[String]) -> DiffResult {
        let operations = self.operations(old, new);
        let stats = DiffStats::from_operations(&operations);

        tracing::debug!(
            old_words = old.len(),
            new_words = new.len(),
            added = stats.words_added,
            removed = stats.words_removed,
            "computed word diff"
        );

        DiffResult { operations, stats }
    }

    fn name(&self) -> &'static str {
        "LCS"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_identical_sequences() {
        let words = seq("the quick brown fox");
        let ops = LcsWordDiff.operations(&words, &words);

        assert_eq!(ops.len(), 4);
        assert!(ops.iter().all(|op| matches!(op, DiffOperation::Equal(_))));
    }

    #[test]
    fn test_replacement_prefers_insert_first() {
        // dp ties at the end, so the insert is emitted (in reverse) first,
        // which puts the delete before the insert in forward order.
        let ops = LcsWordDiff.operations(&seq("a b c"), &seq("a x c"));
        assert_eq!(
            ops,
            vec![
                DiffOperation::Equal("a".into()),
                DiffOperation::Delete("b".into()),
                DiffOperation::Insert("x".into()),
                DiffOperation::Equal("c".into()),
            ]
        );
    }

    #[test]
    fn test_swap_tie_break() {
        let ops = LcsWordDiff.operations(&seq("a b"), &seq("b a"));
        assert_eq!(
            ops,
            vec![
                DiffOperation::Delete("a".into()),
                DiffOperation::Equal("b".into()),
                DiffOperation::Insert("a".into()),
            ]
        );
    }

    #[test]
    fn test_comparison_is_case_and_punctuation_sensitive() {
        let ops = LcsWordDiff.operations(&seq("Free shipping."), &seq("free shipping"));
        assert_eq!(DiffStats::from_operations(&ops).words_equal, 0);
    }

    #[test]
    fn test_diff_stats() {
        let result = LcsWordDiff.diff(&seq("one two three"), &seq("one three four five"));

        assert_eq!(result.stats.words_equal, 2);
        assert_eq!(result.stats.words_added, 2);
        assert_eq!(result.stats.words_removed, 1);
        assert_eq!(result.stats.total_changes(), 3);
        assert_eq!(result.stats.net_change(), 1);
    }

    #[test]
    fn test_operation_serialization() {
        let json = serde_json::to_string(&DiffOperation::Insert("new".into())).unwrap();
        assert_eq!(json, r#"{"type":"Insert","value":"new"}"#);
    }
}
