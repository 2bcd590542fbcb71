//! Before/after display projections of an edit script

use serde::{Deserialize, Serialize};

use super::algorithms::DiffOperation;

/// A view-ready word; `highlighted` marks a removal (before) or addition (after)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySegment {
    pub text: String,
    pub highlighted: bool,
}

impl DisplaySegment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlighted: false,
        }
    }

    fn marked(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlighted: true,
        }
    }
}

/// Words of the original text, deletions highlighted
pub fn before_view(operations: &[DiffOperation]) -> Vec<DisplaySegment> {
    operations
        .iter()
        .filter_map(|op| match op {
            DiffOperation::Equal(word) => Some(DisplaySegment::plain(word)),
            DiffOperation::Delete(word) => Some(DisplaySegment::marked(word)),
            DiffOperation::Insert(_) => None,
        })
        .collect()
}

/// Words of the revised text, insertions highlighted
pub fn after_view(operations: &[DiffOperation]) -> Vec<DisplaySegment> {
    operations
        .iter()
        .filter_map(|op| match op {
            DiffOperation::Equal(word) => Some(DisplaySegment::plain(word)),
            DiffOperation::Insert(word) => Some(DisplaySegment::marked(word)),
            DiffOperation::Delete(_) => None,
        })
        .collect()
}
