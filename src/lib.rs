//! Word-level diff and readability delta scoring for short copy.
//!
//! ```
//! let result = copydelta::compare(
//!     "It should be noted that our approach is fundamentally different.",
//!     "Our approach is different.",
//! );
//! assert!(result.improvement_score > 0);
//! ```

pub mod cli;
pub mod compare;
pub mod config;
pub mod diff;
pub mod events;
pub mod export;
pub mod metrics;
pub mod score;
pub mod watcher;

pub use compare::{compare, ComparisonResult};
pub use diff::{after_view, before_view, compute_diff, DiffOperation, DisplaySegment};
pub use events::*;
pub use metrics::{analyze_text, TextMetrics};
pub use score::{calculate_improvement_score, generate_summary};
