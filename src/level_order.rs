//! Breadth-first diagnostic view of a ternary heap
//!
//! Level `L` of the tree holds up to `3^L` values. The report keeps the live
//! values grouped by level; its [`Display`](std::fmt::Display) output puts each
//! level on its own line and separates every run of three siblings with `- `:
//!
//! ```text
//! 1
//! 2 3 4
//! 5 6 7 - 8 9 10 - 11 12 13
//! 14 15
//! ```
//!
//! (every value is followed by one space, trimmed above for readability)

use std::fmt;

use crate::layout::{self, ARITY};

/// Live heap values grouped by tree level
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LevelOrderReport {
    levels: Vec<Vec<i64>>,
}

impl LevelOrderReport {
    /// Splits `values` (a heap's live region in array order) into levels
    pub fn new(values: &[i64]) -> Self {
        let mut levels = Vec::new();
        let mut level = 0u32;
        loop {
            let start = layout::level_start(level);
            if start >= values.len() {
                break;
            }
            let end = (start + layout::level_width(level)).min(values.len());
            levels.push(values[start..end].to_vec());
            level += 1;
        }
        Self { levels }
    }

    /// The values on each level, root level first
    pub fn levels(&self) -> &[Vec<i64>] {
        &self.levels
    }

    /// Number of non-empty levels (the height of the tree plus one)
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Total number of values in the report
    pub fn len(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }

    /// True if the report has no values
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl fmt::Display for LevelOrderReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last_level = self.levels.len().saturating_sub(1);
        for (depth, values) in self.levels.iter().enumerate() {
            let width = layout::level_width(depth as u32);
            for (position, value) in values.iter().enumerate() {
                write!(f, "{value} ")?;
                let closes_group = (position + 1) % ARITY == 0;
                let closes_level = position + 1 == width;
                let last_value = depth == last_level && position + 1 == values.len();
                if closes_group && !closes_level && !last_value {
                    f.write_str("- ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
