//! Unified and split projections of an edit script

use crate::line::Line;
use crate::script::EditOp;
use serde::{Deserialize, Serialize};

/// Added/removed line counts for a diff
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
}

impl DiffStats {
    /// True when there is nothing to show but a "no changes" state
    pub fn is_unchanged(&self) -> bool {
        self.added == 0 && self.removed == 0
    }

    pub fn total(&self) -> usize {
        self.added + self.removed
    }
}

/// Row kind in a side-by-side view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SplitKind {
    Equal,
    Added,
    Removed,
    /// Blank spacer with no line on either side
    EmptyPad,
}

/// One row of a two-column view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitRow {
    pub before: Option<Line>,
    pub after: Option<Line>,
    pub kind: SplitKind,
}

impl SplitRow {
    /// A spacer row, used by renderers to separate hunks
    pub fn empty_pad() -> Self {
        Self {
            before: None,
            after: None,
            kind: SplitKind::EmptyPad,
        }
    }
}

impl From<&EditOp> for SplitRow {
    fn from(op: &EditOp) -> Self {
        match op {
            EditOp::Equal {
                before_index,
                after_index,
                text,
            } => SplitRow {
                before: Some(Line::new(*before_index, text.clone())),
                after: Some(Line::new(*after_index, text.clone())),
                kind: SplitKind::Equal,
            },
            EditOp::Delete { before_index, text } => SplitRow {
                before: Some(Line::new(*before_index, text.clone())),
                after: None,
                kind: SplitKind::Removed,
            },
            EditOp::Insert { after_index, text } => SplitRow {
                before: None,
                after: Some(Line::new(*after_index, text.clone())),
                kind: SplitKind::Added,
            },
        }
    }
}

/// The unified view is the edit script itself, in order.
pub fn to_unified(ops: &[EditOp]) -> &[EditOp] {
    ops
}

/// One row per op, in op order. Adjacent deletes and inserts are not paired
/// up; each change occupies its own row with the other side left empty.
pub fn to_split(ops: &[EditOp]) -> Vec<SplitRow> {
    ops.iter().map(SplitRow::from).collect()
}

pub fn compute_stats(ops: &[EditOp]) -> DiffStats {
    ops.iter().fold(DiffStats::default(), |mut stats, op| {
        match op {
            EditOp::Insert { .. } => stats.added += 1,
            EditOp::Delete { .. } => stats.removed += 1,
            EditOp::Equal { .. } => {}
        }
        stats
    })
}
