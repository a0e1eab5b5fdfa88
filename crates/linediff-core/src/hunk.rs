//! Grouping of changes into hunks with surrounding context

use crate::script::EditOp;
use log::trace;
use serde::Serialize;
use std::ops::Range;

/// A hunk is a run of changes plus up to `context` equal lines on each side
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hunk {
    pub id: usize,
    /// Range into the edit script
    pub ops: Range<usize>,
    /// Number of `before` lines preceding the hunk
    pub before_start: usize,
    pub before_len: usize,
    /// Number of `after` lines preceding the hunk
    pub after_start: usize,
    pub after_len: usize,
    pub insertions: usize,
    pub deletions: usize,
}

impl Hunk {
    /// GNU unified header, e.g. `@@ -3,4 +3,5 @@`
    pub fn header(&self) -> String {
        format!(
            "@@ -{} +{} @@",
            Self::range_label(self.before_start, self.before_len),
            Self::range_label(self.after_start, self.after_len)
        )
    }

    fn range_label(start: usize, len: usize) -> String {
        match len {
            0 => format!("{},0", start),
            1 => format!("{}", start + 1),
            _ => format!("{},{}", start + 1, len),
        }
    }

    /// The ops covered by this hunk
    pub fn slice<'a>(&self, ops: &'a [EditOp]) -> &'a [EditOp] {
        &ops[self.ops.clone()]
    }
}

/// Group change ops into hunks, keeping `context` equal ops around each one.
/// Windows that overlap or touch are merged into one hunk.
pub fn group_hunks(ops: &[EditOp], context: usize) -> Vec<Hunk> {
    let mut windows: Vec<Range<usize>> = Vec::new();
    for (idx, _) in ops.iter().enumerate().filter(|(_, op)| op.is_change()) {
        let start = idx.saturating_sub(context);
        let end = (idx + context + 1).min(ops.len());
        match windows.last_mut() {
            Some(last) if start <= last.end => last.end = last.end.max(end),
            _ => windows.push(start..end),
        }
    }

    let mut hunks = Vec::with_capacity(windows.len());
    let mut before_pos = 0;
    let mut after_pos = 0;
    let mut cursor = 0;

    for (id, window) in windows.into_iter().enumerate() {
        for op in &ops[cursor..window.start] {
            advance(op, &mut before_pos, &mut after_pos);
        }
        let before_start = before_pos;
        let after_start = after_pos;
        let mut insertions = 0;
        let mut deletions = 0;

        for op in &ops[window.clone()] {
            advance(op, &mut before_pos, &mut after_pos);
            match op {
                EditOp::Insert { .. } => insertions += 1,
                EditOp::Delete { .. } => deletions += 1,
                EditOp::Equal { .. } => {}
            }
        }
        cursor = window.end;

        let hunk = Hunk {
            id,
            ops: window,
            before_start,
            before_len: before_pos - before_start,
            after_start,
            after_len: after_pos - after_start,
            insertions,
            deletions,
        };
        trace!("hunk {}: {} ({:?})", hunk.id, hunk.header(), hunk.ops);
        hunks.push(hunk);
    }

    hunks
}

fn advance(op: &EditOp, before_pos: &mut usize, after_pos: &mut usize) {
    if op.before_index().is_some() {
        *before_pos += 1;
    }
    if op.after_index().is_some() {
        *after_pos += 1;
    }
}
