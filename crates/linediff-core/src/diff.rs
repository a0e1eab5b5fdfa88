//! Diff computation engine

use crate::hunk::{group_hunks, Hunk};
use crate::lcs::align;
use crate::line::{tokenize, Line};
use crate::script::{build_edit_script, reconstruct_after, reconstruct_before, EditOp};
use crate::view::{compute_stats, to_split, to_unified, DiffStats, SplitRow};
use log::debug;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiffError {
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("File is not valid UTF-8 text: {path}")]
    InvalidUtf8 { path: String },
}

/// Result of a diff operation
///
/// `stats` is always derived from `ops`; there is no way to build one
/// without the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffResult {
    ops: Vec<EditOp>,
    stats: DiffStats,
}

impl DiffResult {
    pub fn from_ops(ops: Vec<EditOp>) -> Self {
        let stats = compute_stats(&ops);
        Self { ops, stats }
    }

    /// The edit script in order (the unified view)
    pub fn ops(&self) -> &[EditOp] {
        to_unified(&self.ops)
    }

    pub fn into_ops(self) -> Vec<EditOp> {
        self.ops
    }

    pub fn stats(&self) -> DiffStats {
        self.stats
    }

    /// True when both sides are line-for-line identical
    pub fn is_unchanged(&self) -> bool {
        self.stats.is_unchanged()
    }

    pub fn to_split(&self) -> Vec<SplitRow> {
        to_split(&self.ops)
    }

    pub fn hunks(&self, context: usize) -> Vec<Hunk> {
        group_hunks(&self.ops, context)
    }

    /// Text rebuilt from the `before` side of the script
    pub fn before_text(&self) -> String {
        reconstruct_before(&self.ops)
    }

    /// Text rebuilt from the `after` side of the script
    pub fn after_text(&self) -> String {
        reconstruct_after(&self.ops)
    }
}

/// Compute the line diff between two strings.
///
/// Pure and total: any pair of strings produces a result.
pub fn diff(before: &str, after: &str) -> DiffResult {
    let before_lines = tokenize(before);
    let after_lines = tokenize(after);

    if lines_identical(&before_lines, &after_lines) {
        debug!("inputs identical ({} lines), skipping alignment", before_lines.len());
        let ops = before_lines
            .into_iter()
            .map(|line| EditOp::Equal {
                before_index: line.index,
                after_index: line.index,
                text: line.text,
            })
            .collect();
        return DiffResult::from_ops(ops);
    }

    let table = align(&before_lines, &after_lines);
    let (rows, cols) = table.dimensions();
    debug!(
        "aligned {}x{} lines (table {}x{}), lcs length {}",
        before_lines.len(),
        after_lines.len(),
        rows,
        cols,
        table.lcs_len()
    );

    DiffResult::from_ops(build_edit_script(&before_lines, &after_lines, &table))
}

fn lines_identical(before: &[Line], after: &[Line]) -> bool {
    before.len() == after.len() && before.iter().zip(after).all(|(b, a)| b.text == a.text)
}

/// A diff for a pair of files
#[derive(Debug, Clone, Serialize)]
pub struct FileDiff {
    pub old_path: String,
    pub new_path: String,
    pub result: DiffResult,
}

/// The main diff engine
#[derive(Debug, Clone)]
pub struct DiffEngine {
    /// Number of context lines to include around each hunk
    context_lines: usize,
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self { context_lines: 3 }
    }
}

impl DiffEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(mut self, lines: usize) -> Self {
        self.context_lines = lines;
        self
    }

    pub fn context_lines(&self) -> usize {
        self.context_lines
    }

    /// Compute diff between two strings
    pub fn diff_strings(&self, old: &str, new: &str) -> DiffResult {
        diff(old, new)
    }

    /// Group a result into hunks using this engine's context size
    pub fn hunks(&self, result: &DiffResult) -> Vec<Hunk> {
        result.hunks(self.context_lines)
    }

    /// Compute diff between two files
    pub fn diff_files(&self, old_path: &Path, new_path: &Path) -> Result<FileDiff, DiffError> {
        let old_content = read_text(old_path)?;
        let new_content = read_text(new_path)?;

        let result = self.diff_strings(&old_content, &new_content);

        Ok(FileDiff {
            old_path: old_path.to_string_lossy().to_string(),
            new_path: new_path.to_string_lossy().to_string(),
            result,
        })
    }
}

fn read_text(path: &Path) -> Result<String, DiffError> {
    let bytes = std::fs::read(path).map_err(|source| DiffError::FileRead {
        path: path.display().to_string(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| DiffError::InvalidUtf8 {
        path: path.display().to_string(),
    })
}
