//! Longest common subsequence alignment over line sequences

use crate::line::Line;

/// Dynamic programming table for the LCS of two line sequences.
///
/// `get(i, j)` is the LCS length of `before[..i]` and `after[..j]`, for
/// `0 <= i <= m` and `0 <= j <= n`. Stored row-major in one allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    /// LCS length of `before[..i]` and `after[..j]`
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    /// Length of the full LCS
    pub fn lcs_len(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }

    /// `(m + 1, n + 1)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

/// Build the LCS table, comparing lines by exact text equality.
///
/// O(m·n) in both time and space.
pub fn align(before: &[Line], after: &[Line]) -> LcsTable {
    let rows = before.len() + 1;
    let cols = after.len() + 1;
    let mut cells = vec![0usize; rows * cols];

    for i in 1..rows {
        for j in 1..cols {
            cells[i * cols + j] = if before[i - 1].text == after[j - 1].text {
                cells[(i - 1) * cols + (j - 1)] + 1
            } else {
                cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
            };
        }
    }

    LcsTable { rows, cols, cells }
}
