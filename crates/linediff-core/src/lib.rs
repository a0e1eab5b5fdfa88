//! Linediff Core - line-based diff engine
//!
//! Splits two texts into lines, aligns them with a longest common
//! subsequence table, and turns the alignment into an ordered edit script
//! that can be shown as a unified list or as side-by-side rows.

pub mod diff;
pub mod hunk;
pub mod lcs;
pub mod line;
pub mod script;
pub mod view;

pub use diff::{diff, DiffEngine, DiffError, DiffResult, FileDiff};
pub use hunk::{group_hunks, Hunk};
pub use lcs::{align, LcsTable};
pub use line::{tokenize, Line};
pub use script::{build_edit_script, reconstruct_after, reconstruct_before, EditOp};
pub use view::{compute_stats, to_split, to_unified, DiffStats, SplitKind, SplitRow};
