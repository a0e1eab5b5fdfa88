//! Edit script construction from an LCS table

use crate::lcs::LcsTable;
use crate::line::Line;
use serde::{Deserialize, Serialize};

/// A single line-level operation in an edit script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditOp {
    /// Line present on both sides
    Equal {
        before_index: usize,
        after_index: usize,
        text: String,
    },
    /// Line present only in `before`
    Delete { before_index: usize, text: String },
    /// Line present only in `after`
    Insert { after_index: usize, text: String },
}

impl EditOp {
    pub fn text(&self) -> &str {
        match self {
            EditOp::Equal { text, .. }
            | EditOp::Delete { text, .. }
            | EditOp::Insert { text, .. } => text.as_str(),
        }
    }

    /// 0-based index in `before`, if the line exists there
    pub fn before_index(&self) -> Option<usize> {
        match self {
            EditOp::Equal { before_index, .. } | EditOp::Delete { before_index, .. } => {
                Some(*before_index)
            }
            EditOp::Insert { .. } => None,
        }
    }

    /// 0-based index in `after`, if the line exists there
    pub fn after_index(&self) -> Option<usize> {
        match self {
            EditOp::Equal { after_index, .. } | EditOp::Insert { after_index, .. } => {
                Some(*after_index)
            }
            EditOp::Delete { .. } => None,
        }
    }

    /// Check if this is an actual change (not just context)
    pub fn is_change(&self) -> bool {
        !matches!(self, EditOp::Equal { .. })
    }

    /// Sign column character used by unified renderers
    pub fn sign(&self) -> char {
        match self {
            EditOp::Equal { .. } => ' ',
            EditOp::Delete { .. } => '-',
            EditOp::Insert { .. } => '+',
        }
    }
}

/// Walk the LCS table backward from `(m, n)` and emit the edit script in
/// forward order.
///
/// Matching lines are always taken as `Equal`. Otherwise a `Delete` step is
/// preferred whenever `table[i-1][j] >= table[i][j-1]`, so ties between
/// dropping a `before` line and an `after` line resolve the same way on every
/// run.
pub fn build_edit_script(before: &[Line], after: &[Line], table: &LcsTable) -> Vec<EditOp> {
    let mut i = before.len();
    let mut j = after.len();
    let mut ops = Vec::with_capacity(i + j - table.lcs_len());

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && before[i - 1].text == after[j - 1].text {
            ops.push(EditOp::Equal {
                before_index: before[i - 1].index,
                after_index: after[j - 1].index,
                text: before[i - 1].text.clone(),
            });
            i -= 1;
            j -= 1;
        } else if j == 0 || (i > 0 && table.get(i - 1, j) >= table.get(i, j - 1)) {
            ops.push(EditOp::Delete {
                before_index: before[i - 1].index,
                text: before[i - 1].text.clone(),
            });
            i -= 1;
        } else {
            ops.push(EditOp::Insert {
                after_index: after[j - 1].index,
                text: after[j - 1].text.clone(),
            });
            j -= 1;
        }
    }

    ops.reverse();
    ops
}

/// Rebuild the `before` text from the `Equal` and `Delete` ops
pub fn reconstruct_before(ops: &[EditOp]) -> String {
    join_texts(ops.iter().filter(|op| op.before_index().is_some()))
}

/// Rebuild the `after` text from the `Equal` and `Insert` ops
pub fn reconstruct_after(ops: &[EditOp]) -> String {
    join_texts(ops.iter().filter(|op| op.after_index().is_some()))
}

fn join_texts<'a>(ops: impl Iterator<Item = &'a EditOp>) -> String {
    ops.map(EditOp::text).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lcs::align;
    use crate::line::tokenize;

    fn script(before: &str, after: &str) -> Vec<EditOp> {
        let before = tokenize(before);
        let after = tokenize(after);
        let table = align(&before, &after);
        build_edit_script(&before, &after, &table)
    }

    fn eq(b: usize, a: usize, text: &str) -> EditOp {
        EditOp::Equal {
            before_index: b,
            after_index: a,
            text: text.to_string(),
        }
    }

    fn del(b: usize, text: &str) -> EditOp {
        EditOp::Delete {
            before_index: b,
            text: text.to_string(),
        }
    }

    fn ins(a: usize, text: &str) -> EditOp {
        EditOp::Insert {
            after_index: a,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_append_line() {
        assert_eq!(
            script("line1", "line1\nline2"),
            vec![eq(0, 0, "line1"), ins(1, "line2")]
        );
    }

    #[test]
    fn test_remove_trailing_line() {
        assert_eq!(
            script("line1\nline2", "line1"),
            vec![eq(0, 0, "line1"), del(1, "line2")]
        );
    }

    #[test]
    fn test_swap_prefers_delete_on_tie() {
        assert_eq!(
            script("a\nb", "b\na"),
            vec![ins(0, "b"), eq(0, 1, "a"), del(1, "b")]
        );
    }

    #[test]
    fn test_replaced_line_emits_insert_then_delete() {
        assert_eq!(
            script("foo\nbar\nbaz", "foo\nqux\nbaz"),
            vec![eq(0, 0, "foo"), ins(1, "qux"), del(1, "bar"), eq(2, 2, "baz")]
        );
    }

    #[test]
    fn test_repeated_blank_lines_match_deterministically() {
        let expected = vec![eq(0, 0, "a"), del(1, ""), eq(2, 1, ""), eq(3, 2, "b")];
        assert_eq!(script("a\n\n\nb", "a\n\nb"), expected);
        assert_eq!(script("a\n\n\nb", "a\n\nb"), expected);
    }

    #[test]
    fn test_function_rewrite() {
        let before = "function hello() {\n  return \"Hello\";\n}";
        let after = "function hello(name) {\n  return `Hello ${name}`;\n}\nexport { hello };";
        assert_eq!(
            script(before, after),
            vec![
                ins(0, "function hello(name) {"),
                ins(1, "  return `Hello ${name}`;"),
                del(0, "function hello() {"),
                del(1, "  return \"Hello\";"),
                eq(2, 2, "}"),
                ins(3, "export { hello };"),
            ]
        );
    }

    #[test]
    fn test_from_empty_input() {
        assert_eq!(script("", "x"), vec![ins(0, "x"), del(0, "")]);
    }

    #[test]
    fn test_round_trip_reconstruction() {
        let cases = [
            ("", ""),
            ("a\nb\nc", ""),
            ("", "a\nb\nc"),
            ("a\n", "a"),
            ("x\r\ny\r\n", "x\ny\n"),
            ("a\nb\nc\nd\ne\nf", "b\nd\nf\na\nc\ne"),
            ("\n\n\n", "\n"),
        ];
        for (before, after) in cases {
            let ops = script(before, after);
            assert_eq!(reconstruct_before(&ops), before);
            assert_eq!(reconstruct_after(&ops), after);
        }
    }

    #[test]
    fn test_op_accessors() {
        let op = del(4, "gone");
        assert_eq!(op.text(), "gone");
        assert_eq!(op.before_index(), Some(4));
        assert_eq!(op.after_index(), None);
        assert!(op.is_change());
        assert_eq!(op.sign(), '-');
        assert_eq!(eq(1, 2, "same").sign(), ' ');
        assert!(!eq(1, 2, "same").is_change());
        assert_eq!(ins(3, "new").sign(), '+');
    }

    #[test]
    fn test_op_serializes_with_kind_tag() {
        let json = serde_json::to_string(&ins(2, "x")).unwrap();
        assert_eq!(json, r#"{"kind":"insert","after_index":2,"text":"x"}"#);
    }
}
