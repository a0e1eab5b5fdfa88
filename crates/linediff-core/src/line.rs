//! Line representation and tokenization

use serde::{Deserialize, Serialize};

/// A single line of input text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    /// 0-based position in the source text
    pub index: usize,
    /// Line content without the `\n` separator
    pub text: String,
}

impl Line {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// 1-based line number, as shown in a gutter
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

/// Split text into lines on `\n`.
///
/// Every separator produces a boundary, so `""` is one empty line and `"a\n"`
/// is `["a", ""]`. Carriage returns are kept as part of the line text; callers
/// wanting CRLF normalization must do it before tokenizing. Joining the texts
/// with `\n` always gives back the input.
pub fn tokenize(text: &str) -> Vec<Line> {
    text.split('\n')
        .enumerate()
        .map(|(index, text)| Line::new(index, text))
        .collect()
}
