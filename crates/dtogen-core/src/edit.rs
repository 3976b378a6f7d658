//! Text edits and their batch application.

use crate::error::{GenerateError, GenerateResult};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Replace `range` (byte offsets into the host text) with `replacement_text`.
///
/// An empty range is an insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditOperation {
    pub range: Range<usize>,
    pub replacement_text: String,
}

impl EditOperation {
    pub fn new(range: Range<usize>, replacement_text: impl Into<String>) -> Self {
        Self {
            range,
            replacement_text: replacement_text.into(),
        }
    }

    /// Insert `text` at `offset`.
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self::new(offset..offset, text)
    }
}

/// Apply all `edits` to `text` in one pass.
///
/// Ranges are validated first (in bounds, on character boundaries, not overlapping);
/// if any is invalid nothing is applied. An insertion at the start of a replaced range
/// lands before the replacement.
pub fn apply_edits(text: &str, edits: &[EditOperation]) -> GenerateResult<String> {
    let mut ordered: Vec<&EditOperation> = edits.iter().collect();
    ordered.sort_by_key(|e| (e.range.start, e.range.end));

    for edit in &ordered {
        let Range { start, end } = edit.range;
        if start > end || end > text.len() {
            return Err(GenerateError::InvalidEdit(format!(
                "range {start}..{end} outside text of length {}",
                text.len()
            )));
        }
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            return Err(GenerateError::InvalidEdit(format!(
                "range {start}..{end} splits a character"
            )));
        }
    }
    for pair in ordered.windows(2) {
        if pair[0].range.end > pair[1].range.start {
            return Err(GenerateError::InvalidEdit(format!(
                "ranges {:?} and {:?} overlap",
                pair[0].range, pair[1].range
            )));
        }
    }

    let mut result = String::with_capacity(
        text.len() + edits.iter().map(|e| e.replacement_text.len()).sum::<usize>(),
    );
    let mut cursor = 0;
    for edit in ordered {
        result.push_str(&text[cursor..edit.range.start]);
        result.push_str(&edit.replacement_text);
        cursor = edit.range.end;
    }
    result.push_str(&text[cursor..]);

    Ok(result)
}
