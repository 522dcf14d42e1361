// This file is part of csv-lsp.
// Copyright (C) 2025 Midnight Foundation
// SPDX-License-Identifier: Apache-2.0

//! Patch engine: turns an edit description into new document text.
//!
//! # How it works
//!
//! 1. The current text is materialized as lines (see [`crate::text`])
//! 2. A range that points at or past the line count is an append: the new
//!    text's lines go after the last line
//! 3. Any other range is validated, then the lines `start.line..=end.line`
//!    are replaced by `prefix + text + suffix`, split on `\n`
//! 4. The lines are joined back with `\n`
//!
//! Everything here is pure. A rejected edit leaves its input untouched so the
//! caller can abandon the whole batch.

use std::borrow::Cow;

use lsp_types::{Position, Range};

use crate::edit::{EditDescription, PatchError};
use crate::text::{join_lines, split_lines, utf16_len, utf16_to_byte_offset};

/// Apply one edit to a line sequence.
///
/// `FullReplace` accepts any text. `RangeReplace` either appends (range at or
/// past the last line) or splices after validation.
pub fn apply_edit(mut lines: Vec<String>, edit: &EditDescription) -> Result<Vec<String>, PatchError> {
    let (range, text) = match edit {
        EditDescription::FullReplace(text) => return Ok(split_lines(text)),
        EditDescription::RangeReplace { range, text } => (range, text),
    };

    check_order(range)?;

    let line_count = lines.len();
    if range.start.line as usize >= line_count || range.end.line as usize >= line_count {
        // Empty text appends nothing rather than a blank line.
        if !text.is_empty() {
            let appended = split_lines(text);
            tracing::trace!("Appending {} line(s) after line {}", appended.len(), line_count);
            lines.extend(appended);
        }
        return Ok(lines);
    }

    let start_line = range.start.line as usize;
    let end_line = range.end.line as usize;
    let start_byte = byte_offset(&lines[start_line], range.start)?;
    let end_byte = byte_offset(&lines[end_line], range.end)?;

    let mut replacement = split_lines(text);
    replacement[0].insert_str(0, &lines[start_line][..start_byte]);
    let suffix = lines[end_line][end_byte..].to_string();
    if let Some(last) = replacement.last_mut() {
        last.push_str(&suffix);
    }

    lines.splice(start_line..=end_line, replacement);
    Ok(lines)
}

/// Apply one edit to document text.
///
/// A `FullReplace` keeps its text verbatim. A range edit materializes lines,
/// so the result uses `\n` line endings.
pub fn apply_to_text(text: &str, edit: &EditDescription) -> Result<String, PatchError> {
    match edit {
        EditDescription::FullReplace(replacement) => Ok(replacement.clone()),
        EditDescription::RangeReplace { .. } => {
            let lines = apply_edit(split_lines(text), edit)?;
            Ok(join_lines(&lines))
        }
    }
}

/// Apply a batch of edits in order, each against the result of the previous.
///
/// Returns the first error without producing partial output.
pub fn apply_batch(text: &str, edits: &[EditDescription]) -> Result<String, PatchError> {
    let mut current = Cow::Borrowed(text);
    for edit in edits {
        current = Cow::Owned(apply_to_text(&current, edit)?);
    }
    Ok(current.into_owned())
}

fn check_order(range: &Range) -> Result<(), PatchError> {
    if (range.end.line, range.end.character) < (range.start.line, range.start.character) {
        return Err(PatchError::InvertedRange {
            start: range.start,
            end: range.end,
        });
    }
    Ok(())
}

fn byte_offset(line: &str, position: Position) -> Result<usize, PatchError> {
    let len = utf16_len(line);
    if position.character as usize > len {
        return Err(PatchError::CharacterOutOfBounds {
            line: position.line,
            character: position.character,
            len,
        });
    }
    utf16_to_byte_offset(line, position.character).ok_or(PatchError::SplitsSurrogatePair {
        line: position.line,
        character: position.character,
    })
}
