// This file is part of csv-lsp.
// Copyright (C) 2025 Midnight Foundation
// SPDX-License-Identifier: Apache-2.0

//! Edit descriptions and the errors produced when applying them.

use lsp_types::{Position, Range};
use thiserror::Error;

/// A single edit from a change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditDescription {
    /// Replace the whole document.
    FullReplace(String),

    /// Replace the half-open span `[range.start, range.end)` with `text`.
    ///
    /// The prefix of the start line is kept up to `range.start.character`
    /// (exclusive) and the suffix of the end line from `range.end.character`
    /// (inclusive).
    RangeReplace { range: Range, text: String },
}

impl EditDescription {
    /// Shorthand for a range replacement between two positions.
    pub fn replace(start: Position, end: Position, text: impl Into<String>) -> Self {
        Self::RangeReplace {
            range: Range { start, end },
            text: text.into(),
        }
    }
}

/// Reasons a range edit is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// The range end comes before its start.
    #[error("range end {} precedes start {}", display_position(.end), display_position(.start))]
    InvertedRange { start: Position, end: Position },

    /// A column points past the end of its line.
    #[error("character {character} out of bounds for line {line} with length {len}")]
    CharacterOutOfBounds { line: u32, character: u32, len: usize },

    /// A column lands between the two halves of a surrogate pair.
    #[error("character {character} on line {line} splits a surrogate pair")]
    SplitsSurrogatePair { line: u32, character: u32 },
}

fn display_position(position: &Position) -> String {
    format!("{}:{}", position.line, position.character)
}
