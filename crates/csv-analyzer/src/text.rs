// This file is part of csv-lsp.
// Copyright (C) 2025 Midnight Foundation
// SPDX-License-Identifier: Apache-2.0

//! Line materialization and UTF-16 column arithmetic.
//!
//! # Line model
//!
//! A document is a sequence of lines separated by `\n`. A trailing `\r` on a
//! line is line-ending noise: it is stripped when lines are materialized and
//! never written back. Splitting always yields at least one line, so the empty
//! document is a single empty line.
//!
//! # Columns
//!
//! Editors report `Position::character` in UTF-16 code units. Every column in
//! this crate follows that convention.

/// Split text into lines on `\n`, stripping a trailing `\r` from each line.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(|line| strip_cr(line).to_string()).collect()
}

/// Join lines back into document text with `\n` separators.
pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

/// Remove one trailing carriage return, if present.
pub fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// Length of a line in UTF-16 code units.
pub fn utf16_len(line: &str) -> usize {
    line.chars().map(char::len_utf16).sum()
}

/// Convert a UTF-16 column into a byte offset within `line`.
///
/// Returns `None` when the column lies past the end of the line or falls
/// between the two halves of a surrogate pair.
pub fn utf16_to_byte_offset(line: &str, column: u32) -> Option<usize> {
    let column = column as usize;
    let mut units = 0usize;

    for (byte, ch) in line.char_indices() {
        if units == column {
            return Some(byte);
        }
        if units > column {
            return None;
        }
        units += ch.len_utf16();
    }

    (units == column).then_some(line.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_strips_carriage_returns() {
        assert_eq!(split_lines("a,b\r\nc,d\r\n"), vec!["a,b", "c,d", ""]);
    }

    #[test]
    fn test_split_lines_empty_text_is_one_line() {
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn test_split_lines_keeps_interior_carriage_returns() {
        assert_eq!(split_lines("a\rb"), vec!["a\rb"]);
    }

    #[test]
    fn test_join_lines() {
        let lines = vec!["a".to_string(), "b".to_string(), String::new()];
        assert_eq!(join_lines(&lines), "a\nb\n");
    }

    #[test]
    fn test_utf16_len() {
        assert_eq!(utf16_len("abc"), 3);
        assert_eq!(utf16_len("é"), 1);
        assert_eq!(utf16_len("a🌍b"), 4);
    }

    #[test]
    fn test_utf16_to_byte_offset_ascii() {
        assert_eq!(utf16_to_byte_offset("hello", 0), Some(0));
        assert_eq!(utf16_to_byte_offset("hello", 3), Some(3));
        assert_eq!(utf16_to_byte_offset("hello", 5), Some(5));
        assert_eq!(utf16_to_byte_offset("hello", 6), None);
    }

    #[test]
    fn test_utf16_to_byte_offset_multibyte() {
        let line = "aéb";
        assert_eq!(utf16_to_byte_offset(line, 1), Some(1));
        assert_eq!(utf16_to_byte_offset(line, 2), Some(3));
        assert_eq!(utf16_to_byte_offset(line, 3), Some(4));
    }

    #[test]
    fn test_utf16_to_byte_offset_surrogate_pair() {
        let line = "a🌍b";
        assert_eq!(utf16_to_byte_offset(line, 1), Some(1));
        // Column 2 is the low surrogate of the globe.
        assert_eq!(utf16_to_byte_offset(line, 2), None);
        assert_eq!(utf16_to_byte_offset(line, 3), Some(5));
        assert_eq!(utf16_to_byte_offset(line, 4), Some(6));
    }

    #[test]
    fn test_utf16_to_byte_offset_empty_line() {
        assert_eq!(utf16_to_byte_offset("", 0), Some(0));
        assert_eq!(utf16_to_byte_offset("", 1), None);
    }
}
