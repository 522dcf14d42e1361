// This file is part of csv-lsp.
// Copyright (C) 2025 Midnight Foundation
// SPDX-License-Identifier: Apache-2.0

//! Header field lookup for a cursor position.
//!
//! The first line of a document is the header row. For a cursor on any later
//! line, the number of delimiters before the cursor is the field index, and
//! the header token at that index is the field label.

use lsp_types::Position;

use crate::text::strip_cr;

/// The default field separator.
pub const FIELD_DELIMITER: char = ',';

/// Count delimiters strictly before the UTF-16 column `character`.
pub fn field_index(line: &str, character: u32, delimiter: char) -> usize {
    let limit = character as usize;
    let mut units = 0usize;
    let mut count = 0usize;

    for ch in line.chars() {
        if units >= limit {
            break;
        }
        if ch == delimiter {
            count += 1;
        }
        units += ch.len_utf16();
    }

    count
}

/// Find the header label for the field under `position`.
///
/// Returns `None` on the header line itself, when the line does not exist,
/// or when the header has fewer fields than the computed index.
pub fn field_label(text: &str, position: Position, delimiter: char) -> Option<String> {
    if position.line == 0 {
        return None;
    }

    let mut lines = text.split('\n').map(strip_cr);
    let header = lines.next()?;
    let line = lines.nth(position.line as usize - 1)?;

    let index = field_index(line, position.character, delimiter);
    header.split(delimiter).nth(index).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(line: u32, character: u32) -> Position {
        Position { line, character }
    }

    #[test]
    fn test_field_index() {
        assert_eq!(field_index("x,y,z", 0, ','), 0);
        assert_eq!(field_index("x,y,z", 1, ','), 0);
        assert_eq!(field_index("x,y,z", 2, ','), 1);
        assert_eq!(field_index("x,y,z", 5, ','), 2);
        assert_eq!(field_index("x,y,z", 99, ','), 2);
    }

    #[test]
    fn test_field_index_counts_utf16_units() {
        // The globe occupies columns 0 and 1.
        assert_eq!(field_index("🌍,a", 2, ','), 0);
        assert_eq!(field_index("🌍,a", 3, ','), 1);
    }

    #[test]
    fn test_field_label_maps_to_header() {
        assert_eq!(field_label("a,b,c\nx,y,z", pos(1, 2), ','), Some("b".to_string()));
        assert_eq!(field_label("a,b,c\nx,y,z", pos(1, 0), ','), Some("a".to_string()));
        assert_eq!(field_label("a,b,c\nx,y,z", pos(1, 5), ','), Some("c".to_string()));
    }

    #[test]
    fn test_field_label_on_header_line() {
        assert_eq!(field_label("a,b,c\nx,y,z", pos(0, 2), ','), None);
        assert_eq!(field_label("a,b,c", pos(0, 0), ','), None);
    }

    #[test]
    fn test_field_label_missing_line() {
        assert_eq!(field_label("a,b,c\nx,y,z", pos(2, 0), ','), None);
    }

    #[test]
    fn test_field_label_beyond_header_fields() {
        assert_eq!(field_label("a,b\nx,y,z,w", pos(1, 6), ','), None);
    }

    #[test]
    fn test_field_label_ignores_carriage_returns() {
        assert_eq!(field_label("a,b,c\r\nx,y,z\r\n", pos(1, 5), ','), Some("c".to_string()));
    }

    #[test]
    fn test_field_label_custom_delimiter() {
        assert_eq!(field_label("a;b;c\nx;y;z", pos(1, 4), ';'), Some("c".to_string()));
    }

    #[test]
    fn test_field_label_empty_header_token() {
        assert_eq!(field_label("a,,c\nx,y,z", pos(1, 2), ','), Some(String::new()));
    }
}
