// This file is part of csv-lsp.
// Copyright (C) 2025 Midnight Foundation
// SPDX-License-Identifier: Apache-2.0

//! Conversions between protocol types and the analyzer's types.

use csv_analyzer::EditDescription;
use lsp_types::{SignatureHelp, SignatureInformation, TextDocumentContentChangeEvent};

/// Map a change event to an edit: a range means a range replace, no range
/// means the whole document.
pub fn to_edit(change: TextDocumentContentChangeEvent) -> EditDescription {
    match change.range {
        Some(range) => EditDescription::RangeReplace {
            range,
            text: change.text,
        },
        None => EditDescription::FullReplace(change.text),
    }
}

/// Signature help showing a single field label.
pub fn field_signature(label: String) -> SignatureHelp {
    SignatureHelp {
        signatures: vec![SignatureInformation {
            label,
            documentation: None,
            parameters: None,
            active_parameter: None,
        }],
        active_signature: Some(0),
        active_parameter: None,
    }
}
