// This file is part of csv-lsp.
// Copyright (C) 2025 Midnight Foundation
// SPDX-License-Identifier: Apache-2.0

//! Document state management.

use std::fmt;

use lsp_types::Uri;
use ropey::Rope;

/// Identity of an open document: its URI as sent by the editor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Uri> for DocumentId {
    fn from(uri: &Uri) -> Self {
        Self(uri.to_string())
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A document we're tracking (an open file in the editor).
///
/// Documents are values: every edit builds a new `Document` and replaces the
/// stored one, so a snapshot handed to a reader never changes under it.
#[derive(Debug, Clone)]
pub struct Document {
    id: DocumentId,

    /// The document content, stored as a rope so snapshots are cheap to clone.
    content: Rope,

    /// Document version as reported by the editor.
    version: i32,
}

impl Document {
    pub fn new(id: DocumentId, text: &str, version: i32) -> Self {
        Self {
            id,
            content: Rope::from_str(text),
            version,
        }
    }

    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    /// Full document text.
    pub fn text(&self) -> String {
        self.content.to_string()
    }

    /// A new document with the same identity and replaced text.
    pub fn with_text(&self, text: &str, version: i32) -> Self {
        Self::new(self.id.clone(), text, version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_round_trips_text() {
        let text = "date,type\r\n2024-01-01,fee\n";
        let doc = Document::new(DocumentId::new("file:///a.csv"), text, 1);
        assert_eq!(doc.text(), text);
        assert_eq!(doc.version(), 1);
    }

    #[test]
    fn test_with_text_keeps_identity() {
        let doc = Document::new(DocumentId::new("file:///a.csv"), "a", 1);
        let next = doc.with_text("b", 2);
        assert_eq!(next.id(), doc.id());
        assert_eq!(next.text(), "b");
        assert_eq!(next.version(), 2);
        assert_eq!(doc.text(), "a");
    }

    #[test]
    fn test_document_id_from_uri() {
        let uri: Uri = "file:///tmp/ledger.csv".parse().unwrap();
        assert_eq!(DocumentId::from(&uri).as_str(), "file:///tmp/ledger.csv");
    }
}
