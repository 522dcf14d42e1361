// This file is part of csv-lsp.
// Copyright (C) 2025 Midnight Foundation
// SPDX-License-Identifier: Apache-2.0

//! Document synchronization: the open/change/close lifecycle and the field
//! query, on top of a [`DocumentStore`].
//!
//! # Policies
//!
//! - Re-opening an open document overwrites it with the new text
//! - A change for a document that isn't open is dropped
//! - A change batch commits in full or not at all
//! - Closing a document that isn't open is fine

use csv_analyzer::{apply_batch, field_label, EditDescription, PatchError};
use lsp_types::Position;

use super::state::{Document, DocumentId};
use super::store::{DocumentStore, MemoryStore};

/// What happened to a change batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// Every edit applied and the result was stored.
    Applied,
    /// The document isn't open; nothing was done.
    UnknownDocument,
    /// An edit failed validation; the stored document is untouched.
    Rejected(PatchError),
}

/// Operations the protocol layer drives.
pub trait DocumentService: Send + Sync {
    fn open(&self, id: DocumentId, text: &str, version: i32);

    fn change(&self, id: &DocumentId, version: i32, edits: &[EditDescription]) -> ChangeOutcome;

    fn close(&self, id: &DocumentId);

    fn save(&self, id: &DocumentId);

    /// Header label of the field under `position`, using `delimiter`.
    fn field_at(&self, id: &DocumentId, position: Position, delimiter: char) -> Option<String>;
}

/// The sync controller and field resolver.
#[derive(Debug, Default)]
pub struct DocumentSync<S = MemoryStore> {
    store: S,
}

impl<S: DocumentStore> DocumentSync<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: DocumentStore> DocumentService for DocumentSync<S> {
    fn open(&self, id: DocumentId, text: &str, version: i32) {
        let replaced = self.store.put(Document::new(id.clone(), text, version));
        if replaced {
            tracing::debug!("Document re-opened, replacing stored text: {}", id);
        } else {
            tracing::debug!("Document opened: {}", id);
        }
    }

    fn change(&self, id: &DocumentId, version: i32, edits: &[EditDescription]) -> ChangeOutcome {
        tracing::trace!("Applying {} edit(s) to {}", edits.len(), id);

        let result = self.store.update(id, |doc| {
            let text = apply_batch(&doc.text(), edits)?;
            Ok::<_, PatchError>(doc.with_text(&text, version))
        });

        match result {
            Some(Ok(())) => ChangeOutcome::Applied,
            Some(Err(e)) => {
                tracing::warn!("Discarding change batch for {}: {}", id, e);
                ChangeOutcome::Rejected(e)
            }
            None => {
                tracing::debug!("Change for document that is not open: {}", id);
                ChangeOutcome::UnknownDocument
            }
        }
    }

    fn close(&self, id: &DocumentId) {
        tracing::debug!("Document closed: {}", id);
        self.store.delete(id);
    }

    fn save(&self, id: &DocumentId) {
        tracing::debug!("Document saved: {}", id);
    }

    fn field_at(&self, id: &DocumentId, position: Position, delimiter: char) -> Option<String> {
        if position.line == 0 {
            return None;
        }
        let doc = self.store.get(id)?;
        field_label(&doc.text(), position, delimiter)
    }
}
