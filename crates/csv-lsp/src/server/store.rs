// This file is part of csv-lsp.
// Copyright (C) 2025 Midnight Foundation
// SPDX-License-Identifier: Apache-2.0

//! Keyed storage for open documents.

use dashmap::DashMap;

use super::state::{Document, DocumentId};

/// Storage seam between the sync controller and wherever documents live.
///
/// `get`/`put`/`delete` never fail. `update` is the read-modify-write used by
/// change batches; implementations must keep other writers to the same
/// identity out while it runs.
pub trait DocumentStore: Send + Sync {
    /// Current snapshot of a document.
    fn get(&self, id: &DocumentId) -> Option<Document>;

    /// Insert or overwrite. Returns `true` if an existing entry was replaced.
    fn put(&self, doc: Document) -> bool;

    /// Remove a document. Removing an absent document also succeeds, so this
    /// always returns `true`.
    fn delete(&self, id: &DocumentId) -> bool;

    /// Replace a document with the result of `f`, atomically per identity.
    ///
    /// Returns `None` if the document is absent. When `f` fails, nothing is
    /// written and the error is returned.
    ///
    /// The default is a plain get-then-put and is only atomic if the store
    /// has a single writer.
    fn update<E, F>(&self, id: &DocumentId, f: F) -> Option<Result<(), E>>
    where
        F: FnOnce(&Document) -> Result<Document, E>,
    {
        let current = self.get(id)?;
        Some(f(&current).map(|next| {
            self.put(next);
        }))
    }
}

/// In-memory store for the lifetime of the process.
///
/// DashMap shards its locks, so writers to different documents don't contend
/// and `update` holds the entry's shard lock across the whole batch.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: DashMap<DocumentId, Document>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentStore for MemoryStore {
    fn get(&self, id: &DocumentId) -> Option<Document> {
        self.documents.get(id).map(|entry| entry.value().clone())
    }

    fn put(&self, doc: Document) -> bool {
        self.documents.insert(doc.id().clone(), doc).is_some()
    }

    fn delete(&self, id: &DocumentId) -> bool {
        if self.documents.remove(id).is_none() {
            tracing::trace!("Delete of absent document: {}", id);
        }
        true
    }

    fn update<E, F>(&self, id: &DocumentId, f: F) -> Option<Result<(), E>>
    where
        F: FnOnce(&Document) -> Result<Document, E>,
    {
        let mut entry = self.documents.get_mut(id)?;
        Some(f(entry.value()).map(|next| {
            *entry.value_mut() = next;
        }))
    }
}
