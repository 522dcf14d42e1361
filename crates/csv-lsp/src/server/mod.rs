// This file is part of csv-lsp.
// Copyright (C) 2025 Midnight Foundation
// SPDX-License-Identifier: Apache-2.0

//! The main Language Server implementation.
//!
//! # LSP Lifecycle
//!
//! 1. Editor starts our binary and sends `initialize` request
//! 2. We respond with our capabilities (what features we support)
//! 3. Editor sends `initialized` notification (handshake complete)
//! 4. Normal operation: document sync notifications and signature help requests
//! 5. Editor sends `shutdown` request, we respond, then `exit` notification

pub mod config;
mod state;
mod store;
mod sync;
mod utils;

use std::sync::Mutex;

use csv_analyzer::FIELD_DELIMITER;
use lsp_types::*;
use tower_lsp::jsonrpc::Result;
use tower_lsp::{Client, LanguageServer};

use config::ServerOptions;
use state::DocumentId;
use store::MemoryStore;
use sync::{DocumentService, DocumentSync};

/// The CSV Language Server.
///
/// Protocol handlers translate parameters and hand off to `documents`; all
/// document state lives behind its store.
pub struct CsvLanguageServer {
    /// The LSP client - used to send messages TO the editor.
    client: Client,

    /// Sync controller and field resolver over the open documents.
    documents: DocumentSync<MemoryStore>,

    /// Options from the initialize request.
    options: Mutex<ServerOptions>,
}

impl CsvLanguageServer {
    /// Create a new language server instance.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            documents: DocumentSync::new(MemoryStore::new()),
            options: Mutex::new(ServerOptions::default()),
        }
    }

    fn delimiter(&self) -> char {
        self.options
            .lock()
            .map(|options| options.delimiter)
            .unwrap_or(FIELD_DELIMITER)
    }
}

/// Implementation of the Language Server Protocol.
impl LanguageServer for CsvLanguageServer {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        tracing::info!("Received initialize request");

        let options = ServerOptions::from_initialization_options(params.initialization_options);
        tracing::info!("Field delimiter: {:?}", options.delimiter);
        if let Ok(mut guard) = self.options.lock() {
            *guard = options;
        }

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Options(
                    TextDocumentSyncOptions {
                        open_close: Some(true),
                        change: Some(TextDocumentSyncKind::INCREMENTAL),
                        save: Some(TextDocumentSyncSaveOptions::SaveOptions(SaveOptions {
                            include_text: Some(false),
                        })),
                        ..Default::default()
                    },
                )),
                signature_help_provider: Some(SignatureHelpOptions {
                    trigger_characters: Some(vec![",".to_string()]),
                    retrigger_characters: Some(vec![",".to_string()]),
                    work_done_progress_options: Default::default(),
                }),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "csv-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _params: InitializedParams) {
        tracing::info!("Server initialized - handshake complete");
        self.client
            .log_message(MessageType::INFO, "CSV LSP server ready")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        tracing::info!(
            "Shutdown requested with {} open document(s)",
            self.documents.store().len()
        );
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let doc = params.text_document;
        let id = DocumentId::from(&doc.uri);
        tracing::debug!("Opening {} (language: {})", id, doc.language_id);

        self.documents.open(id, &doc.text, doc.version);
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let id = DocumentId::from(&params.text_document.uri);
        let edits: Vec<_> = params
            .content_changes
            .into_iter()
            .map(utils::to_edit)
            .collect();

        // Outcomes are already logged; notifications have no reply.
        let _ = self
            .documents
            .change(&id, params.text_document.version, &edits);
    }

    async fn did_save(&self, params: DidSaveTextDocumentParams) {
        self.documents
            .save(&DocumentId::from(&params.text_document.uri));
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.documents
            .close(&DocumentId::from(&params.text_document.uri));
    }

    async fn signature_help(&self, params: SignatureHelpParams) -> Result<Option<SignatureHelp>> {
        let id = DocumentId::from(&params.text_document_position_params.text_document.uri);
        let position = params.text_document_position_params.position;

        let label = self.documents.field_at(&id, position, self.delimiter());
        tracing::trace!("Field at {}:{} in {}: {:?}", position.line, position.character, id, label);

        Ok(label.map(utils::field_signature))
    }
}
