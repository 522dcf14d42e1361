// This file is part of csv-lsp.
// Copyright (C) 2025 Midnight Foundation
// SPDX-License-Identifier: Apache-2.0

//! CSV LSP - Language Server for comma-separated documents
//!
//! # How this works
//!
//! 1. This binary is started by the editor
//! 2. Communication happens over stdin/stdout using JSON-RPC
//! 3. The editor keeps us in sync with open buffers (didOpen/didChange/didClose)
//! 4. We answer signature help with the header field under the cursor
//!
//! # Why we use stderr for logging
//!
//! Since stdin/stdout are used for the LSP protocol, we CANNOT use
//! println!() for debugging. Instead, we use the `tracing` crate
//! which writes to stderr.

mod server;

use tower_lsp::{LspService, Server};

#[tokio::main]
async fn main() {
    // Set CSV_LSP_LOG=debug (or RUST_LOG) to see debug messages
    tracing_subscriber::fmt()
        .with_env_filter(server::config::log_filter())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting csv-lsp server");

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(server::CsvLanguageServer::new);

    // Runs until the editor disconnects
    Server::new(stdin, stdout, socket).serve(service).await;

    tracing::info!("csv-lsp server stopped");
}
