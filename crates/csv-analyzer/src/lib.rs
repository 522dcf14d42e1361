// This file is part of csv-lsp.
// Copyright (C) 2025 Midnight Foundation
// SPDX-License-Identifier: Apache-2.0

//! CSV Analyzer - Pure engines for the CSV LSP
//!
//! This crate provides:
//! - Patch engine: applies range and full-text edits to document text
//! - Field lookup: maps a cursor position to its header field label
//! - Text helpers: line materialization and UTF-16 column conversion

pub mod edit;
pub mod fields;
pub mod patch;
pub mod text;

pub use edit::{EditDescription, PatchError};
pub use fields::{field_index, field_label, FIELD_DELIMITER};
pub use patch::{apply_batch, apply_edit, apply_to_text};
