// This file is part of csv-lsp.
// Copyright (C) 2025 Midnight Foundation
// SPDX-License-Identifier: Apache-2.0

//! Server configuration.
//!
//! There are no CLI flags. Logging is configured from the environment and
//! behavior from the client's `initializationOptions`.

use csv_analyzer::FIELD_DELIMITER;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Environment variable checked before `RUST_LOG`.
pub const LOG_ENV: &str = "CSV_LSP_LOG";

/// Options a client may pass in `initializationOptions`.
///
/// ```json
/// { "delimiter": ";" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerOptions {
    /// Field separator used by position queries.
    pub delimiter: char,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            delimiter: FIELD_DELIMITER,
        }
    }
}

impl ServerOptions {
    /// Read options from the initialize request, falling back to defaults.
    pub fn from_initialization_options(value: Option<serde_json::Value>) -> Self {
        let Some(value) = value else {
            return Self::default();
        };

        match serde_json::from_value(value) {
            Ok(options) => options,
            Err(e) => {
                tracing::warn!("Ignoring invalid initialization options: {}", e);
                Self::default()
            }
        }
    }
}

/// Log filter: `CSV_LSP_LOG`, then `RUST_LOG`, then `info`.
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_defaults_without_options() {
        let options = ServerOptions::from_initialization_options(None);
        assert_eq!(options.delimiter, ',');
    }

    #[test]
    fn test_custom_delimiter() {
        let options = ServerOptions::from_initialization_options(Some(json!({ "delimiter": ";" })));
        assert_eq!(options.delimiter, ';');
    }

    #[test]
    fn test_missing_field_uses_default() {
        let options = ServerOptions::from_initialization_options(Some(json!({ "other": true })));
        assert_eq!(options, ServerOptions::default());
    }

    #[test]
    fn test_invalid_options_fall_back() {
        let options = ServerOptions::from_initialization_options(Some(json!({ "delimiter": ";;" })));
        assert_eq!(options, ServerOptions::default());

        let options = ServerOptions::from_initialization_options(Some(json!("tab")));
        assert_eq!(options, ServerOptions::default());
    }
}
