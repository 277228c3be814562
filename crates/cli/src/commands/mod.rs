pub mod compare;
pub mod config;
pub mod doctor;
pub mod recommend;
pub mod search;

use serde::Serialize;
use shopsense_core::catalog::loader;
use shopsense_core::config::{AppConfig, LoadOptions};
use shopsense_core::engine::CatalogEngine;
use shopsense_core::response::Envelope;

pub const EXIT_QUERY_FAILED: u8 = 1;
pub const EXIT_CONFIG_INVALID: u8 = 2;
pub const EXIT_CATALOG_UNAVAILABLE: u8 = 3;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: String,
    message: String,
}

impl CommandResult {
    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: error_class.to_string(),
            message: message.into(),
        };
        Self { exit_code, output: serialize_payload(payload) }
    }

    /// Prints a query envelope as-is; a failed query still yields a well-formed envelope.
    pub fn envelope<T: Serialize>(command: &str, envelope: &Envelope<T>) -> Self {
        let exit_code = if envelope.is_success() { 0 } else { EXIT_QUERY_FAILED };
        match serde_json::to_string(envelope) {
            Ok(output) => Self { exit_code, output },
            Err(error) => Self::failure(command, "serialization", error.to_string(), 1),
        }
    }
}

/// Loads configuration and the catalog engine, mapping each failure to its exit code.
pub fn load_engine(command: &str) -> Result<CatalogEngine, CommandResult> {
    let config = AppConfig::load(LoadOptions::default()).map_err(|error| {
        CommandResult::failure(
            command,
            "config_validation",
            format!("configuration validation failed: {error}"),
            EXIT_CONFIG_INVALID,
        )
    })?;

    loader::load(&config.catalog).map_err(|error| {
        CommandResult::failure(
            command,
            "catalog_load",
            format!("catalog could not be loaded: {error}"),
            EXIT_CATALOG_UNAVAILABLE,
        )
    })
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}
