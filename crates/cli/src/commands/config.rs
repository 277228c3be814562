use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use shopsense_core::config::{AppConfig, LoadOptions};
use toml::Value;

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = detect_config_path();
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());
    let source = |key_path: &str, env_keys: &[&str]| {
        field_source(key_path, env_keys, config_file_doc.as_ref(), config_file_path.as_deref())
    };

    let entries = [
        (
            "catalog.products_path",
            config.catalog.products_path.display().to_string(),
            &["SHOPSENSE_CATALOG_PRODUCTS_PATH"][..],
        ),
        (
            "catalog.content_similarity_path",
            config.catalog.content_similarity_path.display().to_string(),
            &["SHOPSENSE_CATALOG_CONTENT_SIMILARITY_PATH"][..],
        ),
        (
            "catalog.collaborative_similarity_path",
            config.catalog.collaborative_similarity_path.display().to_string(),
            &["SHOPSENSE_CATALOG_COLLABORATIVE_SIMILARITY_PATH"][..],
        ),
        (
            "server.bind_address",
            config.server.bind_address.clone(),
            &["SHOPSENSE_SERVER_BIND_ADDRESS"][..],
        ),
        ("server.port", config.server.port.to_string(), &["SHOPSENSE_SERVER_PORT"][..]),
        (
            "server.graceful_shutdown_secs",
            config.server.graceful_shutdown_secs.to_string(),
            &["SHOPSENSE_SERVER_GRACEFUL_SHUTDOWN_SECS"][..],
        ),
        (
            "pagination.max_page_size",
            config.pagination.max_page_size.to_string(),
            &["SHOPSENSE_PAGINATION_MAX_PAGE_SIZE"][..],
        ),
        (
            "logging.level",
            config.logging.level.clone(),
            &["SHOPSENSE_LOGGING_LEVEL", "SHOPSENSE_LOG_LEVEL"][..],
        ),
        (
            "logging.format",
            format!("{:?}", config.logging.format),
            &["SHOPSENSE_LOGGING_FORMAT", "SHOPSENSE_LOG_FORMAT"][..],
        ),
    ];

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];
    for (key, value, env_keys) in entries {
        lines.push(render_line(key, &value, source(key, env_keys)));
    }

    lines.join("\n")
}

fn detect_config_path() -> Option<PathBuf> {
    [PathBuf::from("shopsense.toml"), PathBuf::from("config/shopsense.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) =
        env_keys.iter().find(|key| env::var(key).is_ok_and(|value| !value.trim().is_empty()))
    {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}
