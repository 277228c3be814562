use shopsense_core::catalog::{loader, CatalogLoadError};
use shopsense_core::config::{AppConfig, ConfigError};
use shopsense_core::engine::CatalogEngine;
use thiserror::Error;
use tracing::info;

pub struct Application {
    pub config: AppConfig,
    pub engine: CatalogEngine,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("catalog load failed: {0}")]
    Catalog(#[from] CatalogLoadError),
}

pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    let engine = loader::load(&config.catalog)?;
    info!(
        event_name = "system.bootstrap.catalog_loaded",
        correlation_id = "bootstrap",
        products = engine.store().len(),
        "catalog engine ready"
    );

    Ok(Application { config, engine })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use shopsense_core::catalog::CatalogLoadError;
    use shopsense_core::config::{AppConfig, ConfigOverrides, LoadOptions};
    use tempfile::TempDir;

    use super::{bootstrap_with_config, Application, BootstrapError};

    fn write_catalog(dir: &Path, collaborative: &str) {
        fs::write(
            dir.join("products.json"),
            r#"[
                {"product_id": 1, "product_name": "Kettle", "product_price": 25.0},
                {"product_id": 2, "product_name": "Teapot", "product_price": 18.5}
            ]"#,
        )
        .expect("write products");
        fs::write(dir.join("similarity.json"), "[[1.0, 0.4], [0.4, 1.0]]").expect("write content");
        fs::write(dir.join("collaborative.json"), collaborative).expect("write collaborative");
    }

    fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
        bootstrap_with_config(AppConfig::load(options)?)
    }

    fn options(dir: &Path) -> LoadOptions {
        LoadOptions {
            config_path: Some(dir.join("absent.toml")),
            overrides: ConfigOverrides {
                products_path: Some(dir.join("products.json")),
                content_similarity_path: Some(dir.join("similarity.json")),
                collaborative_similarity_path: Some(dir.join("collaborative.json")),
                ..ConfigOverrides::default()
            },
            ..LoadOptions::default()
        }
    }

    #[test]
    fn bootstrap_loads_catalog_from_configured_paths() {
        let dir = TempDir::new().expect("tempdir");
        write_catalog(dir.path(), "[[1.0, 0.1], [0.1, 1.0]]");

        let app = bootstrap(options(dir.path())).expect("bootstrap succeeds");

        assert_eq!(app.engine.store().len(), 2);
        assert_eq!(app.config.catalog.products_path, dir.path().join("products.json"));
    }

    #[test]
    fn bootstrap_rejects_misaligned_matrices() {
        let dir = TempDir::new().expect("tempdir");
        write_catalog(dir.path(), "[[1.0]]");

        let result = bootstrap(options(dir.path()));

        assert!(matches!(
            result,
            Err(BootstrapError::Catalog(CatalogLoadError::DimensionMismatch { .. }))
        ));
    }

    #[test]
    fn bootstrap_reports_missing_catalog_files() {
        let dir = TempDir::new().expect("tempdir");
        let mut config = AppConfig::default();
        config.catalog.products_path = dir.path().join("missing.json");

        let result = bootstrap_with_config(config);

        assert!(matches!(result, Err(BootstrapError::Catalog(CatalogLoadError::ReadFile { .. }))));
    }
}
