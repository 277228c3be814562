use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use crate::catalog::similarity::{MatrixKind, SimilarityMatrix};
use crate::catalog::CatalogStore;
use crate::config::CatalogConfig;
use crate::domain::product::ProductRecord;
use crate::engine::CatalogEngine;

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("could not read `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse `{path}`: {source}")]
    ParseFile { path: PathBuf, source: serde_json::Error },
    #[error("product table `{0}` contains no rows")]
    EmptyCatalog(PathBuf),
    #[error("{matrix} similarity matrix is not square: row {row} has {found} columns, expected {expected}")]
    NotSquare { matrix: MatrixKind, row: usize, expected: usize, found: usize },
    #[error(
        "{matrix} similarity matrix is {matrix_size}x{matrix_size} but the catalog has {catalog_rows} rows"
    )]
    DimensionMismatch { matrix: MatrixKind, matrix_size: usize, catalog_rows: usize },
}

pub fn load(config: &CatalogConfig) -> Result<CatalogEngine, CatalogLoadError> {
    let store = load_products(&config.products_path)?;
    let content = load_matrix(MatrixKind::Content, &config.content_similarity_path)?;
    let collaborative =
        load_matrix(MatrixKind::Collaborative, &config.collaborative_similarity_path)?;

    let engine = CatalogEngine::new(store, content, collaborative)?;
    info!(
        event_name = "catalog.loaded",
        correlation_id = "bootstrap",
        rows = engine.store().len(),
        products_path = %config.products_path.display(),
        "catalog and similarity matrices loaded"
    );
    Ok(engine)
}

pub fn load_products(path: &Path) -> Result<CatalogStore, CatalogLoadError> {
    let products: Vec<ProductRecord> = read_json(path)?;
    if products.is_empty() {
        return Err(CatalogLoadError::EmptyCatalog(path.to_path_buf()));
    }
    Ok(CatalogStore::new(products))
}

pub fn load_matrix(kind: MatrixKind, path: &Path) -> Result<SimilarityMatrix, CatalogLoadError> {
    let rows: Vec<Vec<f64>> = read_json(path)?;
    SimilarityMatrix::from_rows(kind, rows)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogLoadError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| CatalogLoadError::ReadFile { path: path.to_path_buf(), source })?;
    serde_json::from_str(&raw)
        .map_err(|source| CatalogLoadError::ParseFile { path: path.to_path_buf(), source })
}
