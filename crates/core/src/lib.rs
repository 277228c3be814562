pub mod catalog;
pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod response;

#[cfg(test)]
pub(crate) mod test_support;

pub use catalog::{CatalogLoadError, CatalogStore, MatrixKind, SimilarityMatrix};
pub use config::{AppConfig, CatalogConfig, ConfigError, ConfigOverrides, LoadOptions, LogFormat};
pub use domain::page::Page;
pub use domain::product::{IdKind, PriceComparison, ProductId, ProductRecord, ProductView, RowIndex};
pub use engine::{CatalogEngine, PageRequest, ProductFilter, SortKey};
pub use errors::{EngineError, ErrorKind};
pub use response::Envelope;
