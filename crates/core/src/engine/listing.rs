use std::collections::BTreeSet;

use crate::catalog::CatalogStore;
use crate::domain::page::Page;
use crate::domain::product::ProductRecord;
use crate::engine::pagination::PageRequest;
use crate::errors::EngineError;

/// Unfiltered browse over raw records. Unlike the filtered queries, pages outside
/// `1..=total_pages` are rejected.
pub fn list(
    store: &CatalogStore,
    request: PageRequest,
) -> Result<Page<ProductRecord>, EngineError> {
    let total_pages = request.total_pages(store.len());
    if request.page() < 1 || request.page() > total_pages as i64 {
        return Err(EngineError::OutOfRange { page: request.page(), total_pages });
    }

    let items = request.slice(store.records()).to_vec();
    Ok(Page::new(items, total_pages, request.page()))
}

/// Sorted, de-duplicated category tags across the catalog.
pub fn tags(store: &CatalogStore) -> Vec<String> {
    let tags: BTreeSet<&str> = store.records().iter().flat_map(ProductRecord::tags).collect();
    tags.into_iter().map(str::to_string).collect()
}
