use crate::catalog::CatalogStore;
use crate::domain::product::RowIndex;

/// First row, in catalog order, whose name contains `query` ignoring case.
///
/// Relevance plays no part: an earlier weak match wins over a later exact one.
pub fn resolve(store: &CatalogStore, query: Option<&str>) -> Option<RowIndex> {
    let query = query.filter(|query| !query.is_empty())?;
    let needle = query.to_lowercase();
    store
        .rows()
        .find(|(_, product)| product.product_name.to_lowercase().contains(&needle))
        .map(|(row, _)| row)
}

pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
