use std::collections::HashSet;

use crate::catalog::{CatalogStore, SimilarityMatrix};
use crate::domain::page::Page;
use crate::domain::product::{ProductView, RowIndex};
use crate::engine::pagination::PageRequest;
use crate::engine::ranking::{rank_rows, record};
use crate::errors::EngineError;

/// Interleaves the content and collaborative rankings of `anchor`, position by position,
/// content first. A product id is emitted at most once per call.
pub fn merge(
    store: &CatalogStore,
    content: &SimilarityMatrix,
    collaborative: &SimilarityMatrix,
    anchor: Option<RowIndex>,
    request: PageRequest,
) -> Result<Page<ProductView>, EngineError> {
    let Some(anchor) = anchor else {
        return Ok(Page::unresolved(request.page()));
    };

    let content_ranking = rank_rows(content, anchor)?;
    let collaborative_ranking = rank_rows(collaborative, anchor)?;

    let longest = content_ranking.len().max(collaborative_ranking.len()) as i128;
    let (start, end) = request.bounds();
    let start = start.clamp(0, longest) as usize;
    let end = end.clamp(0, longest) as usize;

    let mut seen = HashSet::new();
    let mut items = Vec::new();
    for position in start..end {
        for ranking in [&content_ranking, &collaborative_ranking] {
            let Some((row, _)) = ranking.get(position) else {
                continue;
            };
            let view = ProductView::with_integer_id(record(store, *row)?)?;
            if seen.insert(view.product_id.clone()) {
                items.push(view);
            }
        }
    }

    Ok(Page::new(
        items,
        approximate_total_pages(content_ranking.len(), collaborative_ranking.len(), request),
        request.page(),
    ))
}

/// Page count derived from the two raw ranking lengths rather than the deduplicated output.
/// Overestimates whenever the rankings share products.
fn approximate_total_pages(
    content_len: usize,
    collaborative_len: usize,
    request: PageRequest,
) -> usize {
    let combined = (content_len + collaborative_len).saturating_sub(2);
    combined / request.page_size() + 1
}
