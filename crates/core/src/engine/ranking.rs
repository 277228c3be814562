use crate::catalog::{CatalogStore, SimilarityMatrix};
use crate::domain::page::Page;
use crate::domain::product::{ProductRecord, ProductView, RowIndex};
use crate::engine::pagination::PageRequest;
use crate::errors::EngineError;

/// Every catalog row ordered by descending similarity to `anchor`, the anchor included.
/// Equal scores keep row order.
pub fn rank_rows(
    matrix: &SimilarityMatrix,
    anchor: RowIndex,
) -> Result<Vec<(RowIndex, f64)>, EngineError> {
    let scores = matrix.row(anchor).ok_or_else(|| {
        EngineError::NotFound(format!(
            "row {} is outside the {} similarity matrix",
            anchor.0,
            matrix.kind()
        ))
    })?;

    let mut ranked: Vec<(RowIndex, f64)> =
        scores.iter().enumerate().map(|(row, score)| (RowIndex(row), *score)).collect();
    ranked.sort_by(|left, right| right.1.total_cmp(&left.1));
    Ok(ranked)
}

pub fn rank(
    store: &CatalogStore,
    matrix: &SimilarityMatrix,
    anchor: Option<RowIndex>,
    request: PageRequest,
) -> Result<Page<ProductView>, EngineError> {
    let Some(anchor) = anchor else {
        return Ok(Page::unresolved(request.page()));
    };

    let ranked = rank_rows(matrix, anchor)?;
    let items = request
        .slice(&ranked)
        .iter()
        .map(|(row, _)| ProductView::with_integer_id(record(store, *row)?))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Page::new(items, request.total_pages(ranked.len()), request.page()))
}

pub(crate) fn record(store: &CatalogStore, row: RowIndex) -> Result<&ProductRecord, EngineError> {
    store
        .get(row)
        .ok_or_else(|| EngineError::NotFound(format!("catalog has no row {}", row.0)))
}
