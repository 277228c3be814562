//! Query and recommendation engine over a loaded catalog.
//!
//! [`CatalogEngine`] owns the product table and both similarity matrices behind `Arc`s, so
//! clones are cheap and every request handler can hold one. All operations are synchronous,
//! read-only and allocation-local to the call.

pub mod compare;
pub mod hybrid;
pub mod listing;
pub mod pagination;
pub mod query;
pub mod ranking;
pub mod resolver;

use std::sync::Arc;

use tracing::debug;

use crate::catalog::{CatalogLoadError, CatalogStore, MatrixKind, SimilarityMatrix};
use crate::domain::page::Page;
use crate::domain::product::{PriceComparison, ProductRecord, ProductView, RowIndex};
use crate::errors::EngineError;

pub use pagination::PageRequest;
pub use query::{ProductFilter, SortKey};

#[derive(Clone, Debug)]
pub struct CatalogEngine {
    store: Arc<CatalogStore>,
    content: Arc<SimilarityMatrix>,
    collaborative: Arc<SimilarityMatrix>,
}

impl CatalogEngine {
    pub fn new(
        store: CatalogStore,
        content: SimilarityMatrix,
        collaborative: SimilarityMatrix,
    ) -> Result<Self, CatalogLoadError> {
        for matrix in [&content, &collaborative] {
            if matrix.size() != store.len() {
                return Err(CatalogLoadError::DimensionMismatch {
                    matrix: matrix.kind(),
                    matrix_size: matrix.size(),
                    catalog_rows: store.len(),
                });
            }
        }

        Ok(Self {
            store: Arc::new(store),
            content: Arc::new(content),
            collaborative: Arc::new(collaborative),
        })
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn matrix(&self, kind: MatrixKind) -> &SimilarityMatrix {
        match kind {
            MatrixKind::Content => &self.content,
            MatrixKind::Collaborative => &self.collaborative,
        }
    }

    pub fn resolve(&self, product_name: Option<&str>) -> Option<RowIndex> {
        let anchor = resolver::resolve(&self.store, product_name);
        debug!(
            event_name = "engine.anchor.resolved",
            query = product_name.unwrap_or_default(),
            anchor = anchor.map(|row| row.0),
            "resolved recommendation anchor"
        );
        anchor
    }

    /// Products ranked by similarity to the first product whose name matches `product_name`.
    pub fn recommend(
        &self,
        kind: MatrixKind,
        product_name: Option<&str>,
        page: i64,
        page_size: usize,
    ) -> Result<Page<ProductView>, EngineError> {
        let request = PageRequest::new(page, page_size)?;
        let anchor = self.resolve(product_name);
        ranking::rank(&self.store, self.matrix(kind), anchor, request)
    }

    pub fn hybrid_recommend(
        &self,
        product_name: Option<&str>,
        page: i64,
        page_size: usize,
    ) -> Result<Page<ProductView>, EngineError> {
        let request = PageRequest::new(page, page_size)?;
        let anchor = self.resolve(product_name);
        hybrid::merge(&self.store, &self.content, &self.collaborative, anchor, request)
    }

    pub fn search(
        &self,
        filter: &ProductFilter,
        page: i64,
        page_size: usize,
    ) -> Result<Page<ProductView>, EngineError> {
        let request = PageRequest::new(page, page_size)?;
        Ok(query::query(&self.store, filter, None, request))
    }

    pub fn top_rated(
        &self,
        category: Option<&str>,
        store: Option<&str>,
        page: i64,
        page_size: usize,
    ) -> Result<Page<ProductView>, EngineError> {
        let request = PageRequest::new(page, page_size)?;
        let filter = ProductFilter {
            category: category.map(str::to_string),
            store: store.map(str::to_string),
            ..ProductFilter::default()
        };
        Ok(query::query(&self.store, &filter, Some(SortKey::WeightedRatingDescending), request))
    }

    /// Every listing whose name matches `user_search`, cheapest first.
    pub fn compared_products(
        &self,
        user_search: &str,
        page: i64,
        page_size: usize,
    ) -> Result<Page<ProductView>, EngineError> {
        let request = PageRequest::new(page, page_size)?;
        let filter =
            ProductFilter { name: Some(user_search.to_string()), ..ProductFilter::default() };
        Ok(query::query(&self.store, &filter, Some(SortKey::PriceAscending), request))
    }

    pub fn compare_prices<S: AsRef<str>>(
        &self,
        base_id: &str,
        compare_ids: &[S],
    ) -> Result<Vec<PriceComparison>, EngineError> {
        compare::compare(&self.store, base_id, compare_ids)
    }

    pub fn list(&self, page: i64, page_size: usize) -> Result<Page<ProductRecord>, EngineError> {
        listing::list(&self.store, PageRequest::new(page, page_size)?)
    }

    pub fn tags(&self) -> Vec<String> {
        listing::tags(&self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::{CatalogEngine, ProductFilter};
    use crate::catalog::{CatalogLoadError, CatalogStore, MatrixKind, SimilarityMatrix};
    use crate::domain::product::ProductId;
    use crate::errors::EngineError;
    use crate::test_support::{engine, product};

    #[test]
    fn construction_rejects_misaligned_matrices() {
        let store = CatalogStore::new(vec![product(1, "Kettle", 20.0), product(2, "Mug", 4.0)]);
        let content =
            SimilarityMatrix::from_rows(MatrixKind::Content, vec![vec![1.0, 0.0], vec![0.0, 1.0]])
                .expect("square");
        let collaborative =
            SimilarityMatrix::from_rows(MatrixKind::Collaborative, vec![vec![1.0]]).expect("square");

        let result = CatalogEngine::new(store, content, collaborative);

        assert!(matches!(
            result,
            Err(CatalogLoadError::DimensionMismatch { matrix: MatrixKind::Collaborative, .. })
        ));
    }

    #[test]
    fn recommend_uses_the_requested_matrix() {
        let engine = engine();

        let content = engine
            .recommend(MatrixKind::Content, Some("red shoe"), 1, 2)
            .expect("content recommendations");
        let collaborative = engine
            .recommend(MatrixKind::Collaborative, Some("red shoe"), 1, 2)
            .expect("collaborative recommendations");

        assert_eq!(content.items[1].product_id, ProductId::Int(3));
        assert_eq!(collaborative.items[1].product_id, ProductId::Int(2));
    }

    #[test]
    fn zero_page_size_is_rejected_before_any_work() {
        let engine = engine();

        assert!(matches!(
            engine.search(&ProductFilter::default(), 1, 0),
            Err(EngineError::InvalidInput(_))
        ));
        assert!(matches!(
            engine.hybrid_recommend(Some("red"), 1, 0),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn compared_products_orders_matches_by_price() {
        let page = engine().compared_products("shoe", 1, 10).expect("query succeeds");

        let ids: Vec<ProductId> = page.items.iter().map(|item| item.product_id.clone()).collect();
        assert_eq!(ids, vec![ProductId::Int(1), ProductId::Int(2)]);
    }

    #[test]
    fn top_rated_filters_then_sorts_by_weighted_rating() {
        let page = engine().top_rated(None, Some("mart"), 1, 10).expect("query succeeds");

        let ids: Vec<ProductId> = page.items.iter().map(|item| item.product_id.clone()).collect();
        assert_eq!(ids, vec![ProductId::Int(3), ProductId::Int(1)]);
    }
}
