pub mod loader;
pub mod similarity;

use crate::domain::product::{IdKind, ProductId, ProductRecord, RowIndex};

pub use loader::CatalogLoadError;
pub use similarity::{MatrixKind, SimilarityMatrix};

/// Ordered, read-only product table.
///
/// Row order is fixed at construction and doubles as the coordinate system of every
/// [`SimilarityMatrix`] loaded alongside it.
#[derive(Clone, Debug, Default)]
pub struct CatalogStore {
    products: Vec<ProductRecord>,
}

impl CatalogStore {
    pub fn new(products: Vec<ProductRecord>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn get(&self, row: RowIndex) -> Option<&ProductRecord> {
        self.products.get(row.0)
    }

    pub fn rows(&self) -> impl Iterator<Item = (RowIndex, &ProductRecord)> {
        self.products.iter().enumerate().map(|(index, product)| (RowIndex(index), product))
    }

    /// Native identifier kind, taken from the first row. Empty catalogs default to integers.
    pub fn id_kind(&self) -> IdKind {
        self.products.first().map(|product| product.product_id.kind()).unwrap_or(IdKind::Integer)
    }

    pub fn find(&self, product_id: &ProductId) -> Option<(RowIndex, &ProductRecord)> {
        self.rows().find(|(_, product)| &product.product_id == product_id)
    }
}
