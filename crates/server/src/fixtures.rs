//! Small in-memory catalog shared by handler tests.

use serde_json::json;
use shopsense_core::catalog::{CatalogStore, MatrixKind, SimilarityMatrix};
use shopsense_core::domain::product::ProductRecord;
use shopsense_core::engine::CatalogEngine;

pub fn engine() -> CatalogEngine {
    let records: Vec<ProductRecord> = serde_json::from_value(json!([
        {
            "product_id": 1, "product_name": "Red Shoe", "product_price": 10.0,
            "product_category": "Footwear, Sale", "product_store": "ShoeMart",
            "product_ratings": 4.0, "rating_count": 10.0, "date": "2024-01-15"
        },
        {
            "product_id": 2, "product_name": "Blue Shoe", "product_price": 20.0,
            "product_category": "Footwear", "product_store": "Corner Shop",
            "product_ratings": 5.0, "rating_count": null, "date": "2024-01-15"
        },
        {
            "product_id": 3, "product_name": "Red Hat", "product_price": 5.0,
            "product_category": "Hats, Sale", "product_store": "HatMart",
            "product_ratings": 4.5, "rating_count": 20.0, "date": "2024-01-16"
        }
    ]))
    .expect("fixture records decode");

    let content = SimilarityMatrix::from_rows(
        MatrixKind::Content,
        vec![vec![1.0, 0.2, 0.9], vec![0.2, 1.0, 0.1], vec![0.9, 0.1, 1.0]],
    )
    .expect("square content matrix");
    let collaborative = SimilarityMatrix::from_rows(
        MatrixKind::Collaborative,
        vec![vec![1.0, 0.7, 0.3], vec![0.7, 1.0, 0.5], vec![0.3, 0.5, 1.0]],
    )
    .expect("square collaborative matrix");

    CatalogEngine::new(CatalogStore::new(records), content, collaborative)
        .expect("aligned fixture engine")
}
