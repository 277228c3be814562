//! Catalog fixtures shared by unit tests.

use crate::catalog::{CatalogStore, MatrixKind, SimilarityMatrix};
use crate::domain::product::{ProductId, ProductRecord};
use crate::engine::CatalogEngine;

pub fn product(id: i64, name: &str, price: f64) -> ProductRecord {
    ProductRecord {
        product_id: ProductId::Int(id),
        product_name: name.to_string(),
        product_link: format!("https://shop.example/p/{id}"),
        product_image: format!("https://shop.example/img/{id}.jpg"),
        product_price: price,
        product_category: String::new(),
        product_store: String::new(),
        product_ratings: 0.0,
        rating_count: 0.0,
        description: String::new(),
        date: "2024-01-15".to_string(),
        rating_weighted: 0.0,
    }
}

pub fn rated(id: i64, name: &str, ratings: f64, count: f64) -> ProductRecord {
    ProductRecord { product_ratings: ratings, rating_count: count, ..product(id, name, 0.0) }
}

/// Three-row engine: `Red Shoe`, `Blue Shoe`, `Red Hat`.
pub fn engine() -> CatalogEngine {
    let records = vec![
        ProductRecord {
            product_price: 10.0,
            product_store: "ShoeMart".to_string(),
            ..rated(1, "Red Shoe", 4.0, 10.0)
        },
        ProductRecord {
            product_price: 20.0,
            product_store: "Corner Shop".to_string(),
            ..rated(2, "Blue Shoe", 5.0, 100.0)
        },
        ProductRecord {
            product_price: 5.0,
            product_store: "HatMart".to_string(),
            ..rated(3, "Red Hat", 4.5, 20.0)
        },
    ];

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
