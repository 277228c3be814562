use std::collections::HashSet;

use crate::catalog::CatalogStore;
use crate::domain::product::{PriceComparison, ProductId, ProductView};
use crate::errors::EngineError;

/// Signed price gap between a base product and each comparison product.
///
/// `price_difference = base.price - candidate.price`, so cheaper candidates are positive.
/// Results are ordered ascending by difference; equal differences keep catalog order.
pub fn compare<S: AsRef<str>>(
    store: &CatalogStore,
    base_id: &str,
    compare_ids: &[S],
) -> Result<Vec<PriceComparison>, EngineError> {
    let id_kind = store.id_kind();
    let base_id = id_kind.coerce(base_id)?;
    let compare_ids = compare_ids
        .iter()
        .map(|raw| id_kind.coerce(raw.as_ref()))
        .collect::<Result<HashSet<ProductId>, _>>()?;

    if compare_ids.is_empty() {
        return Err(EngineError::InvalidInput(
            "No comparison product IDs were supplied.".to_string(),
        ));
    }

    let Some((_, base)) = store.find(&base_id) else {
        return Err(EngineError::NotFound(format!("Product with ID {base_id} not found.")));
    };

    let mut comparisons: Vec<PriceComparison> = store
        .records()
        .iter()
        .filter(|product| compare_ids.contains(&product.product_id))
        .map(|product| PriceComparison {
            product: ProductView::from(product),
            price_difference: base.product_price - product.product_price,
        })
        .collect();

    if comparisons.is_empty() {
        return Err(EngineError::NotFound("Some comparison product IDs not found.".to_string()));
    }

    comparisons.sort_by(|left, right| left.price_difference.total_cmp(&right.price_difference));
    Ok(comparisons)
}

#[cfg(test)]
mod tests {
    use super::compare;
    use crate::catalog::CatalogStore;
    use crate::domain::product::ProductId;
    use crate::errors::EngineError;
    use crate::test_support::product;

    fn store() -> CatalogStore {
        CatalogStore::new(vec![
            product(1, "Red Shoe", 10.0),
            product(2, "Blue Shoe", 20.0),
            product(3, "Red Hat", 5.0),
            product(4, "Red Shoe (outlet)", 10.0),
        ])
    }

    #[test]
    fn sorts_ascending_by_price_difference() {
        let result = compare(&store(), "1", &["2", "3"]).expect("comparison succeeds");

        let summary: Vec<(ProductId, f64)> = result
            .iter()
            .map(|row| (row.product.product_id.clone(), row.price_difference))
            .collect();
        assert_eq!(summary, vec![(ProductId::Int(2), -10.0), (ProductId::Int(3), 5.0)]);
    }

    #[test]
    fn difference_sign_tracks_relative_price() {
        let result = compare(&store(), "1", &["2", "3", "4"]).expect("comparison succeeds");

        for row in &result {
            let candidate = row.product.product_price;
            match candidate.partial_cmp(&10.0) {
                Some(std::cmp::Ordering::Less) => assert!(row.price_difference > 0.0),
                Some(std::cmp::Ordering::Greater) => assert!(row.price_difference < 0.0),
                _ => assert_eq!(row.price_difference, 0.0),
            }
        }
    }

    #[test]
    fn unknown_ids_among_known_ones_are_ignored() {
        let result = compare(&store(), "1", &["3", "999"]).expect("comparison succeeds");

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].product.product_id, ProductId::Int(3));
    }

    #[test]
    fn missing_base_or_candidates_are_not_found() {
        assert!(matches!(compare(&store(), "42", &["2"]), Err(EngineError::NotFound(_))));
        assert!(matches!(compare(&store(), "1", &["98", "99"]), Err(EngineError::NotFound(_))));
    }

    #[test]
    fn empty_comparison_set_is_invalid_input() {
        let none: [&str; 0] = [];
        assert!(matches!(compare(&store(), "1", &none), Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn identifiers_must_coerce_to_catalog_id_type() {
        assert!(matches!(
            compare(&store(), "one", &["2"]),
            Err(EngineError::TypeCoercionFailure { .. })
        ));
        assert!(matches!(
            compare(&store(), "1", &["2", "three"]),
            Err(EngineError::TypeCoercionFailure { .. })
        ));
    }
}
