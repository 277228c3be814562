use crate::catalog::CatalogStore;
use crate::domain::page::Page;
use crate::domain::product::{ProductRecord, ProductView};
use crate::engine::pagination::PageRequest;
use crate::engine::resolver::contains_ignore_case;

/// Conjunctive row filter. Text filters are case-insensitive substring matches; empty
/// strings behave like absent filters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductFilter {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub category: Option<String>,
    pub store: Option<String>,
    pub name: Option<String>,
    /// Drop rows without a usable price (`product_price <= 0`).
    pub comparable_only: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    CatalogOrder,
    PriceAscending,
    /// Descending `product_ratings * rating_count`, recomputed per query.
    WeightedRatingDescending,
}

impl ProductFilter {
    pub fn has_price_bound(&self) -> bool {
        self.min_price.is_some() || self.max_price.is_some()
    }

    pub fn matches(&self, product: &ProductRecord) -> bool {
        let price = product.product_price;
        if self.min_price.is_some_and(|min| price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| price > max) {
            return false;
        }
        if self.comparable_only && price <= 0.0 {
            return false;
        }

        text_matches(self.category.as_deref(), &product.product_category)
            && text_matches(self.store.as_deref(), &product.product_store)
            && text_matches(self.name.as_deref(), &product.product_name)
    }

    /// Price-bounded queries sort by price unless the caller asks otherwise.
    fn default_sort(&self) -> SortKey {
        if self.has_price_bound() {
            SortKey::PriceAscending
        } else {
            SortKey::CatalogOrder
        }
    }
}

fn text_matches(filter: Option<&str>, value: &str) -> bool {
    match filter {
        Some(needle) if !needle.is_empty() => contains_ignore_case(value, needle),
        _ => true,
    }
}

pub fn query(
    store: &CatalogStore,
    filter: &ProductFilter,
    sort: Option<SortKey>,
    request: PageRequest,
) -> Page<ProductView> {
    let mut rows: Vec<&ProductRecord> =
        store.records().iter().filter(|product| filter.matches(product)).collect();

    // `sort_by` is stable, so ties keep catalog order.
    match sort.unwrap_or_else(|| filter.default_sort()) {
        SortKey::CatalogOrder => {}
        SortKey::PriceAscending => {
            rows.sort_by(|left, right| left.product_price.total_cmp(&right.product_price));
        }
        SortKey::WeightedRatingDescending => {
            let mut scored: Vec<(f64, &ProductRecord)> =
                rows.iter().map(|product| (product.weighted_rating(), *product)).collect();
            scored.sort_by(|left, right| right.0.total_cmp(&left.0));
            rows = scored.into_iter().map(|(_, product)| product).collect();
        }
    }

    let total_pages = request.total_pages(rows.len()).max(1);
    let items = request.slice(&rows).iter().map(|product| ProductView::from(*product)).collect();
    Page::new(items, total_pages, request.page())
}
