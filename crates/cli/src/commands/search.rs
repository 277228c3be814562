use shopsense_core::engine::ProductFilter;
use shopsense_core::response::Envelope;

use crate::commands::{load_engine, CommandResult};

#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub category: Option<String>,
    pub store: Option<String>,
    pub product_name: Option<String>,
    pub comparable_only: bool,
    pub page: i64,
    pub per_page: usize,
}

/// Unlike the HTTP route, omitted price bounds stay unbounded, so results keep catalog order
/// unless a bound is given.
pub fn run(options: SearchOptions) -> CommandResult {
    let engine = match load_engine("search") {
        Ok(engine) => engine,
        Err(result) => return result,
    };

    let filter = ProductFilter {
        min_price: options.min_price,
        max_price: options.max_price,
        category: options.category,
        store: options.store,
        name: options.product_name,
        comparable_only: options.comparable_only,
    };

    let result = engine.search(&filter, options.page, options.per_page);
    CommandResult::envelope("search", &Envelope::from_page(result))
}
