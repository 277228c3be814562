//! Catalog query routes.
//!
//! - `GET /recommend`                      content-similarity recommendations
//! - `GET /collaborative_recommendations`  collaborative-similarity recommendations
//! - `GET /hybrid_recommendations`         interleaved content + collaborative recommendations
//! - `GET /top_rated_products`             filtered listing sorted by weighted rating
//! - `GET /search_products`                price/category/store/name search
//! - `GET /get_compared_products`          one product across stores, cheapest first
//! - `GET /compare_prices`                 price differences against a base product
//! - `GET /get_all_products`               raw catalog browse
//! - `GET /all_tags`                       sorted category tags
//!
//! Engine failures are reported inside the envelope with `200 OK`; only malformed requests are
//! rejected at the HTTP level.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use shopsense_core::catalog::MatrixKind;
use shopsense_core::domain::page::Page;
use shopsense_core::domain::product::{PriceComparison, ProductRecord, ProductView};
use shopsense_core::engine::{CatalogEngine, ProductFilter};
use shopsense_core::errors::EngineError;
use shopsense_core::response::Envelope;
use tracing::{info, warn};

#[derive(Clone)]
pub struct ApiState {
    engine: CatalogEngine,
    max_page_size: usize,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct TagsResponse {
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    pub product_name: Option<String>,
    #[serde(default = "first_page")]
    pub page: i64,
    #[serde(default = "content_page_size")]
    pub page_size: usize,
}

#[derive(Debug, Deserialize)]
pub struct SimilarityQuery {
    #[serde(default)]
    pub product_name: String,
    #[serde(default = "first_page")]
    pub page: i64,
    #[serde(default = "similarity_page_size")]
    pub page_size: usize,
}

#[derive(Debug, Deserialize)]
pub struct TopRatedQuery {
    #[serde(default = "first_page")]
    pub page: i64,
    #[serde(default = "listing_page_size")]
    pub per_page: usize,
    pub category: Option<String>,
    pub store: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default = "first_page")]
    pub page: i64,
    #[serde(default = "listing_page_size")]
    pub per_page: usize,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub category: Option<String>,
    pub store: Option<String>,
    pub product_name: Option<String>,
    #[serde(rename = "isCompare")]
    pub is_compare: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ComparedProductsQuery {
    #[serde(default)]
    pub user_search: String,
    #[serde(default = "first_page")]
    pub page: i64,
    #[serde(default = "listing_page_size")]
    pub per_page: usize,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "first_page")]
    pub page: i64,
    #[serde(default = "listing_page_size")]
    pub page_size: usize,
}

fn first_page() -> i64 {
    1
}

fn content_page_size() -> usize {
    15
}

fn similarity_page_size() -> usize {
    5
}

fn listing_page_size() -> usize {
    10
}

pub fn router(engine: CatalogEngine, max_page_size: usize) -> Router {
    Router::new()
        .route("/recommend", get(recommend))
        .route("/collaborative_recommendations", get(collaborative_recommendations))
        .route("/hybrid_recommendations", get(hybrid_recommendations))
        .route("/top_rated_products", get(top_rated_products))
        .route("/search_products", get(search_products))
        .route("/get_compared_products", get(compared_products))
        .route("/compare_prices", get(compare_prices))
        .route("/get_all_products", get(all_products))
        .route("/all_tags", get(all_tags))
        .with_state(ApiState { engine, max_page_size })
}

async fn recommend(
    State(state): State<ApiState>,
    Query(query): Query<RecommendQuery>,
) -> Result<Json<Envelope<ProductView>>, (StatusCode, Json<ApiError>)> {
    let Some(product_name) = query.product_name else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError {
                error: "Please provide 'product_name' as a query parameter".to_string(),
            }),
        ));
    };

    let result = state.page_size(query.page_size).and_then(|page_size| {
        state.engine.recommend(MatrixKind::Content, Some(&product_name), query.page, page_size)
    });
    Ok(respond("recommend", result))
}

async fn collaborative_recommendations(
    State(state): State<ApiState>,
    Query(query): Query<SimilarityQuery>,
) -> Json<Envelope<ProductView>> {
    let result = state.page_size(query.page_size).and_then(|page_size| {
        state.engine.recommend(
            MatrixKind::Collaborative,
            Some(&query.product_name),
            query.page,
            page_size,
        )
    });
    respond("collaborative_recommendations", result)
}

async fn hybrid_recommendations(
    State(state): State<ApiState>,
    Query(query): Query<SimilarityQuery>,
) -> Json<Envelope<ProductView>> {
    let result = state.page_size(query.page_size).and_then(|page_size| {
        state.engine.hybrid_recommend(Some(&query.product_name), query.page, page_size)
    });
    respond("hybrid_recommendations", result)
}

async fn top_rated_products(
    State(state): State<ApiState>,
    Query(query): Query<TopRatedQuery>,
) -> Json<Envelope<ProductView>> {
    let category = non_empty(query.category);
    let store = non_empty(query.store);
    let result = state.page_size(query.per_page).and_then(|page_size| {
        state.engine.top_rated(category.as_deref(), store.as_deref(), query.page, page_size)
    });
    respond("top_rated_products", result)
}

async fn search_products(
    State(state): State<ApiState>,
    Query(query): Query<SearchQuery>,
) -> Json<Envelope<ProductView>> {
    // The route always supplies both bounds, so results come back price-sorted.
    let filter = ProductFilter {
        min_price: Some(query.min_price.unwrap_or(0.0)),
        max_price: Some(query.max_price.unwrap_or(f64::INFINITY)),
        category: non_empty(query.category),
        store: non_empty(query.store),
        name: non_empty(query.product_name),
        comparable_only: query.is_compare.as_deref().is_some_and(is_set),
    };
    let result = state
        .page_size(query.per_page)
        .and_then(|page_size| state.engine.search(&filter, query.page, page_size));
    respond("search_products", result)
}

async fn compared_products(
    State(state): State<ApiState>,
    Query(query): Query<ComparedProductsQuery>,
) -> Json<Envelope<ProductView>> {
    let result = state.page_size(query.per_page).and_then(|page_size| {
        state.engine.compared_products(&query.user_search, query.page, page_size)
    });
    respond("get_compared_products", result)
}

/// `compare_product_ids[]` is repeated once per id, so the raw pairs are collected here.
async fn compare_prices(
    State(state): State<ApiState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Envelope<PriceComparison>> {
    let mut product_id = String::new();
    let mut compare_ids = Vec::new();
    for (key, value) in pairs {
        match key.as_str() {
            "product_id" => product_id = value,
            "compare_product_ids[]" | "compare_product_ids" => compare_ids.push(value),
            _ => {}
        }
    }

    let result = state.engine.compare_prices(&product_id, &compare_ids);
    if let Err(error) = &result {
        log_failure("compare_prices", error);
    }
    Json(Envelope::from_records(result))
}

async fn all_products(
    State(state): State<ApiState>,
    Query(query): Query<ListQuery>,
) -> Json<Envelope<ProductRecord>> {
    let result = state
        .page_size(query.page_size)
        .and_then(|page_size| state.engine.list(query.page, page_size));
    respond("get_all_products", result)
}

async fn all_tags(State(state): State<ApiState>) -> Json<TagsResponse> {
    Json(TagsResponse { tags: state.engine.tags() })
}

impl ApiState {
    fn page_size(&self, requested: usize) -> Result<usize, EngineError> {
        if requested > self.max_page_size {
            return Err(EngineError::InvalidInput(format!(
                "Page size must be between 1 and {}.",
                self.max_page_size
            )));
        }
        Ok(requested)
    }
}

fn respond<T>(operation: &'static str, result: Result<Page<T>, EngineError>) -> Json<Envelope<T>> {
    match &result {
        Ok(page) => info!(
            event_name = "api.request.completed",
            operation,
            items = page.items.len(),
            current_page = page.current_page,
            "catalog query served"
        ),
        Err(error) => log_failure(operation, error),
    }
    Json(Envelope::from_page(result))
}

fn log_failure(operation: &'static str, error: &EngineError) {
    warn!(
        event_name = "api.request.failed",
        operation,
        error_kind = error.kind().as_str(),
        error = %error,
        "catalog query failed"
    );
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

/// Any non-empty flag value switches the filter on, `false` included.
fn is_set(value: &str) -> bool {
    !value.is_empty()
}
