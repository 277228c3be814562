use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;
use shopsense_core::catalog::MatrixKind;
use shopsense_core::engine::CatalogEngine;

#[derive(Clone)]
pub struct HealthState {
    engine: CatalogEngine,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub catalog: HealthCheck,
    pub checked_at: String,
}

pub fn router(engine: CatalogEngine) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { engine })
}

pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let catalog = catalog_check(&state.engine);
    let ready = catalog.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "shopsense-server runtime initialized".to_string(),
        },
        catalog,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

fn catalog_check(engine: &CatalogEngine) -> HealthCheck {
    let rows = engine.store().len();
    if rows == 0 {
        return HealthCheck { status: "degraded", detail: "catalog has no products".to_string() };
    }

    let content = engine.matrix(MatrixKind::Content).size();
    let collaborative = engine.matrix(MatrixKind::Collaborative).size();
    HealthCheck {
        status: "ready",
        detail: format!(
            "{rows} products, content {content}x{content}, collaborative {collaborative}x{collaborative}"
        ),
    }
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, http::StatusCode, Json};
    use shopsense_core::catalog::{CatalogStore, MatrixKind, SimilarityMatrix};
    use shopsense_core::engine::CatalogEngine;

    use crate::fixtures;
    use crate::health::{health, HealthState};

    #[tokio::test]
    async fn health_reports_catalog_dimensions_when_loaded() {
        let state = HealthState { engine: fixtures::engine() };
        let (status, Json(payload)) = health(State(state)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.status, "ready");
        assert_eq!(payload.service.status, "ready");
        assert_eq!(payload.catalog.detail, "3 products, content 3x3, collaborative 3x3");
    }

    #[tokio::test]
    async fn health_is_degraded_for_an_empty_catalog() {
        let engine = CatalogEngine::new(
            CatalogStore::default(),
            SimilarityMatrix::from_rows(MatrixKind::Content, Vec::new()).expect("empty matrix"),
            SimilarityMatrix::from_rows(MatrixKind::Collaborative, Vec::new())
                .expect("empty matrix"),
        )
        .expect("empty engine");

        let (status, Json(payload)) = health(State(HealthState { engine })).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(payload.status, "degraded");
        assert_eq!(payload.catalog.status, "degraded");
    }
}
