//! Route handlers for the product search API.
//!
//! Successful responses are JSON; errors are plain-text bodies with the
//! matching status code.

use super::AppState;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Query string for `GET /api/search`.
///
/// Repeated keys are allowed; the first occurrence wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Search query; required and non-empty.
    pub q: String,
    /// `true` to wait for the configured delay before searching.
    pub delay: Option<String>,
}

impl SearchParams {
    /// Collect the parameters from decoded query-string pairs.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut q = None;
        let mut delay = None;
        for (key, value) in pairs {
            match key.as_str() {
                "q" if q.is_none() => q = Some(value),
                "delay" if delay.is_none() => delay = Some(value),
                _ => {}
            }
        }
        Self {
            q: q.unwrap_or_default(),
            delay,
        }
    }

    fn wants_delay(&self) -> bool {
        self.delay.as_deref() == Some("true")
    }
}

/// `GET /health` liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok"
    }))
}

/// `GET /api/search?q=<query>&delay=<true|false>`
pub async fn search_products(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let params = SearchParams::from_pairs(pairs);
    if params.q.is_empty() {
        return (StatusCode::BAD_REQUEST, "Query parameter 'q' is required").into_response();
    }
    tracing::info!(query = %params.q, "searching for products");

    if params.wants_delay() {
        tokio::time::sleep(state.search_delay).await;
    }

    match state.service.search(&params.q).await {
        Ok(results) => {
            if results.products.is_empty() {
                tracing::info!(query = %params.q, "no products found");
            } else {
                tracing::info!(query = %params.q, count = results.total_count, "found products");
            }
            Json(results.products).into_response()
        }
        Err(err) => {
            tracing::error!(query = %params.q, error = %err, "error scraping products");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to retrieve products").into_response()
        }
    }
}

/// `GET /api/product/{id}`
pub async fn product_detail(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let outcome = match state.service.detail(&id).await {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::error!(id = %id, error = %err, "error scraping product details");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to retrieve product details",
            )
                .into_response();
        }
    };

    if let Some(err) = outcome.error {
        tracing::info!(id = %id, error = %err, "no product details found");
        return (StatusCode::NOT_FOUND, "Product not found").into_response();
    }

    tracing::info!(id = %id, title = %outcome.product.title, "retrieved product details");
    Json(outcome.product).into_response()
}

/// `GET /api/product/` with an empty id segment.
pub async fn missing_product_id() -> Response {
    (StatusCode::BAD_REQUEST, "Product ID is required").into_response()
}
