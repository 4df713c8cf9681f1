//! HTTP API: router, shared state, and server entry points.
//!
//! ## Endpoints
//!
//! - `GET /api/search?q=<query>&delay=<true|false>`: product search
//! - `GET /api/product/{id}`: product detail
//! - `GET /health`: liveness probe
//!
//! Every response carries permissive CORS headers, and `OPTIONS` on any
//! path is answered with an empty 200. Requests that exceed the configured
//! handling deadline get a 408.

pub mod cors;
pub mod handlers;

use crate::config::ServerConfig;
use crate::error::Result;
use axum::routing::get;
use axum::{Router, middleware};
use shopscout_scrape::ProductService;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Scraper for the configured storefront.
    pub service: Arc<ProductService>,
    /// Delay applied to `delay=true` searches.
    pub search_delay: Duration,
    /// Deadline for handling one request.
    pub request_timeout: Duration,
}

impl AppState {
    /// Build handler state from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the scrape configuration is invalid.
    pub fn new(config: &ServerConfig) -> Result<Self> {
        Ok(Self {
            service: Arc::new(ProductService::new(config.scrape.clone())?),
            search_delay: config.search_delay(),
            request_timeout: config.request_timeout(),
        })
    }
}

/// Build the application router.
///
/// Requests running past `state.request_timeout` are answered with 408.
/// CORS is the outermost layer so timeouts and unmatched routes carry the
/// headers too.
pub fn router(state: AppState) -> Router {
    let request_timeout = state.request_timeout;
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/search", get(handlers::search_products))
        .route("/api/product/", get(handlers::missing_product_id))
        .route("/api/product/{id}", get(handlers::product_detail))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(middleware::from_fn(cors::cors))
        .with_state(state)
}

/// Bind the configured address and serve until the process exits.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the address cannot be
/// bound, or the server fails.
pub async fn serve(config: ServerConfig) -> Result<()> {
    config.validate()?;
    let state = AppState::new(&config)?;
    let listener = TcpListener::bind(config.bind_address()).await?;
    serve_on(listener, state).await
}

/// Serve the API on an already-bound listener.
///
/// # Errors
///
/// Returns an error if the listener address cannot be read or the server fails.
pub async fn serve_on(listener: TcpListener, state: AppState) -> Result<()> {
    let local_addr = listener.local_addr()?;
    tracing::info!(
        store = %state.service.config().storefront,
        "shopscout listening on http://{local_addr}"
    );
    axum::serve(listener, router(state)).await?;
    Ok(())
}
