//! HTTP API for the calculator suite.
//!
//! | Method | Path | Operation |
//! |---|---|---|
//! | POST | `/api/calculate` | basic arithmetic |
//! | POST | `/api/factorial` | factorial |
//! | POST | `/api/prime-check` | prime check |
//! | POST | `/api/ncr` | nCr |
//! | POST | `/api/multiplication-table` | multiplication table |
//! | POST | `/api/series-sum` | alternating series sum |
//!
//! Success is `200` with the result record; invalid input is `400` with
//! `{ "message": ..., "code": ... }`.

pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use calc_core::{MemStorage, Storage};

use crate::config::ServerConfig;
use dto::{
    CalculateRequest, FactorialRequest, NcrRequest, PrimeCheckRequest, SeriesRequest,
    TableRequest,
};
use handlers::handle_calculation;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(MemStorage::new()))
    }
}

/// Build the router with all calculator routes.
pub fn router(state: AppState, config: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/api/calculate", post(handle_calculation::<CalculateRequest>))
        .route("/api/factorial", post(handle_calculation::<FactorialRequest>))
        .route("/api/prime-check", post(handle_calculation::<PrimeCheckRequest>))
        .route("/api/ncr", post(handle_calculation::<NcrRequest>))
        .route(
            "/api/multiplication-table",
            post(handle_calculation::<TableRequest>),
        )
        .route("/api/series-sum", post(handle_calculation::<SeriesRequest>))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if config.cors_permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
