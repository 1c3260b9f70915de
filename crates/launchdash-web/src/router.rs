//! Axum router: maps URL paths to handlers.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    charts::{api_pie_chart, api_scatter_chart},
    dashboard::dashboard,
    system::{api_health, api_layout},
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Page
        .route("/",                   get(dashboard))

        // API endpoints
        .route("/api/layout",         get(api_layout))
        .route("/api/charts/pie",     get(api_pie_chart))
        .route("/api/charts/scatter", get(api_scatter_chart))
        .route("/api/health",         get(api_health))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
