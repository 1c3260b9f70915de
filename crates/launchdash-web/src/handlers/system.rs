//! Layout descriptor and health probe.

use axum::{extract::State, Json};
use launchdash_charts::Layout;
use serde::Serialize;

use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub records: usize,
    pub sites: usize,
}

/// GET /api/health
pub async fn api_health(State(state): State<SharedState>) -> Json<Health> {
    let table = state.dashboard.table();
    Json(Health {
        status: "ok",
        records: table.len(),
        sites: table.sites().len(),
    })
}

/// GET /api/layout
pub async fn api_layout(State(state): State<SharedState>) -> Json<Layout> {
    Json(state.dashboard.layout().clone())
}
