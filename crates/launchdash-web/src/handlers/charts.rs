//! Chart endpoints backing the dashboard inputs.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use launchdash_charts::ChartSpec;
use launchdash_common::{ApiError, PayloadRange, SiteSelection, ALL_SITES};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::figure::figure;
use crate::state::SharedState;

#[derive(Debug, Deserialize, Default)]
pub struct PieQuery {
    pub site: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ScatterQuery {
    pub site: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Typed chart plus its Plotly encoding.
#[derive(Debug, Serialize)]
pub struct ChartResponse {
    pub chart: ChartSpec,
    pub figure: Value,
}

impl From<ChartSpec> for ChartResponse {
    fn from(chart: ChartSpec) -> Self {
        let figure = figure(&chart);
        Self { chart, figure }
    }
}

fn parse_site(state: &SharedState, site: Option<&str>) -> Result<SiteSelection, ApiError> {
    let site: SiteSelection = site.unwrap_or(ALL_SITES).parse()?;
    state.dashboard.check_site(&site)?;
    Ok(site)
}

/// GET /api/charts/pie?site=<value>
pub async fn api_pie_chart(
    State(state): State<SharedState>,
    query: Result<Query<PieQuery>, QueryRejection>,
) -> Result<Json<ChartResponse>, ApiError> {
    let Query(query) = query?;
    let site = parse_site(&state, query.site.as_deref())?;
    let chart = state.dashboard.pie(&site);
    Ok(Json(ChartSpec::from(chart).into()))
}

/// GET /api/charts/scatter?site=<value>&min=<kg>&max=<kg>
pub async fn api_scatter_chart(
    State(state): State<SharedState>,
    query: Result<Query<ScatterQuery>, QueryRejection>,
) -> Result<Json<ChartResponse>, ApiError> {
    let Query(query) = query?;
    let site = parse_site(&state, query.site.as_deref())?;

    let default = state.dashboard.default_range()?;
    let range = PayloadRange::new(
        query.min.unwrap_or(default.lo()),
        query.max.unwrap_or(default.hi()),
    )?;

    let chart = state.dashboard.scatter(&site, range);
    Ok(Json(ChartSpec::from(chart).into()))
}
