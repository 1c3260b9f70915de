//! Shared application state for the web server.

use std::sync::Arc;

use launchdash_charts::DashboardContext;
use launchdash_config::Config;
use launchdash_data::LaunchTable;

/// Shared state injected into every Axum handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Read-only after start-up
    pub dashboard: DashboardContext,
}

impl AppState {
    pub fn new(dashboard: DashboardContext) -> Self {
        Self { dashboard }
    }

    /// Load the dataset named in `config` and build the dashboard context.
    pub async fn load(config: &Config) -> launchdash_common::Result<Self> {
        let table = LaunchTable::load(&config.dataset.path).await?;
        let dashboard = DashboardContext::new(table, &config.dashboard)?;
        Ok(Self::new(dashboard))
    }
}

pub type SharedState = Arc<AppState>;
