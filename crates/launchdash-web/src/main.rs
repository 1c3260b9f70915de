//! launchdash web server
//!
//! Run with: cargo run -p launchdash-web

use anyhow::Context;
use launchdash_config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting launch records dashboard...");

    let config = Config::load().context("failed to load configuration")?;

    // Load the dataset once; a missing or malformed file stops start-up here
    let state = launchdash_web::state::AppState::load(&config)
        .await
        .with_context(|| format!("failed to load dataset {:?}", config.dataset.path))?;

    let app = launchdash_web::router::build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
}
