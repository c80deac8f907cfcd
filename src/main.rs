use std::net::SocketAddr;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;

use vidly::logging::init_tracing;
use vidly::metrics::{init_metrics, metrics_router};
use vidly::router::init_router;
use vidly::state::init_app_state;
use vidly_config::ServerConfig;
use vidly_db::run_migrations;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let server_config = ServerConfig::from_env();
    init_tracing(&server_config);

    let state = init_app_state().await?;
    run_migrations(&state.db)
        .await
        .context("Failed to run database migrations")?;

    let mut app = init_router(state);
    if server_config.metrics_enabled {
        let handle = init_metrics()?;
        app = app.merge(metrics_router(handle));
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], server_config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(%addr, "Server listening");
    info!("Swagger UI available at http://localhost:{}/swagger-ui", server_config.port);
    info!("Scalar UI available at http://localhost:{}/scalar", server_config.port);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutting down");
}
