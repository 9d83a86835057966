use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use courier_ops::api;
use courier_ops::config::Config;
use courier_ops::error::AppError;
use courier_ops::notify::provider::{DeliveryProvider, HttpRelayProvider, NullProvider};
use courier_ops::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.clone()))
        .with_target(false)
        .compact()
        .init();

    let provider: Arc<dyn DeliveryProvider> = match &config.notify_relay_url {
        Some(url) => Arc::new(HttpRelayProvider::new(
            url.as_str(),
            config.notify_relay_token.clone(),
        )?),
        None => {
            tracing::warn!("no notification relay configured; sends are dropped");
            Arc::new(NullProvider)
        }
    };

    let http_port = config.http_port;
    let state = Arc::new(AppState::new(config, provider));
    let app = api::router(state);

    let bind_addr = format!("0.0.0.0:{http_port}");
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|err| AppError::Internal(format!("failed to bind {bind_addr}: {err}")))?;

    tracing::info!(http_port, "http server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| AppError::Internal(format!("server error: {err}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
