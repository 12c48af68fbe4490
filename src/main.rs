use item_registry::{app, AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = ServerConfig::default();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .init();

    let listener = TcpListener::bind(config.addr).await?;

    info!("Server started successfully");
    info!("Address: http://{}", listener.local_addr()?);
    info!("OpenAPI spec: {}", item_registry::API_JSON_PATH);

    axum::serve(listener, app(AppState::default()))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
