//! Single-route text servers.

use crate::config::ServerConfig;
use axum::{Router, routing::get};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Router answering `GET /` with the configured greeting
pub fn router(config: &ServerConfig) -> Router {
    let greeting = config.greeting.clone();
    Router::new().route("/", get(move || async move { greeting }))
}

/// Binds `0.0.0.0:{port}` and serves until the process is stopped
pub async fn serve(config: ServerConfig) -> std::io::Result<()> {
    let listener = TcpListener::bind(SocketAddr::from(([0, 0, 0, 0], config.port))).await?;
    serve_on(listener, &config).await
}

/// Serves on an already bound listener
pub async fn serve_on(listener: TcpListener, config: &ServerConfig) -> std::io::Result<()> {
    let port = listener.local_addr()?.port();
    ::log::info!("Example app listening at http://localhost:{}", port);

    axum::serve(listener, router(config)).await
}
