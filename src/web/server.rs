//! HTTP server implementation

use axum::{routing::get, Router};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::service::ItemService;
use super::handlers::{create_item, delete_item, get_item, health_handler, list_items, update_item};

/// Build the application router
pub fn router(service: ItemService) -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/:name",
            get(get_item).patch(update_item).delete(delete_item),
        )
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// Run the web server until a shutdown signal arrives
pub async fn run_web_server(addr: SocketAddr, service: ItemService) -> anyhow::Result<()> {
    let app = router(service);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Items API available at http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Web server stopped");
    Ok(())
}

/// Resolve on Ctrl-C
///
/// Never resolves if the signal handler cannot be installed.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
