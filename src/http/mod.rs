//! HTTP transport: maps requests on `/products` to the Product actor.
//!
//! ## Example
//!
//! ```ignore
//! let system = ProductSystem::new(&config);
//! let app = http::router(system.product_client.clone());
//!
//! let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
//! http::serve(listener, app).await?;
//! system.shutdown().await?;
//! ```

pub mod response;
pub mod routes;

pub use response::ApiError;
pub use routes::router;

use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Serve `app` on `listener` until Ctrl+C.
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    serve_with_shutdown(listener, app, shutdown_signal()).await
}

/// Serve `app` on `listener` until `signal` resolves, then let open requests finish.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .await
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to install Ctrl+C handler");
        // Without a handler the server runs until the process is killed.
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
