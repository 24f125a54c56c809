use chrono::{FixedOffset, Utc};
use products_api::config::ServerConfig;
use products_api::http;
use products_api::lifecycle::{setup_tracing, ProductSystem};
use tracing::{error, info};

/// Asia/Tashkent, UTC+5 all year.
const TASHKENT_OFFSET_SECS: i32 = 5 * 3600;

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ServerConfig::default();
    let system = ProductSystem::new(&config);
    let app = http::router(system.product_client.clone());

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .map_err(|e| {
            error!(addr = %config.bind_address, error = %e, "Failed to bind");
            e.to_string()
        })?;

    let port = listener
        .local_addr()
        .map(|addr| addr.port())
        .map_err(|e| e.to_string())?;
    info!(addr = %config.bind_address, "Products API ishga tushdi: http://localhost:{port}");
    if let Some(tashkent) = FixedOffset::east_opt(TASHKENT_OFFSET_SECS) {
        let now = Utc::now().with_timezone(&tashkent);
        info!("Vaqt: {}", now.format("%d.%m.%Y, %H:%M:%S"));
    }

    if let Err(e) = http::serve(listener, app).await {
        error!(error = %e, "Server error");
    }

    system.shutdown().await
}
