//! Entry point for the `orderwatch-gateway` HTTP server.

use std::sync::Arc;

use orderwatch_gateway::{config::GatewayConfig, routes::create_router};
use orderwatch_shopify::ShopifyClient;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match GatewayConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let client = match ShopifyClient::new(config.store.clone()) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "failed to build Shopify client");
            std::process::exit(1);
        }
    };

    let app = create_router(Arc::new(client));

    let listener = match tokio::net::TcpListener::bind(config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %config.listen_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(
        addr = %config.listen_addr,
        store = %config.store.base_url,
        api_version = %config.store.api_version,
        "orderwatch-gateway listening"
    );

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
