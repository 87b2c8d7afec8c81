//! promobar-admin - Merchant Settings Service
//!
//! Serves the public landing page and the merchant-facing banner
//! settings page, persisting the four banner settings to the platform
//! metafield store.

use anyhow::Result;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use promobar_admin::config::AdminConfig;
use promobar_admin::services::metafield_client::MetafieldClient;
use promobar_admin::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting promobar-admin (Merchant Settings) service");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = AdminConfig::resolve()?;
    info!("Shop: {}", config.shop_domain);
    info!("Admin API version: {}", config.api_version);

    let store = MetafieldClient::new(
        &config.shop_domain,
        &config.api_version,
        config.admin_token.clone(),
    )?;

    let state = AppState::new(Arc::new(store));
    let app = promobar_admin::build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen).await?;
    info!("Listening on http://{}", config.listen);
    info!("Health check: http://{}/health", config.listen);

    axum::serve(listener, app).await?;

    Ok(())
}
