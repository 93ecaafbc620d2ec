//! HTTP Gateway
//!
//! Thin boundary over the wallet service and transfer engine: routing,
//! DTO conversion, and error-to-status mapping. No business rules here.

pub mod handlers;
pub mod state;
pub mod types;

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tokio::net::TcpListener;

use crate::config::GatewayConfig;
use handlers::{health, transfer, wallet};
use state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        // Wallet surface
        .route("/v1/api/wallet/create", post(wallet::create_wallet))
        .route("/v1/api/wallet/find/{id}", get(wallet::find_wallet))
        .route("/v1/api/wallet/update/{id}", put(wallet::update_wallet))
        .route("/v1/api/wallet/delete/{id}", delete(wallet::delete_wallet))
        .route("/v1/api/wallet/deposit/{id}", post(wallet::deposit))
        .route("/v1/api/wallet/withdraw/{id}", post(wallet::withdraw))
        // Transfer surface
        .route("/v1/api/transfer/create", post(transfer::create_transfer))
        .route("/v1/api/transfer/findAll", get(transfer::find_all_transfers))
        .route("/v1/api/transfer/find/sender/{id}", get(transfer::find_by_sender))
        .route(
            "/v1/api/transfer/find/receiver/{id}",
            get(transfer::find_by_receiver),
        )
        .route("/v1/api/transfer/find/{id}", get(transfer::find_transfer))
        .with_state(state)
}

/// Bind and serve the gateway until the process exits
pub async fn serve(config: &GatewayConfig, state: Arc<AppState>) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Gateway listening on {}", addr);

    axum::serve(listener, router(state)).await?;
    Ok(())
}
