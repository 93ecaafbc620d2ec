//! payflow - Wallet Ledger & Transfer Engine
//!
//! Entry point. Architecture:
//!
//! ```text
//! ┌─────────┐    ┌───────────────┐    ┌──────────────┐    ┌───────────┐
//! │ Gateway │───▶│ WalletService │───▶│ WalletStore  │───▶│ PostgreSQL│
//! │ (axum)  │───▶│ TransferEngine│───▶│ TransferStore│    │ or memory │
//! └─────────┘    └───────────────┘    └──────────────┘    └───────────┘
//! ```
//!
//! All balance mutations go through the stores' conditional saves; the
//! gateway only converts shapes and statuses.

use std::sync::Arc;

use payflow::config::AppConfig;
use payflow::db::Database;
use payflow::gateway::{self, state::AppState};
use payflow::transfer::engine::TransferEngine;
use payflow::transfer::memory::MemoryTransferStore;
use payflow::transfer::pg::PgTransferStore;
use payflow::transfer::store::TransferStore;
use payflow::wallet::memory::MemoryWalletStore;
use payflow::wallet::pg::PgWalletStore;
use payflow::wallet::service::WalletService;
use payflow::wallet::store::WalletStore;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _log_guard = payflow::logging::init_logging(&config);

    tracing::info!("Starting payflow in {} mode", env);

    let (wallet_store, transfer_store, db): (
        Arc<dyn WalletStore>,
        Arc<dyn TransferStore>,
        Option<Arc<Database>>,
    ) = match &config.postgres_url {
        Some(url) => {
            let db = Arc::new(Database::connect(url).await?);
            db.init_schema().await?;
            (
                Arc::new(PgWalletStore::new(db.pool().clone())),
                Arc::new(PgTransferStore::new(db.pool().clone())),
                Some(db),
            )
        }
        None => {
            tracing::warn!("No postgres_url configured; using in-memory stores (data is volatile)");
            (
                Arc::new(MemoryWalletStore::default()),
                Arc::new(MemoryTransferStore::default()),
                None,
            )
        }
    };

    let state = Arc::new(AppState {
        wallets: WalletService::new(wallet_store.clone()),
        engine: TransferEngine::new(wallet_store, transfer_store),
        db,
    });

    gateway::serve(&config.gateway, state).await
}
