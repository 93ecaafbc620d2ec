//! Gateway application state (shared)

use std::sync::Arc;

use crate::db::Database;
use crate::transfer::engine::TransferEngine;
use crate::wallet::service::WalletService;

pub struct AppState {
    pub wallets: WalletService,
    pub engine: TransferEngine,
    /// Present when running against PostgreSQL; used by the health check
    pub db: Option<Arc<Database>>,
}
