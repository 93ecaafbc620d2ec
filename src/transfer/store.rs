//! Transfer Store contract
//!
//! Append-only: records are written once, after the wallet pair commit,
//! and never touched again. Queries are thin filters over the log.

use async_trait::async_trait;
use uuid::Uuid;

use crate::wallet::models::WalletId;
use crate::wallet::store::StoreError;

use super::models::{Page, Transfer};

#[async_trait]
pub trait TransferStore: Send + Sync {
    /// Append one committed transfer record
    async fn append(&self, transfer: &Transfer) -> Result<(), StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Transfer>, StoreError>;

    /// All transfers, oldest first, paged
    async fn find_all(&self, page: Page) -> Result<Vec<Transfer>, StoreError>;

    /// Transfers sent by a wallet, oldest first; empty when none
    async fn find_by_sender(&self, id: WalletId) -> Result<Vec<Transfer>, StoreError>;

    /// Transfers received by a wallet, oldest first; empty when none
    async fn find_by_receiver(&self, id: WalletId) -> Result<Vec<Transfer>, StoreError>;
}
