//! In-memory transfer store

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::wallet::models::WalletId;
use crate::wallet::store::StoreError;

use super::models::{Page, Transfer};
use super::store::TransferStore;

#[derive(Default)]
pub struct MemoryTransferStore {
    // Append order is commit order, which keeps "oldest first" free
    records: Mutex<Vec<Transfer>>,
}

#[async_trait]
impl TransferStore for MemoryTransferStore {
    async fn append(&self, transfer: &Transfer) -> Result<(), StoreError> {
        let mut records = self.records.lock().unwrap();
        records.push(transfer.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Transfer>, StoreError> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|t| t.id == id).cloned())
    }

    async fn find_all(&self, page: Page) -> Result<Vec<Transfer>, StoreError> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .skip(page.offset() as usize)
            .take(page.size as usize)
            .cloned()
            .collect())
    }

    async fn find_by_sender(&self, id: WalletId) -> Result<Vec<Transfer>, StoreError> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().filter(|t| t.sender_id == id).cloned().collect())
    }

    async fn find_by_receiver(&self, id: WalletId) -> Result<Vec<Transfer>, StoreError> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .filter(|t| t.receiver_id == id)
            .cloned()
            .collect())
    }
}
