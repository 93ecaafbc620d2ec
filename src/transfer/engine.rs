//! Transfer Engine
//!
//! Executes one wallet-to-wallet transfer exactly once, or fails cleanly
//! with no partial effect. The engine holds no locks and never retries:
//! concurrency control is delegated to the store's conditional saves, and
//! a lost race surfaces as [`TransferError::TransferConflict`] for the
//! caller to handle.
//!
//! Per-transfer flow:
//!
//! ```text
//! load sender ─ load receiver ─ rule checks ─ debit/credit
//!     ─ conditional_save_pair (atomic, both version-checked)
//!     ─ append Transfer record ─ return
//! ```

use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use crate::money::Money;
use crate::wallet::models::{BalanceError, WalletId};
use crate::wallet::store::{StoreError, WalletStore};

use super::error::TransferError;
use super::models::{Page, Transfer};
use super::store::TransferStore;

pub struct TransferEngine {
    wallets: Arc<dyn WalletStore>,
    transfers: Arc<dyn TransferStore>,
}

impl TransferEngine {
    pub fn new(wallets: Arc<dyn WalletStore>, transfers: Arc<dyn TransferStore>) -> Self {
        Self { wallets, transfers }
    }

    /// Move `amount` from `sender_id` to `receiver_id`
    ///
    /// On success exactly two wallet rows were mutated (as one atomic
    /// unit, each version advanced by 1) and one transfer record appended.
    /// On any error nothing was persisted.
    ///
    /// # Errors
    /// - `InvalidAmount` - amount is zero or negative
    /// - `WalletNotFound` - either wallet id does not exist
    /// - `SameWalletTransfer` - sender and receiver are the same wallet
    /// - `InsufficientBalance` - sender balance below `amount` at read time
    /// - `TransferConflict` - a concurrent operation won the version race;
    ///   safe to retry from scratch
    pub async fn execute(
        &self,
        sender_id: WalletId,
        receiver_id: WalletId,
        amount: Money,
    ) -> Result<Transfer, TransferError> {
        // Shape validation belongs to the request layer; re-checked here so
        // internal callers cannot bypass it.
        if !amount.is_positive() {
            return Err(TransferError::InvalidAmount);
        }

        let mut sender = self.load_wallet(sender_id).await?;
        let mut receiver = self.load_wallet(receiver_id).await?;

        // Transferring to oneself is never meaningful, regardless of funds
        if sender_id == receiver_id {
            return Err(TransferError::SameWalletTransfer);
        }

        if sender.balance() < amount {
            return Err(TransferError::InsufficientBalance);
        }

        sender.debit(amount).map_err(balance_error)?;
        receiver.credit(amount).map_err(balance_error)?;

        // Both writes commit or neither does; the versions read above are
        // what the store compares against.
        self.wallets
            .conditional_save_pair(&sender, &receiver)
            .await?;

        let transfer = Transfer::new(sender_id, receiver_id, amount);
        if let Err(e) = self.transfers.append(&transfer).await {
            // Balances are already committed; the ledger record is the
            // only thing missing. Surface loudly instead of unwinding.
            error!(
                transfer_id = %transfer.id,
                sender_id,
                receiver_id,
                "Balances committed but transfer record append failed: {}",
                e
            );
            return Err(TransferError::Database(e.to_string()));
        }

        info!(
            transfer_id = %transfer.id,
            sender_id,
            receiver_id,
            amount = %amount,
            "Transfer committed"
        );
        Ok(transfer)
    }

    async fn load_wallet(
        &self,
        id: WalletId,
    ) -> Result<crate::wallet::models::Wallet, TransferError> {
        self.wallets.load(id).await.map_err(|e| match e {
            StoreError::NotFound => TransferError::WalletNotFound(id),
            other => other.into(),
        })
    }

    // ------------------------------------------------------------------
    // Query pass-throughs (no business logic beyond filtering)
    // ------------------------------------------------------------------

    pub async fn find_by_id(&self, id: Uuid) -> Result<Transfer, TransferError> {
        self.transfers
            .find_by_id(id)
            .await?
            .ok_or(TransferError::TransferNotFound(id))
    }

    pub async fn find_all(&self, page: Page) -> Result<Vec<Transfer>, TransferError> {
        Ok(self.transfers.find_all(page).await?)
    }

    pub async fn find_by_sender(&self, id: WalletId) -> Result<Vec<Transfer>, TransferError> {
        Ok(self.transfers.find_by_sender(id).await?)
    }

    pub async fn find_by_receiver(&self, id: WalletId) -> Result<Vec<Transfer>, TransferError> {
        Ok(self.transfers.find_by_receiver(id).await?)
    }
}

fn balance_error(e: BalanceError) -> TransferError {
    match e {
        // The explicit balance check runs before the debit
        BalanceError::Insufficient => TransferError::InsufficientBalance,
        BalanceError::Overflow => TransferError::Overflow,
    }
}
