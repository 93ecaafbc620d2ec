//! Wallet service
//!
//! The inbound wallet operations: open, fetch, profile update, close,
//! deposit, withdraw. Deposit and withdraw follow the same
//! load -> mutate -> conditional-save protocol the transfer engine uses;
//! a lost race surfaces as `Conflict`, never as a silent retry.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::money::Money;

use super::models::{BalanceError, NewWallet, Wallet, WalletId};
use super::store::{StoreError, WalletStore};

/// Wallet operation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("Wallet {0} not found")]
    NotFound(WalletId),

    #[error("Wallet was modified by a concurrent operation")]
    Conflict,

    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("Amount must be greater than zero")]
    InvalidAmount,

    #[error("Amount would overflow the balance")]
    Overflow,

    #[error("Database error: {0}")]
    Database(String),
}

impl WalletError {
    /// Stable error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            WalletError::NotFound(_) => "WALLET_NOT_FOUND",
            WalletError::Conflict => "CONFLICT",
            WalletError::InsufficientBalance => "INSUFFICIENT_BALANCE",
            WalletError::InvalidAmount => "INVALID_AMOUNT",
            WalletError::Overflow => "OVERFLOW",
            WalletError::Database(_) => "DATABASE_ERROR",
        }
    }

    /// HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self {
            WalletError::NotFound(_) => 404,
            WalletError::Conflict => 409,
            WalletError::InsufficientBalance => 422,
            WalletError::InvalidAmount | WalletError::Overflow => 400,
            WalletError::Database(_) => 500,
        }
    }

    fn from_store(e: StoreError, id: WalletId) -> Self {
        match e {
            StoreError::NotFound => WalletError::NotFound(id),
            StoreError::VersionConflict => WalletError::Conflict,
            StoreError::Database(msg) => WalletError::Database(msg),
        }
    }
}

impl From<BalanceError> for WalletError {
    fn from(e: BalanceError) -> Self {
        match e {
            BalanceError::Insufficient => WalletError::InsufficientBalance,
            BalanceError::Overflow => WalletError::Overflow,
        }
    }
}

pub struct WalletService {
    store: Arc<dyn WalletStore>,
}

impl WalletService {
    pub fn new(store: Arc<dyn WalletStore>) -> Self {
        Self { store }
    }

    /// Open a new wallet with balance 0.00
    pub async fn create(&self, new: NewWallet) -> Result<Wallet, WalletError> {
        let wallet = self
            .store
            .create(new)
            .await
            .map_err(|e| WalletError::from_store(e, 0))?;

        info!(wallet_id = wallet.id(), "Wallet created");
        Ok(wallet)
    }

    pub async fn find_by_id(&self, id: WalletId) -> Result<Wallet, WalletError> {
        self.store
            .load(id)
            .await
            .map_err(|e| WalletError::from_store(e, id))
    }

    /// Update the owner profile (name and email; document is immutable)
    pub async fn update_profile(
        &self,
        id: WalletId,
        full_name: String,
        email: String,
    ) -> Result<Wallet, WalletError> {
        let mut wallet = self
            .store
            .load(id)
            .await
            .map_err(|e| WalletError::from_store(e, id))?;

        wallet.full_name = full_name;
        wallet.email = email;

        self.store
            .conditional_save(&wallet)
            .await
            .map_err(|e| WalletError::from_store(e, id))
    }

    pub async fn delete(&self, id: WalletId) -> Result<(), WalletError> {
        self.store
            .delete(id)
            .await
            .map_err(|e| WalletError::from_store(e, id))?;

        info!(wallet_id = id, "Wallet deleted");
        Ok(())
    }

    /// Credit `amount` to the wallet under the conditional-save protocol
    pub async fn deposit(&self, id: WalletId, amount: Money) -> Result<Wallet, WalletError> {
        if !amount.is_positive() {
            return Err(WalletError::InvalidAmount);
        }

        let mut wallet = self
            .store
            .load(id)
            .await
            .map_err(|e| WalletError::from_store(e, id))?;

        wallet.credit(amount)?;

        let saved = self
            .store
            .conditional_save(&wallet)
            .await
            .map_err(|e| WalletError::from_store(e, id))?;

        info!(wallet_id = id, amount = %amount, "Deposit committed");
        Ok(saved)
    }

    /// Debit `amount` from the wallet under the conditional-save protocol
    pub async fn withdraw(&self, id: WalletId, amount: Money) -> Result<Wallet, WalletError> {
        if !amount.is_positive() {
            return Err(WalletError::InvalidAmount);
        }

        let mut wallet = self
            .store
            .load(id)
            .await
            .map_err(|e| WalletError::from_store(e, id))?;

        if wallet.balance() < amount {
            return Err(WalletError::InsufficientBalance);
        }
        wallet.debit(amount)?;

        let saved = self
            .store
            .conditional_save(&wallet)
            .await
            .map_err(|e| WalletError::from_store(e, id))?;

        info!(wallet_id = id, amount = %amount, "Withdrawal committed");
        Ok(saved)
    }
}
