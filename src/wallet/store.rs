//! Wallet Store contract
//!
//! The single source of truth for balances. The conditional save is the
//! atomic primitive the whole concurrency model rests on: a write commits
//! only if the stored version still equals the version the caller read.

use async_trait::async_trait;
use thiserror::Error;

use super::models::{NewWallet, Wallet, WalletId};

/// Storage-layer errors shared by the wallet and transfer stores
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Record not found")]
    NotFound,

    #[error("Version conflict: record changed since it was read")]
    VersionConflict,

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            other => StoreError::Database(other.to_string()),
        }
    }
}

/// Persistence contract for wallets
///
/// `conditional_save` and `conditional_save_pair` implement compare-and-swap
/// on the version column: the stored version must equal the version carried
/// by the passed wallet, and becomes that version + 1 on success.
///
/// `conditional_save_pair` commits both wallets as ONE atomic unit - either
/// both version checks pass and both rows are written, or nothing is. This
/// is what makes a two-wallet transfer all-or-nothing.
#[async_trait]
pub trait WalletStore: Send + Sync {
    /// Open a new wallet with balance 0.00 and version 0
    async fn create(&self, new: NewWallet) -> Result<Wallet, StoreError>;

    /// Load a wallet by id
    ///
    /// # Errors
    /// - `NotFound` when no wallet has that id
    async fn load(&self, id: WalletId) -> Result<Wallet, StoreError>;

    /// Persist `wallet` if the stored version still matches
    ///
    /// Returns the saved wallet carrying the advanced version.
    ///
    /// # Errors
    /// - `VersionConflict` when another operation committed since the read
    /// - `NotFound` when the id no longer exists
    async fn conditional_save(&self, wallet: &Wallet) -> Result<Wallet, StoreError>;

    /// Persist two wallets atomically, both under their own version check
    ///
    /// # Errors
    /// - `VersionConflict` when either version check fails; neither wallet
    ///   is written in that case
    /// - `NotFound` when either id no longer exists
    async fn conditional_save_pair(&self, a: &Wallet, b: &Wallet) -> Result<(), StoreError>;

    /// Remove a wallet
    ///
    /// # Errors
    /// - `NotFound` when no wallet has that id
    async fn delete(&self, id: WalletId) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlx_error_mapping() {
        let err: StoreError = sqlx::Error::RowNotFound.into();
        assert_eq!(err, StoreError::NotFound);

        let err: StoreError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, StoreError::Database(_)));
    }
}
