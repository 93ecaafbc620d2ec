//! Transfer Error Types
//!
//! Every failure mode of the engine is a distinct tagged variant; callers
//! branch on the tag. `TransferConflict` in particular marks the one
//! outcome that is safely retryable by re-reading and re-attempting.

use thiserror::Error;
use uuid::Uuid;

use crate::wallet::models::WalletId;
use crate::wallet::store::StoreError;

/// Transfer engine errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("Wallet {0} not found")]
    WalletNotFound(WalletId),

    #[error("Sender and receiver wallets are the same")]
    SameWalletTransfer,

    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("Transfer lost a race with a concurrent operation")]
    TransferConflict,

    #[error("Amount must be greater than zero")]
    InvalidAmount,

    #[error("Amount would overflow the receiver balance")]
    Overflow,

    #[error("Transfer {0} not found")]
    TransferNotFound(Uuid),

    #[error("Database error: {0}")]
    Database(String),
}

impl TransferError {
    /// Stable error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            TransferError::WalletNotFound(_) => "WALLET_NOT_FOUND",
            TransferError::SameWalletTransfer => "SAME_WALLET_TRANSFER",
            TransferError::InsufficientBalance => "INSUFFICIENT_BALANCE",
            TransferError::TransferConflict => "TRANSFER_CONFLICT",
            TransferError::InvalidAmount => "INVALID_AMOUNT",
            TransferError::Overflow => "OVERFLOW",
            TransferError::TransferNotFound(_) => "TRANSFER_NOT_FOUND",
            TransferError::Database(_) => "DATABASE_ERROR",
        }
    }

    /// HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self {
            TransferError::WalletNotFound(_) | TransferError::TransferNotFound(_) => 404,
            TransferError::SameWalletTransfer
            | TransferError::InvalidAmount
            | TransferError::Overflow => 400,
            TransferError::InsufficientBalance => 422,
            TransferError::TransferConflict => 409,
            TransferError::Database(_) => 500,
        }
    }

    /// Whether retrying the same request can succeed without caller changes
    pub fn is_retryable(&self) -> bool {
        matches!(self, TransferError::TransferConflict)
    }
}

impl From<StoreError> for TransferError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::VersionConflict => TransferError::TransferConflict,
            // A row vanishing between read and write is a concurrent
            // mutation too; a retry will surface the missing wallet.
            StoreError::NotFound => TransferError::TransferConflict,
            StoreError::Database(msg) => TransferError::Database(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            TransferError::SameWalletTransfer.code(),
            "SAME_WALLET_TRANSFER"
        );
        assert_eq!(
            TransferError::InsufficientBalance.code(),
            "INSUFFICIENT_BALANCE"
        );
        assert_eq!(TransferError::TransferConflict.code(), "TRANSFER_CONFLICT");
    }

    #[test]
    fn test_http_status() {
        assert_eq!(TransferError::WalletNotFound(1).http_status(), 404);
        assert_eq!(TransferError::SameWalletTransfer.http_status(), 400);
        assert_eq!(TransferError::InsufficientBalance.http_status(), 422);
        assert_eq!(TransferError::TransferConflict.http_status(), 409);
        assert_eq!(TransferError::Database("x".into()).http_status(), 500);
    }

    #[test]
    fn test_only_conflict_is_retryable() {
        assert!(TransferError::TransferConflict.is_retryable());
        assert!(!TransferError::InsufficientBalance.is_retryable());
        assert!(!TransferError::SameWalletTransfer.is_retryable());
        assert!(!TransferError::WalletNotFound(1).is_retryable());
    }

    #[test]
    fn test_version_conflict_maps_to_transfer_conflict() {
        let err: TransferError = StoreError::VersionConflict.into();
        assert_eq!(err, TransferError::TransferConflict);
    }
}
