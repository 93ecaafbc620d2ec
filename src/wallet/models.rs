//! Wallet data model
//!
//! Balance and version are PRIVATE - the only way to change a balance is
//! through [`Wallet::credit`] / [`Wallet::debit`], and the only way a
//! version advances is a committed conditional save at the store layer.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::money::Money;

/// Wallet identifier, assigned by the store at creation
pub type WalletId = i64;

/// Balance mutation errors
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BalanceError {
    #[error("Insufficient balance")]
    Insufficient,

    #[error("Balance arithmetic overflow")]
    Overflow,
}

/// Owner profile supplied when opening a wallet
///
/// `document` is an opaque national document number; format and checksum
/// validation happen before the request reaches this crate.
#[derive(Debug, Clone)]
pub struct NewWallet {
    pub full_name: String,
    pub document: String,
    pub email: String,
}

/// A wallet: owner profile, non-negative balance, optimistic-lock version
///
/// # Invariants
/// - `balance >= 0` after any committed mutation
/// - `version` advances by exactly 1 per committed mutation (store-side)
/// - `id` and `document` are immutable once assigned
#[derive(Debug, Clone, PartialEq)]
pub struct Wallet {
    id: WalletId,
    pub full_name: String,
    document: String,
    pub email: String,
    balance: Money,
    version: u64,
    created_at: DateTime<Utc>,
}

impl Wallet {
    /// Assemble a wallet from stored parts. Store implementations only.
    pub(crate) fn from_parts(
        id: WalletId,
        full_name: String,
        document: String,
        email: String,
        balance: Money,
        version: u64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            full_name,
            document,
            email,
            balance,
            version,
            created_at,
        }
    }

    pub fn id(&self) -> WalletId {
        self.id
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// The version this copy was read at; the store compares it on save
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Add funds to the balance
    pub fn credit(&mut self, amount: Money) -> Result<(), BalanceError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .map_err(|_| BalanceError::Overflow)?;
        Ok(())
    }

    /// Remove funds from the balance
    ///
    /// # Errors
    /// - `Insufficient` if the balance is below `amount`
    pub fn debit(&mut self, amount: Money) -> Result<(), BalanceError> {
        if self.balance < amount {
            return Err(BalanceError::Insufficient);
        }
        self.balance = self
            .balance
            .checked_sub(amount)
            .map_err(|_| BalanceError::Overflow)?;
        Ok(())
    }

    /// Advance the version after a committed save. Store implementations only.
    pub(crate) fn bump_version(&mut self) {
        self.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet_with(balance: &str) -> Wallet {
        Wallet::from_parts(
            1,
            "Ada Lovelace".to_string(),
            "12345678900".to_string(),
            "ada@example.com".to_string(),
            balance.parse().unwrap(),
            0,
            Utc::now(),
        )
    }

    #[test]
    fn test_credit() {
        let mut w = wallet_with("0.00");
        w.credit("50.00".parse().unwrap()).unwrap();
        assert_eq!(w.balance(), "50.00".parse().unwrap());
        // Mutation alone never advances the version
        assert_eq!(w.version(), 0);
    }

    #[test]
    fn test_debit() {
        let mut w = wallet_with("50.00");
        w.debit("30.00".parse().unwrap()).unwrap();
        assert_eq!(w.balance(), "20.00".parse().unwrap());
    }

    #[test]
    fn test_debit_insufficient() {
        let mut w = wallet_with("100.00");
        let res = w.debit("100.01".parse().unwrap());
        assert_eq!(res, Err(BalanceError::Insufficient));
        // Balance unchanged on failure
        assert_eq!(w.balance(), "100.00".parse().unwrap());
    }

    #[test]
    fn test_debit_exact_balance() {
        let mut w = wallet_with("100.00");
        w.debit("100.00".parse().unwrap()).unwrap();
        assert_eq!(w.balance(), Money::zero());
    }
}
