//! payflow - Wallet Ledger & Transfer Engine
//!
//! Monetary wallets and atomic peer-to-peer transfers with optimistic
//! concurrency control: no global locks, a version counter per wallet, and
//! a distinct conflict signal when concurrent requests race.
//!
//! # Modules
//!
//! - [`money`] - Exact fixed-scale decimal amounts
//! - [`wallet`] - Wallet records, store contract (conditional saves), and
//!   the wallet service (create/update/delete, deposit/withdraw)
//! - [`transfer`] - Transfer records, store contract, and the transfer
//!   engine (the concurrency-safe two-wallet commit)
//! - [`db`] - PostgreSQL pool management and schema bootstrap
//! - [`gateway`] - axum HTTP surface (routing, DTOs, status mapping)
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing setup (rolling file + stdout)

pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod money;
pub mod transfer;
pub mod wallet;

// Convenient re-exports at crate root
pub use money::{Money, MoneyError};
pub use transfer::{Page, Transfer, TransferEngine, TransferError, TransferStore};
pub use wallet::{
    MemoryWalletStore, NewWallet, PgWalletStore, StoreError, Wallet, WalletError, WalletId,
    WalletService, WalletStore,
};
