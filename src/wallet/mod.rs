//! Wallet Ledger
//!
//! Wallet records, the store contract with conditional (version-checked)
//! saves, and the inbound wallet operations (create/update/delete,
//! deposit/withdraw).

pub mod memory;
pub mod models;
pub mod pg;
pub mod service;
pub mod store;

pub use memory::MemoryWalletStore;
pub use models::{NewWallet, Wallet, WalletId};
pub use pg::PgWalletStore;
pub use service::{WalletError, WalletService};
pub use store::{StoreError, WalletStore};
