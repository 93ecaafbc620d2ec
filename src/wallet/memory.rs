//! In-memory wallet store
//!
//! Backs tests and the gateway's no-database mode. One mutex guards the
//! whole map, so the pair save holds the same atomicity guarantee the
//! PostgreSQL transaction gives: both version checks happen before either
//! write is applied.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::money::Money;

use super::models::{NewWallet, Wallet, WalletId};
use super::store::{StoreError, WalletStore};

#[derive(Default)]
pub struct MemoryWalletStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    wallets: HashMap<WalletId, Wallet>,
    last_id: WalletId,
}

impl Inner {
    /// Version check for one wallet; does not write
    fn check(&self, wallet: &Wallet) -> Result<(), StoreError> {
        let stored = self.wallets.get(&wallet.id()).ok_or(StoreError::NotFound)?;
        if stored.version() != wallet.version() {
            return Err(StoreError::VersionConflict);
        }
        Ok(())
    }

    fn apply(&mut self, wallet: &Wallet) -> Wallet {
        let mut saved = wallet.clone();
        saved.bump_version();
        self.wallets.insert(saved.id(), saved.clone());
        saved
    }
}

#[async_trait]
impl WalletStore for MemoryWalletStore {
    async fn create(&self, new: NewWallet) -> Result<Wallet, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.last_id += 1;
        let wallet = Wallet::from_parts(
            inner.last_id,
            new.full_name,
            new.document,
            new.email,
            Money::zero(),
            0,
            Utc::now(),
        );
        inner.wallets.insert(wallet.id(), wallet.clone());
        Ok(wallet)
    }

    async fn load(&self, id: WalletId) -> Result<Wallet, StoreError> {
        let inner = self.inner.lock().unwrap();
        inner.wallets.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn conditional_save(&self, wallet: &Wallet) -> Result<Wallet, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.check(wallet)?;
        Ok(inner.apply(wallet))
    }

    async fn conditional_save_pair(&self, a: &Wallet, b: &Wallet) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        // Both checks before either write - all-or-nothing
        inner.check(a)?;
        inner.check(b)?;
        inner.apply(a);
        inner.apply(b);
        Ok(())
    }

    async fn delete(&self, id: WalletId) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.wallets.remove(&id).map(|_| ()).ok_or(StoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_wallet(n: u32) -> NewWallet {
        NewWallet {
            full_name: format!("User {}", n),
            document: format!("doc-{}", n),
            email: format!("user{}@example.com", n),
        }
    }

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = MemoryWalletStore::default();
        let a = store.create(new_wallet(1)).await.unwrap();
        let b = store.create(new_wallet(2)).await.unwrap();

        assert_eq!(a.id(), 1);
        assert_eq!(b.id(), 2);
        assert_eq!(a.balance(), Money::zero());
        assert_eq!(a.version(), 0);
    }

    #[tokio::test]
    async fn test_load_not_found() {
        let store = MemoryWalletStore::default();
        assert_eq!(store.load(99).await, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_conditional_save_advances_version() {
        let store = MemoryWalletStore::default();
        let mut w = store.create(new_wallet(1)).await.unwrap();

        w.credit(money("10.00")).unwrap();
        let saved = store.conditional_save(&w).await.unwrap();
        assert_eq!(saved.version(), 1);

        let loaded = store.load(w.id()).await.unwrap();
        assert_eq!(loaded.version(), 1);
        assert_eq!(loaded.balance(), money("10.00"));
    }

    #[tokio::test]
    async fn test_conditional_save_stale_version_conflicts() {
        let store = MemoryWalletStore::default();
        let created = store.create(new_wallet(1)).await.unwrap();

        // Two copies read at version 0
        let mut first = store.load(created.id()).await.unwrap();
        let mut second = store.load(created.id()).await.unwrap();

        first.credit(money("5.00")).unwrap();
        store.conditional_save(&first).await.unwrap();

        second.credit(money("7.00")).unwrap();
        let res = store.conditional_save(&second).await;
        assert_eq!(res, Err(StoreError::VersionConflict));

        // The losing write left no trace
        let stored = store.load(created.id()).await.unwrap();
        assert_eq!(stored.balance(), money("5.00"));
        assert_eq!(stored.version(), 1);
    }

    #[tokio::test]
    async fn test_pair_save_is_all_or_nothing() {
        let store = MemoryWalletStore::default();
        let a = store.create(new_wallet(1)).await.unwrap();
        let b = store.create(new_wallet(2)).await.unwrap();

        let mut a_copy = store.load(a.id()).await.unwrap();
        a_copy.credit(money("1.00")).unwrap();

        // Stale copy of b: bump b behind our back first
        let mut b_fresh = store.load(b.id()).await.unwrap();
        let b_stale = b_fresh.clone();
        b_fresh.credit(money("2.00")).unwrap();
        store.conditional_save(&b_fresh).await.unwrap();

        let res = store.conditional_save_pair(&a_copy, &b_stale).await;
        assert_eq!(res, Err(StoreError::VersionConflict));

        // a was NOT written even though its own check would have passed
        let a_after = store.load(a.id()).await.unwrap();
        assert_eq!(a_after.balance(), Money::zero());
        assert_eq!(a_after.version(), 0);
    }

    #[tokio::test]
    async fn test_delete() {
        let store = MemoryWalletStore::default();
        let w = store.create(new_wallet(1)).await.unwrap();

        store.delete(w.id()).await.unwrap();
        assert_eq!(store.load(w.id()).await, Err(StoreError::NotFound));
        assert_eq!(store.delete(w.id()).await, Err(StoreError::NotFound));
    }
}
