//! Transfer record and listing types

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::money::Money;
use crate::wallet::models::WalletId;

/// Immutable record of a completed movement of funds
///
/// Created only by the engine after both wallet writes committed. There is
/// no update or delete operation, by contract.
#[derive(Debug, Clone, PartialEq)]
pub struct Transfer {
    pub id: Uuid,
    pub sender_id: WalletId,
    pub receiver_id: WalletId,
    pub amount: Money,
    pub created_at: DateTime<Utc>,
}

impl Transfer {
    /// New committed transfer; the id is generated here, at commit time
    pub fn new(sender_id: WalletId, receiver_id: WalletId, amount: Money) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender_id,
            receiver_id,
            amount,
            created_at: Utc::now(),
        }
    }
}

/// Zero-based page request for transfer listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: u32,
    pub size: u32,
}

impl Page {
    pub const DEFAULT_SIZE: u32 = 10;
    pub const MAX_SIZE: u32 = 100;

    pub fn new(number: u32, size: u32) -> Self {
        Self {
            number,
            size: size.clamp(1, Self::MAX_SIZE),
        }
    }

    pub fn offset(&self) -> u64 {
        self.number as u64 * self.size as u64
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            number: 0,
            size: Self::DEFAULT_SIZE,
        }
    }
}
