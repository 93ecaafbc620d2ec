//! API response envelope, error codes, and request/response DTOs
//!
//! Conversions between DTOs and domain records are explicit functions;
//! every field mapping is a visible line of code.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transfer::models::Transfer;
use crate::wallet::models::Wallet;

// ============================================================================
// Unified API Response Format
// ============================================================================

/// Unified API response wrapper
///
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or absent (error)
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(code: i32, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

/// Standard API error codes
pub mod error_codes {
    // Success
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;
    pub const INSUFFICIENT_BALANCE: i32 = 1002;
    pub const SAME_WALLET: i32 = 1003;

    // Resource errors (4xxx)
    pub const WALLET_NOT_FOUND: i32 = 4001;
    pub const TRANSFER_NOT_FOUND: i32 = 4002;
    pub const CONFLICT: i32 = 4091;

    // Server errors (5xxx)
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const SERVICE_UNAVAILABLE: i32 = 5001;
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateWalletRequest {
    pub full_name: String,
    pub document: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateWalletRequest {
    pub full_name: String,
    pub email: String,
}

/// Deposit/withdraw body; raw decimal, validated into Money at the boundary
#[derive(Debug, Deserialize)]
pub struct MoneyRequest {
    pub amount: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct CreateTransferRequest {
    pub sender_id: i64,
    pub receiver_id: i64,
    pub amount: Decimal,
}

/// findAll query parameters
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct WalletResponse {
    pub id: i64,
    pub full_name: String,
    pub document: String,
    pub email: String,
    /// Balance formatted with 2 decimals, e.g. "20.00"
    pub balance: String,
}

impl WalletResponse {
    pub fn from_wallet(wallet: &Wallet) -> Self {
        Self {
            id: wallet.id(),
            full_name: wallet.full_name.clone(),
            document: wallet.document().to_string(),
            email: wallet.email.clone(),
            balance: wallet.balance().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TransferResponse {
    pub id: String,
    pub sender_id: i64,
    pub receiver_id: i64,
    /// Amount formatted with 2 decimals
    pub amount: String,
    /// Commit timestamp in milliseconds
    pub created_at: i64,
}

impl TransferResponse {
    pub fn from_transfer(transfer: &Transfer) -> Self {
        Self {
            id: transfer.id.to_string(),
            sender_id: transfer.sender_id,
            receiver_id: transfer.receiver_id,
            amount: transfer.amount.to_string(),
            created_at: transfer.created_at.timestamp_millis(),
        }
    }
}
