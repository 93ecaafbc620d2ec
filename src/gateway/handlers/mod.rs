//! Request handlers
//!
//! Each handler converts the request DTO, calls the service or engine, and
//! maps the typed error to an HTTP status + error code. The mapping is one
//! visible line per variant so the conflict tag can never fall into a
//! catch-all.

pub mod health;
pub mod transfer;
pub mod wallet;

use axum::{Json, http::StatusCode};
use rust_decimal::Decimal;

use crate::money::Money;
use crate::transfer::error::TransferError;
use crate::wallet::service::WalletError;

use super::types::{ApiResponse, error_codes};

pub(crate) type ErrorResponse = (StatusCode, Json<ApiResponse<()>>);

fn status_of(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

pub(crate) fn wallet_error(e: WalletError) -> ErrorResponse {
    let code = match &e {
        WalletError::NotFound(_) => error_codes::WALLET_NOT_FOUND,
        WalletError::Conflict => error_codes::CONFLICT,
        WalletError::InsufficientBalance => error_codes::INSUFFICIENT_BALANCE,
        WalletError::InvalidAmount | WalletError::Overflow => error_codes::INVALID_PARAMETER,
        WalletError::Database(_) => error_codes::INTERNAL_ERROR,
    };
    (
        status_of(e.http_status()),
        Json(ApiResponse::<()>::error(code, e.to_string())),
    )
}

pub(crate) fn transfer_error(e: TransferError) -> ErrorResponse {
    let code = match &e {
        TransferError::WalletNotFound(_) => error_codes::WALLET_NOT_FOUND,
        TransferError::TransferNotFound(_) => error_codes::TRANSFER_NOT_FOUND,
        TransferError::SameWalletTransfer => error_codes::SAME_WALLET,
        TransferError::InsufficientBalance => error_codes::INSUFFICIENT_BALANCE,
        TransferError::TransferConflict => error_codes::CONFLICT,
        TransferError::InvalidAmount | TransferError::Overflow => error_codes::INVALID_PARAMETER,
        TransferError::Database(_) => error_codes::INTERNAL_ERROR,
    };
    (
        status_of(e.http_status()),
        Json(ApiResponse::<()>::error(code, e.to_string())),
    )
}

/// Validate a raw request decimal into Money (scale 2, no truncation)
pub(crate) fn parse_money(amount: Decimal) -> Result<Money, ErrorResponse> {
    Money::new(amount).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(
                error_codes::INVALID_PARAMETER,
                e.to_string(),
            )),
        )
    })
}
