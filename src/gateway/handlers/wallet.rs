//! Wallet handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::wallet::models::{NewWallet, WalletId};

use super::super::state::AppState;
use super::super::types::{
    ApiResponse, CreateWalletRequest, MoneyRequest, UpdateWalletRequest, WalletResponse,
};
use super::{ErrorResponse, parse_money, wallet_error};

/// POST /v1/api/wallet/create
pub async fn create_wallet(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateWalletRequest>,
) -> Result<(StatusCode, Json<ApiResponse<WalletResponse>>), ErrorResponse> {
    let wallet = state
        .wallets
        .create(NewWallet {
            full_name: req.full_name,
            document: req.document,
            email: req.email,
        })
        .await
        .map_err(wallet_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(WalletResponse::from_wallet(&wallet))),
    ))
}

/// GET /v1/api/wallet/find/{id}
pub async fn find_wallet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<WalletId>,
) -> Result<Json<ApiResponse<WalletResponse>>, ErrorResponse> {
    let wallet = state.wallets.find_by_id(id).await.map_err(wallet_error)?;
    Ok(Json(ApiResponse::success(WalletResponse::from_wallet(
        &wallet,
    ))))
}

/// PUT /v1/api/wallet/update/{id}
pub async fn update_wallet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<WalletId>,
    Json(req): Json<UpdateWalletRequest>,
) -> Result<Json<ApiResponse<WalletResponse>>, ErrorResponse> {
    let wallet = state
        .wallets
        .update_profile(id, req.full_name, req.email)
        .await
        .map_err(wallet_error)?;

    Ok(Json(ApiResponse::success(WalletResponse::from_wallet(
        &wallet,
    ))))
}

/// DELETE /v1/api/wallet/delete/{id}
pub async fn delete_wallet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<WalletId>,
) -> Result<Json<ApiResponse<()>>, ErrorResponse> {
    state.wallets.delete(id).await.map_err(wallet_error)?;
    Ok(Json(ApiResponse::success(())))
}

/// POST /v1/api/wallet/deposit/{id}
pub async fn deposit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<WalletId>,
    Json(req): Json<MoneyRequest>,
) -> Result<Json<ApiResponse<WalletResponse>>, ErrorResponse> {
    let amount = parse_money(req.amount)?;
    let wallet = state
        .wallets
        .deposit(id, amount)
        .await
        .map_err(wallet_error)?;

    Ok(Json(ApiResponse::success(WalletResponse::from_wallet(
        &wallet,
    ))))
}

/// POST /v1/api/wallet/withdraw/{id}
pub async fn withdraw(
    State(state): State<Arc<AppState>>,
    Path(id): Path<WalletId>,
    Json(req): Json<MoneyRequest>,
) -> Result<Json<ApiResponse<WalletResponse>>, ErrorResponse> {
    let amount = parse_money(req.amount)?;
    let wallet = state
        .wallets
        .withdraw(id, amount)
        .await
        .map_err(wallet_error)?;

    Ok(Json(ApiResponse::success(WalletResponse::from_wallet(
        &wallet,
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer::engine::TransferEngine;
    use crate::transfer::memory::MemoryTransferStore;
    use crate::wallet::memory::MemoryWalletStore;
    use crate::wallet::service::WalletService;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn test_state() -> Arc<AppState> {
        let wallets = Arc::new(MemoryWalletStore::default());
        let transfers = Arc::new(MemoryTransferStore::default());
        Arc::new(AppState {
            wallets: WalletService::new(wallets.clone()),
            engine: TransferEngine::new(wallets, transfers),
            db: None,
        })
    }

    fn create_req() -> CreateWalletRequest {
        CreateWalletRequest {
            full_name: "Ada Lovelace".to_string(),
            document: "12345678900".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_deposit_flow() {
        let state = test_state();

        let (status, body) = create_wallet(State(state.clone()), Json(create_req()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        let created = body.0.data.unwrap();
        assert_eq!(created.balance, "0.00");

        let body = deposit(
            State(state),
            Path(created.id),
            Json(MoneyRequest {
                amount: Decimal::from_str("50.00").unwrap(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(body.0.data.unwrap().balance, "50.00");
    }

    #[tokio::test]
    async fn test_find_missing_wallet_is_404() {
        let state = test_state();
        let (status, body) = find_wallet(State(state), Path(42)).await.unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.0.code, crate::gateway::types::error_codes::WALLET_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_deposit_rejects_excess_precision() {
        let state = test_state();
        let (status, _) = create_wallet(State(state.clone()), Json(create_req()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let err = deposit(
            State(state),
            Path(1),
            Json(MoneyRequest {
                amount: Decimal::from_str("1.999").unwrap(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_withdraw_insufficient_is_422() {
        let state = test_state();
        create_wallet(State(state.clone()), Json(create_req()))
            .await
            .unwrap();

        let (status, body) = withdraw(
            State(state),
            Path(1),
            Json(MoneyRequest {
                amount: Decimal::from_str("1.00").unwrap(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body.0.code,
            crate::gateway::types::error_codes::INSUFFICIENT_BALANCE
        );
    }
}
