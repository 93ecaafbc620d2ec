//! Transfer handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::transfer::models::Page;
use crate::wallet::models::WalletId;

use super::super::state::AppState;
use super::super::types::{ApiResponse, CreateTransferRequest, PageQuery, TransferResponse};
use super::{ErrorResponse, parse_money, transfer_error};

/// POST /v1/api/transfer/create
pub async fn create_transfer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateTransferRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TransferResponse>>), ErrorResponse> {
    let amount = parse_money(req.amount)?;
    let transfer = state
        .engine
        .execute(req.sender_id, req.receiver_id, amount)
        .await
        .map_err(transfer_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(TransferResponse::from_transfer(
            &transfer,
        ))),
    ))
}

/// GET /v1/api/transfer/find/{id}
pub async fn find_transfer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TransferResponse>>, ErrorResponse> {
    let transfer = state.engine.find_by_id(id).await.map_err(transfer_error)?;
    Ok(Json(ApiResponse::success(TransferResponse::from_transfer(
        &transfer,
    ))))
}

/// GET /v1/api/transfer/findAll?page=&size=
pub async fn find_all_transfers(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiResponse<Vec<TransferResponse>>>, ErrorResponse> {
    let page = Page::new(
        query.page.unwrap_or(0),
        query.size.unwrap_or(Page::DEFAULT_SIZE),
    );

    let transfers = state.engine.find_all(page).await.map_err(transfer_error)?;
    Ok(Json(ApiResponse::success(
        transfers.iter().map(TransferResponse::from_transfer).collect(),
    )))
}

/// GET /v1/api/transfer/find/sender/{id}
pub async fn find_by_sender(
    State(state): State<Arc<AppState>>,
    Path(id): Path<WalletId>,
) -> Result<Json<ApiResponse<Vec<TransferResponse>>>, ErrorResponse> {
    let transfers = state
        .engine
        .find_by_sender(id)
        .await
        .map_err(transfer_error)?;

    Ok(Json(ApiResponse::success(
        transfers.iter().map(TransferResponse::from_transfer).collect(),
    )))
}

/// GET /v1/api/transfer/find/receiver/{id}
pub async fn find_by_receiver(
    State(state): State<Arc<AppState>>,
    Path(id): Path<WalletId>,
) -> Result<Json<ApiResponse<Vec<TransferResponse>>>, ErrorResponse> {
    let transfers = state
        .engine
        .find_by_receiver(id)
        .await
        .map_err(transfer_error)?;

    Ok(Json(ApiResponse::success(
        transfers.iter().map(TransferResponse::from_transfer).collect(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::types::error_codes;
    use crate::money::Money;
    use crate::transfer::engine::TransferEngine;
    use crate::transfer::memory::MemoryTransferStore;
    use crate::wallet::memory::MemoryWalletStore;
    use crate::wallet::models::NewWallet;
    use crate::wallet::service::WalletService;
    use crate::wallet::store::WalletStore;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    async fn test_state() -> Arc<AppState> {
        let wallets = Arc::new(MemoryWalletStore::default());
        let transfers = Arc::new(MemoryTransferStore::default());
        let service = WalletService::new(wallets.clone());

        for n in 1..=2u32 {
            let wallet = wallets
                .create(NewWallet {
                    full_name: format!("User {}", n),
                    document: format!("doc-{}", n),
                    email: format!("user{}@example.com", n),
                })
                .await
                .unwrap();
            service
                .deposit(wallet.id(), "100.00".parse::<Money>().unwrap())
                .await
                .unwrap();
        }

        Arc::new(AppState {
            wallets: service,
            engine: TransferEngine::new(wallets, transfers),
            db: None,
        })
    }

    fn transfer_req(sender: i64, receiver: i64, amount: &str) -> CreateTransferRequest {
        CreateTransferRequest {
            sender_id: sender,
            receiver_id: receiver,
            amount: Decimal::from_str(amount).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_create_transfer_created_201() {
        let state = test_state().await;

        let (status, body) = create_transfer(State(state), Json(transfer_req(1, 2, "25.00")))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        let dto = body.0.data.unwrap();
        assert_eq!(dto.sender_id, 1);
        assert_eq!(dto.receiver_id, 2);
        assert_eq!(dto.amount, "25.00");
    }

    #[tokio::test]
    async fn test_same_wallet_transfer_is_400() {
        let state = test_state().await;

        let (status, body) = create_transfer(State(state), Json(transfer_req(1, 1, "5.00")))
            .await
            .unwrap_err();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.code, error_codes::SAME_WALLET);
    }

    #[tokio::test]
    async fn test_missing_wallet_is_404() {
        let state = test_state().await;

        let (status, body) = create_transfer(State(state), Json(transfer_req(1, 99, "5.00")))
            .await
            .unwrap_err();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.0.code, error_codes::WALLET_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_find_and_list_round_trip() {
        let state = test_state().await;

        let (_, body) = create_transfer(State(state.clone()), Json(transfer_req(1, 2, "10.00")))
            .await
            .unwrap();
        let id: Uuid = body.0.data.unwrap().id.parse().unwrap();

        let found = find_transfer(State(state.clone()), Path(id)).await.unwrap();
        assert_eq!(found.0.data.unwrap().amount, "10.00");

        let listed = find_all_transfers(
            State(state.clone()),
            Query(PageQuery {
                page: None,
                size: None,
            }),
        )
        .await
        .unwrap();
        assert_eq!(listed.0.data.unwrap().len(), 1);

        let by_sender = find_by_sender(State(state.clone()), Path(1)).await.unwrap();
        assert_eq!(by_sender.0.data.unwrap().len(), 1);

        // No received transfers for the sender - empty list, not an error
        let by_receiver = find_by_receiver(State(state), Path(1)).await.unwrap();
        assert!(by_receiver.0.data.unwrap().is_empty());
    }
}
