use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::AuthUser,
    dto::MessageResponse,
    error::Error,
    state::AppState,
    transactions::{
        dto::{CreateTransactionRequest, UpdateTransactionRequest},
        repo::Transaction,
    },
};

pub fn transaction_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/transactions",
            get(list_transactions).post(create_transaction),
        )
        .route(
            "/transactions/:id",
            put(update_transaction).delete(delete_transaction),
        )
}

#[instrument(skip(state, payload))]
pub async fn create_transaction(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), Error> {
    if payload.name.trim().is_empty() || payload.category.trim().is_empty() {
        return Err(Error::Validation("Name and category are required"));
    }
    let (amount, kind) = match (payload.amount, payload.kind) {
        (Some(amount), Some(kind)) => (amount, kind),
        _ => return Err(Error::Validation("Amount and type are required")),
    };

    let transaction = Transaction::create(
        &state.db,
        user_id,
        &payload.name,
        amount,
        kind,
        &payload.category,
        payload.date,
    )
    .await?;

    info!(transaction_id = %transaction.id, user_id = %user_id, "transaction added");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Transaction added successfully",
        }),
    ))
}

#[instrument(skip(state))]
pub async fn list_transactions(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Transaction>>, Error> {
    let transactions = Transaction::list_by_user(&state.db, user_id).await?;
    Ok(Json(transactions))
}

#[instrument(skip(state, payload))]
pub async fn update_transaction(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTransactionRequest>,
) -> Result<Json<MessageResponse>, Error> {
    if payload.name.trim().is_empty() || payload.category.trim().is_empty() {
        return Err(Error::Validation("Name and category are required"));
    }
    let (amount, kind) = match (payload.amount, payload.kind) {
        (Some(amount), Some(kind)) => (amount, kind),
        _ => return Err(Error::Validation("Amount and type are required")),
    };

    Transaction::update(
        &state.db,
        user_id,
        id,
        &payload.name,
        amount,
        kind,
        &payload.category,
        payload.date,
    )
    .await?
    .ok_or(Error::NotFound("Transaction"))?;

    info!(transaction_id = %id, user_id = %user_id, "transaction updated");
    Ok(Json(MessageResponse {
        message: "Transaction updated successfully",
    }))
}

#[instrument(skip(state))]
pub async fn delete_transaction(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, Error> {
    if !Transaction::delete(&state.db, user_id, id).await? {
        return Err(Error::NotFound("Transaction"));
    }

    info!(transaction_id = %id, user_id = %user_id, "transaction deleted");
    Ok(Json(MessageResponse {
        message: "Transaction deleted successfully",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transactions::repo::TransactionType;
    use sqlx::types::Decimal;

    fn base_payload() -> CreateTransactionRequest {
        CreateTransactionRequest {
            name: "Rent".into(),
            amount: Some(Decimal::new(800, 0)),
            kind: Some(TransactionType::Expense),
            category: "Housing".into(),
            date: None,
        }
    }

    // Validation runs before any query, so the lazy pool is never touched.

    #[tokio::test]
    async fn create_rejects_missing_amount_with_400() {
        let state = AppState::fake();
        let mut payload = base_payload();
        payload.amount = None;
        let err = create_transaction(State(state), AuthUser(Uuid::new_v4()), Json(payload))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn create_rejects_missing_type_with_400() {
        let state = AppState::fake();
        let mut payload = base_payload();
        payload.kind = None;
        let err = create_transaction(State(state), AuthUser(Uuid::new_v4()), Json(payload))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn update_rejects_missing_amount_or_type_with_400() {
        let state = AppState::fake();
        let payload = UpdateTransactionRequest {
            name: "Rent".into(),
            amount: None,
            kind: None,
            category: "Housing".into(),
            date: None,
        };
        let err = update_transaction(
            State(state),
            AuthUser(Uuid::new_v4()),
            Path(Uuid::new_v4()),
            Json(payload),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
