use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tracing::{info, instrument};

use crate::{
    auth::AuthUser, dto::MessageResponse, error::Error, limits::repo::ExpenseLimits,
    state::AppState,
};

pub fn limit_routes() -> Router<AppState> {
    Router::new().route("/expense-limits", get(get_limits).post(set_limits))
}

/// A user with no stored limits gets an empty mapping, never a 404.
#[instrument(skip(state))]
pub async fn get_limits(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<serde_json::Value>, Error> {
    let limits = ExpenseLimits::get(&state.db, user_id).await?;
    Ok(Json(limits.unwrap_or_else(|| json!({}))))
}

#[instrument(skip(state, payload))]
pub async fn set_limits(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<MessageResponse>, Error> {
    if !payload.is_object() {
        return Err(Error::Validation("Limits must be a category-to-amount mapping"));
    }

    ExpenseLimits::upsert(&state.db, user_id, &payload).await?;

    info!(user_id = %user_id, "expense limits saved");
    Ok(Json(MessageResponse {
        message: "Expense limits saved successfully",
    }))
}
