use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// The errors that may occur while handling a request.
///
/// Every handler returns `Result<_, Error>`; the `IntoResponse` impl is the
/// single place where errors become HTTP statuses and JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Required input was missing or malformed.
    #[error("{0}")]
    Validation(&'static str),

    /// Registration attempted with an email that is already taken.
    #[error("email already exists")]
    DuplicateEmail,

    /// Unknown email or wrong password. The two cases are deliberately
    /// indistinguishable so the API does not leak which emails exist.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Missing, malformed, or expired bearer token.
    #[error("{0}")]
    Unauthorized(&'static str),

    /// The resource does not exist, or belongs to a different user.
    /// The two cases are reported identically to avoid existence leakage.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// An unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    Sql(sqlx::Error),

    /// A library failure (hashing, token signing) with no client-facing
    /// meaning beyond "server error".
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<sqlx::Error> for Error {
    fn from(value: sqlx::Error) -> Self {
        match &value {
            // 23505 is a unique constraint violation; the only unique index a
            // request can trip over is users.email.
            sqlx::Error::Database(db)
                if db.code().as_deref() == Some("23505")
                    && db.constraint() == Some("users_email_key") =>
            {
                Error::DuplicateEmail
            }
            _ => Error::Sql(value),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Error::Validation(message) => (StatusCode::BAD_REQUEST, json!({ "message": message })),
            Error::DuplicateEmail => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Email already exists" }),
            ),
            Error::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                json!({ "message": "Invalid credentials" }),
            ),
            Error::Unauthorized(message) => {
                (StatusCode::UNAUTHORIZED, json!({ "message": message }))
            }
            Error::NotFound(what) => (
                StatusCode::NOT_FOUND,
                json!({ "message": format!("{what} not found") }),
            ),
            Error::Sql(e) => {
                tracing::error!(error = %e, "sql error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Server Error", "details": e.to_string() }),
                )
            }
            Error::Internal(e) => {
                tracing::error!(error = %e, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Server Error", "details": e.to_string() }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let res = Error::Validation("Name is required").into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn duplicate_email_maps_to_400() {
        let res = Error::DuplicateEmail.into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_credentials_maps_to_400() {
        let res = Error::InvalidCredentials.into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unauthorized_maps_to_401() {
        let res = Error::Unauthorized("Invalid token").into_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn not_found_maps_to_404() {
        let res = Error::NotFound("Transaction").into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn sql_error_maps_to_500() {
        let res = Error::from(sqlx::Error::PoolClosed).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn invalid_credentials_body_does_not_name_the_failure_mode() {
        let res = Error::InvalidCredentials.into_response();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .expect("read body");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(body, json!({ "message": "Invalid credentials" }));
    }
}
