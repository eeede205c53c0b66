use axum::Router;

use crate::state::AppState;

mod dto;
pub mod handlers;
pub mod jwt;
pub mod password;
pub mod repo;
mod repo_types;

pub use jwt::AuthUser;

pub fn router() -> Router<AppState> {
    handlers::auth_routes()
}
