use crate::state::AppState;
use axum::Router;

pub mod dto;
pub mod handlers;
pub mod repo;
mod repo_types;
mod services;

pub fn router() -> Router<AppState> {
    handlers::admin_auth_routes()
}
