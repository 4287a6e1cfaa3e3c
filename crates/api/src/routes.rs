use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/check", get(handlers::check_hostname))
        .with_state(state)
}
