//! REST API.

pub mod handlers;
pub mod types;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Routes for every endpoint, without CORS or static assets.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/initialize", get(handlers::initialize))
        .route("/api/change_poll", post(handlers::change_poll))
        .route("/api/update_position", post(handlers::update_position))
        .route("/api/coalitions", post(handlers::coalitions))
        .route("/api/select_coalition", post(handlers::select_coalition))
        .with_state(state)
}
