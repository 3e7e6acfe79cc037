//! HTTP/JSON API for the coalition explorer.
//!
//! | Endpoint | Method |
//! |---|---|
//! | `/api/initialize` | GET |
//! | `/api/change_poll` | POST |
//! | `/api/update_position` | POST |
//! | `/api/coalitions` | POST |
//! | `/api/select_coalition` | POST |
//!
//! Failures answer `{"success": false, "error": "..."}`.

pub mod api;
pub mod error;
pub mod positions;
pub mod state;

use std::path::Path;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

pub use api::router;
pub use error::ApiError;
pub use positions::PositionStore;
pub use state::AppState;

/// The API router with CORS, plus static assets from `static_dir` for any
/// other path.
pub fn app(state: AppState, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = router(state);
    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };
    router.layer(cors)
}
