pub mod handlers;
pub mod models;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/blog", post(handlers::handle_blog_request))
        .route("/health", get(handlers::handle_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
