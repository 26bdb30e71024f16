use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    http::handlers::{
        export_votes_handler, health_handler, index_handler, list_votes_handler,
        save_vote_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/save", post(save_vote_handler))
        .route("/list", get(list_votes_handler))
        .route("/export", get(export_votes_handler))
        .with_state(state)
}
