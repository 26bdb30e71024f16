use std::sync::Arc;

use axum::{Json, http::StatusCode};

use crate::{
    config::Config,
    db::VoteStore,
    errors::{AppError, ErrorBody},
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn VoteStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: Arc<dyn VoteStore>, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Logs the failure and turns it into the response for `route`.
    pub fn reject(&self, route: &str, err: AppError) -> (StatusCode, Json<ErrorBody>) {
        match &err {
            AppError::InvalidRating | AppError::BadRequest(_) => {
                tracing::warn!("Rejected request on {}: {}", route, err);
            }
            _ => tracing::error!("Error on {}: {}", route, err),
        }
        err.to_response(self.config.expose_store_errors)
    }
}
