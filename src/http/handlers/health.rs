use axum::{Json, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Value, json};

use crate::errors::{AppError, ErrorBody};

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

// Liveness only; the store is not consulted.
pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "OK",
        timestamp: Utc::now(),
    })
}

pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "message": "API do Totem de Satisfação",
        "endpoints": {
            "save": "POST /save",
            "list": "GET /list",
            "export": "GET /export",
            "health": "GET /health"
        }
    }))
}

pub async fn not_found_handler() -> (StatusCode, Json<ErrorBody>) {
    AppError::NotFound("Not found".into()).to_response(false)
}
