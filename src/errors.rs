use axum::{Json, http::StatusCode};
use serde::Serialize;
use thiserror::Error;

pub const INVALID_RATING_MESSAGE: &str = "nota inválida";
pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor";
pub const CSV_ERROR_MESSAGE: &str = "Erro ao gerar CSV";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid rating")]
    InvalidRating,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("CSV error: {0}")]
    CsvError(String),

    #[error("Env error: {0}")]
    EnvError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not found")]
    NotFound(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl AppError {
    /// Maps the error to a status and client-facing message.
    ///
    /// Store failures only carry their raw message when `expose_detail` is set.
    pub fn to_response(&self, expose_detail: bool) -> (StatusCode, Json<ErrorBody>) {
        let (status, message) = match self {
            AppError::InvalidRating => (StatusCode::BAD_REQUEST, INVALID_RATING_MESSAGE.into()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::DatabaseError(msg) if expose_detail => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::DatabaseError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE.into(),
            ),
            AppError::CsvError(_) => (StatusCode::INTERNAL_SERVER_ERROR, CSV_ERROR_MESSAGE.into()),
            AppError::EnvError(_) | AppError::Io(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE.into(),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
        };

        (status, Json(ErrorBody { error: message }))
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::CsvError(err.to_string())
    }
}
