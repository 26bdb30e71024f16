use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use serde::Serialize;

use crate::{
    errors::ErrorBody,
    export::{CSV_FILENAME, votes_to_csv},
    models::{Vote, VotePayload},
    state::AppState,
};

pub const LIST_LIMIT: i64 = 1000;

#[derive(Debug, Serialize)]
pub struct SaveVoteResponse {
    pub ok: bool,
    pub id: i32,
}

pub async fn save_vote_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<SaveVoteResponse>, (StatusCode, Json<ErrorBody>)> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());

    let payload =
        VotePayload::from_body(content_type, &body).map_err(|e| state.reject("/save", e))?;

    let (rating, origem) = payload
        .into_parts()
        .map_err(|e| state.reject("/save", e))?;

    match state.store.insert_vote(rating, origem).await {
        Ok(vote) => {
            tracing::info!("Vote saved (ID: {}, nota: {})", vote.id, rating.value());
            Ok(Json(SaveVoteResponse {
                ok: true,
                id: vote.id,
            }))
        }
        Err(err) => Err(state.reject("/save", err)),
    }
}

pub async fn list_votes_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Vote>>, (StatusCode, Json<ErrorBody>)> {
    let votes = state
        .store
        .recent_votes(LIST_LIMIT)
        .await
        .map_err(|e| state.reject("/list", e))?;

    Ok(Json(votes))
}

pub async fn export_votes_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorBody>)> {
    let votes = state
        .store
        .all_votes()
        .await
        .map_err(|e| state.reject("/export", e))?;

    let csv = votes_to_csv(&votes).map_err(|e| state.reject("/export", e))?;

    let disposition = format!("attachment; filename={}", CSV_FILENAME);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    ))
}
