use sqlx::PgPool;

use crate::{errors::AppError, models::Vote};

pub async fn get_recent_votes(limit: i64, postgres: PgPool) -> Result<Vec<Vote>, AppError> {
    let votes = sqlx::query_as::<_, Vote>(
        "SELECT id, nota, origem, created_at::timestamptz AS created_at
            FROM votos
            ORDER BY id DESC
            LIMIT $1",
    )
    .bind(limit)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch votes: {}", e)))?;

    Ok(votes)
}

pub async fn get_all_votes(postgres: PgPool) -> Result<Vec<Vote>, AppError> {
    let votes = sqlx::query_as::<_, Vote>(
        "SELECT id, nota, origem, created_at::timestamptz AS created_at
            FROM votos
            ORDER BY id DESC",
    )
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch votes for export: {}", e)))?;

    Ok(votes)
}
