use sqlx::PgPool;

use crate::{
    errors::AppError,
    models::{NewVote, Rating},
};

pub async fn insert_vote(
    rating: Rating,
    origem: Option<String>,
    postgres: PgPool,
) -> Result<NewVote, AppError> {
    let vote = sqlx::query_as::<_, NewVote>(
        "INSERT INTO votos (nota, origem)
        VALUES ($1, $2)
        RETURNING id, created_at::timestamptz AS created_at",
    )
    .bind(rating.value())
    .bind(&origem)
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to insert vote: {}", e)))?;

    Ok(vote)
}
