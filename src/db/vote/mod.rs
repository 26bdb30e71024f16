pub mod get;
pub mod post;

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
};

use crate::{
    db::store::VoteStore,
    errors::AppError,
    models::{NewVote, Rating, Vote},
};

pub use get::{get_all_votes, get_recent_votes};
pub use post::insert_vote;

/// Parses `DATABASE_URL`. TLS is required but the server certificate is
/// not verified, unless the URL carries its own `sslmode`.
pub fn pg_connect_options(database_url: &str) -> Result<PgConnectOptions, AppError> {
    let options = PgConnectOptions::from_str(database_url)
        .map_err(|e| AppError::EnvError(format!("Invalid DATABASE_URL: {}", e)))?;

    if database_url.contains("sslmode=") || database_url.contains("ssl-mode=") {
        Ok(options)
    } else {
        Ok(options.ssl_mode(PgSslMode::Require))
    }
}

pub async fn connect_postgres(database_url: &str, max_connections: u32) -> Result<PgPool, AppError> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(pg_connect_options(database_url)?)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to connect to database: {}", e)))
}

#[derive(Clone)]
pub struct PgVoteStore {
    postgres: PgPool,
}

impl PgVoteStore {
    pub fn new(postgres: PgPool) -> Self {
        Self { postgres }
    }
}

#[async_trait]
impl VoteStore for PgVoteStore {
    async fn insert_vote(
        &self,
        rating: Rating,
        origem: Option<String>,
    ) -> Result<NewVote, AppError> {
        insert_vote(rating, origem, self.postgres.clone()).await
    }

    async fn recent_votes(&self, limit: i64) -> Result<Vec<Vote>, AppError> {
        get_recent_votes(limit, self.postgres.clone()).await
    }

    async fn all_votes(&self) -> Result<Vec<Vote>, AppError> {
        get_all_votes(self.postgres.clone()).await
    }

    async fn close(&self) {
        self.postgres.close().await;
    }
}
