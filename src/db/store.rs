use async_trait::async_trait;

use crate::{
    errors::AppError,
    models::{NewVote, Rating, Vote},
};

/// Append-only persistence for votes.
#[async_trait]
pub trait VoteStore: Send + Sync {
    async fn insert_vote(
        &self,
        rating: Rating,
        origem: Option<String>,
    ) -> Result<NewVote, AppError>;

    /// Newest first, at most `limit` rows.
    async fn recent_votes(&self, limit: i64) -> Result<Vec<Vote>, AppError>;

    /// Every vote, newest first.
    async fn all_votes(&self) -> Result<Vec<Vote>, AppError>;

    async fn close(&self) {}
}
