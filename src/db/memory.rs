use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::{
    db::store::VoteStore,
    errors::AppError,
    models::{NewVote, Rating, Vote},
};

#[derive(Debug, Default)]
struct Votes {
    rows: Vec<Vote>,
    last_id: i32,
}

/// Process-local store with the same ordering and id rules as `votos`.
#[derive(Debug, Default)]
pub struct MemoryVoteStore {
    votes: Mutex<Votes>,
    failing: AtomicBool,
}

impl MemoryVoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// While set, every call fails with a database error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.votes.lock().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn check(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError(
                "connection refused (memory store offline)".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl VoteStore for MemoryVoteStore {
    async fn insert_vote(
        &self,
        rating: Rating,
        origem: Option<String>,
    ) -> Result<NewVote, AppError> {
        self.check()?;

        let mut votes = self.votes.lock().await;
        votes.last_id += 1;
        let vote = Vote {
            id: votes.last_id,
            nota: rating.value(),
            origem,
            created_at: Utc::now(),
        };
        let new_vote = NewVote {
            id: vote.id,
            created_at: vote.created_at,
        };
        votes.rows.push(vote);

        Ok(new_vote)
    }

    async fn recent_votes(&self, limit: i64) -> Result<Vec<Vote>, AppError> {
        self.check()?;

        let take = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
        let votes = self.votes.lock().await;
        Ok(votes.rows.iter().rev().take(take).cloned().collect())
    }

    async fn all_votes(&self) -> Result<Vec<Vote>, AppError> {
        self.check()?;

        let votes = self.votes.lock().await;
        Ok(votes.rows.iter().rev().cloned().collect())
    }
}
