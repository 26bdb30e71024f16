pub mod vote;

pub use vote::{NewVote, Rating, Vote, VotePayload};
