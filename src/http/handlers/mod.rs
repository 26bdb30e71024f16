pub mod health;
pub mod vote;

pub use health::{health_handler, index_handler, not_found_handler};
pub use vote::{export_votes_handler, list_votes_handler, save_vote_handler};
