pub mod memory;
pub mod store;
pub mod vote;

pub use memory::MemoryVoteStore;
pub use store::VoteStore;
pub use vote::{PgVoteStore, connect_postgres, pg_connect_options};
