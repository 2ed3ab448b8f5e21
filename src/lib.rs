pub mod error;
pub mod filter;
pub mod leaderboard;
pub mod protocol;
pub mod query_dsl;
pub mod recommend;
pub mod search;
pub mod server;
pub mod store;
pub mod transport;
pub mod types;
