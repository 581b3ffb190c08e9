pub mod env;
pub mod quorum;

pub use env::config::QuorumConfig;
pub use quorum::{assign_role, is_voting_role, lookup_role, reset_voters_to_follower, QuorumState};
