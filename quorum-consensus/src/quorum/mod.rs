//! quorum
//!
//! Role transitions over quorum membership snapshots.
//!
//! The functions in `roles` are pure: they take a snapshot, build a new one,
//! and never touch shared state, so they can be called from any thread
//! without locking. `QuorumState` wraps them for callers that keep a single
//! authoritative snapshot and need transitions applied one at a time.

mod roles;
pub mod state;

pub use roles::{assign_role, is_voting_role, lookup_role, reset_voters_to_follower};
pub use state::QuorumState;
