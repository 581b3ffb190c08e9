//! quorum
//!
//! Membership snapshot of a consensus group: the peers, their roles, and the
//! errors raised when a role transition cannot be applied.

pub mod errors;
pub mod peer;
pub mod types;

pub use errors::QuorumError;
pub use peer::{Quorum, QuorumPeer};
pub use types::Role;
