use thiserror::Error;

use crate::utils::PeerId;

/// Errors raised while transforming or decoding a quorum snapshot.
///
/// None of these are transient: retrying the same call with the same
/// snapshot fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuorumError {
    /// The targeted peer appears more than once in the input quorum.
    ///
    /// The snapshot itself is corrupt and should never have been built.
    #[error("Peer {peer} found in quorum multiple times: {quorum}")]
    DuplicatePeer { peer: PeerId, quorum: String },

    /// The targeted peer is not a member of the input quorum.
    #[error("Cannot find peer {peer} in quorum: {quorum}")]
    PeerNotFound { peer: PeerId, quorum: String },

    #[error("Unknown role code: {0}")]
    UnknownRole(i32),
}
