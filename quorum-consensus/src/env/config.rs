use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use tracing::info;

use quorum_common::{PeerId, Quorum};

use crate::quorum::QuorumState;

/// Bootstrap configuration: who the local peer is and the initial quorum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuorumConfig {
    pub local_peer: PeerId,
    pub quorum: Quorum,
}

impl QuorumConfig {
    pub fn new(local_peer: PeerId, quorum: Quorum) -> Self {
        QuorumConfig { local_peer, quorum }
    }

    pub fn from_json(json: &str) -> io::Result<Self> {
        serde_json::from_str(json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn build_state(self) -> QuorumState {
        info!(
            "Loaded quorum for local peer {} ({} peers, seqno: {:?})",
            self.local_peer,
            self.quorum.peers.len(),
            self.quorum.seqno
        );
        QuorumState::new(self.local_peer, self.quorum)
    }
}
