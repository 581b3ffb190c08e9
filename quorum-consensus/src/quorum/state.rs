use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use quorum_common::{PeerId, Quorum, QuorumError, Role};

use super::roles::{assign_role, is_voting_role, lookup_role, reset_voters_to_follower};

/// Authoritative quorum snapshot of the local peer.
///
/// Every transition runs the role engine under the write lock and swaps the
/// held snapshot only when the engine succeeds, so concurrent transitions are
/// applied one after another and a failed one leaves the snapshot as it was.
#[derive(Debug, Clone)]
pub struct QuorumState {
    local_peer: PeerId,
    quorum: Arc<RwLock<Quorum>>,
}

impl QuorumState {
    pub fn new(local_peer: PeerId, quorum: Quorum) -> Self {
        Self {
            local_peer,
            quorum: Arc::new(RwLock::new(quorum)),
        }
    }

    pub fn local_peer(&self) -> &PeerId {
        &self.local_peer
    }

    /// Returns a copy of the current snapshot.
    pub async fn snapshot(&self) -> Quorum {
        self.quorum.read().await.clone()
    }

    pub async fn role_of(&self, peer: &PeerId) -> Role {
        let role = lookup_role(peer.as_str(), &*self.quorum.read().await);
        debug!("Peer {} holds role {}", peer, role);
        role
    }

    pub async fn local_role(&self) -> Role {
        self.role_of(&self.local_peer).await
    }

    /// Whether the local peer currently holds a voting role.
    pub async fn is_local_voter(&self) -> bool {
        is_voting_role(self.local_role().await)
    }

    /// Gives `peer` the role `role`, demoting any other leader or candidate.
    pub async fn assign_role(&self, peer: &PeerId, role: Role) -> Result<Quorum, QuorumError> {
        let mut current = self.quorum.write().await;

        match assign_role(peer.as_str(), role, &current) {
            Ok(next) => {
                info!(
                    "Peer {} is now {} (seqno: {:?}, peers: {})",
                    peer,
                    role,
                    next.seqno,
                    next.peers.len()
                );
                *current = next.clone();
                Ok(next)
            }
            Err(e) => {
                warn!("Rejected role transition for peer {}: {}", peer, e);
                Err(e)
            }
        }
    }

    pub async fn become_leader(&self) -> Result<Quorum, QuorumError> {
        self.assign_role(&self.local_peer, Role::Leader).await
    }

    pub async fn become_candidate(&self) -> Result<Quorum, QuorumError> {
        self.assign_role(&self.local_peer, Role::Candidate).await
    }

    pub async fn step_down(&self) -> Result<Quorum, QuorumError> {
        self.assign_role(&self.local_peer, Role::Follower).await
    }

    /// Strips elevated status from every voter without naming a new leader.
    pub async fn reset_voters_to_follower(&self) -> Quorum {
        let mut current = self.quorum.write().await;
        let next = reset_voters_to_follower(&current);
        info!("Reset all voters to {} (seqno: {:?})", Role::Follower, next.seqno);
        *current = next.clone();
        next
    }
}
