//! peer.rs
//!
//! Quorum snapshot model: the ordered peer list plus the header fields that
//! travel with it.
//!
//! Snapshots are plain values. Transformations build a fresh `Quorum` from an
//! old one and never modify the old one in place.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::Role;
use crate::utils::PeerId;

/// A single member of a quorum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuorumPeer {
    /// Permanent uuid of the peer, unique within its quorum.
    pub permanent_uuid: PeerId,

    /// Current role of the peer.
    pub role: Role,

    /// Last address the peer was reachable at. Opaque to role transitions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_known_addr: Option<String>,
}

impl QuorumPeer {
    pub fn new(permanent_uuid: impl Into<PeerId>, role: Role) -> Self {
        QuorumPeer {
            permanent_uuid: permanent_uuid.into(),
            role,
            last_known_addr: None,
        }
    }

    /// Sets the last known address (fluent-style).
    pub fn with_addr(mut self, addr: &str) -> Self {
        self.last_known_addr = Some(addr.to_string());
        self
    }

    /// Copy of this peer holding `role` instead.
    pub fn with_role(&self, role: Role) -> Self {
        QuorumPeer {
            role,
            ..self.clone()
        }
    }
}

/// Ordered membership snapshot of a consensus group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quorum {
    /// Configuration sequence number, when the snapshot has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seqno: Option<i64>,

    /// Whether this is a single-node local quorum.
    #[serde(default)]
    pub local: bool,

    /// Members, in configuration order.
    #[serde(default)]
    pub peers: Vec<QuorumPeer>,
}

impl Quorum {
    pub fn new(peers: Vec<QuorumPeer>) -> Self {
        Quorum {
            seqno: None,
            local: false,
            peers,
        }
    }

    pub fn with_seqno(mut self, seqno: i64) -> Self {
        self.seqno = Some(seqno);
        self
    }

    pub fn with_local(mut self, local: bool) -> Self {
        self.local = local;
        self
    }

    /// New snapshot with this snapshot's header fields and the given peers.
    pub fn with_peers(&self, peers: Vec<QuorumPeer>) -> Self {
        Quorum {
            seqno: self.seqno,
            local: self.local,
            peers,
        }
    }

    /// Returns the peer ids in configuration order.
    pub fn peer_ids(&self) -> Vec<&PeerId> {
        self.peers.iter().map(|p| &p.permanent_uuid).collect()
    }

    /// Number of peers holding `Leader` or `Candidate`.
    pub fn elevated_count(&self) -> usize {
        self.peers
            .iter()
            .filter(|p| matches!(p.role, Role::Leader | Role::Candidate))
            .count()
    }

    /// Returns the first peer holding `Leader`, if any.
    pub fn leader(&self) -> Option<&QuorumPeer> {
        self.peers.iter().find(|p| p.role == Role::Leader)
    }
}

impl fmt::Display for QuorumPeer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "peers {{ permanent_uuid: {:?} role: {}", self.permanent_uuid.0, self.role)?;
        if let Some(addr) = &self.last_known_addr {
            write!(f, " last_known_addr: {:?}", addr)?;
        }
        write!(f, " }}")
    }
}

impl fmt::Display for Quorum {
    /// Single-line debug string, used in error messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(seqno) = self.seqno {
            write!(f, "seqno: {} ", seqno)?;
        }
        write!(f, "local: {}", self.local)?;
        for peer in &self.peers {
            write!(f, " {}", peer)?;
        }
        Ok(())
    }
}
