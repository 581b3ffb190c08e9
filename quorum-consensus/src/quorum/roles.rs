use quorum_common::{Quorum, QuorumError, QuorumPeer, Role};

/// Whether `role` takes part in elections and replication.
pub fn is_voting_role(role: Role) -> bool {
    match role {
        Role::Leader | Role::Candidate | Role::Follower => true,
        Role::Learner | Role::NonParticipant => false,
    }
}

/// Builds a new quorum where `peer_uuid` holds `new_role`.
///
/// Any other peer holding `Leader` or `Candidate` is demoted to `Follower`
/// in the same pass, so the result never has more than one elevated peer.
/// Fails with `DuplicatePeer` if `peer_uuid` appears twice and with
/// `PeerNotFound` if it does not appear at all. `old_quorum` is untouched.
pub fn assign_role(
    peer_uuid: &str,
    new_role: Role,
    old_quorum: &Quorum,
) -> Result<Quorum, QuorumError> {
    let mut peers = Vec::with_capacity(old_quorum.peers.len());
    let mut found_peer = false;

    for old_peer in &old_quorum.peers {
        if old_peer.permanent_uuid.as_str() == peer_uuid {
            if found_peer {
                return Err(QuorumError::DuplicatePeer {
                    peer: peer_uuid.into(),
                    quorum: old_quorum.to_string(),
                });
            }
            found_peer = true;
            peers.push(old_peer.with_role(new_role));
            continue;
        }

        // Demote any other leaders/candidates.
        let peer = match old_peer.role {
            Role::Leader | Role::Candidate => old_peer.with_role(Role::Follower),
            _ => old_peer.clone(),
        };
        peers.push(peer);
    }

    if !found_peer {
        return Err(QuorumError::PeerNotFound {
            peer: peer_uuid.into(),
            quorum: old_quorum.to_string(),
        });
    }

    Ok(old_quorum.with_peers(peers))
}

/// Builds a new quorum where every voting peer is a `Follower`.
pub fn reset_voters_to_follower(old_quorum: &Quorum) -> Quorum {
    let peers: Vec<QuorumPeer> = old_quorum
        .peers
        .iter()
        .map(|p| {
            if is_voting_role(p.role) {
                p.with_role(Role::Follower)
            } else {
                p.clone()
            }
        })
        .collect();

    old_quorum.with_peers(peers)
}

/// Role of the first peer matching `peer_uuid`, or `NonParticipant`.
pub fn lookup_role(peer_uuid: &str, quorum: &Quorum) -> Role {
    quorum
        .peers
        .iter()
        .find(|p| p.permanent_uuid.as_str() == peer_uuid)
        .map(|p| p.role)
        .unwrap_or(Role::NonParticipant)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quorum(peers: &[(&str, Role)]) -> Quorum {
        Quorum::new(peers.iter().map(|(id, role)| QuorumPeer::new(*id, *role)).collect())
    }

    fn roles(q: &Quorum) -> Vec<(&str, Role)> {
        q.peers.iter().map(|p| (p.permanent_uuid.as_str(), p.role)).collect()
    }

    #[test]
    fn test_voting_roles() {
        assert!(is_voting_role(Role::Leader));
        assert!(is_voting_role(Role::Candidate));
        assert!(is_voting_role(Role::Follower));
        assert!(!is_voting_role(Role::Learner));
        assert!(!is_voting_role(Role::NonParticipant));
    }

    #[test]
    fn test_assign_demotes_incumbent_leader() {
        let q = quorum(&[("A", Role::Follower), ("B", Role::Leader), ("C", Role::Follower)]);
        let new_q = assign_role("A", Role::Candidate, &q).unwrap();
        assert_eq!(
            roles(&new_q),
            vec![("A", Role::Candidate), ("B", Role::Follower), ("C", Role::Follower)]
        );
    }

    #[test]
    fn test_assign_demotes_every_other_elevated_peer() {
        let q = quorum(&[("A", Role::Leader), ("B", Role::Candidate), ("C", Role::Candidate)]);
        let new_q = assign_role("C", Role::Leader, &q).unwrap();
        assert_eq!(
            roles(&new_q),
            vec![("A", Role::Follower), ("B", Role::Follower), ("C", Role::Leader)]
        );
    }

    #[test]
    fn test_assign_leaves_learners_alone() {
        let q = quorum(&[("A", Role::Leader), ("L", Role::Learner)]);
        let new_q = assign_role("A", Role::Follower, &q).unwrap();
        assert_eq!(roles(&new_q), vec![("A", Role::Follower), ("L", Role::Learner)]);
    }

    #[test]
    fn test_assign_missing_peer() {
        let q = quorum(&[("A", Role::Follower)]);
        let err = assign_role("Z", Role::Leader, &q).unwrap_err();
        assert_eq!(
            err,
            QuorumError::PeerNotFound {
                peer: "Z".into(),
                quorum: q.to_string(),
            }
        );
    }

    #[test]
    fn test_assign_duplicate_peer() {
        let q = quorum(&[("A", Role::Follower), ("A", Role::Leader)]);
        let err = assign_role("A", Role::Candidate, &q).unwrap_err();
        assert!(matches!(err, QuorumError::DuplicatePeer { ref peer, .. } if peer.as_str() == "A"));
        assert!(err.to_string().starts_with("Peer A found in quorum multiple times"));
    }

    #[test]
    fn test_duplicate_of_other_peer_is_not_checked() {
        let q = quorum(&[("A", Role::Follower), ("B", Role::Follower), ("B", Role::Follower)]);
        assert!(assign_role("A", Role::Leader, &q).is_ok());
    }

    #[test]
    fn test_assign_on_empty_quorum() {
        let err = assign_role("A", Role::Leader, &Quorum::default()).unwrap_err();
        assert!(matches!(err, QuorumError::PeerNotFound { .. }));
    }

    #[test]
    fn test_assign_keeps_header_and_addresses() {
        let q = Quorum::new(vec![
            QuorumPeer::new("A", Role::Follower).with_addr("a:7050"),
            QuorumPeer::new("B", Role::Leader).with_addr("b:7050"),
        ])
        .with_seqno(12)
        .with_local(false);

        let new_q = assign_role("A", Role::Leader, &q).unwrap();
        assert_eq!(new_q.seqno, Some(12));
        assert_eq!(new_q.peers[0].last_known_addr.as_deref(), Some("a:7050"));
        assert_eq!(new_q.peers[1].last_known_addr.as_deref(), Some("b:7050"));
    }

    #[test]
    fn test_reset_voters() {
        let q = quorum(&[("A", Role::Leader), ("B", Role::Candidate), ("C", Role::Follower)]);
        let new_q = reset_voters_to_follower(&q);
        assert_eq!(
            roles(&new_q),
            vec![("A", Role::Follower), ("B", Role::Follower), ("C", Role::Follower)]
        );
    }

    #[test]
    fn test_reset_passes_non_voters_through() {
        let q = quorum(&[("A", Role::Leader), ("L", Role::Learner), ("X", Role::NonParticipant)]);
        let new_q = reset_voters_to_follower(&q);
        assert_eq!(
            roles(&new_q),
            vec![("A", Role::Follower), ("L", Role::Learner), ("X", Role::NonParticipant)]
        );
    }

    #[test]
    fn test_lookup() {
        let q = quorum(&[("A", Role::Follower), ("B", Role::Leader)]);
        assert_eq!(lookup_role("B", &q), Role::Leader);
        assert_eq!(lookup_role("Z", &q), Role::NonParticipant);
        assert_eq!(lookup_role("A", &Quorum::default()), Role::NonParticipant);
    }

    #[test]
    fn test_lookup_returns_first_match() {
        let q = quorum(&[("A", Role::Candidate), ("A", Role::Leader)]);
        assert_eq!(lookup_role("A", &q), Role::Candidate);
    }
}
