use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::QuorumError;

/// Role held by a peer within a quorum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Replicates the log and votes in elections.
    Follower,
    /// Elected leader of the quorum.
    Leader,
    /// Standing for election.
    Candidate,
    /// Receives the log but never votes.
    Learner,
    /// Not a member of the quorum. Only ever returned by lookups.
    NonParticipant,
}

impl Default for Role {
    fn default() -> Self {
        Self::Follower
    }
}

impl Role {
    /// Upper-case name used by the external quorum schema.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Follower => "FOLLOWER",
            Role::Leader => "LEADER",
            Role::Candidate => "CANDIDATE",
            Role::Learner => "LEARNER",
            Role::NonParticipant => "NON_PARTICIPANT",
        }
    }
}

impl From<Role> for i32 {
    fn from(r: Role) -> Self {
        match r {
            Role::Follower => 0,
            Role::Leader => 1,
            Role::Candidate => 2,
            Role::Learner => 3,
            Role::NonParticipant => 4,
        }
    }
}

impl std::convert::TryFrom<i32> for Role {
    type Error = QuorumError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Role::Follower),
            1 => Ok(Role::Leader),
            2 => Ok(Role::Candidate),
            3 => Ok(Role::Learner),
            4 => Ok(Role::NonParticipant),
            other => Err(QuorumError::UnknownRole(other)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
