use serde::{Deserialize, Serialize};

/// Permanent unique identifier of a peer in a quorum.
///
/// `PeerId` is a lightweight wrapper around the peer's permanent uuid, designed to:
/// - Keep peer identifiers apart from arbitrary strings in APIs
/// - Serve as a `HashMap`/`HashSet` key
/// - Format directly into log lines and error messages
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeerId(pub String);

impl PeerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PeerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PeerId {
    /// Converts from a string slice to a `PeerId`.
    ///
    /// Example:
    /// ```rust
    /// use quorum_common::PeerId;
    /// let id: PeerId = "peer-A".into();
    /// assert_eq!(id.as_str(), "peer-A");
    /// ```
    fn from(s: &str) -> Self {
        PeerId(s.to_string())
    }
}

impl From<String> for PeerId {
    fn from(s: String) -> Self {
        PeerId(s)
    }
}

impl PartialEq<str> for PeerId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
