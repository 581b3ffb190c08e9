pub mod env;
pub mod utils;

pub use env::quorum::{Quorum, QuorumError, QuorumPeer, Role};
pub use utils::PeerId;
