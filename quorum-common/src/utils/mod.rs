//! utils
//!
//! Common types shared across the quorum crates.
//!
//! This module provides the permanent peer identifier and its conversions.

pub mod peer_id;
pub use peer_id::PeerId;
