//! Host-to-peer distribution of requirement documents.
//!
//! - [`channel`] - The synchronized string slot
//! - [`snapshot`] - Snapshot encoding and digests

pub mod channel;
pub mod snapshot;

pub use channel::{SyncChannel, SyncedValue, SERVER_ITEM_CONTROLLER};
