//! Reload orchestration.
//!
//! - [`events`] - Reload events and the single-consumer queue
//! - [`manager`] - Host and peer load paths over one requirement store

pub mod events;
pub mod manager;

pub use events::{ControlEvent, EventQueue, EventSender, PendingEvents};
pub use manager::{ItemControlManager, LoadReport, RejectedDocument, Role, UnresolvedEntry};
