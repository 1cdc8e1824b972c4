//! Host-to-peer synchronization channel.
//!
//! The channel is a single named string slot. The host writes it; peers
//! read it and are notified when it changes. The networking that carries
//! the value between processes belongs to the engine; [`SyncedValue`] is
//! the in-process slot it writes into and reads from.

use parking_lot::{Mutex, RwLock};

use crate::control::{ControlEvent, EventSender};

/// Name of the slot carrying the requirement snapshot.
pub const SERVER_ITEM_CONTROLLER: &str = "ServerItemController";

/// A named, host-writable, peer-readable string value.
pub trait SyncChannel: Send + Sync {
    /// Slot name.
    fn name(&self) -> &str;

    /// Current value; empty until the host publishes.
    fn value(&self) -> String;

    /// Replace the value, notifying subscribers if it changed.
    fn publish(&self, value: String);

    /// Receive [`ControlEvent::SnapshotChanged`] on every change.
    fn subscribe(&self, sender: EventSender);
}

/// In-process synchronized value.
#[derive(Debug)]
pub struct SyncedValue {
    name: String,
    value: RwLock<String>,
    subscribers: Mutex<Vec<EventSender>>,
}

impl SyncedValue {
    /// Create an empty slot.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: RwLock::new(String::new()),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// The slot used for requirement snapshots.
    pub fn server_item_controller() -> Self {
        Self::new(SERVER_ITEM_CONTROLLER)
    }
}

impl SyncChannel for SyncedValue {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> String {
        self.value.read().clone()
    }

    fn publish(&self, value: String) {
        {
            let mut current = self.value.write();
            if *current == value {
                return;
            }
            *current = value;
        }

        tracing::debug!("Synced value '{}' changed", self.name);
        self.subscribers
            .lock()
            .retain(|sender| sender.send(ControlEvent::SnapshotChanged));
    }

    fn subscribe(&self, sender: EventSender) {
        self.subscribers.lock().push(sender);
    }
}
