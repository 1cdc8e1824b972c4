//! Reload events and the queue that carries them.
//!
//! File watcher callbacks and channel notifications fire on background
//! threads. They never touch the store; they post a [`ControlEvent`] and
//! the manager drains the queue on its own context.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

/// Something that requires the manager to reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// A requirement document was created, changed, removed or renamed.
    DocumentsChanged,
    /// The display name override file changed.
    DisplayNamesChanged,
    /// The host published a new snapshot.
    SnapshotChanged,
    /// The settings file changed.
    SettingsChanged,
}

/// Cloneable producer side of the event queue.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: Sender<ControlEvent>,
}

impl EventSender {
    /// Post an event. Returns `false` once the queue has been dropped.
    pub fn send(&self, event: ControlEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// Events received since the last drain, one flag per event type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingEvents {
    pub documents: bool,
    pub display_names: bool,
    pub snapshot: bool,
    pub settings: bool,
}

impl PendingEvents {
    /// Fold one event in.
    pub fn record(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::DocumentsChanged => self.documents = true,
            ControlEvent::DisplayNamesChanged => self.display_names = true,
            ControlEvent::SnapshotChanged => self.snapshot = true,
            ControlEvent::SettingsChanged => self.settings = true,
        }
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        !(self.documents || self.display_names || self.snapshot || self.settings)
    }
}

/// Single-consumer event queue owned by the manager.
#[derive(Debug)]
pub struct EventQueue {
    tx: Sender<ControlEvent>,
    rx: Receiver<ControlEvent>,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    /// A producer handle for watchers and channels.
    pub fn sender(&self) -> EventSender {
        EventSender {
            tx: self.tx.clone(),
        }
    }

    /// Take every queued event without blocking, coalesced per type.
    pub fn drain(&self) -> PendingEvents {
        let mut pending = PendingEvents::default();
        while let Ok(event) = self.rx.try_recv() {
            pending.record(event);
        }
        pending
    }

    /// Block until at least one event arrives or `timeout` elapses, then
    /// drain whatever else is queued.
    pub fn wait(&self, timeout: Duration) -> PendingEvents {
        let mut pending = PendingEvents::default();
        match self.rx.recv_timeout(timeout) {
            Ok(event) => pending.record(event),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                return pending
            }
        }
        while let Ok(event) = self.rx.try_recv() {
            pending.record(event);
        }
        pending
    }
}
