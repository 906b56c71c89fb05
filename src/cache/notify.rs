//! Change Notification Module
//!
//! Typed change-notification records and the broadcast fan-out that
//! delivers them to subscribers.
//!
//! Whether a given mutation emits a notification is decided per entry at
//! construction time (see `CacheEntry::new`); this module only carries the
//! events. Key-based filtering is a subscriber-side concern.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

// == Event Kind ==
/// The kind of mutation a notification describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// An entry was inserted or replaced.
    Put,
    /// An entry was removed, either explicitly or by the reaper.
    Delete,
}

// == Cache Event ==
/// A single change notification, carrying the affected key and its data.
#[derive(Debug, Clone)]
pub struct CacheEvent<T> {
    pub kind: EventKind,
    pub key: String,
    pub data: T,
}

// == Notifier ==
/// Broadcast fan-out for change notifications.
///
/// Publishing with no live subscribers is a silent no-op; notifications
/// are fire-and-forget.
#[derive(Debug)]
pub struct Notifier<T> {
    sender: broadcast::Sender<CacheEvent<T>>,
}

impl<T: Clone> Notifier<T> {
    // == Constructor ==
    /// Creates a notifier whose channel buffers up to `capacity` events
    /// per subscriber before lagging.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    // == Subscribe ==
    /// Registers a new subscriber. Only events published after this call
    /// are observed.
    pub fn subscribe(&self) -> broadcast::Receiver<CacheEvent<T>> {
        self.sender.subscribe()
    }

    // == Publish ==
    /// Emits a change notification to all current subscribers.
    pub fn publish(&self, kind: EventKind, key: &str, data: T) {
        // A send error only means there are no subscribers
        let _ = self.sender.send(CacheEvent {
            kind,
            key: key.to_string(),
            data,
        });
    }
}
