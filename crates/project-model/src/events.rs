//! Event types for streaming project changes
//!
//! Events are sent from the model's callers to the chat/notification
//! surface (or any consumer) to report merges, file operations, and
//! preview invalidation.

use serde::{Deserialize, Serialize};

use crate::merge::MergePolicy;

/// Trait for sending project events
///
/// This abstracts over the transport mechanism (HTTP session buffer,
/// mpsc, etc.) so the model layer can be exercised in different contexts.
pub trait EventSink: Send + Sync {
    /// Send an event
    fn send(&self, event: ProjectEvent);
}

/// Events emitted as the project changes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ProjectEvent {
    /// A generation response was merged into the project
    #[serde(rename_all = "camelCase")]
    GenerationMerged {
        policy: MergePolicy,
        added: Vec<String>,
        updated: Vec<String>,
    },

    /// A generation call failed; the project was left untouched
    #[serde(rename_all = "camelCase")]
    GenerationFailed { reason: String },

    /// A file was added by the user
    #[serde(rename_all = "camelCase")]
    FileAdded { name: String },

    /// A file was removed; `newActive` is the post-fallback selection
    #[serde(rename_all = "camelCase")]
    FileRemoved {
        name: String,
        new_active: Option<String>,
    },

    /// A file was renamed
    #[serde(rename_all = "camelCase")]
    FileRenamed { from: String, to: String },

    /// The preview must be recomputed
    #[serde(rename_all = "camelCase")]
    PreviewInvalidated { revision: u64, refresh: u64 },
}

/// A no-op event sink that discards all events
///
/// Useful for testing or when events aren't needed.
pub struct NullEventSink;

impl EventSink for NullEventSink {
    fn send(&self, _event: ProjectEvent) {}
}

/// A vector-based event sink that collects events
///
/// Useful for testing and for buffering notifications per session.
#[derive(Default)]
pub struct VecEventSink {
    events: std::sync::Mutex<Vec<ProjectEvent>>,
}

impl VecEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all collected events
    pub fn events(&self) -> Vec<ProjectEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Remove and return all collected events
    pub fn drain(&self) -> Vec<ProjectEvent> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }
}

impl EventSink for VecEventSink {
    fn send(&self, event: ProjectEvent) {
        self.events.lock().unwrap().push(event);
    }
}
