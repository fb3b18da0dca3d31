//! Project Model - in-memory project state for Sitewright
//!
//! This crate owns the mutable heart of the builder: an ordered set of
//! named source files plus the active-file selection. It supports:
//!
//! - Language derivation from file extensions (never stored independently)
//! - Merging generation responses (fresh-start replacement vs. upsert)
//! - Explicit add/update/remove/rename operations with duplicate rejection
//! - Active-file fallback when the selected file disappears
//! - Event streaming toward the chat/notification surface
//!
//! # Architecture
//!
//! `Project` is an ordered `Vec<ProjectFile>` indexed by name (arena +
//! name-key: consumers hold names, never references, and re-resolve on
//! every access). Every mutation of the file set bumps a `revision`
//! counter, which downstream preview rendering uses as its cache key.
//!
//! Nothing in this crate is persisted; a `Project` lives exactly as long
//! as the session that owns it.

pub mod error;
pub mod events;
pub mod merge;
pub mod model;
pub mod types;

// Re-export key types
pub use error::{ProjectError, Result};
pub use events::{EventSink, NullEventSink, ProjectEvent, VecEventSink};
pub use merge::{MergeOutcome, MergePolicy};
pub use model::{Project, DEFAULT_PROJECT_NAME};
pub use types::{is_entry_point, IncomingFile, Language, ProjectFile};
