//! Merge engine - reconciling generation responses into the project
//!
//! Two policies cover everything the builder needs:
//!
//! - **Fresh-start replacement** when the existing project is trivial
//!   (at most one file, i.e. still the placeholder) and the response
//!   carries an entry point: the incoming set becomes the whole project.
//! - **Upsert merge** otherwise: same-name files are replaced in place,
//!   new names are appended, and files the response does not mention are
//!   left alone. Nothing is ever implicitly deleted.
//!
//! Either way, languages are re-derived from file names; the wire is
//! never trusted to classify content.

use serde::{Deserialize, Serialize};

use crate::model::Project;
use crate::types::{is_entry_point, IncomingFile, ProjectFile};

/// Which reconciliation policy a merge applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// The incoming set replaced the whole project
    FreshStart,
    /// Incoming files were upserted into the existing set
    Upsert,
}

/// What a merge did, for the chat/notification surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeOutcome {
    pub policy: MergePolicy,
    /// Names newly appended, in incoming order
    pub added: Vec<String>,
    /// Names replaced in place, in incoming order
    pub updated: Vec<String>,
    /// Whether the active selection moved
    pub active_changed: bool,
}

impl MergeOutcome {
    fn noop() -> Self {
        Self {
            policy: MergePolicy::Upsert,
            added: Vec::new(),
            updated: Vec::new(),
            active_changed: false,
        }
    }

    /// True when the merge left the file set untouched
    pub fn is_noop(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty()
    }
}

impl Project {
    /// Reconcile a generation response's file list into this project
    ///
    /// An empty list is a no-op on the file set (the caller still surfaces
    /// the response's explanation). Duplicate names within one response
    /// collapse to the last occurrence. Active-file selection: an incoming
    /// entry point wins; otherwise a previously-empty selection moves to
    /// the first incoming file; otherwise the selection stays put.
    pub fn apply_generation(&mut self, incoming: &[IncomingFile]) -> MergeOutcome {
        let valid: Vec<&IncomingFile> = incoming
            .iter()
            .filter(|f| {
                let ok = !f.name.trim().is_empty();
                if !ok {
                    log::warn!("dropping generated file with empty name");
                }
                ok
            })
            .collect();
        if valid.is_empty() {
            return MergeOutcome::noop();
        }

        let fresh_start = self.len() <= 1 && valid.iter().any(|f| is_entry_point(&f.name));
        let policy = if fresh_start {
            MergePolicy::FreshStart
        } else {
            MergePolicy::Upsert
        };
        log::debug!(
            "merging {} generated file(s) via {:?} into '{}'",
            valid.len(),
            policy,
            self.name()
        );

        let mut added = Vec::new();
        let mut updated = Vec::new();

        if fresh_start {
            self.files.clear();
        }
        for file in &valid {
            match self.position(&file.name) {
                Some(pos) => {
                    self.files[pos] = ProjectFile::new(&file.name, &file.content);
                    if !fresh_start
                        && !updated.contains(&file.name)
                        && !added.contains(&file.name)
                    {
                        updated.push(file.name.clone());
                    }
                }
                None => {
                    self.files.push(ProjectFile::new(&file.name, &file.content));
                    added.push(file.name.clone());
                }
            }
        }

        let previous_active = self.active.clone();
        if let Some(entry) = valid.iter().find(|f| is_entry_point(&f.name)) {
            self.active = Some(entry.name.clone());
        } else if self.active.is_none() {
            self.active = Some(valid[0].name.clone());
        }
        let active_changed = self.active != previous_active;

        self.bump_revision();

        MergeOutcome {
            policy,
            added,
            updated,
            active_changed,
        }
    }
}
