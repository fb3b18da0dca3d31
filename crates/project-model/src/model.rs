//! The project state container and its explicit mutation operations
//!
//! `Project` keeps files in insertion order (the order drives both display
//! and merge semantics) and tracks the active file by name rather than by
//! reference, so entries replaced during a merge can never leave a
//! dangling selection behind.

use serde::Serialize;

use crate::error::{ProjectError, Result};
use crate::types::{Language, ProjectFile};

/// Name given to projects until a generation response suggests a better one
pub const DEFAULT_PROJECT_NAME: &str = "untitled-project";

const PLACEHOLDER_README: &str = "\
# Welcome to Sitewright

Describe the site you want in the prompt box, or pick a starter template.

**Stack:** HTML, CSS, JavaScript, PHP.

**Note:** PHP files are generated as plain text and cannot run in the
browser preview. Download the zip to serve them from a real host.
";

/// In-memory project state: ordered files plus the active-file selection
///
/// Invariants maintained by every operation:
/// - file names are unique within the project
/// - `active`, if set, names an existing file
/// - `revision` increments whenever the file set changes
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub(crate) name: String,
    pub(crate) files: Vec<ProjectFile>,
    pub(crate) active: Option<String>,
    pub(crate) revision: u64,
}

impl Project {
    /// Create an empty project with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
            active: None,
            revision: 0,
        }
    }

    /// Create the startup project: default name plus a single placeholder
    /// README explaining the builder
    pub fn with_placeholder() -> Self {
        let readme = ProjectFile::new("README.md", PLACEHOLDER_README);
        Self {
            name: DEFAULT_PROJECT_NAME.to_string(),
            active: Some(readme.name.clone()),
            files: vec![readme],
            revision: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the project (user action)
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProjectError::EmptyProjectName);
        }
        self.name = name;
        Ok(())
    }

    /// Adopt a generation-suggested project name, but only while the
    /// project still carries the default placeholder name. Returns whether
    /// the suggestion was taken.
    pub fn adopt_suggested_name(&mut self, suggestion: &str) -> bool {
        if self.name == DEFAULT_PROJECT_NAME && !suggestion.trim().is_empty() {
            self.name = suggestion.to_string();
            true
        } else {
            false
        }
    }

    /// Files in insertion order
    pub fn files(&self) -> &[ProjectFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Look up a file by exact name
    pub fn file(&self, name: &str) -> Option<&ProjectFile> {
        self.files.iter().find(|f| f.name == name)
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.files.iter().position(|f| f.name == name)
    }

    /// Name of the currently active file, if any
    pub fn active_file_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Resolve the active selection to the live entry
    pub fn active_file(&self) -> Option<&ProjectFile> {
        self.active.as_deref().and_then(|name| self.file(name))
    }

    /// Monotonic counter bumped on every file-set mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn bump_revision(&mut self) {
        self.revision += 1;
    }

    /// Select a file as active
    pub fn set_active(&mut self, name: &str) -> Result<()> {
        if self.file(name).is_none() {
            return Err(ProjectError::FileNotFound(name.to_string()));
        }
        self.active = Some(name.to_string());
        Ok(())
    }

    /// Add a new file; rejected if the name is taken or malformed
    pub fn add_file(&mut self, name: &str, content: impl Into<String>) -> Result<()> {
        validate_file_name(name)?;
        if self.file(name).is_some() {
            return Err(ProjectError::DuplicateFile(name.to_string()));
        }
        self.files.push(ProjectFile::new(name, content));
        self.bump_revision();
        Ok(())
    }

    /// Replace a named file's content, leaving its position untouched
    pub fn update_file(&mut self, name: &str, content: impl Into<String>) -> Result<()> {
        let pos = self
            .position(name)
            .ok_or_else(|| ProjectError::FileNotFound(name.to_string()))?;
        self.files[pos].content = content.into();
        self.bump_revision();
        Ok(())
    }

    /// Remove a file by name, returning the removed entry
    ///
    /// If the removed file was active, the selection falls back to the
    /// first remaining file, or to none when the project is left empty.
    pub fn remove_file(&mut self, name: &str) -> Result<ProjectFile> {
        let pos = self
            .position(name)
            .ok_or_else(|| ProjectError::FileNotFound(name.to_string()))?;
        let removed = self.files.remove(pos);
        if self.active.as_deref() == Some(name) {
            self.active = self.files.first().map(|f| f.name.clone());
        }
        self.bump_revision();
        Ok(removed)
    }

    /// Rename a file, re-deriving its language from the new name
    pub fn rename_file(&mut self, from: &str, to: &str) -> Result<()> {
        validate_file_name(to)?;
        let pos = self
            .position(from)
            .ok_or_else(|| ProjectError::FileNotFound(from.to_string()))?;
        if from != to && self.file(to).is_some() {
            return Err(ProjectError::DuplicateFile(to.to_string()));
        }
        let file = &mut self.files[pos];
        file.name = to.to_string();
        file.language = Language::from_name(to);
        if self.active.as_deref() == Some(from) {
            self.active = Some(to.to_string());
        }
        self.bump_revision();
        Ok(())
    }
}

/// Reject empty, absolute, and parent-escaping names
fn validate_file_name(name: &str) -> Result<()> {
    let trimmed = name.trim();
    let invalid = trimmed.is_empty()
        || trimmed.starts_with('/')
        || trimmed.contains('\\')
        || trimmed.split('/').any(|part| part.is_empty() || part == "..");
    if invalid {
        return Err(ProjectError::InvalidFileName(name.to_string()));
    }
    Ok(())
}
