//! Error types for the project model

use thiserror::Error;

/// Result type alias using ProjectError
pub type Result<T> = std::result::Result<T, ProjectError>;

/// Errors that can occur when mutating a project
///
/// Every variant is a synchronous rejection: the operation that raised it
/// has left the project untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectError {
    /// A file with this name already exists
    #[error("a file named '{0}' already exists")]
    DuplicateFile(String),

    /// No file with this name exists
    #[error("no file named '{0}'")]
    FileNotFound(String),

    /// File names must be non-empty, relative, and free of parent components
    #[error("invalid file name '{0}'")]
    InvalidFileName(String),

    /// Project names must be non-empty
    #[error("project name cannot be empty")]
    EmptyProjectName,
}
