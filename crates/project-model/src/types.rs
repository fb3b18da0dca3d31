//! Core types for project files
//!
//! File names are the only key into a project; languages are always a
//! pure function of the name's extension and are re-derived whenever a
//! file is created, replaced or renamed.

use serde::{Deserialize, Serialize};

/// Source language of a project file, derived from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Html,
    Css,
    JavaScript,
    TypeScript,
    Json,
    Markdown,
    Python,
    Sql,
    Php,
    Text,
}

impl Language {
    /// Derive the language from a file name's extension
    pub fn from_name(name: &str) -> Self {
        let ext = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "html" => Language::Html,
            "css" => Language::Css,
            "js" | "jsx" => Language::JavaScript,
            "ts" | "tsx" => Language::TypeScript,
            "json" => Language::Json,
            "md" => Language::Markdown,
            "py" => Language::Python,
            "sql" => Language::Sql,
            "php" => Language::Php,
            _ => Language::Text,
        }
    }

    /// Wire/editor identifier for this language (e.g. "javascript")
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Html => "html",
            Language::Css => "css",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Json => "json",
            Language::Markdown => "markdown",
            Language::Python => "python",
            Language::Sql => "sql",
            Language::Php => "php",
            Language::Text => "text",
        }
    }
}

/// A single named source file in a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    /// Unique name within the project, extension included
    pub name: String,
    /// Raw source text
    pub content: String,
    /// Derived from `name`; kept in sync by every mutation path
    pub language: Language,
}

impl ProjectFile {
    /// Create a file, deriving its language from the name
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let name = name.into();
        let language = Language::from_name(&name);
        Self {
            name,
            content: content.into(),
            language,
        }
    }
}

/// One entry of a generation response's file list
///
/// The wire language field, if any, is deliberately not modeled: languages
/// are always re-derived from the name on merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingFile {
    pub name: String,
    pub content: String,
}

impl IncomingFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Whether a file name is the preview entry point
///
/// Matched ASCII-case-insensitively; the merge engine and the preview
/// renderer both go through this predicate so the two stay consistent.
pub fn is_entry_point(name: &str) -> bool {
    name.eq_ignore_ascii_case("index.html")
}
