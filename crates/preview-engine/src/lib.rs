//! Preview Engine - reconstructing a runnable document from project files
//!
//! Given the ordered file set of a project, this crate produces one
//! self-contained HTML document suitable for sandboxed rendering:
//!
//! - relative `<link href="...">` stylesheet references are replaced by
//!   inline `<style>` blocks carrying the referenced file's content
//! - relative `<script src="..."></script>` references are replaced by
//!   inline `<script>` blocks the same way
//! - absolute (CDN) references never match and pass through untouched
//! - a file set without an entry point yields a deterministic fallback
//!   document instead of an error
//!
//! Rendering is pure: a fixed file set and refresh token always produce
//! byte-identical output. `PreviewCache` adds a version-keyed slot on top
//! (project revision + refresh token), so unchanged input never pays for
//! a recompute and a bumped token forces one even when content is equal.

pub mod inline;
pub mod renderer;
pub mod sandbox;

pub use renderer::{render_document, PreviewCache, RenderKey, FALLBACK_DOCUMENT};
pub use sandbox::SandboxPolicy;
