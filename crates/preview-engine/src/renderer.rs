//! Preview document rendering with a version-keyed cache
//!
//! `render_document` is the pure core: ordered file set in, one HTML
//! string out. `PreviewCache` wraps it with a single-slot cache keyed on
//! (project revision, refresh token); the token exists so a re-render can
//! be forced even when content is identical, e.g. after a debounce timer.

use serde::Serialize;

use project_model::{is_entry_point, Project, ProjectFile};

use crate::inline::{inline_script, inline_stylesheet};

/// Document shown when the project has no entry point
///
/// Not an error: a project without `index.html` (PHP-only output, notes,
/// an `about.html`-only set) is a normal renderer state.
pub const FALLBACK_DOCUMENT: &str = r#"<!DOCTYPE html>
<html>
<body style="background:#121212;color:#888;font-family:sans-serif;display:flex;justify-content:center;align-items:center;height:100vh;margin:0;">
  <div style="text-align:center">
    <h2>No Preview Available</h2>
    <p>This project does not contain an index.html file.</p>
  </div>
</body>
</html>
"#;

fn has_extension(name: &str, ext: &str) -> bool {
    name.to_ascii_lowercase().ends_with(ext)
}

/// Build the self-contained preview document for an ordered file set
///
/// The stylesheet pass fully completes before the script pass begins.
/// Malformed HTML is passed through as-is; no validation or repair is
/// attempted.
pub fn render_document(files: &[ProjectFile]) -> String {
    let Some(entry) = files.iter().find(|f| is_entry_point(&f.name)) else {
        return FALLBACK_DOCUMENT.to_string();
    };

    let mut document = entry.content.clone();
    for css in files.iter().filter(|f| has_extension(&f.name, ".css")) {
        document = inline_stylesheet(&document, css);
    }
    for js in files.iter().filter(|f| has_extension(&f.name, ".js")) {
        document = inline_script(&document, js);
    }
    document
}

/// Cache key: recompute when either component changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderKey {
    /// Project file-set revision
    pub revision: u64,
    /// Monotonic refresh token
    pub refresh: u64,
}

/// Single-slot render cache keyed by `RenderKey`
#[derive(Debug, Default)]
pub struct PreviewCache {
    slot: Option<(RenderKey, String)>,
}

impl PreviewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the project's preview, reusing the cached document when
    /// neither the file set nor the refresh token has changed
    pub fn render(&mut self, project: &Project, refresh: u64) -> &str {
        let key = RenderKey {
            revision: project.revision(),
            refresh,
        };
        let hit = matches!(&self.slot, Some((cached, _)) if *cached == key);
        if !hit {
            log::debug!(
                "rendering preview (revision={}, refresh={})",
                key.revision,
                key.refresh
            );
            self.slot = Some((key, render_document(project.files())));
        }
        self.slot
            .as_ref()
            .map(|(_, html)| html.as_str())
            .unwrap_or_default()
    }

    /// Whether a render for this (project, refresh) pair is already cached
    pub fn is_cached(&self, project: &Project, refresh: u64) -> bool {
        let key = RenderKey {
            revision: project.revision(),
            refresh,
        };
        matches!(&self.slot, Some((cached, _)) if *cached == key)
    }

    /// Drop the cached document
    pub fn clear(&mut self) {
        self.slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, content: &str) -> ProjectFile {
        ProjectFile::new(name, content)
    }

    #[test]
    fn test_render_inlines_stylesheet_reference() {
        let files = vec![
            file("index.html", r#"<head><link href="s.css"></head>"#),
            file("s.css", "body{color:red}"),
        ];

        let doc = render_document(&files);

        assert!(doc.contains("<style data-filename=\"s.css\">"));
        assert!(doc.contains("body{color:red}"));
        assert!(!doc.contains(r#"<link href="s.css">"#));
    }

    #[test]
    fn test_render_inlines_script_reference() {
        let files = vec![
            file("index.html", r#"<body><script src="game.js"></script></body>"#),
            file("game.js", "start()"),
        ];

        let doc = render_document(&files);
        assert!(doc.contains("<script data-filename=\"game.js\">"));
        assert!(doc.contains("start()"));
    }

    #[test]
    fn test_render_without_entry_point_yields_fallback() {
        let files = vec![file("about.html", "<p>about</p>")];
        assert_eq!(render_document(&files), FALLBACK_DOCUMENT);
    }

    #[test]
    fn test_render_empty_set_yields_fallback() {
        assert_eq!(render_document(&[]), FALLBACK_DOCUMENT);
    }

    #[test]
    fn test_render_entry_point_case_insensitive() {
        let files = vec![file("Index.HTML", "<h1>hi</h1>")];
        assert_eq!(render_document(&files), "<h1>hi</h1>");
    }

    #[test]
    fn test_render_is_deterministic() {
        let files = vec![
            file("index.html", r#"<link href="a.css"><script src="b.js"></script>"#),
            file("a.css", "a{}"),
            file("b.js", "b()"),
        ];

        assert_eq!(render_document(&files), render_document(&files));
    }

    #[test]
    fn test_malformed_html_passes_through() {
        let files = vec![file("index.html", "<div><p>unclosed")];
        assert_eq!(render_document(&files), "<div><p>unclosed");
    }

    #[test]
    fn test_multiple_assets_inline_independently() {
        let files = vec![
            file(
                "index.html",
                r#"<link href="one.css"><link href="two.css"><script src="app.js"></script>"#,
            ),
            file("one.css", "one{}"),
            file("two.css", "two{}"),
            file("app.js", "app()"),
        ];

        let doc = render_document(&files);
        assert!(doc.contains("one{}"));
        assert!(doc.contains("two{}"));
        assert!(doc.contains("app()"));
        assert!(!doc.contains("<link"));
    }

    #[test]
    fn test_cache_hit_until_revision_changes() {
        let mut project = Project::new("demo");
        project.add_file("index.html", "<h1>v1</h1>").unwrap();
        let mut cache = PreviewCache::new();

        assert!(!cache.is_cached(&project, 0));
        assert_eq!(cache.render(&project, 0), "<h1>v1</h1>");
        assert!(cache.is_cached(&project, 0));

        project.update_file("index.html", "<h1>v2</h1>").unwrap();
        assert!(!cache.is_cached(&project, 0));
        assert_eq!(cache.render(&project, 0), "<h1>v2</h1>");
    }

    #[test]
    fn test_refresh_token_forces_recompute() {
        let mut project = Project::new("demo");
        project.add_file("index.html", "<h1>same</h1>").unwrap();
        let mut cache = PreviewCache::new();

        cache.render(&project, 0);
        assert!(cache.is_cached(&project, 0));

        // Identical content, bumped token: the cached slot must be replaced
        assert!(!cache.is_cached(&project, 1));
        assert_eq!(cache.render(&project, 1), "<h1>same</h1>");
        assert!(cache.is_cached(&project, 1));
        assert!(!cache.is_cached(&project, 0));
    }

    #[test]
    fn test_cache_clear() {
        let mut project = Project::new("demo");
        project.add_file("index.html", "<h1>x</h1>").unwrap();
        let mut cache = PreviewCache::new();

        cache.render(&project, 0);
        cache.clear();
        assert!(!cache.is_cached(&project, 0));
    }
}
