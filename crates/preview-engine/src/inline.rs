//! Reference inlining for stylesheet links and script tags
//!
//! Patterns anchor the whole `href`/`src` attribute value to the file's
//! name, so a reference to an absolute URL (external CDN) can never match
//! a project file and is left untouched. File names are regex-escaped
//! before matching.

use regex::{NoExpand, Regex};

use project_model::ProjectFile;

/// Replace every `<link ... href="NAME" ...>` tag with an inline style
/// block carrying the CSS file's content verbatim.
///
/// If no matching link exists the document is returned unchanged - an
/// unreferenced stylesheet is deliberately not force-appended, matching
/// the conventions of generated code.
pub fn inline_stylesheet(document: &str, css: &ProjectFile) -> String {
    let pattern = format!(
        r#"<link[^>]+href=["']{}["'][^>]*>"#,
        regex::escape(&css.name)
    );
    let regex = match Regex::new(&pattern) {
        Ok(regex) => regex,
        Err(err) => {
            log::warn!("skipping stylesheet '{}': {err}", css.name);
            return document.to_string();
        }
    };
    let replacement = format!(
        "<style data-filename=\"{}\">\n{}\n</style>",
        css.name, css.content
    );
    regex
        .replace_all(document, NoExpand(&replacement))
        .into_owned()
}

/// Replace every empty-bodied `<script ... src="NAME" ...></script>` tag
/// with an inline script block carrying the JS file's content verbatim.
pub fn inline_script(document: &str, js: &ProjectFile) -> String {
    let pattern = format!(
        r#"<script[^>]+src=["']{}["'][^>]*>\s*</script>"#,
        regex::escape(&js.name)
    );
    let regex = match Regex::new(&pattern) {
        Ok(regex) => regex,
        Err(err) => {
            log::warn!("skipping script '{}': {err}", js.name);
            return document.to_string();
        }
    };
    let replacement = format!(
        "<script data-filename=\"{}\">\n{}\n</script>",
        js.name, js.content
    );
    regex
        .replace_all(document, NoExpand(&replacement))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_stylesheet_replaces_link_tag() {
        let css = ProjectFile::new("s.css", "body{color:red}");
        let doc = r#"<head><link rel="stylesheet" href="s.css"></head>"#;

        let result = inline_stylesheet(doc, &css);

        assert!(result.contains("<style data-filename=\"s.css\">"));
        assert!(result.contains("body{color:red}"));
        assert!(!result.contains("<link"));
    }

    #[test]
    fn test_inline_stylesheet_single_quotes() {
        let css = ProjectFile::new("s.css", "p{margin:0}");
        let doc = "<link rel='stylesheet' href='s.css'>";

        let result = inline_stylesheet(doc, &css);
        assert!(result.contains("p{margin:0}"));
        assert!(!result.contains("<link"));
    }

    #[test]
    fn test_absolute_url_link_left_untouched() {
        let css = ProjectFile::new("s.css", "body{}");
        let doc = r#"<link rel="stylesheet" href="https://cdn.example.com/s.css">"#;

        let result = inline_stylesheet(doc, &css);
        assert_eq!(result, doc);
    }

    #[test]
    fn test_unreferenced_stylesheet_not_appended() {
        let css = ProjectFile::new("extra.css", "h1{}");
        let doc = "<html><head></head><body></body></html>";

        let result = inline_stylesheet(doc, &css);
        assert_eq!(result, doc);
    }

    #[test]
    fn test_file_name_with_regex_metacharacters() {
        let css = ProjectFile::new("main(1).css", "div{}");
        let doc = r#"<link href="main(1).css">"#;

        let result = inline_stylesheet(doc, &css);
        assert!(result.contains("div{}"));
    }

    #[test]
    fn test_css_content_with_dollar_signs_is_verbatim() {
        let css = ProjectFile::new("s.css", "content:\"$1 $name\"");
        let doc = r#"<link href="s.css">"#;

        let result = inline_stylesheet(doc, &css);
        assert!(result.contains("$1 $name"));
    }

    #[test]
    fn test_inline_script_replaces_external_reference() {
        let js = ProjectFile::new("app.js", "console.log('hi')");
        let doc = r#"<body><script src="app.js"></script></body>"#;

        let result = inline_script(doc, &js);

        assert!(result.contains("<script data-filename=\"app.js\">"));
        assert!(result.contains("console.log('hi')"));
        assert!(!result.contains("src=\"app.js\""));
    }

    #[test]
    fn test_inline_script_with_extra_attributes() {
        let js = ProjectFile::new("app.js", "init()");
        let doc = r#"<script src="app.js" defer></script>"#;

        let result = inline_script(doc, &js);
        assert!(result.contains("init()"));
    }

    #[test]
    fn test_absolute_url_script_left_untouched() {
        let js = ProjectFile::new("app.js", "local()");
        let doc = r#"<script src="https://cdn.example.com/app.js"></script>"#;

        let result = inline_script(doc, &js);
        assert_eq!(result, doc);
    }

    #[test]
    fn test_inline_script_requires_empty_body() {
        let js = ProjectFile::new("app.js", "local()");
        let doc = r#"<script src="app.js">window.inlineFallback()</script>"#;

        let result = inline_script(doc, &js);
        assert_eq!(result, doc);
    }
}
