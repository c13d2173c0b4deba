//! Extraction and filtering of local resource references from file contents.

use regex::Regex;

/// Regex matching attribute-style references (`src=`, `href=`, `url=`) and
/// bare `import "..."` statements, capturing the quoted path.
///
/// Matching is textual, not syntax-aware: references inside comments or
/// string literals are matched too. That is an accepted limitation of the
/// tool, traded for not needing an HTML or JS parser.
fn local_reference_pattern() -> &'static Regex {
    use std::sync::OnceLock;

    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?:src|href|url)\s*=\s*["'`]([^"'`]+)["'`]|import\s+["'`]([^"'`]+)["'`]"#)
            .expect("invalid local reference regex")
    })
}

/// Prefixes that mark a reference as remote or inline rather than local.
fn skipped_reference_patterns() -> &'static [Regex] {
    use std::sync::OnceLock;

    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            vec![
                Regex::new(r"(?i)^https?").expect("invalid http(s) regex"),
                Regex::new(r"(?i)^data:").expect("invalid data URI regex"),
                Regex::new(r"(?i)^mailto:").expect("invalid mailto regex"),
                Regex::new(r"^#").expect("invalid fragment regex"),
            ]
        })
        .as_slice()
}

/// Extract every quoted local-or-remote reference from a file's contents,
/// in document order.
pub fn extract_references(content: &str) -> Vec<&str> {
    local_reference_pattern()
        .captures_iter(content)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str())
        .collect()
}

/// Whether a captured reference should be skipped rather than checked.
///
/// Remote URLs, `data:` and `mailto:` schemes and fragment-only links cannot
/// be resolved against the filesystem, even when malformed.
pub fn should_skip_reference(value: &str) -> bool {
    skipped_reference_patterns()
        .iter()
        .any(|pattern| pattern.is_match(value))
}

/// Strip a trailing query string or fragment before filesystem resolution.
pub fn strip_query_and_fragment(value: &str) -> &str {
    match value.find(['?', '#']) {
        Some(index) => &value[..index],
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_attribute_style_references() {
        let content = r#"<img src="./hero.png"> <a href='about.html'>x</a>
            <div style="background: none" data-url = `assets/bg.jpg`></div>"#;
        let refs = extract_references(content);
        assert_eq!(refs, vec!["./hero.png", "about.html", "assets/bg.jpg"]);
    }

    #[test]
    fn extracts_bare_import_statements() {
        let content = r#"import "./module.js";
import Alpine from "alpinejs";"#;
        let refs = extract_references(content);
        // Only the bare import form captures; named imports do not match.
        assert_eq!(refs, vec!["./module.js"]);
    }

    #[test]
    fn extraction_preserves_document_order() {
        let content = r#"<link href="a.css"><script src="b.js"></script><img src="a.css">"#;
        assert_eq!(extract_references(content), vec!["a.css", "b.js", "a.css"]);
    }

    #[test]
    fn skips_remote_and_inline_schemes() {
        assert!(should_skip_reference("http://example.com/x.png"));
        assert!(should_skip_reference("https://example.com"));
        assert!(should_skip_reference("HTTPS://EXAMPLE.COM"));
        assert!(should_skip_reference("data:image/png;base64,abc"));
        assert!(should_skip_reference("mailto:user@example.com"));
        assert!(should_skip_reference("#section"));
    }

    #[test]
    fn keeps_relative_and_absolute_local_paths() {
        assert!(!should_skip_reference("./images/photo.png"));
        assert!(!should_skip_reference("../shared/app.js"));
        assert!(!should_skip_reference("style.css?v=2"));
    }

    #[test]
    fn strips_query_strings_and_fragments() {
        assert_eq!(strip_query_and_fragment("style.css?v=2"), "style.css");
        assert_eq!(strip_query_and_fragment("page.html#section"), "page.html");
        assert_eq!(strip_query_and_fragment("app.js?v=1#top"), "app.js");
        assert_eq!(strip_query_and_fragment("plain.png"), "plain.png");
    }
}
