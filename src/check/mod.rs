//! Local path integrity checker.
//!
//! Walks a project tree, extracts local resource references from markup,
//! script, data and stylesheet files, and verifies each one resolves to an
//! existing file. Broken references are data, not errors: only I/O failures
//! while walking or reading abort a check.

mod references;
mod walk;

use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::project::SiteLayout;

pub use references::{extract_references, should_skip_reference, strip_query_and_fragment};
pub use walk::collect_source_files;

/// A local reference that failed to resolve to an existing file.
///
/// Both paths are rendered relative to the scan root with forward slashes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrokenReference {
    /// File the reference was extracted from.
    pub source_file: String,
    /// Resolved filesystem path the reference pointed at.
    pub referenced_path: String,
}

/// Ordered result of scanning a project tree. No deduplication is applied:
/// a path referenced twice is reported twice.
#[derive(Debug, Default, Serialize)]
pub struct CheckReport {
    /// Broken references in walk order, then document order within a file.
    pub broken: Vec<BrokenReference>,
}

impl CheckReport {
    /// Whether the scan found no broken references.
    pub fn is_clean(&self) -> bool {
        self.broken.is_empty()
    }
}

/// Scan the tree under `root` and report every local reference that does not
/// resolve to an existing file.
///
/// Each reference is resolved against its containing file's directory after
/// stripping any query string or fragment, and existence is checked with a
/// direct filesystem stat. No caching across files.
pub fn check_site(root: &Path, layout: &SiteLayout) -> Result<CheckReport> {
    let files = collect_source_files(root, layout)?;
    let mut broken = Vec::new();

    for file in &files {
        let bytes =
            fs::read(file).with_context(|| format!("failed to read {}", file.display()))?;
        let content = String::from_utf8_lossy(&bytes);
        let base_dir = file.parent().unwrap_or(root);

        for reference in extract_references(&content) {
            if should_skip_reference(reference) {
                continue;
            }
            let cleaned = strip_query_and_fragment(reference);
            if cleaned.is_empty() {
                continue;
            }

            let resolved = normalize_lexically(&base_dir.join(cleaned));
            if resolved.exists() {
                continue;
            }

            broken.push(BrokenReference {
                source_file: render_relative(root, file),
                referenced_path: render_relative(root, &resolved),
            });
        }
    }

    Ok(CheckReport { broken })
}

/// Print the human-readable report for a completed scan.
pub fn render_report(report: &CheckReport) {
    if report.is_clean() {
        println!("✅ All local paths resolve.");
    } else {
        println!("⚠️ Broken local paths found:\n");
        for reference in &report.broken {
            println!("- {} → {}", reference.source_file, reference.referenced_path);
        }
    }
}

/// Resolve `.` and `..` components without touching the filesystem.
///
/// The referenced file usually does not exist, so `canonicalize` is not an
/// option; a lexical cleanup is enough for reporting and for the existence
/// stat.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(Component::ParentDir);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

fn render_relative(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectConfig;
    use tempfile::tempdir;

    fn layout() -> SiteLayout {
        ProjectConfig::default().into_layout()
    }

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn clean_tree_reports_no_broken_paths() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "style.css", "body { color: red }");
        write(root, "index.html", r##"<link href="style.css"><a href="#top">up</a>"##);

        let report = check_site(root, &layout()).unwrap();
        assert!(report.is_clean());
    }

    #[test]
    fn reports_missing_file_relative_to_root() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "pages/about.html", r#"<img src="./missing.png">"#);

        let report = check_site(root, &layout()).unwrap();
        assert_eq!(report.broken, vec![BrokenReference {
            source_file: "pages/about.html".into(),
            referenced_path: "pages/missing.png".into(),
        }]);
    }

    #[test]
    fn resolves_parent_directory_references() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "shared/app.js", "export {}");
        write(
            root,
            "pages/about.html",
            r#"<script src="../shared/app.js"></script><script src="../shared/gone.js"></script>"#,
        );

        let report = check_site(root, &layout()).unwrap();
        assert_eq!(report.broken, vec![BrokenReference {
            source_file: "pages/about.html".into(),
            referenced_path: "shared/gone.js".into(),
        }]);
    }

    #[test]
    fn strips_query_and_fragment_before_resolution() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "style.css", "");
        write(
            root,
            "index.html",
            r#"<link href="style.css?v=2"><a href="page.html#section">go</a>"#,
        );

        let report = check_site(root, &layout()).unwrap();
        assert_eq!(report.broken, vec![BrokenReference {
            source_file: "index.html".into(),
            referenced_path: "page.html".into(),
        }]);
    }

    #[test]
    fn never_checks_remote_or_inline_references() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(
            root,
            "index.html",
            r##"<img src="https://cdn.example.com/x.png">
               <a href="mailto:hi@example.com">mail</a>
               <img src="data:image/png;base64,xyz">
               <a href="#anchor">top</a>"##,
        );

        let report = check_site(root, &layout()).unwrap();
        assert!(report.is_clean());
    }

    #[test]
    fn repeated_references_are_reported_each_time() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(
            root,
            "index.html",
            r#"<img src="gone.png"><img src="gone.png">"#,
        );

        let report = check_site(root, &layout()).unwrap();
        assert_eq!(report.broken.len(), 2);
    }

    #[test]
    fn normalizes_dot_components_lexically() {
        assert_eq!(
            normalize_lexically(Path::new("a/b/./../c/x.png")),
            PathBuf::from("a/c/x.png")
        );
        assert_eq!(
            normalize_lexically(Path::new("../outside.png")),
            PathBuf::from("../outside.png")
        );
    }
}
