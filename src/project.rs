//! Resolved site layout shared by the bundler driver, the checker and the bootstrap.

use std::path::Path;

/// Owned description of the project's filesystem layout and deployment settings.
///
/// Produced from [`crate::config::ProjectConfig`] once at startup; every other
/// module borrows this rather than re-reading configuration.
#[derive(Debug, Clone)]
pub struct SiteLayout {
    /// JavaScript entry point handed to the bundler.
    pub js_entry: String,
    /// Output path for the bundled JavaScript.
    pub js_outfile: String,
    /// Vendor stylesheet entry, bundled only when enabled.
    pub vendor_css_entry: String,
    /// Output path for the vendor stylesheet.
    pub vendor_css_outfile: String,
    /// Whether the vendor stylesheet job is part of builds.
    pub include_vendor_styles: bool,
    /// Name of the bundler executable looked up on `PATH`.
    pub bundler_program: String,
    /// URL prefix prepended to asset requests when the site is deployed
    /// under a sub-directory. Empty when served from the domain root.
    pub base_path: String,
    /// Site-relative location of the JSON data document.
    pub data_file: String,
    /// Page name assumed when a location path has no file component.
    pub landing_page: String,
    /// Directory names the checker never descends into.
    pub ignored_dirs: Vec<String>,
    /// File extensions the checker scans, written with their leading dot.
    pub checked_extensions: Vec<String>,
}

impl SiteLayout {
    /// URL of the data document, with the base path applied.
    pub fn data_url(&self) -> String {
        let base = self.base_path.trim_end_matches('/');
        let file = self.data_file.trim_start_matches('/');
        format!("{base}/{file}")
    }

    /// Whether a directory with this name is excluded from scanning.
    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.ignored_dirs.iter().any(|ignored| ignored == name)
    }

    /// Whether a file at this path is scanned for local references.
    pub fn scans_extension(&self, path: &Path) -> bool {
        let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
            return false;
        };

        self.checked_extensions
            .iter()
            .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(extension))
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::config::ProjectConfig;

    #[test]
    fn data_url_defaults_to_domain_root() {
        let layout = ProjectConfig::default().into_layout();
        assert_eq!(layout.data_url(), "/data/data.json");
    }

    #[test]
    fn data_url_applies_base_path_without_doubling_slashes() {
        let mut config = ProjectConfig::default();
        config.base_path = "/space-site/".into();
        let layout = config.into_layout();
        assert_eq!(layout.data_url(), "/space-site/data/data.json");
    }

    #[test]
    fn scans_only_allow_listed_extensions() {
        let layout = ProjectConfig::default().into_layout();
        assert!(layout.scans_extension(Path::new("index.html")));
        assert!(layout.scans_extension(Path::new("a/b/styles.CSS")));
        assert!(!layout.scans_extension(Path::new("image.png")));
        assert!(!layout.scans_extension(Path::new("Makefile")));
    }

    #[test]
    fn ignores_configured_directory_names() {
        let layout = ProjectConfig::default().into_layout();
        assert!(layout.is_ignored_dir("node_modules"));
        assert!(layout.is_ignored_dir(".git"));
        assert!(layout.is_ignored_dir("dist"));
        assert!(!layout.is_ignored_dir("src"));
    }
}
