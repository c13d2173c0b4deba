//! Project configuration loader describing the site layout and build settings.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::project::SiteLayout;

const DEFAULT_CONFIG_FILE: &str = "site.config.json";

/// Discoverable project configuration for builds, checks and the bootstrap.
///
/// Every field carries a default matching the conventional project layout, so
/// a configuration file only needs to name what it overrides.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectConfig {
    /// JavaScript entry point handed to the bundler.
    pub js_entry: String,
    /// Output path for the bundled JavaScript.
    pub js_outfile: String,
    /// Vendor stylesheet entry point.
    pub vendor_css_entry: String,
    /// Output path for the vendor stylesheet.
    pub vendor_css_outfile: String,
    /// Include the vendor stylesheet in builds. Resolved here, once, rather
    /// than probed for at build time.
    pub include_vendor_styles: bool,
    /// Name of the bundler executable looked up on `PATH`.
    pub bundler_program: String,
    /// Deployment URL prefix; empty when the site is served from the root.
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

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            js_entry: "src/js/main.js".into(),
            js_outfile: "dist/bundle.js".into(),
            vendor_css_entry: "node_modules/aos/dist/aos.css".into(),
            vendor_css_outfile: "dist/aos.css".into(),
            include_vendor_styles: false,
            bundler_program: "esbuild".into(),
            base_path: String::new(),
            data_file: "data/data.json".into(),
            landing_page: "index.html".into(),
            ignored_dirs: vec!["node_modules".into(), ".git".into(), "dist".into()],
            checked_extensions: vec![
                ".html".into(),
                ".js".into(),
                ".json".into(),
                ".css".into(),
            ],
        }
    }
}

impl ProjectConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// When the configuration file does not exist or fails to parse we fall
    /// back to default values so callers can continue with the conventional
    /// layout.
    pub fn discover(project_dir: &Path) -> Self {
        let candidate = project_dir.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Convert the configuration into the owned layout description.
    pub fn into_layout(self) -> SiteLayout {
        SiteLayout {
            js_entry: self.js_entry,
            js_outfile: self.js_outfile,
            vendor_css_entry: self.vendor_css_entry,
            vendor_css_outfile: self.vendor_css_outfile,
            include_vendor_styles: self.include_vendor_styles,
            bundler_program: self.bundler_program,
            base_path: self.base_path,
            data_file: self.data_file,
            landing_page: self.landing_page,
            ignored_dirs: self.ignored_dirs,
            checked_extensions: self.checked_extensions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discover_falls_back_to_defaults_for_missing_file() {
        let dir = tempdir().unwrap();
        let config = ProjectConfig::discover(dir.path());
        assert_eq!(config.js_entry, "src/js/main.js");
        assert!(!config.include_vendor_styles);
    }

    #[test]
    fn discover_falls_back_to_defaults_for_invalid_json() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "{not json").unwrap();
        let config = ProjectConfig::discover(dir.path());
        assert_eq!(config.js_outfile, "dist/bundle.js");
    }

    #[test]
    fn discover_reads_overrides_from_config_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            r#"{"includeVendorStyles": true, "basePath": "/space-site", "ignoredDirs": ["vendor"]}"#,
        )
        .unwrap();

        let config = ProjectConfig::discover(dir.path());
        assert!(config.include_vendor_styles);
        assert_eq!(config.base_path, "/space-site");
        assert_eq!(config.ignored_dirs, vec!["vendor".to_string()]);
        // Unspecified fields keep their defaults.
        assert_eq!(config.landing_page, "index.html");
    }

    #[test]
    fn from_path_errors_on_missing_file() {
        let dir = tempdir().unwrap();
        let result = ProjectConfig::from_path(&dir.path().join("absent.json"));
        assert!(result.is_err());
    }
}
