//! Declarative esbuild job descriptions rendered into command-line arguments.

use crate::project::SiteLayout;

/// How the driver runs its jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// Build each artifact once, minified, and exit.
    Once,
    /// Keep one unminified, source-mapped watch process per artifact running
    /// until the driver is terminated.
    Watch,
}

/// A single bundler invocation: one entry point, one output file.
#[derive(Debug, Clone)]
pub struct EsbuildJob {
    /// Short name used in log and error messages.
    pub label: &'static str,
    /// Entry point handed to the bundler.
    pub entry: String,
    /// Output artifact path.
    pub outfile: String,
    /// Whether dependencies are followed and inlined.
    pub bundle: bool,
    /// Output module format, when one is forced.
    pub format: Option<&'static str>,
    /// Language target for the emitted code, when one is forced.
    pub target: Option<&'static str>,
    /// Whether the `.css` loader must be configured explicitly.
    pub css_loader: bool,
}

impl EsbuildJob {
    /// The JavaScript bundle job for this layout.
    pub fn script(layout: &SiteLayout) -> Self {
        Self {
            label: "JS",
            entry: layout.js_entry.clone(),
            outfile: layout.js_outfile.clone(),
            bundle: true,
            format: Some("esm"),
            target: Some("es2020"),
            css_loader: false,
        }
    }

    /// The vendor stylesheet job for this layout.
    pub fn vendor_styles(layout: &SiteLayout) -> Self {
        Self {
            label: "vendor CSS",
            entry: layout.vendor_css_entry.clone(),
            outfile: layout.vendor_css_outfile.clone(),
            bundle: false,
            format: None,
            target: None,
            css_loader: true,
        }
    }

    /// Render the argument list for this job in the given mode.
    ///
    /// One-shot builds minify; watch builds emit source maps instead and add
    /// the persistent watch flag.
    pub fn to_args(&self, mode: BuildMode) -> Vec<String> {
        let mut args = vec![self.entry.clone()];
        if self.bundle {
            args.push("--bundle".into());
        }
        args.push(format!("--outfile={}", self.outfile));
        if let Some(format) = self.format {
            args.push(format!("--format={format}"));
        }
        if let Some(target) = self.target {
            args.push(format!("--target={target}"));
        }
        if self.css_loader {
            args.push("--loader:.css=css".into());
        }
        match mode {
            BuildMode::Once => args.push("--minify".into()),
            BuildMode::Watch => {
                args.push("--sourcemap".into());
                args.push("--watch=forever".into());
            }
        }
        args
    }
}
