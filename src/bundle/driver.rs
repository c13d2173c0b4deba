//! Drives the external bundler over the configured jobs.

use std::process::{Child, Command};

use anyhow::{Context, Result, bail};
use log::debug;

use crate::project::SiteLayout;

use super::command::{BuildMode, EsbuildJob};

/// Runs the configured bundle jobs through the external bundler executable.
///
/// The driver spawns one process per artifact and waits on all of them
/// jointly, so a build only succeeds once every artifact is written. Bundler
/// failures propagate as errors and terminate the build; there is no retry.
pub struct BundleDriver<'a> {
    layout: &'a SiteLayout,
}

impl<'a> BundleDriver<'a> {
    /// Create a driver for the provided layout.
    pub fn new(layout: &'a SiteLayout) -> Self {
        Self { layout }
    }

    /// The jobs a build consists of: the JS bundle, plus the vendor
    /// stylesheet when enabled in configuration.
    pub fn jobs(&self) -> Vec<EsbuildJob> {
        let mut jobs = vec![EsbuildJob::script(self.layout)];
        if self.layout.include_vendor_styles {
            jobs.push(EsbuildJob::vendor_styles(self.layout));
        }
        jobs
    }

    /// Run all jobs in the given mode.
    ///
    /// In watch mode this blocks until the watch processes are terminated
    /// externally.
    pub fn run(&self, mode: BuildMode) -> Result<()> {
        let program = which::which(&self.layout.bundler_program).with_context(|| {
            format!(
                "bundler executable `{}` not found on PATH",
                self.layout.bundler_program
            )
        })?;

        let jobs = self.jobs();
        let with_vendor_styles = jobs.len() > 1;
        let mut children: Vec<(&EsbuildJob, Child)> = Vec::new();
        for job in &jobs {
            let args = job.to_args(mode);
            debug!("spawning {} job: {} {}", job.label, program.display(), args.join(" "));
            let child = Command::new(&program)
                .args(&args)
                .spawn()
                .with_context(|| format!("failed to spawn bundler for the {} job", job.label))?;
            children.push((job, child));
        }

        if mode == BuildMode::Watch {
            if with_vendor_styles {
                println!("Watching JS and vendor CSS changes...");
            } else {
                println!("Watching JS changes...");
            }
        }

        for (job, mut child) in children {
            let status = child
                .wait()
                .with_context(|| format!("failed to wait on the {} job", job.label))?;
            if !status.success() {
                bail!("{} bundle failed with {status}", job.label);
            }
        }

        if mode == BuildMode::Once {
            let suffix = if with_vendor_styles { " (with vendor CSS)" } else { "" };
            println!("Build complete{suffix}.");
        }

        Ok(())
    }
}
