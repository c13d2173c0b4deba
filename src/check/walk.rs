//! Recursive collection of the files eligible for reference scanning.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use crate::project::SiteLayout;

/// Walk the tree under `root` and return every scannable file.
///
/// Directories named in the layout's ignore list are never descended into.
/// Entries are visited in name order so reports are deterministic. Symlink
/// cycles are not handled; the tree is assumed finite and acyclic.
pub fn collect_source_files(root: &Path, layout: &SiteLayout) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_into(root, layout, &mut files)?;
    debug!("collected {} scannable files under {}", files.len(), root.display());
    Ok(files)
}

fn collect_into(dir: &Path, layout: &SiteLayout, files: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries: Vec<fs::DirEntry> = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("failed to list directory {}", dir.display()))?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let file_name = entry.file_name();
        let name_str = file_name.to_string_lossy();
        let file_type = entry
            .file_type()
            .with_context(|| format!("failed to stat {}", entry.path().display()))?;

        if file_type.is_dir() {
            if layout.is_ignored_dir(&name_str) {
                debug!("skipping ignored directory {}", entry.path().display());
                continue;
            }
            collect_into(&entry.path(), layout, files)?;
        } else if file_type.is_file() && layout.scans_extension(&entry.path()) {
            files.push(entry.path());
        }
    }

    Ok(())
}
