use anyhow::Result;
use ignore::WalkBuilder;
use log::{debug, trace};
use std::path::{Path, PathBuf};

use crate::constants::SOURCE_SUFFIXES;

/// Returns true when the file name ends in one of the recognized source
/// suffixes. Case-sensitive, so `foo.TS` and `readme.md` do not qualify.
pub fn is_source_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| SOURCE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)))
}

/// Collects every eligible source file under `root`, recursively.
///
/// The walk is exhaustive: hidden files and ignore-listed paths are visited
/// like any other entry, and eligibility is decided by suffix alone. Order
/// follows the walker; callers get no ordering guarantee.
pub fn collect_source_files(root: &Path) -> Result<Vec<PathBuf>> {
    debug!("Collecting source files");
    let mut files: Vec<PathBuf> = Vec::new();
    debug!("Walking directory tree from root: {}", root.display());
    let walker = WalkBuilder::new(root).standard_filters(false).build();

    for res in walker {
        let dent = res?;
        let p = dent.path();
        if !p.is_file() {
            continue;
        }

        if is_source_file(p) {
            trace!("Found source file: {}", p.display());
            files.push(p.to_path_buf());
        }
    }
    debug!("Collected {} source files", files.len());
    Ok(files)
}
