use anyhow::{Context, Result};
use log::{debug, info, trace};
use std::{fs, io::Write, path::Path};

use realias_core::collect_source_files;

use crate::{
    config::Config,
    reporter::print_fixing_notice,
    rules::{Rule, default_rules, rewrite_content},
    types::FixResult,
};

/// Runs the fix-imports pass: walks `cfg.root`, rewrites eligible files in
/// place, and emits one notice per rewritten file to `out`.
///
/// Files are processed one at a time, in walk order. Any read or write
/// failure aborts the whole run; files already rewritten stay rewritten.
pub fn run_fix_imports<W: Write>(cfg: &Config, out: &mut W) -> Result<FixResult> {
    info!("Starting fix-imports run");
    debug!("Using root directory: {}", cfg.root.display());

    let rules = default_rules();
    let files = collect_source_files(&cfg.root)?;
    info!("Found {} source files under {}", files.len(), cfg.root.display());

    let mut rewritten = Vec::new();
    for file in &files {
        if rewrite_file(file, &rules, out)? {
            rewritten.push(file.clone());
        }
    }

    info!("fix-imports complete. Rewrote {} of {} files", rewritten.len(), files.len());
    Ok(FixResult { rewritten, files_scanned: files.len() })
}

/// Reads one file, applies the rules, and writes the result back only when
/// the content changed. The notice goes out before the write.
fn rewrite_file<W: Write>(file: &Path, rules: &[Rule], out: &mut W) -> Result<bool> {
    trace!("Reading {}", file.display());
    let original =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;

    let updated = rewrite_content(&original, rules);
    if updated == original {
        trace!("No eligible imports in {}", file.display());
        return Ok(false);
    }

    debug!("Rewriting imports in {}", file.display());
    print_fixing_notice(out, file)?;
    fs::write(file, &updated).with_context(|| format!("Failed to write {}", file.display()))?;
    Ok(true)
}
