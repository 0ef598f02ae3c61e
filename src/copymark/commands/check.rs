use crate::commands::{CmdMessage, CmdResult};
use crate::config::Config;
use crate::error::Result;
use crate::marker;
use crate::scanner;
use std::path::PathBuf;

/// Returns every scanned file that does not yet carry the copyright marker,
/// in scan order.
pub fn candidates(config: &Config) -> Result<Vec<PathBuf>> {
    let mut missing = Vec::new();
    for path in scanner::scan_files(&config.root, &config.ignore_paths, &config.suffixes)? {
        if !marker::has_marker(&path)? {
            missing.push(path);
        }
    }
    Ok(missing)
}

/// Dry-run report: lists the candidates without touching any file.
pub fn run(config: &Config) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let missing = candidates(config)?;

    if missing.is_empty() {
        result.add_message(CmdMessage::info("dry run: no files to update"));
        return Ok(result);
    }

    result.add_message(CmdMessage::info(
        "dry run: would have updated the listed files",
    ));
    Ok(result.with_candidates(missing))
}
