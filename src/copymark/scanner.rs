//! Tree traversal and candidate filtering.

use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walks `root` depth-first and returns every regular file whose path avoids
/// all `ignore_paths` fragments and whose filename ends with one of
/// `suffixes`, in lexical per-directory order.
///
/// Ignored subtrees are still descended into; the fragments filter individual
/// file results, not the traversal itself. Any traversal error aborts the
/// whole scan.
pub fn scan_files(
    root: &Path,
    ignore_paths: &[String],
    suffixes: &[String],
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if is_ignored(path, ignore_paths) {
            continue;
        }
        if !has_suffix(path, suffixes) {
            continue;
        }
        files.push(path.to_path_buf());
    }
    Ok(files)
}

/// Fragments match anywhere in the full path string, not per segment:
/// `bin` also skips a file under `mybinutils/`.
fn is_ignored(path: &Path, ignore_paths: &[String]) -> bool {
    let path_str = path.to_string_lossy();
    ignore_paths.iter().any(|frag| path_str.contains(frag.as_str()))
}

fn has_suffix(path: &Path, suffixes: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
}
