//! Copyright-marker detection.

use crate::error::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Substring that marks a file as already carrying a copyright notice.
pub const COPYRIGHT_MARKER: &str = "Copyright (c) ";

/// Returns true if any line of the file contains [`COPYRIGHT_MARKER`].
///
/// Lines are read as raw bytes, so files with non-UTF-8 content are scanned
/// rather than rejected. Stops at the first matching line.
pub fn has_marker(path: &Path) -> Result<bool> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(false);
        }
        if contains_marker(&line) {
            return Ok(true);
        }
    }
}

fn contains_marker(line: &[u8]) -> bool {
    let marker = COPYRIGHT_MARKER.as_bytes();
    line.windows(marker.len()).any(|window| window == marker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_detects_marker_on_any_line() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("marked.go");
        fs::write(&path, "package main\n// Copyright (c) 2020, The Authors\n").unwrap();

        assert!(has_marker(&path).unwrap());
    }

    #[test]
    fn test_no_marker_reaches_end_of_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("plain.go");
        fs::write(&path, "package main\nfunc f() {}\n").unwrap();

        assert!(!has_marker(&path).unwrap());
    }

    #[test]
    fn test_marker_requires_trailing_space() {
        // "Copyright (c)2020" lacks the space the marker ends with.
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("close.go");
        fs::write(&path, "// Copyright (c)2020\n").unwrap();

        assert!(!has_marker(&path).unwrap());
    }

    #[test]
    fn test_scans_non_utf8_content() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("binary.go");
        let mut bytes = vec![0xff, 0xfe, b'\n'];
        bytes.extend_from_slice(b"// Copyright (c) 2021\n");
        fs::write(&path, &bytes).unwrap();

        assert!(has_marker(&path).unwrap());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        assert!(has_marker(&temp.path().join("gone.go")).is_err());
    }
}
