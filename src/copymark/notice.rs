//! Atomic notice insertion.

use crate::error::{CopymarkError, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Rewrites `path` so its content becomes `notice` followed by the original
/// bytes.
///
/// The new content is staged in a uniquely-named temp file and moved onto
/// `path` with a single rename, so readers of `path` never observe a partial
/// write. The temp file is cleaned up on every exit path; until the rename,
/// `path` is untouched.
pub fn prepend_notice(path: &Path, notice: &str) -> Result<()> {
    let mut tmp = NamedTempFile::new()?;
    tmp.write_all(notice.as_bytes())?;

    let mut original = File::open(path)?;
    io::copy(&mut original, tmp.as_file_mut())?;

    tmp.persist(path).map_err(|e| CopymarkError::Io(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_prepends_notice_to_original_bytes() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("main.go");
        fs::write(&path, "package main\nfunc f(){}").unwrap();

        prepend_notice(&path, "/* NOTICE */\n").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "/* NOTICE */\npackage main\nfunc f(){}");
    }

    #[test]
    fn test_empty_notice_leaves_content_unchanged() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("main.go");
        fs::write(&path, "package main\n").unwrap();

        prepend_notice(&path, "").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "package main\n");
    }

    #[test]
    fn test_original_bytes_survive_verbatim() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("data.go");
        let original = vec![0u8, 159, 146, 150, b'\n', b'x'];
        fs::write(&path, &original).unwrap();

        prepend_notice(&path, "// header\n").unwrap();

        let content = fs::read(&path).unwrap();
        assert!(content.ends_with(&original));
        assert!(content.starts_with(b"// header\n"));
        assert_eq!(content.len(), original.len() + "// header\n".len());
    }

    #[test]
    fn test_missing_target_fails_without_creating_it() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("gone.go");

        assert!(prepend_notice(&path, "/* NOTICE */\n").is_err());
        assert!(!path.exists());
    }
}
