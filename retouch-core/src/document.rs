// retouch-core/src/document.rs
//! Document loading and writing: the two filesystem touchpoints of a pass.
//!
//! The Loader reads the target file as strict UTF-8. The Writer stages the
//! transformed content in a temporary file in the target's directory and
//! atomically persists it over the original, so a failed run never leaves a
//! half-written file behind.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::errors::RewriteError;

/// Reads the full text content of `path` as UTF-8.
pub fn load_document(path: &Path) -> Result<String, RewriteError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => RewriteError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => RewriteError::PermissionDenied(path.to_path_buf(), e),
        _ => RewriteError::IoError(e),
    })?;

    debug!("Loaded {} bytes from {}.", bytes.len(), path.display());

    String::from_utf8(bytes).map_err(|_| RewriteError::Decode(path.to_path_buf()))
}

/// Writes `content` to `path`, overwriting any existing file.
///
/// The content is written to a temporary sibling first and renamed into
/// place, so the target is only ever the old complete file or the new one.
pub fn write_document(path: &Path, content: &str) -> Result<(), RewriteError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(parent).map_err(|e| match e.kind() {
        ErrorKind::PermissionDenied => RewriteError::PermissionDenied(path.to_path_buf(), e),
        _ => RewriteError::IoError(e),
    })?;

    staged.write_all(content.as_bytes())?;
    staged.flush()?;

    staged.persist(path).map_err(|e| match e.error.kind() {
        ErrorKind::PermissionDenied => RewriteError::PermissionDenied(path.to_path_buf(), e.error),
        _ => RewriteError::IoError(e.error),
    })?;

    debug!("Wrote {} bytes to {}.", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, RewriteError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_utf8_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.bin");
        std::fs::write(&path, [0xffu8, 0xfe, 0x00, 0x80]).unwrap();
        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, RewriteError::Decode(_)));
        assert!(err.to_string().contains("binary.bin"));
    }

    #[test]
    fn test_write_overwrites_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        std::fs::write(&path, "old content").unwrap();

        write_document(&path, "new content").unwrap();
        assert_eq!(load_document(&path).unwrap(), "new content");
    }

    #[test]
    fn test_write_leaves_no_temp_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        write_document(&path, "hello").unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
