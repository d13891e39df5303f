// crates/persist_document/src/lib.rs

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// Atomically overwrites the file at `path` with `contents`.
///
/// The contents are first written to a temporary file in the target's parent
/// directory and then renamed over the target, so the file on disk is either
/// its prior content or the new content in full, never a partial write.
///
/// # Errors
///
/// Returns an error naming the path if the parent directory does not exist,
/// the temporary file cannot be written, or the rename fails.
pub fn persist_document<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    let path = path.as_ref();
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| ".".into()));

    let mut temp_file = NamedTempFile::new_in(&parent)
        .with_context(|| format!("Error creating temporary file in {}", parent.display()))?;
    temp_file
        .write_all(contents.as_bytes())
        .with_context(|| format!("Error writing replacement content for {}", path.display()))?;
    temp_file
        .persist(path)
        .with_context(|| format!("Error replacing file {}", path.display()))?;
    Ok(())
}

/// Reads the document at `path` in full, with the path named on failure.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).with_context(|| format!("Error reading file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_persist_round_trips_byte_for_byte() {
        let dir = tempdir().expect("Failed to create temp dir");
        let target = dir.path().join("document.txt");
        fs::write(&target, "original").unwrap();

        let new_document = "line one\nline two\n\ttabbed\n";
        persist_document(&target, new_document).unwrap();

        let reread = fs::read_to_string(&target).unwrap();
        assert_eq!(reread, new_document);
    }

    #[test]
    fn test_persist_creates_target_when_absent() {
        let dir = tempdir().expect("Failed to create temp dir");
        let target = dir.path().join("fresh.txt");

        persist_document(&target, "content").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "content");
    }

    #[test]
    fn test_persist_missing_parent_fails_and_writes_nothing() {
        let dir = tempdir().expect("Failed to create temp dir");
        let target = dir.path().join("no_such_dir").join("document.txt");

        let result = persist_document(&target, "content");
        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Error creating temporary file"));
        assert!(!target.exists());
    }

    #[test]
    fn test_persist_leaves_no_temp_files_behind() {
        let dir = tempdir().expect("Failed to create temp dir");
        let target = dir.path().join("document.txt");
        persist_document(&target, "content").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_read_document_reports_path_on_failure() {
        let result = read_document("no_such_file.txt");
        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("no_such_file.txt"));
    }
}
