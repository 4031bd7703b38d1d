//! File system helpers
//!
//! Reading `--filedata` contents and telling whether a file is tracked by
//! the working copy it lives in.

use crate::error::{ClientError, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

/// Name of the per-directory administrative area
pub const ADM_DIR_NAME: &str = ".svn";

const ENTRY_NAME_PATTERN: &str = r#"<entry\b[^>]*?\bname="([^"]*)""#;

/// Read a whole file into memory
#[instrument]
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    let contents = fs::read(path).map_err(|e| ClientError::file_read(path, e))?;
    debug!("Read {} bytes from {}", contents.len(), path.display());
    Ok(contents)
}

/// Whether `path` has an entry in its directory's `.svn/entries` file
#[instrument]
pub fn is_versioned(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let entries_file = dir.join(ADM_DIR_NAME).join("entries");
    let entries = match fs::read_to_string(&entries_file) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("No entries file at {}: {}", entries_file.display(), e);
            return false;
        }
    };

    let entry_name = match Regex::new(ENTRY_NAME_PATTERN) {
        Ok(re) => re,
        Err(e) => {
            debug!("Failed to compile entry pattern: {}", e);
            return false;
        }
    };
    let versioned = entry_name
        .captures_iter(&entries)
        .any(|caps| &caps[1] == name);
    debug!("{} versioned: {}", path.display(), versioned);
    versioned
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const ENTRIES: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<wc-entries xmlns="svn:">
<entry committed-rev="1" name="" kind="dir" revision="1"/>
<entry committed-rev="1" name="log-msg.txt" kind="file" revision="1"/>
<entry kind="file" name="README"/>
</wc-entries>
"#;

    fn working_copy() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let adm = temp_dir.path().join(ADM_DIR_NAME);
        fs::create_dir(&adm).unwrap();
        fs::write(adm.join("entries"), ENTRIES).unwrap();
        temp_dir
    }

    #[test]
    fn test_read_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("msg");
        fs::write(&path, [0xde, 0xad, 0xbe, 0xef]).unwrap();
        assert_eq!(read_file(&path).unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_file(&temp_dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, ClientError::FileRead { .. }));
    }

    #[test]
    fn test_tracked_file_is_versioned() {
        let wc = working_copy();
        assert!(is_versioned(&wc.path().join("log-msg.txt")));
        assert!(is_versioned(&wc.path().join("README")));
    }

    #[test]
    fn test_untracked_file_is_not_versioned() {
        let wc = working_copy();
        assert!(!is_versioned(&wc.path().join("scratch.txt")));
    }

    #[test]
    fn test_outside_working_copy() {
        let temp_dir = TempDir::new().unwrap();
        assert!(!is_versioned(&temp_dir.path().join("log-msg.txt")));
    }
}
