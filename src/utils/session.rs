//! Per-invocation resource scope
//!
//! A `Session` owns everything allocated for one run of the client. It is
//! created before option scanning and released when dropped, whichever way
//! the run ends.

use crate::error::{ClientError, Result};
use std::path::Path;
use tempfile::TempDir;
use tracing::{debug, instrument};

/// Scoped allocation context handed to operation handlers
#[derive(Debug)]
pub struct Session {
    scratch: TempDir,
}

impl Session {
    /// Acquire a fresh session
    #[instrument]
    pub fn acquire() -> Result<Self> {
        let scratch = tempfile::Builder::new()
            .prefix("svn-session-")
            .tempdir()
            .map_err(|source| ClientError::Session { source })?;
        debug!("Session scratch area at {}", scratch.path().display());
        Ok(Self { scratch })
    }

    /// Directory handlers may use for temporary files
    pub fn scratch_dir(&self) -> &Path {
        self.scratch.path()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        debug!("Releasing session {}", self.scratch.path().display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scratch_is_removed_on_drop() {
        let session = Session::acquire().unwrap();
        let scratch = session.scratch_dir().to_path_buf();
        std::fs::write(scratch.join("tmp"), "x").unwrap();
        assert!(scratch.is_dir());

        drop(session);
        assert!(!scratch.exists());
    }
}
