use crate::ports::outbound::LockfileReader;
use crate::shared::error::GraphError;
use crate::shared::security::{read_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// File name looked up when a directory is given instead of a lockfile
pub const LOCKFILE_NAME: &str = "Podfile.lock";

/// FileSystemReader adapter for reading lockfiles from disk
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Resolves a user-supplied path to the lockfile it designates
    ///
    /// Directories resolve to the `Podfile.lock` inside them; anything else
    /// is taken as the lockfile itself.
    pub fn resolve_lockfile_path(path: &Path) -> PathBuf {
        if path.is_dir() {
            path.join(LOCKFILE_NAME)
        } else {
            path.to_path_buf()
        }
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LockfileReader for FileSystemReader {
    fn read_lockfile(&self, path: &Path) -> Result<String> {
        let lockfile_path = Self::resolve_lockfile_path(path);

        if !lockfile_path.exists() {
            return Err(GraphError::LockfileNotFound {
                path: lockfile_path,
                suggestion: format!(
                    "No {} found at \"{}\".\n   \
                     Run `pod install` first, or point --path at a Podfile.lock or the directory that contains it.",
                    LOCKFILE_NAME,
                    path.display()
                ),
            }
            .into());
        }

        tracing::debug!(path = %lockfile_path.display(), "reading lockfile");

        read_regular_file(&lockfile_path, LOCKFILE_NAME, MAX_FILE_SIZE).map_err(|e| {
            GraphError::FileReadError {
                path: lockfile_path,
                details: e.to_string(),
            }
            .into()
        })
    }
}
