use crate::shared::Result;
use std::path::Path;

/// LockfileReader port for loading raw lockfile text
pub trait LockfileReader {
    /// Reads the Podfile.lock at `path`
    ///
    /// # Arguments
    /// * `path` - A Podfile.lock, or a directory containing one
    ///
    /// # Returns
    /// The raw content of the lockfile
    ///
    /// # Errors
    /// Returns an error if:
    /// - No lockfile exists at the location
    /// - The file cannot be read due to permissions, size or I/O errors
    fn read_lockfile(&self, path: &Path) -> Result<String>;
}
