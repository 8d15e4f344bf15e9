use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest lockfile we are willing to load into memory (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects `path` if it is a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Operation name for error messages (e.g., "read", "write")
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Reads a regular, non-symlinked file no larger than `max_size` bytes
///
/// # Arguments
/// * `path` - The file to read
/// * `file_description` - Description for error messages (e.g., "Podfile.lock")
/// * `max_size` - Maximum allowed size in bytes
///
/// # Errors
/// Returns an error if:
/// - The path is a symbolic link or not a regular file
/// - The file is larger than `max_size`
/// - The file cannot be read as UTF-8 text
pub fn read_regular_file(path: &Path, file_description: &str, max_size: u64) -> Result<String> {
    validate_not_symlink(path, "read")?;

    let metadata = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            max_size
        );
    }

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_not_symlink_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("Podfile.lock");
        fs::write(&file_path, "PODS:").unwrap();

        assert!(validate_not_symlink(&file_path, "read").is_ok());
    }

    #[test]
    fn test_validate_not_symlink_nonexistent() {
        let path = PathBuf::from("/nonexistent/Podfile.lock");
        assert!(validate_not_symlink(&path, "read").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_not_symlink_rejects_link() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.lock");
        let link = temp_dir.path().join("Podfile.lock");
        fs::write(&target, "PODS:").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = validate_not_symlink(&link, "read").unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
    }

    #[test]
    fn test_read_regular_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("Podfile.lock");
        fs::write(&file_path, "PODS:\n  - A\n").unwrap();

        let content = read_regular_file(&file_path, "Podfile.lock", MAX_FILE_SIZE).unwrap();
        assert_eq!(content, "PODS:\n  - A\n");
    }

    #[test]
    fn test_read_regular_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_regular_file(temp_dir.path(), "Podfile.lock", MAX_FILE_SIZE).unwrap_err();
        assert!(err.to_string().contains("not a regular file"));
    }

    #[test]
    fn test_read_regular_file_too_large() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("Podfile.lock");
        fs::write(&file_path, "PODS:\n  - TooBig\n").unwrap();

        let err = read_regular_file(&file_path, "Podfile.lock", 4).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }
}
