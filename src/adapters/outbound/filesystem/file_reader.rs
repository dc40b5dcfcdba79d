use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum file size for security (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// FileSystemReader adapter for reading input files from the file system
///
/// Used for datastore snapshots and for documents handed to the upload
/// command. Every read goes through the same security checks.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a file as raw bytes
    ///
    /// # Arguments
    /// * `path` - File to read
    /// * `file_type` - Human-readable description used in error messages
    pub fn read_bytes(&self, path: &Path, file_type: &str) -> Result<Vec<u8>> {
        Self::check_metadata(path, file_type)?;
        fs::read(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_type, e))
    }

    /// Reads a UTF-8 text file
    pub fn read_to_string(&self, path: &Path, file_type: &str) -> Result<String> {
        Self::check_metadata(path, file_type)?;
        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_type, e))
    }

    /// Security checks before reading:
    /// - Reject symbolic links
    /// - Validate file is a regular file
    /// - Check file size limits
    fn check_metadata(path: &Path, file_type: &str) -> Result<()> {
        // Get file metadata without following symlinks
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_type, e))?;

        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            );
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                file_size,
                MAX_FILE_SIZE
            );
        }

        Ok(())
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_bytes_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("vex.json");
        fs::write(&path, b"{\"bomFormat\":\"CycloneDX\"}").unwrap();

        let content = FileSystemReader::new().read_bytes(&path, "VEX document").unwrap();

        assert_eq!(content, b"{\"bomFormat\":\"CycloneDX\"}");
    }

    #[test]
    fn test_read_to_string_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snapshot.json");
        fs::write(&path, "{}").unwrap();

        let content = FileSystemReader::new()
            .read_to_string(&path, "snapshot")
            .unwrap();

        assert_eq!(content, "{}");
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result =
            FileSystemReader::new().read_bytes(&temp_dir.path().join("missing.json"), "snapshot");

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to read snapshot metadata"));
    }

    #[test]
    fn test_read_directory_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemReader::new().read_bytes(temp_dir.path(), "snapshot");

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("is not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_symlink_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = FileSystemReader::new().read_bytes(&link, "snapshot");

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("symbolic link"));
    }
}
