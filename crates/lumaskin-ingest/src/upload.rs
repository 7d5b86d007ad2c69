//! Reading an upload fully into memory.

use std::path::Path;

use crate::error::{IngestError, Result};

/// Maximum upload size held in memory (64 MB default).
pub const MAX_UPLOAD_SIZE: u64 = 64 * 1024 * 1024;

/// Reads a whole upload, rejecting files above [`MAX_UPLOAD_SIZE`].
pub fn read_upload(path: &Path) -> Result<Vec<u8>> {
    read_upload_with_limit(path, MAX_UPLOAD_SIZE)
}

/// Reads a whole upload against a custom size limit.
pub fn read_upload_with_limit(path: &Path, max_size: u64) -> Result<Vec<u8>> {
    let metadata = std::fs::metadata(path).map_err(|e| file_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    let bytes = std::fs::read(path).map_err(|e| file_error(path, e))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read upload");
    Ok(bytes)
}

fn file_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_upload() {
        let file = create_temp_file(b"name,brand\nSerum,Acme\n");
        let bytes = read_upload(file.path()).unwrap();
        assert_eq!(bytes, b"name,brand\nSerum,Acme\n");
    }

    #[test]
    fn test_read_upload_too_large() {
        let file = create_temp_file(b"0123456789");
        let result = read_upload_with_limit(file.path(), 4);
        assert!(matches!(
            result,
            Err(IngestError::FileTooLarge {
                size: 10,
                max_size: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_read_upload_missing_file() {
        let result = read_upload(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
