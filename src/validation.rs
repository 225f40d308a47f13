use crate::constants::{MAX_FILE_SIZE, SUPPORTED_IMAGE_EXTENSIONS};
use crate::error::{CompressionError, Result};
use std::fs;
use std::path::Path;

/// Checks that `path` names a readable regular file small enough to decode
/// and returns its size in bytes.
pub fn validate_source_path(path: &Path) -> Result<u64> {
    if !path.exists() {
        return Err(CompressionError::FileNotFound(path.to_path_buf()));
    }

    let metadata = fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(CompressionError::UnsupportedFormat(format!(
            "{:?} is not a file",
            path
        )));
    }

    if metadata.len() > MAX_FILE_SIZE {
        return Err(CompressionError::FileTooLarge(metadata.len(), MAX_FILE_SIZE));
    }

    Ok(metadata.len())
}

/// Whether the extension is one the source picker offers.
pub fn is_supported_source(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
