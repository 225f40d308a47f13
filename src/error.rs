use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Cannot encode {path:?}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Cannot write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PNG optimization error: {0}")]
    PngOptimization(String),

    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(u8),

    #[error("Invalid image dimensions: {0}x{1}. Maximum allowed: {2}x{2}")]
    InvalidDimensions(u32, u32, u32),

    #[error("File too large: {0} bytes. Maximum allowed: {1} bytes")]
    FileTooLarge(u64, u64),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("File not found: {0:?}")]
    FileNotFound(PathBuf),

    #[error("Original file is empty (0 bytes); size reduction cannot be computed")]
    EmptySource,

    #[error("GUI error: {0}")]
    Gui(String),
}

impl CompressionError {
    /// Whether the error came from reading the source image rather than
    /// producing the output.
    pub fn is_decode_failure(&self) -> bool {
        matches!(
            self,
            CompressionError::Decode { .. }
                | CompressionError::FileNotFound(_)
                | CompressionError::FileTooLarge(..)
                | CompressionError::InvalidDimensions(..)
        )
    }
}

pub type Result<T> = std::result::Result<T, CompressionError>;
