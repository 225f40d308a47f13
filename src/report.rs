//! Before/after size comparison and the texts shown to the user.

use crate::constants::BYTES_PER_KB;
use crate::error::{CompressionError, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionResult {
    pub original_size: u64,
    pub compressed_size: u64,
    /// Negative when the output grew.
    pub saved_kb: f64,
    /// `(original - compressed) / original * 100`
    pub reduction_percent: f64,
}

impl CompressionResult {
    /// # Errors
    /// `EmptySource` when `original_size` is zero.
    pub fn from_sizes(original_size: u64, compressed_size: u64) -> Result<Self> {
        if original_size == 0 {
            return Err(CompressionError::EmptySource);
        }

        let saved_bytes = original_size as f64 - compressed_size as f64;
        Ok(Self {
            original_size,
            compressed_size,
            saved_kb: saved_bytes / BYTES_PER_KB,
            reduction_percent: saved_bytes / original_size as f64 * 100.0,
        })
    }

    /// Multi-line text for the status label.
    pub fn status_message(&self) -> String {
        format!(
            "Success!\nReduced by {:.1}%\nSaved {:.1} KB",
            self.reduction_percent, self.saved_kb
        )
    }

    /// Body of the confirmation dialog; the percentage is truncated.
    pub fn confirmation_message(&self) -> String {
        format!(
            "Image saved successfully!\nSize reduced by {}%.",
            self.reduction_percent.trunc() as i64
        )
    }
}

/// Measures the file written at `new_path` against `original_size`.
pub fn compute_result(original_size: u64, new_path: &Path) -> Result<CompressionResult> {
    if original_size == 0 {
        return Err(CompressionError::EmptySource);
    }

    let compressed_size = fs::metadata(new_path)?.len();
    CompressionResult::from_sizes(original_size, compressed_size)
}

/// Body of the error dialog.
pub fn failure_message(error: &CompressionError) -> String {
    format!("An error occurred: {}", error)
}
