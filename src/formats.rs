//! Encoder selection for re-compressed output.
//!
//! The source extension decides the encoder: JPEG sources stay JPEG, PNG
//! sources are flattened to RGB and written as JPEG, anything else is saved in
//! whatever format the destination extension names.

use crate::error::{CompressionError, Result};
use image::{ImageFormat, ImageReader};
use std::fmt;
use std::path::Path;

/// What to do with a PNG source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PngHandling {
    /// Flatten to RGB and write JPEG bytes whatever the destination is named.
    #[default]
    TranscodeToJpeg,
    /// Follow the destination extension; `.png` gets a real, optimized PNG.
    MatchDestination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingPolicy {
    /// Baseline JPEG at the configured quality.
    Jpeg,
    /// Alpha dropped, then JPEG at the configured quality.
    FlattenToJpeg,
    /// Lossless PNG run through oxipng.
    OptimizedPng,
    /// Default encoder settings of the named format.
    Generic(ImageFormat),
}

impl EncodingPolicy {
    /// Picks the encoder for a source with extension `source_ext` (no dot,
    /// any case) written to `destination`.
    pub fn select(source_ext: Option<&str>, destination: &Path, png: PngHandling) -> Result<Self> {
        let source_ext = source_ext.map(str::to_ascii_lowercase);

        match source_ext.as_deref() {
            Some("jpg" | "jpeg") => Ok(EncodingPolicy::Jpeg),
            Some("png") => match png {
                PngHandling::TranscodeToJpeg => Ok(EncodingPolicy::FlattenToJpeg),
                PngHandling::MatchDestination => match Self::for_destination(destination)? {
                    EncodingPolicy::Jpeg => Ok(EncodingPolicy::FlattenToJpeg),
                    other => Ok(other),
                },
            },
            _ => Self::for_destination(destination),
        }
    }

    fn for_destination(destination: &Path) -> Result<Self> {
        let format = ImageFormat::from_path(destination).map_err(|_| {
            CompressionError::UnsupportedFormat(format!(
                "cannot infer an output format from {:?}",
                destination
            ))
        })?;

        match format {
            ImageFormat::Jpeg => Ok(EncodingPolicy::Jpeg),
            ImageFormat::Png => Ok(EncodingPolicy::OptimizedPng),
            f if f.writing_enabled() => Ok(EncodingPolicy::Generic(f)),
            f => Err(CompressionError::UnsupportedFormat(format!(
                "{:?} output is not supported",
                f
            ))),
        }
    }

    /// The format of the bytes this policy writes.
    pub fn output_format(&self) -> ImageFormat {
        match self {
            EncodingPolicy::Jpeg | EncodingPolicy::FlattenToJpeg => ImageFormat::Jpeg,
            EncodingPolicy::OptimizedPng => ImageFormat::Png,
            EncodingPolicy::Generic(f) => *f,
        }
    }

    /// Whether the encoder honours the quality setting.
    pub fn is_lossy(&self) -> bool {
        matches!(self, EncodingPolicy::Jpeg | EncodingPolicy::FlattenToJpeg)
    }
}

impl fmt::Display for EncodingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingPolicy::Jpeg => write!(f, "JPEG"),
            EncodingPolicy::FlattenToJpeg => write!(f, "JPEG (RGB, alpha dropped)"),
            EncodingPolicy::OptimizedPng => write!(f, "PNG (oxipng)"),
            EncodingPolicy::Generic(format) => write!(f, "{:?}", format),
        }
    }
}

/// Sniffs the format of an encoded file from its leading bytes.
pub fn detect_encoded_format(path: &Path) -> Result<Option<ImageFormat>> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    Ok(reader.format())
}

/// Whether the file name's extension names `format`.
pub fn extension_matches(path: &Path, format: ImageFormat) -> bool {
    ImageFormat::from_path(path).map_or(false, |f| f == format)
}
