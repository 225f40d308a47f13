use crate::constants::{DEFAULT_QUALITY, MAX_IMAGE_DIMENSION, MAX_QUALITY, MIN_QUALITY, OXIPNG_PRESET};
use crate::dialogs::DestinationSuggestion;
use crate::error::{CompressionError, Result};
use crate::formats::{detect_encoded_format, extension_matches, EncodingPolicy, PngHandling};
use crate::report::{compute_result, CompressionResult};
use crate::utils::{create_progress_spinner, format_file_size};
use crate::validation::{is_supported_source, validate_source_path};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GenericImageView, ImageError, ImageReader};
use std::borrow::Cow;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionOptions {
    pub quality: u8,
    pub png_handling: PngHandling,
}

impl CompressionOptions {
    pub fn new(quality: Option<u8>, png_handling: PngHandling) -> Result<Self> {
        let quality = quality.unwrap_or(DEFAULT_QUALITY);
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(CompressionError::InvalidQuality(quality));
        }

        Ok(Self {
            quality,
            png_handling,
        })
    }
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            png_handling: PngHandling::default(),
        }
    }
}

/// Decodes the image at `path` and returns it with the file's size in bytes.
///
/// The format is sniffed from the file contents, so a PNG saved under a
/// `.jpg` name still decodes.
///
/// # Errors
/// * `FileNotFound` / `FileTooLarge` from the pre-flight checks
/// * `Decode` when the file cannot be read or is not a supported image
/// * `InvalidDimensions` when either side exceeds `MAX_IMAGE_DIMENSION`
pub fn decode(path: &Path) -> Result<(DynamicImage, u64)> {
    let file_size = validate_source_path(path)?;

    let decode_error = |source: ImageError| CompressionError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let img = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_error(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_error)?;

    let (width, height) = img.dimensions();
    if width > MAX_IMAGE_DIMENSION || height > MAX_IMAGE_DIMENSION {
        return Err(CompressionError::InvalidDimensions(
            width,
            height,
            MAX_IMAGE_DIMENSION,
        ));
    }

    Ok((img, file_size))
}

/// Re-encodes `img` and writes it to `destination`.
///
/// `source_ext` is the extension of the file the image came from; it selects
/// the encoder (see [`EncodingPolicy::select`]). The whole output is encoded
/// in memory first so a failed encode never leaves a partial file behind.
pub fn compress_and_save(
    img: &DynamicImage,
    destination: &Path,
    source_ext: Option<&str>,
    options: &CompressionOptions,
) -> Result<EncodingPolicy> {
    let policy = EncodingPolicy::select(source_ext, destination, options.png_handling)?;
    crate::verbose!("Encoding {:?} as {}", destination, policy);

    let encode_error = |source: ImageError| CompressionError::Encode {
        path: destination.to_path_buf(),
        source,
    };

    let mut buffer = Vec::new();
    match policy {
        EncodingPolicy::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut buffer, options.quality);
            jpeg_compatible(img)
                .write_with_encoder(encoder)
                .map_err(encode_error)?;
        }
        EncodingPolicy::FlattenToJpeg => {
            let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
            let encoder = JpegEncoder::new_with_quality(&mut buffer, options.quality);
            rgb.write_with_encoder(encoder).map_err(encode_error)?;
        }
        EncodingPolicy::OptimizedPng => {
            let mut raw = Vec::new();
            img.write_to(&mut Cursor::new(&mut raw), image::ImageFormat::Png)
                .map_err(encode_error)?;

            let mut oxipng_options = oxipng::Options::from_preset(OXIPNG_PRESET);
            oxipng_options.force = true;
            buffer = oxipng::optimize_from_memory(&raw, &oxipng_options)
                .map_err(|e| CompressionError::PngOptimization(e.to_string()))?;
        }
        EncodingPolicy::Generic(format) => {
            img.write_to(&mut Cursor::new(&mut buffer), format)
                .map_err(encode_error)?;
        }
    }

    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| CompressionError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(destination, &buffer).map_err(|source| CompressionError::Write {
        path: destination.to_path_buf(),
        source,
    })?;

    if !extension_matches(destination, policy.output_format()) {
        crate::warn!(
            "{:?} holds {:?} data; its extension does not match",
            destination,
            policy.output_format()
        );
    }
    if crate::logger::is_verbose() {
        crate::verbose!(
            "Wrote {} bytes, sniffed format {:?}",
            buffer.len(),
            detect_encoded_format(destination)?
        );
    }

    Ok(policy)
}

// JPEG carries 8-bit luma or RGB only
fn jpeg_compatible(img: &DynamicImage) -> Cow<'_, DynamicImage> {
    match img {
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => Cow::Borrowed(img),
        _ => Cow::Owned(DynamicImage::ImageRgb8(img.to_rgb8())),
    }
}

/// Decode, re-encode and measure in one go, without any dialogs.
pub fn compress_file(
    source: &Path,
    destination: &Path,
    options: &CompressionOptions,
) -> Result<CompressionResult> {
    let (img, original_size) = decode(source)?;
    let source_ext = source.extension().and_then(|ext| ext.to_str());
    compress_and_save(&img, destination, source_ext, options)?;
    drop(img);

    compute_result(original_size, destination)
}

/// Headless counterpart of the window's button: compresses `input` into
/// `output` (or `<name>_compressed<ext>` next to it) and prints a summary.
pub fn compress_image(
    input: PathBuf,
    output: Option<PathBuf>,
    options: &CompressionOptions,
) -> Result<CompressionResult> {
    let output = output.unwrap_or_else(|| DestinationSuggestion::for_source(&input).path());

    crate::info!("🗜️  Compressing image: {:?}", input);
    crate::info!("📁 Output: {:?}", output);
    if !is_supported_source(&input) {
        crate::warn!("{:?} is not a .jpg, .jpeg or .png file", input);
    }

    let pb = create_progress_spinner("Compressing image...");
    let result = compress_file(&input, &output, options);
    match &result {
        Ok(_) => pb.finish_with_message("✅ Compression complete"),
        Err(_) => pb.abandon_with_message("Compression failed"),
    }
    let result = result?;

    crate::info!(
        "📊 Original size: {} bytes ({})",
        result.original_size,
        format_file_size(result.original_size)
    );
    crate::info!(
        "📈 Compressed size: {} bytes ({})",
        result.compressed_size,
        format_file_size(result.compressed_size)
    );
    crate::info!("{}", result.status_message());

    Ok(result)
}
