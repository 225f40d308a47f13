pub const DEFAULT_QUALITY: u8 = 85;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

/// Extensions offered by the source picker, without the leading dot.
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];
pub const IMAGE_FILTER_NAME: &str = "Image Files";

pub const COMPRESSED_SUFFIX: &str = "_compressed";

// Refuse inputs that would exhaust memory on decode
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;
pub const MAX_IMAGE_DIMENSION: u32 = 16384;

pub const OXIPNG_PRESET: u8 = 4;

pub const BYTES_PER_KB: f64 = 1024.0;

pub const PROGRESS_SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";

// Window
pub const WINDOW_TITLE: &str = "Image Compressor Tool";
pub const WINDOW_SIZE: [f32; 2] = [400.0, 250.0];
pub const HEADING_TEXT: &str = "Smart Image Compressor";
pub const BUTTON_TEXT: &str = "Select & Compress Image";
pub const READY_TEXT: &str = "Ready to compress...";
pub const FOOTER_TEXT: &str = "Maintains visual quality while reducing size.";

// Dialogs
pub const OPEN_DIALOG_TITLE: &str = "Select an Image";
pub const SAVE_DIALOG_TITLE: &str = "Save Compressed Image";
pub const SUCCESS_DIALOG_TITLE: &str = "Done";
pub const ERROR_DIALOG_TITLE: &str = "Error";
