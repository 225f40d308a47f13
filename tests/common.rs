#![allow(dead_code)]

use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use img_press::{DestinationSuggestion, Dialogs};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

/// A noisy photo-like picture so encoders have something to chew on.
pub fn photo_like(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let n = x.wrapping_mul(2654435761).wrapping_add(y.wrapping_mul(40503)) >> 24;
        Rgb([
            ((x * 255 / width.max(1)) as u8).wrapping_add(n as u8 / 8),
            ((y * 255 / height.max(1)) as u8).wrapping_add(n as u8 / 8),
            (n as u8) / 2 + 64,
        ])
    })
}

pub fn create_jpeg(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    DynamicImage::ImageRgb8(photo_like(160, 120))
        .save_with_format(&path, ImageFormat::Jpeg)
        .unwrap();
    path
}

pub fn create_png_with_alpha(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let rgb = photo_like(160, 120);
    let rgba = RgbaImage::from_fn(160, 120, |x, y| {
        let Rgb([r, g, b]) = *rgb.get_pixel(x, y);
        Rgba([r, g, b, if x < 80 { 255 } else { 90 }])
    });
    DynamicImage::ImageRgba8(rgba)
        .save_with_format(&path, ImageFormat::Png)
        .unwrap();
    path
}

pub fn create_corrupt_file(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"this is not an image at all").unwrap();
    path
}

/// Number of entries in `dir`.
pub fn file_count(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

/// Dialogs that answer from a script and remember what they were shown.
#[derive(Default)]
pub struct ScriptedDialogs {
    pub source: Option<PathBuf>,
    pub destination: Option<PathBuf>,
    pub suggestions: RefCell<Vec<DestinationSuggestion>>,
    pub successes: RefCell<Vec<String>>,
    pub errors: RefCell<Vec<String>>,
}

impl ScriptedDialogs {
    pub fn new(source: Option<PathBuf>, destination: Option<PathBuf>) -> Self {
        Self {
            source,
            destination,
            ..Default::default()
        }
    }
}

impl Dialogs for ScriptedDialogs {
    fn pick_source(&self) -> Option<PathBuf> {
        self.source.clone()
    }

    fn pick_destination(&self, suggestion: &DestinationSuggestion) -> Option<PathBuf> {
        self.suggestions.borrow_mut().push(suggestion.clone());
        self.destination.clone()
    }

    fn show_success(&self, message: &str) {
        self.successes.borrow_mut().push(message.to_string());
    }

    fn show_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}
