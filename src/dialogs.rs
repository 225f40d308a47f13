//! Interactive prompts used by the workflow.
//!
//! [`Dialogs`] is the seam between the workflow and the desktop: the window
//! uses [`NativeDialogs`], tests script their own answers.

use crate::constants::{
    COMPRESSED_SUFFIX, ERROR_DIALOG_TITLE, IMAGE_FILTER_NAME, OPEN_DIALOG_TITLE,
    SAVE_DIALOG_TITLE, SUCCESS_DIALOG_TITLE, SUPPORTED_IMAGE_EXTENSIONS,
};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::{Path, PathBuf};

/// Defaults offered by the save dialog for a given source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationSuggestion {
    pub directory: Option<PathBuf>,
    /// `<stem>_compressed<.ext>`
    pub file_name: String,
    /// Source extension without the dot, if any.
    pub extension: Option<String>,
}

impl DestinationSuggestion {
    pub fn for_source(source: &Path) -> Self {
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = source
            .extension()
            .map(|e| e.to_string_lossy().into_owned());

        let file_name = match &extension {
            Some(ext) => format!("{}{}.{}", stem, COMPRESSED_SUFFIX, ext),
            None => format!("{}{}", stem, COMPRESSED_SUFFIX),
        };

        Self {
            directory: source
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf),
            file_name,
            extension,
        }
    }

    /// The suggested destination as a single path.
    pub fn path(&self) -> PathBuf {
        match &self.directory {
            Some(dir) => dir.join(&self.file_name),
            None => PathBuf::from(&self.file_name),
        }
    }
}

/// Blocking prompts. `None` from a picker means the user cancelled.
pub trait Dialogs {
    fn pick_source(&self) -> Option<PathBuf>;
    fn pick_destination(&self, suggestion: &DestinationSuggestion) -> Option<PathBuf>;
    fn show_success(&self, message: &str);
    fn show_error(&self, message: &str);
}

/// Native file pickers and message boxes through `rfd`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialogs;

impl Dialogs for NativeDialogs {
    fn pick_source(&self) -> Option<PathBuf> {
        FileDialog::new()
            .set_title(OPEN_DIALOG_TITLE)
            .add_filter(IMAGE_FILTER_NAME, SUPPORTED_IMAGE_EXTENSIONS)
            .pick_file()
    }

    fn pick_destination(&self, suggestion: &DestinationSuggestion) -> Option<PathBuf> {
        let mut dialog = FileDialog::new()
            .set_title(SAVE_DIALOG_TITLE)
            .set_file_name(suggestion.file_name.as_str());
        if let Some(dir) = &suggestion.directory {
            dialog = dialog.set_directory(dir);
        }
        // The first filter is the default, so the source extension leads.
        if let Some(ext) = &suggestion.extension {
            dialog = dialog.add_filter(ext.to_uppercase(), &[ext.as_str()]);
        }
        let path = dialog
            .add_filter(IMAGE_FILTER_NAME, SUPPORTED_IMAGE_EXTENSIONS)
            .save_file()?;

        Some(with_default_extension(path, suggestion.extension.as_deref()))
    }

    fn show_success(&self, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(SUCCESS_DIALOG_TITLE)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn show_error(&self, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(ERROR_DIALOG_TITLE)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

/// Appends `default_ext` when the typed name has no extension.
pub fn with_default_extension(path: PathBuf, default_ext: Option<&str>) -> PathBuf {
    match default_ext {
        Some(ext) if path.extension().is_none() => path.with_extension(ext),
        _ => path,
    }
}
