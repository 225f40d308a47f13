pub mod cli;
pub mod constants;
pub mod dialogs;
pub mod error;
pub mod formats;
pub mod gui;
pub mod logger;
pub mod processing;
pub mod report;
pub mod utils;
pub mod validation;
pub mod workflow;

pub use dialogs::{DestinationSuggestion, Dialogs, NativeDialogs};
pub use error::{CompressionError, Result};
pub use formats::{detect_encoded_format, EncodingPolicy, PngHandling};
pub use processing::{compress_and_save, compress_file, compress_image, decode, CompressionOptions};
pub use report::{compute_result, CompressionResult};
pub use workflow::{
    report_failure, report_success, CompressionWorkflow, Selection, Stage, StatusDisplay,
    StatusTone, WorkflowOutcome,
};
