//! The select → decode → save-as → encode → measure → report procedure.
//!
//! One press of the window's button runs [`CompressionWorkflow::run`] to
//! completion. Every step returns a `Result`; the run folds them into a single
//! [`WorkflowOutcome`] and reports it through the [`Dialogs`] it was given.
//! Cancelling either picker is not an error and reports nothing.

use crate::constants::READY_TEXT;
use crate::dialogs::{DestinationSuggestion, Dialogs};
use crate::error::CompressionError;
use crate::formats::EncodingPolicy;
use crate::processing::{compress_and_save, decode, CompressionOptions};
use crate::report::{compute_result, failure_message, CompressionResult};
use crate::validation::is_supported_source;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Ready,
    Success,
}

/// Text of the window's status label. Survives between runs; only a
/// successful run changes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDisplay {
    text: String,
    tone: StatusTone,
}

impl Default for StatusDisplay {
    fn default() -> Self {
        Self {
            text: READY_TEXT.to_string(),
            tone: StatusTone::Ready,
        }
    }
}

impl StatusDisplay {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tone(&self) -> StatusTone {
        self.tone
    }

    fn show_success(&mut self, result: &CompressionResult) {
        self.text = result.status_message();
        self.tone = StatusTone::Success;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    SourceChosen,
    Decoded,
    DestinationChosen,
    Encoded,
    Reported,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Idle => "idle",
            Stage::SourceChosen => "source chosen",
            Stage::Decoded => "decoded",
            Stage::DestinationChosen => "destination chosen",
            Stage::Encoded => "encoded",
            Stage::Reported => "reported",
        };
        f.write_str(name)
    }
}

/// Which picker the user dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Source,
    Destination,
}

#[derive(Debug)]
pub enum WorkflowOutcome {
    Cancelled(Selection),
    Succeeded {
        destination: PathBuf,
        policy: EncodingPolicy,
        result: CompressionResult,
    },
    /// `stage` is the last stage reached before `error`.
    Failed {
        stage: Stage,
        error: CompressionError,
    },
}

impl WorkflowOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, WorkflowOutcome::Succeeded { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct CompressionWorkflow {
    options: CompressionOptions,
}

impl CompressionWorkflow {
    pub fn new(options: CompressionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompressionOptions {
        &self.options
    }

    /// Runs one full compression and reports the outcome.
    pub fn run<D: Dialogs + ?Sized>(
        &self,
        dialogs: &D,
        status: &mut StatusDisplay,
    ) -> WorkflowOutcome {
        let outcome = self.execute(dialogs);

        match &outcome {
            WorkflowOutcome::Cancelled(selection) => {
                crate::verbose!("{:?} selection cancelled", selection);
            }
            WorkflowOutcome::Succeeded { result, .. } => {
                report_success(dialogs, status, result);
                crate::verbose!("stage: {}", Stage::Reported);
            }
            WorkflowOutcome::Failed { stage, error } => {
                crate::error!("Compression failed after stage '{}': {}", stage, error);
                if error.is_decode_failure() {
                    crate::verbose!("Source could not be read; nothing was written");
                }
                report_failure(dialogs, error);
            }
        }

        outcome
    }

    fn execute<D: Dialogs + ?Sized>(&self, dialogs: &D) -> WorkflowOutcome {
        let Some(source) = dialogs.pick_source() else {
            return WorkflowOutcome::Cancelled(Selection::Source);
        };
        crate::verbose!("stage: {} ({:?})", Stage::SourceChosen, source);
        if !is_supported_source(&source) {
            crate::warn!("{:?} is not a .jpg, .jpeg or .png file", source);
        }

        let (img, original_size) = match decode(&source) {
            Ok(decoded) => decoded,
            Err(error) => {
                return WorkflowOutcome::Failed {
                    stage: Stage::SourceChosen,
                    error,
                }
            }
        };
        crate::verbose!(
            "stage: {} ({}x{}, {} bytes)",
            Stage::Decoded,
            img.width(),
            img.height(),
            original_size
        );

        let suggestion = DestinationSuggestion::for_source(&source);
        let Some(destination) = dialogs.pick_destination(&suggestion) else {
            return WorkflowOutcome::Cancelled(Selection::Destination);
        };
        crate::verbose!("stage: {} ({:?})", Stage::DestinationChosen, destination);

        let source_ext = source.extension().and_then(|ext| ext.to_str());
        let policy = match compress_and_save(&img, &destination, source_ext, &self.options) {
            Ok(policy) => policy,
            Err(error) => {
                return WorkflowOutcome::Failed {
                    stage: Stage::DestinationChosen,
                    error,
                }
            }
        };
        drop(img);
        crate::verbose!("stage: {} ({})", Stage::Encoded, policy);

        match compute_result(original_size, &destination) {
            Ok(result) => WorkflowOutcome::Succeeded {
                destination,
                policy,
                result,
            },
            Err(error) => WorkflowOutcome::Failed {
                stage: Stage::Encoded,
                error,
            },
        }
    }
}

/// Updates the status label and raises the confirmation dialog.
pub fn report_success<D: Dialogs + ?Sized>(
    dialogs: &D,
    status: &mut StatusDisplay,
    result: &CompressionResult,
) {
    status.show_success(result);
    dialogs.show_success(&result.confirmation_message());
}

/// Raises the error dialog. The status label keeps its previous text.
pub fn report_failure<D: Dialogs + ?Sized>(dialogs: &D, error: &CompressionError) {
    dialogs.show_error(&failure_message(error));
}
