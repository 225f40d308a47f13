mod common;

use common::*;
use image::ImageFormat;
use img_press::{
    detect_encoded_format, CompressionError, CompressionOptions, CompressionWorkflow,
    EncodingPolicy, PngHandling, Selection, Stage, StatusDisplay, StatusTone, WorkflowOutcome,
};
use std::fs;

#[test]
fn test_jpeg_sources_compress_and_report() {
    for name in ["photo.jpg", "photo.jpeg", "PHOTO.JPG"] {
        let temp_dir = create_temp_directory();
        let source = create_jpeg(temp_dir.path(), name);
        let destination = temp_dir.path().join("out.jpg");
        let dialogs = ScriptedDialogs::new(Some(source.clone()), Some(destination.clone()));
        let mut status = StatusDisplay::default();

        let outcome = CompressionWorkflow::default().run(&dialogs, &mut status);

        let WorkflowOutcome::Succeeded { result, policy, .. } = outcome else {
            panic!("expected success for {}", name);
        };
        assert_eq!(policy, EncodingPolicy::Jpeg);
        assert_eq!(result.original_size, fs::metadata(&source).unwrap().len());
        assert_eq!(result.compressed_size, fs::metadata(&destination).unwrap().len());
        assert_eq!(status.tone(), StatusTone::Success);
        assert_eq!(dialogs.successes.borrow().len(), 1);
        assert!(dialogs.errors.borrow().is_empty());
    }
}

#[test]
fn test_reduction_matches_recomputation() {
    let temp_dir = create_temp_directory();
    let source = create_png_with_alpha(temp_dir.path(), "art.png");
    let destination = temp_dir.path().join("art_small.jpg");
    let dialogs = ScriptedDialogs::new(Some(source.clone()), Some(destination.clone()));

    let outcome = CompressionWorkflow::default().run(&dialogs, &mut StatusDisplay::default());

    let WorkflowOutcome::Succeeded { result, .. } = outcome else {
        panic!("expected success");
    };
    let original = fs::metadata(&source).unwrap().len() as f64;
    let new = fs::metadata(&destination).unwrap().len() as f64;
    let expected = (original - new) / original * 100.0;
    assert!((result.reduction_percent - expected).abs() < 0.1);
    assert!((result.saved_kb - (original - new) / 1024.0).abs() < 0.1);
}

#[test]
fn test_png_source_is_written_as_jpeg_bytes() {
    let temp_dir = create_temp_directory();
    let source = create_png_with_alpha(temp_dir.path(), "logo.png");
    let destination = temp_dir.path().join("logo_compressed.png");
    let dialogs = ScriptedDialogs::new(Some(source), Some(destination.clone()));

    let outcome = CompressionWorkflow::default().run(&dialogs, &mut StatusDisplay::default());

    assert!(outcome.is_success());
    assert_eq!(
        detect_encoded_format(&destination).unwrap(),
        Some(ImageFormat::Jpeg)
    );
}

#[test]
fn test_png_source_kept_as_png_when_requested() {
    let temp_dir = create_temp_directory();
    let source = create_png_with_alpha(temp_dir.path(), "logo.png");
    let destination = temp_dir.path().join("logo_compressed.png");
    let dialogs = ScriptedDialogs::new(Some(source), Some(destination.clone()));
    let options = CompressionOptions::new(None, PngHandling::MatchDestination).unwrap();

    let outcome = CompressionWorkflow::new(options).run(&dialogs, &mut StatusDisplay::default());

    assert!(outcome.is_success());
    assert_eq!(
        detect_encoded_format(&destination).unwrap(),
        Some(ImageFormat::Png)
    );
    assert!(image::open(&destination).unwrap().color().has_alpha());
}

#[test]
fn test_destination_suggestion_follows_source() {
    let temp_dir = create_temp_directory();
    let source = create_jpeg(temp_dir.path(), "holiday.jpeg");
    let dialogs = ScriptedDialogs::new(Some(source), None);

    CompressionWorkflow::default().run(&dialogs, &mut StatusDisplay::default());

    let suggestions = dialogs.suggestions.borrow();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].file_name, "holiday_compressed.jpeg");
    assert_eq!(suggestions[0].directory.as_deref(), Some(temp_dir.path()));
    assert_eq!(suggestions[0].extension.as_deref(), Some("jpeg"));
}

#[test]
fn test_cancel_source_changes_nothing() {
    let temp_dir = create_temp_directory();
    let dialogs = ScriptedDialogs::new(None, Some(temp_dir.path().join("never.jpg")));
    let mut status = StatusDisplay::default();

    let outcome = CompressionWorkflow::default().run(&dialogs, &mut status);

    assert!(matches!(outcome, WorkflowOutcome::Cancelled(Selection::Source)));
    assert_eq!(status, StatusDisplay::default());
    assert_eq!(file_count(temp_dir.path()), 0);
    assert!(dialogs.errors.borrow().is_empty());
}

#[test]
fn test_cancel_destination_keeps_previous_status() {
    let temp_dir = create_temp_directory();
    let source = create_jpeg(temp_dir.path(), "photo.jpg");
    let mut status = StatusDisplay::default();

    // First run succeeds and sets the status.
    let first = ScriptedDialogs::new(Some(source.clone()), Some(temp_dir.path().join("a.jpg")));
    assert!(CompressionWorkflow::default().run(&first, &mut status).is_success());
    let after_first = status.clone();

    let second = ScriptedDialogs::new(Some(source), None);
    let outcome = CompressionWorkflow::default().run(&second, &mut status);

    assert!(matches!(
        outcome,
        WorkflowOutcome::Cancelled(Selection::Destination)
    ));
    assert_eq!(status, after_first);
    assert_eq!(file_count(temp_dir.path()), 2);
    assert!(second.successes.borrow().is_empty());
    assert!(second.errors.borrow().is_empty());
}

#[test]
fn test_corrupt_source_reports_decode_error() {
    let temp_dir = create_temp_directory();
    let source = create_corrupt_file(temp_dir.path(), "broken.jpg");
    let destination = temp_dir.path().join("broken_compressed.jpg");
    let dialogs = ScriptedDialogs::new(Some(source), Some(destination.clone()));
    let mut status = StatusDisplay::default();

    let outcome = CompressionWorkflow::default().run(&dialogs, &mut status);

    let WorkflowOutcome::Failed { stage, error } = outcome else {
        panic!("expected failure");
    };
    assert_eq!(stage, Stage::SourceChosen);
    assert!(matches!(error, CompressionError::Decode { .. }));
    assert!(!destination.exists());
    assert!(dialogs.suggestions.borrow().is_empty());
    assert_eq!(status, StatusDisplay::default());

    let errors = dialogs.errors.borrow();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("An error occurred: "));
}

#[test]
fn test_empty_source_is_handled() {
    let temp_dir = create_temp_directory();
    let source = temp_dir.path().join("empty.png");
    fs::write(&source, b"").unwrap();
    let dialogs = ScriptedDialogs::new(Some(source), Some(temp_dir.path().join("out.jpg")));

    let outcome = CompressionWorkflow::default().run(&dialogs, &mut StatusDisplay::default());

    assert!(matches!(outcome, WorkflowOutcome::Failed { .. }));
    assert_eq!(dialogs.errors.borrow().len(), 1);
}

#[test]
fn test_unwritable_destination_reports_encode_failure() {
    let temp_dir = create_temp_directory();
    let source = create_jpeg(temp_dir.path(), "photo.jpg");
    // A directory where the file should go.
    let destination = temp_dir.path().join("taken.jpg");
    fs::create_dir(&destination).unwrap();
    let dialogs = ScriptedDialogs::new(Some(source), Some(destination));
    let mut status = StatusDisplay::default();

    let outcome = CompressionWorkflow::default().run(&dialogs, &mut status);

    let WorkflowOutcome::Failed { stage, error } = outcome else {
        panic!("expected failure");
    };
    assert_eq!(stage, Stage::DestinationChosen);
    assert!(matches!(error, CompressionError::Write { .. }));
    assert_eq!(status.tone(), StatusTone::Ready);
    assert_eq!(dialogs.errors.borrow().len(), 1);
}
