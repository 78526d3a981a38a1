//! Error case tests
//!
//! Structurally invalid local input must error before any engine call;
//! everything else in the error taxonomy must render a useful message.

use std::path::Path;

use worklist_ai_rust::error::WorklistAiError;
use worklist_ai_rust::payload::ImagePayload;

/// Loading a missing image file
#[test]
fn test_missing_image_file() {
    let result = ImagePayload::from_file(Path::new("/nonexistent/path/worklist.jpg"));
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, WorklistAiError::FileNotFound(_)));
}

/// A file that is not an image is rejected before dispatch
#[test]
fn test_non_image_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("worklist.jpg");
    std::fs::write(&path, "name,cpt\nCT Head,70450\n").unwrap();

    let result = ImagePayload::from_file(&path);
    assert!(matches!(result, Err(WorklistAiError::InvalidImage(_))));
}

/// Base64 text that does not decode is rejected before dispatch
#[test]
fn test_undecodable_base64() {
    let result = ImagePayload::from_base64("data:image/png;base64,@@@@");
    assert!(matches!(result, Err(WorklistAiError::InvalidImage(_))));
}

/// Display output for each error variant
#[test]
fn test_error_display() {
    let errors = vec![
        WorklistAiError::Config("test config error".to_string()),
        WorklistAiError::MissingApiKey,
        WorklistAiError::FileNotFound("worklist.jpg".to_string()),
        WorklistAiError::InvalidImage("not an image".to_string()),
        WorklistAiError::InvalidCatalog("not an array".to_string()),
        WorklistAiError::ApiCall("engine call failed".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "empty error message: {:?}", err);
    }
}

/// The MissingApiKey message tells the user how to fix it
#[test]
fn test_missing_api_key_message() {
    let err = WorklistAiError::MissingApiKey;
    let display = format!("{}", err);

    assert!(display.contains("API key"));
    assert!(display.contains("worklist-ai config"));
    assert!(display.contains("GEMINI_API_KEY"));
}

/// Conversion from common-crate errors
#[test]
fn test_error_from_common() {
    let parse = worklist_ai_common::Error::Parse("bad context line".to_string());
    let err: WorklistAiError = parse.into();
    assert!(matches!(err, WorklistAiError::Common(_)));
    assert!(format!("{}", err).contains("bad context line"));
}

/// Debug rendering
#[test]
fn test_error_debug() {
    let err = WorklistAiError::Config("test".to_string());
    let debug = format!("{:?}", err);
    assert!(debug.contains("Config"));
    assert!(debug.contains("test"));
}
