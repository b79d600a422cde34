//! Tests for analyze CLI command
//!
//! Tests the analyze command handler:
//! - Analyzing the configured or an explicit directory
//! - Output and worker overrides
//! - Error cases (missing directory, zero workers, unwritable output)

use crate::common::{create_test_services, TestLibrary};
use pmlens::cli::commands::analyze::{execute, AnalyzeArgs};
use pmlens::cli::OutputFormat;
use std::fs;
use std::path::PathBuf;

fn args(source_dir: Option<PathBuf>) -> AnalyzeArgs {
    AnalyzeArgs {
        source_dir,
        output: None,
        workers: None,
        quiet: true,
    }
}

/// Test analyzing the configured source directory
#[tokio::test]
async fn test_analyze_configured_directory_human() {
    let library = TestLibrary::pm_books();
    let (services, _output) = create_test_services(library.path());

    let result = execute(args(None), &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Analyze should succeed: {:?}", result.err());
    assert!(services.store.exists());
}

/// Test analyzing with JSON output
#[tokio::test]
async fn test_analyze_json() {
    let library = TestLibrary::pm_books();
    let (services, _output) = create_test_services(library.path());

    let result = execute(args(None), &services, OutputFormat::Json).await;
    assert!(result.is_ok());

    let loaded = services.load_results(None).unwrap();
    assert_eq!(loaded.processed_books.len(), 3);
}

/// Test explicit directory, output file and worker count
#[tokio::test]
async fn test_analyze_with_overrides() {
    let library = TestLibrary::pm_books();
    let (services, output) = create_test_services(&PathBuf::from("/nonexistent/Book"));
    let custom = output.path().join("custom.json");

    let result = execute(
        AnalyzeArgs {
            source_dir: Some(library.path().to_path_buf()),
            output: Some(custom.clone()),
            workers: Some(2),
            quiet: false,
        },
        &services,
        OutputFormat::Human,
    )
    .await;

    assert!(result.is_ok(), "{:?}", result.err());
    assert!(custom.exists());
    assert!(!services.store.exists());
}

/// Test missing source directory fails
#[tokio::test]
async fn test_analyze_missing_directory() {
    let (services, _output) = create_test_services(&PathBuf::from("/nonexistent/Book"));

    let result = execute(args(None), &services, OutputFormat::Human).await;

    let err = result.unwrap_err().to_string();
    assert!(err.contains("Source directory not found"), "{err}");
    assert!(!services.store.exists());
}

/// Test zero workers is rejected
#[tokio::test]
async fn test_analyze_zero_workers() {
    let library = TestLibrary::pm_books();
    let (services, _output) = create_test_services(library.path());

    let result = execute(
        AnalyzeArgs {
            workers: Some(0),
            ..args(None)
        },
        &services,
        OutputFormat::Human,
    )
    .await;

    assert!(result.is_err());
    assert!(!services.store.exists());
}

/// Test unwritable output is reported as an error
#[tokio::test]
async fn test_analyze_unwritable_output() {
    let library = TestLibrary::pm_books();
    let (services, output) = create_test_services(library.path());
    let blocker = output.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let result = execute(
        AnalyzeArgs {
            output: Some(blocker.join("results.json")),
            ..args(None)
        },
        &services,
        OutputFormat::Json,
    )
    .await;

    let err = result.unwrap_err().to_string();
    assert!(err.contains("Failed to persist"), "{err}");
}

/// Test an empty library still succeeds
#[tokio::test]
async fn test_analyze_empty_library() {
    let library = TestLibrary::empty();
    let (services, _output) = create_test_services(library.path());

    let result = execute(args(None), &services, OutputFormat::Human).await;

    assert!(result.is_ok());
    assert!(services.store.exists());
}
