//! Tests for show-topic CLI command
//!
//! Tests the show-topic command handler:
//! - Topic lookup by id, hyphenated id and title
//! - Topics absent from the results
//! - Error cases (unknown topic, missing results file)

use crate::cli::test_helpers::analyzed_services;
use crate::common::{create_test_services, TestLibrary};
use pmlens::cli::commands::show_topic::{build_response, execute, ShowTopicArgs};
use pmlens::cli::OutputFormat;
use pmlens::core::topics::Topic;

fn args(topic: &str) -> ShowTopicArgs {
    ShowTopicArgs {
        topic: topic.to_string(),
        results: None,
        limit: 5,
    }
}

/// Test topic accepted in every spelling
#[tokio::test]
async fn test_show_topic_spellings() {
    let (services, _library, _output) = analyzed_services().await;

    for spelling in ["risk_management", "risk-management", "Risk Management"] {
        let result = execute(args(spelling), &services, OutputFormat::Human).await;
        assert!(result.is_ok(), "{spelling}: {:?}", result.err());
    }
}

/// Test JSON output of a present topic
#[tokio::test]
async fn test_show_topic_json() {
    let (services, _library, _output) = analyzed_services().await;

    let result = execute(args("cost_management"), &services, OutputFormat::Json).await;
    assert!(result.is_ok());

    let results = services.load_results(None).unwrap();
    let response = build_response(&results, Topic::CostManagement, 5);
    assert!(response.found);
    assert_eq!(response.books.len(), 1);
    assert_eq!(response.books[0].book, "Budget Guide");
    assert_eq!(response.total_excerpts, 2);
}

/// Test a valid topic with no matches is not an error
#[tokio::test]
async fn test_show_topic_absent() {
    let (services, _library, _output) = analyzed_services().await;

    let result = execute(args("change_management"), &services, OutputFormat::Human).await;
    assert!(result.is_ok());

    let results = services.load_results(None).unwrap();
    assert!(!build_response(&results, Topic::ChangeManagement, 5).found);
}

/// Test reading an explicit results file
#[tokio::test]
async fn test_show_topic_explicit_results_file() {
    let (services, _library, _output) = analyzed_services().await;
    let results_file = services.store.path().to_path_buf();

    let empty = TestLibrary::empty();
    let (other, _other_output) = create_test_services(empty.path());

    let result = execute(
        ShowTopicArgs {
            results: Some(results_file),
            ..args("team_management")
        },
        &other,
        OutputFormat::Json,
    )
    .await;
    assert!(result.is_ok(), "{:?}", result.err());
}

/// Test unknown topic
#[tokio::test]
async fn test_show_topic_unknown() {
    let (services, _library, _output) = analyzed_services().await;

    let result = execute(args("procurement"), &services, OutputFormat::Human).await;

    let err = result.unwrap_err().to_string();
    assert!(err.contains("Unknown topic 'procurement'"), "{err}");
    assert!(err.contains("list-topics"));
}

/// Test missing results file
#[tokio::test]
async fn test_show_topic_before_analysis() {
    let library = TestLibrary::pm_books();
    let (services, _output) = create_test_services(library.path());

    let result = execute(args("risk_management"), &services, OutputFormat::Human).await;

    let err = result.unwrap_err().to_string();
    assert!(err.contains("Analysis results not found"), "{err}");
    assert!(err.contains("pmlens analyze"));
}
