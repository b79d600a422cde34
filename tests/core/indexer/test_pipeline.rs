//! Analysis pipeline over fixture libraries

use crate::common::{create_test_services, without_metadata, PlainTextExtractor, TestLibrary};
use pmlens::core::config::Config;
use pmlens::core::indexer::AnalysisPipeline;
use pmlens::core::services::AnalysisRequest;
use std::fs;
use std::sync::Arc;

fn pipeline_with_workers(workers: usize) -> AnalysisPipeline {
    let mut config = Config::default();
    config.limits.max_concurrent_documents = workers;
    AnalysisPipeline::new(&config, Arc::new(PlainTextExtractor)).unwrap()
}

#[tokio::test]
async fn test_documents_in_identifier_order() {
    let library = TestLibrary::pm_books();

    let output = pipeline_with_workers(3)
        .analyze_directory(library.path())
        .await
        .unwrap();

    let ids: Vec<&str> = output
        .documents
        .iter()
        .map(|d| d.document.id.as_str())
        .collect();
    assert_eq!(ids, vec!["Budget Guide", "Risk Handbook", "agile teams"]);
    assert_eq!(output.files_found, 3);
}

#[tokio::test]
async fn test_worker_count_does_not_change_results() {
    let library = TestLibrary::pm_books();

    let sequential = pipeline_with_workers(1)
        .analyze_directory(library.path())
        .await
        .unwrap()
        .into_results(library.path());
    let concurrent = pipeline_with_workers(8)
        .analyze_directory(library.path())
        .await
        .unwrap()
        .into_results(library.path());

    assert_eq!(without_metadata(&sequential), without_metadata(&concurrent));
}

#[tokio::test]
async fn test_unreadable_document_is_skipped() {
    let mut library = TestLibrary::pm_books();
    library.add_unreadable("corrupt.pdf");
    let (services, _output) = create_test_services(library.path());

    let outcome = services.run_analysis(AnalysisRequest::default()).await;

    assert!(outcome.is_success());
    let metadata = &outcome.results.analysis_metadata;
    assert_eq!(metadata.files_found, 4);
    assert_eq!(metadata.documents_processed, 3);
    assert_eq!(metadata.documents_skipped.len(), 1);
    assert!(metadata.documents_skipped[0].file_path.ends_with("corrupt.pdf"));
    assert!(!outcome.results.processed_books.contains_key("corrupt"));
}

#[tokio::test]
async fn test_non_pdf_files_ignored_and_suffix_case_insensitive() {
    let library = TestLibrary::with_books(&[
        ("UPPER.PDF", "Chapter 1 Money\nbudget"),
        ("notes.txt", "Chapter 1 Money\nbudget"),
        ("README", "Chapter 1 Money\nbudget"),
    ]);

    let output = pipeline_with_workers(2)
        .analyze_directory(library.path())
        .await
        .unwrap();

    assert_eq!(output.files_found, 1);
    assert_eq!(output.documents[0].document.id, "UPPER");
}

#[tokio::test]
async fn test_subdirectories_only_when_recursive() {
    let library = TestLibrary::with_books(&[("top.pdf", "Chapter 1 A\nrisk")]);
    fs::create_dir(library.path().join("archive")).unwrap();
    fs::write(
        library.path().join("archive/old.pdf"),
        "Chapter 1 B\nscope",
    )
    .unwrap();

    let flat = pipeline_with_workers(1)
        .analyze_directory(library.path())
        .await
        .unwrap();
    assert_eq!(flat.files_found, 1);

    let mut config = Config::default();
    config.analysis.recursive = true;
    let deep = AnalysisPipeline::new(&config, Arc::new(PlainTextExtractor))
        .unwrap()
        .analyze_directory(library.path())
        .await
        .unwrap();
    assert_eq!(deep.files_found, 2);
}

#[tokio::test]
async fn test_total_text_length_counts_characters() {
    let library = TestLibrary::with_books(&[("café.pdf", "Chapter 1 Été\nrisk")]);

    let output = pipeline_with_workers(1)
        .analyze_directory(library.path())
        .await
        .unwrap();

    let document = &output.documents[0].document;
    assert_eq!(document.id, "café");
    // Leading page separator plus the text itself
    assert_eq!(document.total_text_length, 1 + "Chapter 1 Été\nrisk".chars().count());
}
