//! CLI test helpers
//!
//! Provides utilities for testing CLI commands including:
//! - Arc<Services> wrappers matching CLI execute() signatures
//! - A pre-analyzed library for read-side commands

use crate::common::{create_test_services, TestLibrary};
use pmlens::core::services::{AnalysisRequest, Services};
use std::sync::Arc;
use tempfile::TempDir;

/// Services over the standard fixture library, already analyzed.
///
/// Returns the library and output directories; keep them alive during
/// the test.
pub async fn analyzed_services() -> (Arc<Services>, TestLibrary, TempDir) {
    let library = TestLibrary::pm_books();
    let (services, output) = create_test_services(library.path());

    services
        .run_analysis(AnalysisRequest::default())
        .await
        .into_result()
        .expect("Failed to analyze fixture library");

    (services, library, output)
}
