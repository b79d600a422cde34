//! Unified service container for pmlens
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::error::{PmlensError, Result};
use crate::core::indexer::{AnalysisPipeline, PdfExtractor, TextExtractor};
use crate::core::storage::ResultStore;
use crate::core::types::AnalysisResults;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Unified services container
#[derive(Clone)]
pub struct Services {
    /// Store for the configured results file
    pub store: Arc<ResultStore>,

    /// Page text source used by every pipeline
    pub extractor: Arc<dyn TextExtractor>,

    /// Application configuration
    pub config: Arc<Config>,
}

/// Per-run overrides of the configured analysis settings
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    pub source_dir: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub max_concurrent_documents: Option<usize>,
}

/// Outcome of one analysis run.
///
/// The results are always present, even when the run failed: a
/// missing source directory yields empty results, a persistence
/// failure keeps the in-memory results.
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub results: AnalysisResults,
    pub output_path: PathBuf,
    pub persisted: bool,
    pub error: Option<PmlensError>,
}

impl AnalysisOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Convert into the results, or the error that ended the run
    pub fn into_result(self) -> Result<AnalysisResults> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.results),
        }
    }
}

impl Services {
    /// Create services from configuration, reading PDFs with `lopdf`
    pub fn new(config: Config) -> Self {
        Self::with_extractor(config, Arc::new(PdfExtractor))
    }

    /// Create services with a custom text extractor
    pub fn with_extractor(config: Config, extractor: Arc<dyn TextExtractor>) -> Self {
        let store = Arc::new(ResultStore::new(config.analysis.output_file.clone()));

        Self {
            store,
            extractor,
            config: Arc::new(config),
        }
    }

    /// Create an AnalysisPipeline, optionally overriding the
    /// concurrency limit
    pub fn create_pipeline(&self, max_concurrent: Option<usize>) -> Result<AnalysisPipeline> {
        match max_concurrent {
            Some(max) => {
                let mut config = (*self.config).clone();
                config.limits.max_concurrent_documents = max;
                config.validate()?;
                AnalysisPipeline::new(&config, Arc::clone(&self.extractor))
            }
            None => AnalysisPipeline::new(&self.config, Arc::clone(&self.extractor)),
        }
    }

    /// Run a full analysis: walk, extract, segment, classify,
    /// aggregate and persist.
    pub async fn run_analysis(&self, request: AnalysisRequest) -> AnalysisOutcome {
        let source_dir = request
            .source_dir
            .unwrap_or_else(|| self.config.analysis.source_dir.clone());
        let output_path = request
            .output_file
            .unwrap_or_else(|| self.config.analysis.output_file.clone());

        let failed = |error: PmlensError| {
            tracing::error!("{}", error);
            AnalysisOutcome {
                results: AnalysisResults::empty(&source_dir),
                output_path: output_path.clone(),
                persisted: false,
                error: Some(error),
            }
        };

        let pipeline = match self.create_pipeline(request.max_concurrent_documents) {
            Ok(pipeline) => pipeline,
            Err(e) => return failed(e),
        };

        let output = match pipeline.analyze_directory(&source_dir).await {
            Ok(output) => output,
            Err(e) => return failed(e),
        };

        let results = output.into_results(&source_dir);
        tracing::info!(
            "Topics found: {} across {} documents",
            results.topics_database.len(),
            results.processed_books.len()
        );

        let store = ResultStore::new(output_path.clone());
        match store.save(&results) {
            Ok(()) => AnalysisOutcome {
                results,
                output_path,
                persisted: true,
                error: None,
            },
            Err(e) => {
                tracing::error!("{}", e);
                AnalysisOutcome {
                    results,
                    output_path,
                    persisted: false,
                    error: Some(e),
                }
            }
        }
    }

    /// Load persisted results from `path`, or from the configured
    /// results file
    pub fn load_results(&self, path: Option<&Path>) -> Result<AnalysisResults> {
        match path {
            Some(path) => ResultStore::new(path).load(),
            None => self.store.load(),
        }
    }
}
