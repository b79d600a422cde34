//! Analysis pipeline orchestration.
//!
//! Coordinates the end-to-end workflow:
//! 1. Walk the source directory
//! 2. Extract page text of each document
//! 3. Segment text into chapters
//! 4. Classify chapters by topic
//! 5. Aggregate all documents into the topic database
//!
//! Steps 2-4 run concurrently, one blocking task per document. Step 5
//! runs once every document has finished, over results sorted by
//! document identifier.

use chrono::Utc;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;

use crate::core::config::Config;
use crate::core::error::{PmlensError, Result};
use crate::core::indexer::extractor::{extract_text, TextExtractor};
use crate::core::indexer::segmenter::segment;
use crate::core::indexer::FileWalker;
use crate::core::topics::{aggregate, Classifier};
use crate::core::types::{
    AnalysisMetadata, AnalysisResults, ChapterMap, Document, ProcessedBook, SkippedDocument,
    TopicData,
};

/// One document after segmentation and classification
#[derive(Debug, Clone)]
pub struct AnalyzedDocument {
    pub document: Document,
    pub chapters: ChapterMap,
    pub topic_data: TopicData,
}

impl AnalyzedDocument {
    fn into_processed_book(self) -> ProcessedBook {
        ProcessedBook {
            file_path: self.document.file_path.display().to_string(),
            chapters: self.chapters,
            topic_data: self.topic_data,
            total_text_length: self.document.total_text_length,
        }
    }
}

/// Per-document results of one pipeline run
#[derive(Debug)]
pub struct PipelineOutput {
    /// Analyzed documents sorted by identifier, then path
    pub documents: Vec<AnalyzedDocument>,

    /// Documents that failed, sorted by path
    pub skipped: Vec<SkippedDocument>,

    /// Files matched in the source directory
    pub files_found: usize,

    pub duration_ms: u64,
}

impl PipelineOutput {
    /// Fold per-document results into the persisted record.
    ///
    /// Two documents with the same identifier collapse into one entry;
    /// the later one (by path) wins.
    pub fn into_results(self, source_dir: &Path) -> AnalysisResults {
        let mut results = AnalysisResults::empty(source_dir);

        for analyzed in self.documents {
            let id = analyzed.document.id.clone();
            if results
                .processed_books
                .insert(id.clone(), analyzed.into_processed_book())
                .is_some()
            {
                tracing::warn!("Document id '{}' produced by more than one file", id);
            }
        }

        let per_document: Vec<(&str, &TopicData)> = results
            .processed_books
            .iter()
            .map(|(id, book)| (id.as_str(), &book.topic_data))
            .collect();
        results.topics_database = aggregate(&per_document);

        results.analysis_metadata = AnalysisMetadata {
            generated_at: Utc::now(),
            source_dir: source_dir.display().to_string(),
            files_found: self.files_found,
            documents_processed: results.processed_books.len(),
            documents_skipped: self.skipped,
            duration_ms: self.duration_ms,
            version: env!("CARGO_PKG_VERSION").to_string(),
        };

        results
    }
}

/// Orchestrates the analysis pipeline
pub struct AnalysisPipeline {
    walker: FileWalker,
    extractor: Arc<dyn TextExtractor>,
    classifier: Classifier,
    max_concurrent: usize,
    progress_every: usize,
}

impl AnalysisPipeline {
    /// Create a new pipeline from configuration
    pub fn new(config: &Config, extractor: Arc<dyn TextExtractor>) -> Result<Self> {
        let analysis = &config.analysis;
        let walker = FileWalker::new(
            analysis.include_patterns.clone(),
            analysis.recursive,
            analysis.max_file_size_mb,
        )?;
        let classifier = Classifier::new(analysis.excerpt_chars, analysis.excerpt_marker.clone());

        Ok(Self {
            walker,
            extractor,
            classifier,
            max_concurrent: config.limits.max_concurrent_documents.max(1),
            progress_every: config.limits.progress_every_pages,
        })
    }

    /// Analyze every document of a directory.
    ///
    /// A missing directory fails the run. Documents that cannot be
    /// read or yield no text are logged and reported as skipped.
    pub async fn analyze_directory(&self, root: &Path) -> Result<PipelineOutput> {
        let start = Instant::now();

        tracing::info!("Starting document collection from {:?}", root);
        let files = self.walker.collect_files(root)?;
        if files.is_empty() {
            tracing::warn!("No PDF files found in {:?}", root);
        } else {
            tracing::info!("Found {} PDF files to process", files.len());
        }

        let files_found = files.len();
        let mut tasks = JoinSet::new();
        let mut outcomes = Vec::with_capacity(files_found);

        for path in files {
            if tasks.len() >= self.max_concurrent {
                if let Some(joined) = tasks.join_next().await {
                    outcomes.push(joined);
                }
            }

            let extractor = Arc::clone(&self.extractor);
            let classifier = self.classifier.clone();
            let progress_every = self.progress_every;
            tasks.spawn_blocking(move || {
                let result = process_file(&path, extractor.as_ref(), &classifier, progress_every);
                (path, result)
            });
        }

        while let Some(joined) = tasks.join_next().await {
            outcomes.push(joined);
        }

        let mut documents = Vec::new();
        let mut skipped = Vec::new();

        for outcome in outcomes {
            match outcome {
                Ok((_, Ok(analyzed))) => documents.push(analyzed),
                Ok((path, Err(e))) => {
                    tracing::warn!("Skipping {:?}: {}", path, e);
                    skipped.push(SkippedDocument {
                        file_path: path.display().to_string(),
                        reason: e.to_string(),
                    });
                }
                Err(e) => {
                    tracing::error!("Document task failed: {}", e);
                    skipped.push(SkippedDocument {
                        file_path: String::new(),
                        reason: format!("Document task failed: {e}"),
                    });
                }
            }
        }

        documents.sort_by(|a, b| {
            a.document
                .id
                .cmp(&b.document.id)
                .then_with(|| a.document.file_path.cmp(&b.document.file_path))
        });
        skipped.sort_by(|a, b| a.file_path.cmp(&b.file_path));

        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Analysis complete: {} documents processed, {} skipped in {}ms",
            documents.len(),
            skipped.len(),
            duration_ms
        );

        Ok(PipelineOutput {
            documents,
            skipped,
            files_found,
            duration_ms,
        })
    }
}

/// Process a single document: extract, segment and classify
fn process_file(
    path: &Path,
    extractor: &dyn TextExtractor,
    classifier: &Classifier,
    progress_every: usize,
) -> Result<AnalyzedDocument> {
    let text = extract_text(extractor, path, progress_every)?;
    if text.is_empty() {
        return Err(PmlensError::EmptyExtraction(path.display().to_string()));
    }

    let document = Document::new(path, text);
    tracing::info!(
        "Extracted {} characters of text from '{}'",
        document.total_text_length,
        document.id
    );

    let chapters = segment(&document.text);
    tracing::info!("Identified {} chapters/sections in '{}'", chapters.len(), document.id);

    let topic_data = classifier.classify(&document.id, &chapters);
    tracing::info!("Found content for {} topics in '{}'", topic_data.len(), document.id);

    Ok(AnalyzedDocument {
        document,
        chapters,
        topic_data,
    })
}
