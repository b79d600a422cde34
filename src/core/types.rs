//! Core data types for pmlens.
//!
//! This module defines the records produced by each pipeline stage
//! and the persisted analysis layout. Every map that carries an order
//! (chapter discovery, taxonomy order, document order) is an
//! [`IndexMap`] so the order survives serialization.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::topics::Topic;

/// Chapters of one document keyed by heading text, in discovery order
pub type ChapterMap = IndexMap<String, Chapter>;

/// Per-document classification result, in taxonomy order
pub type TopicData = IndexMap<Topic, TopicContent>;

/// Cross-document topic database, in taxonomy order
pub type TopicsDatabase = IndexMap<Topic, TopicEntry>;

/// A source document after text extraction
#[derive(Debug, Clone)]
pub struct Document {
    /// Identifier derived from the file name
    pub id: String,

    /// Source file path
    pub file_path: PathBuf,

    /// Raw concatenated page text
    pub text: String,

    /// Length of `text` in characters
    pub total_text_length: usize,
}

impl Document {
    pub fn new(file_path: &Path, text: String) -> Self {
        Self {
            id: document_id(file_path),
            file_path: file_path.to_path_buf(),
            total_text_length: text.chars().count(),
            text,
        }
    }
}

/// Derive a document identifier from a file path.
///
/// Uses the file stem with `_` and `-` replaced by spaces, so
/// `PMBOK_Guide-7th.pdf` becomes `PMBOK Guide 7th`.
pub fn document_id(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().replace(['_', '-'], " "))
        .unwrap_or_default()
}

/// A chapter or section detected inside a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Heading line, also the key of the chapter map
    #[serde(skip)]
    pub heading: String,

    /// Newline-joined body lines following the heading
    pub content: String,

    /// Line index of the heading within the document text
    pub line_start: usize,
}

/// One chapter found relevant to one topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicMatch {
    pub chapter_title: String,

    /// Number of distinct topic keywords found in the body
    pub relevance_score: usize,

    pub keywords_found: Vec<String>,

    /// Body prefix followed by the excerpt marker
    pub excerpt: String,

    pub full_content_link: String,
}

/// Classification result for one topic within one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicContent {
    /// Chapter headings per document
    pub book_references: IndexMap<String, Vec<String>>,

    /// Matching chapters in discovery order
    pub chapter_excerpts: Vec<TopicMatch>,
}

/// A topic match copied into the aggregate, tagged with its document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcedMatch {
    #[serde(flatten)]
    pub entry: TopicMatch,

    pub source_book: String,
}

/// Contribution of one document to a topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookTopicSummary {
    pub chapter_count: usize,
    pub excerpts: Vec<TopicMatch>,
}

/// Cross-document aggregate record for one topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicEntry {
    pub topic_title: String,
    pub books: IndexMap<String, BookTopicSummary>,
    pub similar_texts: Vec<SourcedMatch>,
    pub summary: String,
    pub total_excerpts: usize,
}

/// Persisted per-document record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedBook {
    pub file_path: String,
    pub chapters: ChapterMap,
    pub topic_data: TopicData,
    pub total_text_length: usize,
}

/// A document that was skipped during an analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedDocument {
    pub file_path: String,
    pub reason: String,
}

/// Run metadata, reported separately from the analysis content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub generated_at: DateTime<Utc>,
    pub source_dir: String,
    pub files_found: usize,
    pub documents_processed: usize,
    pub documents_skipped: Vec<SkippedDocument>,
    pub duration_ms: u64,
    pub version: String,
}

/// Complete persisted analysis record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub processed_books: IndexMap<String, ProcessedBook>,
    pub topics_database: TopicsDatabase,
    pub analysis_metadata: AnalysisMetadata,
}

impl AnalysisResults {
    /// An analysis with no documents
    pub fn empty(source_dir: &Path) -> Self {
        Self {
            processed_books: IndexMap::new(),
            topics_database: IndexMap::new(),
            analysis_metadata: AnalysisMetadata {
                generated_at: Utc::now(),
                source_dir: source_dir.display().to_string(),
                files_found: 0,
                documents_processed: 0,
                documents_skipped: Vec::new(),
                duration_ms: 0,
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    /// Restore chapter headings from their map keys after loading
    pub(crate) fn restore_headings(&mut self) {
        for book in self.processed_books.values_mut() {
            for (heading, chapter) in book.chapters.iter_mut() {
                chapter.heading.clone_from(heading);
            }
        }
    }

    /// Total number of chapters across all documents
    pub fn total_chapters(&self) -> usize {
        self.processed_books
            .values()
            .map(|book| book.chapters.len())
            .sum()
    }
}
