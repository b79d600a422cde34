//! Document analysis module.
//!
//! Turns a directory of PDF documents into per-document chapter maps
//! and topic classifications. Key pieces:
//!
//! - File system walking with case-insensitive pattern matching
//! - Lazy page-by-page text extraction behind [`TextExtractor`]
//! - Heading-based chapter segmentation
//! - Concurrent pipeline orchestration, one blocking task per document
//!
//! # Safety
//!
//! Segmentation and excerpting work on characters, never on byte
//! offsets, so multi-byte text cannot cause a panic.

pub mod extractor;
pub mod pipeline;
pub mod segmenter;
pub mod walker;

pub use extractor::{PdfExtractor, TextExtractor};
pub use pipeline::{AnalysisPipeline, PipelineOutput};
pub use segmenter::segment;
pub use walker::FileWalker;
