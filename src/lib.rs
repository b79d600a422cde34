//! pmlens - Project management topic analysis for PDF libraries
//!
//! Reads a directory of project-management books, splits each one into
//! chapters by heading detection, classifies chapters against a fixed
//! taxonomy of nine topics by keyword matching, and aggregates the
//! matches into a cross-document topic database persisted as JSON.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic
//!   - config, error, types, xdg
//!   - indexer (walking, extraction, segmentation, pipeline)
//!   - topics (taxonomy, classifier, aggregator)
//!   - storage (JSON results file)
//!   - services (unified service container)
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - analyze, list-topics, show-topic, show-config, completions
//!
//! # Key Features
//!
//! - Character-based excerpts (multi-byte text never panics)
//! - Concurrent per-document processing with a deterministic result
//! - Atomic results file replacement

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{PmlensError, Result};
pub use crate::core::services::{AnalysisOutcome, AnalysisRequest, Services};
pub use crate::core::topics::Topic;
pub use crate::core::types::*;
