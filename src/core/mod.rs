//! Core domain logic (interface-agnostic)
//!
//! This module contains all analysis logic that is independent of the
//! command-line adapter.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **indexer**: File walking, text extraction, segmentation pipeline
//! - **topics**: Taxonomy, classification and aggregation
//! - **storage**: JSON results persistence
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod indexer;
pub mod services;
pub mod storage;
pub mod topics;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{PmlensError, Result};
pub use services::Services;
