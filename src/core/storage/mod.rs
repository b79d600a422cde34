//! Persistence of analysis results.
//!
//! A single JSON document holds everything an analysis run produced:
//!
//! ```text
//! book_analysis_results.json
//! ├── processed_books     # per-document chapters and topic data
//! ├── topics_database     # cross-document aggregate, taxonomy order
//! └── analysis_metadata   # run statistics and skipped documents
//! ```

mod store;

pub use store::ResultStore;
