//! Topic classification and aggregation.
//!
//! - **taxonomy**: the nine fixed project-management topics
//! - **classifier**: per-document keyword matching
//! - **aggregator**: cross-document topic database

pub mod aggregator;
pub mod classifier;
pub mod taxonomy;

pub use aggregator::aggregate;
pub use classifier::Classifier;
pub use taxonomy::Topic;
