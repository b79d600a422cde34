//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod analyze;
pub mod completions;
pub mod config;
pub mod show_topic;
pub mod topics;

// Re-export argument types for use in mod.rs
pub use analyze::AnalyzeArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use show_topic::ShowTopicArgs;
pub use topics::TopicsArgs;
