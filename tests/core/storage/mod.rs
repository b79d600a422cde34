//! Storage layer tests
//!
//! Persistence of analysis results and the JSON layout of the
//! results file.
