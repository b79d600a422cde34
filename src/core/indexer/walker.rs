//! Source directory walker with pattern-based filtering.
//!
//! Collects the documents of a source directory by file name pattern
//! (case-insensitive, so `Guide.PDF` matches `*.pdf`). Only the top
//! level is scanned unless recursion is enabled. Handles errors
//! gracefully (permission denied, etc.) without crashing.

use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::{PmlensError, Result};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// File system walker with pattern-based filtering
pub struct FileWalker {
    /// File name patterns to include (e.g., "*.pdf")
    include_patterns: Vec<Pattern>,

    /// Descend into subdirectories
    recursive: bool,

    /// Maximum file size in bytes (skip larger files)
    max_file_size_bytes: u64,
}

impl FileWalker {
    /// Create a new file walker
    ///
    /// Returns an error if a pattern is invalid.
    pub fn new(
        include_patterns: Vec<String>,
        recursive: bool,
        max_file_size_mb: usize,
    ) -> Result<Self> {
        let include = include_patterns
            .into_iter()
            .map(|p| {
                Pattern::new(&p).map_err(|e| {
                    PmlensError::ConfigError(format!("Invalid include pattern '{p}': {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            include_patterns: include,
            recursive,
            max_file_size_bytes: (max_file_size_mb as u64) * 1024 * 1024,
        })
    }

    /// Collect all matching files from a directory, sorted by path.
    ///
    /// Fails with [`PmlensError::MissingSourceDirectory`] if `root` is
    /// not an existing directory.
    pub fn collect_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(PmlensError::MissingSourceDirectory(root.to_path_buf()));
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| should_process_entry(e, root))
        {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        continue;
                    }

                    let path = entry.path();

                    if let Ok(metadata) = entry.metadata() {
                        if metadata.len() > self.max_file_size_bytes {
                            tracing::warn!(
                                "Skipping large file: {:?} ({} bytes)",
                                path,
                                metadata.len()
                            );
                            continue;
                        }
                    }

                    if self.matches_patterns(path) {
                        files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                }
            }
        }

        files.sort();
        Ok(files)
    }

    /// Check if a file name matches any include pattern
    fn matches_patterns(&self, path: &Path) -> bool {
        let Some(file_name) = path.file_name().and_then(|f| f.to_str()) else {
            return false;
        };

        self.include_patterns.is_empty()
            || self
                .include_patterns
                .iter()
                .any(|p| p.matches_with(file_name, MATCH_OPTIONS))
    }
}

/// Skip hidden directories below the root
fn should_process_entry(entry: &DirEntry, root: &Path) -> bool {
    let path = entry.path();

    if path == root {
        return true;
    }

    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        if name.starts_with('.') && entry.file_type().is_dir() {
            return false;
        }
    }

    true
}
