//! Configuration management for pmlens.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{PmlensError, Result};
use crate::core::topics::classifier::{DEFAULT_EXCERPT_CHARS, DEFAULT_EXCERPT_MARKER};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Analysis configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Directory containing the PDF documents
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// File the analysis results are written to
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,

    /// File name patterns to include (glob syntax, case-insensitive)
    #[serde(default = "default_include_patterns")]
    pub include_patterns: Vec<String>,

    /// Descend into subdirectories of the source directory
    #[serde(default)]
    pub recursive: bool,

    /// Maximum file size in MB (skip larger files)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,

    /// Characters of chapter body kept in each excerpt
    #[serde(default = "default_excerpt_chars")]
    pub excerpt_chars: usize,

    /// Marker appended to every excerpt
    #[serde(default = "default_excerpt_marker")]
    pub excerpt_marker: String,
}

/// Limits configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LimitsConfig {
    /// Maximum documents processed at the same time
    #[serde(default = "default_max_concurrent_documents")]
    pub max_concurrent_documents: usize,

    /// Log extraction progress every N pages
    #[serde(default = "default_progress_every_pages")]
    pub progress_every_pages: usize,
}

// Default value functions
fn default_source_dir() -> PathBuf {
    PathBuf::from("Book")
}

fn default_output_file() -> PathBuf {
    PathBuf::from("book_analysis_results.json")
}

fn default_include_patterns() -> Vec<String> {
    vec!["*.pdf".to_string()]
}

fn default_max_file_size() -> usize {
    200
}

fn default_excerpt_chars() -> usize {
    DEFAULT_EXCERPT_CHARS
}

fn default_excerpt_marker() -> String {
    DEFAULT_EXCERPT_MARKER.to_string()
}

fn default_max_concurrent_documents() -> usize {
    4
}

fn default_progress_every_pages() -> usize {
    50
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            output_file: default_output_file(),
            include_patterns: default_include_patterns(),
            recursive: false,
            max_file_size_mb: default_max_file_size(),
            excerpt_chars: default_excerpt_chars(),
            excerpt_marker: default_excerpt_marker(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_concurrent_documents: default_max_concurrent_documents(),
            progress_every_pages: default_progress_every_pages(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| PmlensError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// This method uses XDG Base Directory specification for file locations.
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. PMLENS_CONFIG env var
    /// 2. XDG config file (~/.config/pmlens/config.toml)
    /// 3. ./pmlens.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("PMLENS_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("pmlens.toml").exists() {
                Self::from_file("pmlens.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(source_dir) = env::var("PMLENS_SOURCE_DIR") {
            self.analysis.source_dir = PathBuf::from(source_dir);
        }
        if let Ok(output_file) = env::var("PMLENS_OUTPUT_FILE") {
            self.analysis.output_file = PathBuf::from(output_file);
        }
        if let Ok(max_size) = env::var("PMLENS_MAX_FILE_SIZE_MB") {
            if let Ok(size) = max_size.parse() {
                self.analysis.max_file_size_mb = size;
            }
        }
        if let Ok(excerpt_chars) = env::var("PMLENS_EXCERPT_CHARS") {
            if let Ok(chars) = excerpt_chars.parse() {
                self.analysis.excerpt_chars = chars;
            }
        }

        if let Ok(max_concurrent) = env::var("PMLENS_MAX_CONCURRENT_DOCUMENTS") {
            if let Ok(max) = max_concurrent.parse() {
                self.limits.max_concurrent_documents = max;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.analysis.include_patterns.is_empty() {
            return Err(PmlensError::ConfigError(
                "At least one include pattern is required".to_string(),
            ));
        }

        if self.analysis.max_file_size_mb == 0 {
            return Err(PmlensError::ConfigError(
                "Max file size must be non-zero".to_string(),
            ));
        }

        if self.analysis.excerpt_chars == 0 {
            return Err(PmlensError::ConfigError(
                "Excerpt length must be non-zero".to_string(),
            ));
        }

        if self.limits.max_concurrent_documents == 0 {
            return Err(PmlensError::ConfigError(
                "Max concurrent documents must be non-zero".to_string(),
            ));
        }

        if self.limits.progress_every_pages == 0 {
            return Err(PmlensError::ConfigError(
                "Progress interval must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Source dir: {:?}", self.analysis.source_dir);
        tracing::info!("  Output file: {:?}", self.analysis.output_file);
        tracing::info!(
            "  Include patterns: {:?} (recursive: {})",
            self.analysis.include_patterns,
            self.analysis.recursive
        );
        tracing::info!("  Max file size: {} MB", self.analysis.max_file_size_mb);
        tracing::info!("  Excerpt length: {} chars", self.analysis.excerpt_chars);
        tracing::info!(
            "  Max concurrent documents: {}",
            self.limits.max_concurrent_documents
        );
    }
}
