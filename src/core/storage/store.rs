//! JSON result store.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{PmlensError, Result};
use crate::core::types::AnalysisResults;

/// Reads and writes the analysis results file
#[derive(Debug, Clone)]
pub struct ResultStore {
    path: PathBuf,
}

impl ResultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether a results file has been written
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Write results as pretty-printed JSON.
    ///
    /// The file is written next to its destination first and renamed
    /// into place, so readers never observe a partial document.
    pub fn save(&self, results: &AnalysisResults) -> Result<()> {
        let json = serde_json::to_string_pretty(results)
            .map_err(|e| PmlensError::PersistenceFailure(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.persistence_error(e))?;
            }
        }

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, json).map_err(|e| self.persistence_error(e))?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(self.persistence_error(e));
        }

        tracing::info!("Results saved to {:?}", self.path);
        Ok(())
    }

    /// Load previously saved results
    pub fn load(&self) -> Result<AnalysisResults> {
        if !self.exists() {
            return Err(PmlensError::ResultsNotFound(
                self.path.display().to_string(),
            ));
        }

        let contents = fs::read_to_string(&self.path)?;
        let mut results: AnalysisResults = serde_json::from_str(&contents)?;
        results.restore_headings();

        Ok(results)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn persistence_error(&self, e: std::io::Error) -> PmlensError {
        PmlensError::PersistenceFailure(format!("{}: {e}", self.path.display()))
    }
}
