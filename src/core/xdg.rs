//! XDG Base Directory Support
//!
//! Resolves where pmlens looks for its configuration file on
//! Linux/Unix systems.

use std::env;
use std::path::PathBuf;

/// XDG directory structure for pmlens
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}

impl XdgDirs {
    /// Create new XDG directory structure
    ///
    /// Priority order (highest to lowest):
    /// 1. PMLENS_CONFIG_DIR
    /// 2. XDG_CONFIG_HOME
    /// 3. ~/.config
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(dir) = env::var("PMLENS_CONFIG_DIR") {
            return PathBuf::from(dir);
        }

        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("pmlens");
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("pmlens")
    }

    /// Get config file path
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }
}
