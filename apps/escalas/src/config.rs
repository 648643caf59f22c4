//! # Configuration
//!
//! Where the log lives and where the scale images are.
//!
//! Resolution order: command-line flag, then environment variable, then
//! default. clap does the resolution (see `cli::Cli`); this module holds the
//! resolved values and the environment variable names.

use escalas_core::assets::DEFAULT_ASSETS_DIR;
use escalas_core::storage::DEFAULT_LOG_FILE;
use escalas_core::{AssetCatalog, CsvLog};
use std::path::PathBuf;

/// Environment variable overriding the log file path.
pub const ENV_LOG: &str = "ESCALAS_LOG";

/// Environment variable overriding the assets directory.
pub const ENV_ASSETS: &str = "ESCALAS_ASSETS";

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// CSV log that every completed screen is appended to.
    pub log_path: PathBuf,
    /// Directory holding the manikin scale images and the icon.
    pub assets_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
        }
    }
}

impl AppConfig {
    #[must_use]
    pub fn new(log_path: impl Into<PathBuf>, assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
            assets_dir: assets_dir.into(),
        }
    }

    /// Open the log, writing its header if needed.
    pub fn open_log(&self) -> Result<CsvLog, String> {
        CsvLog::open(&self.log_path)
            .map_err(|e| format!("Failed to open log {}: {}", self.log_path.display(), e))
    }

    #[must_use]
    pub fn assets(&self) -> AssetCatalog {
        AssetCatalog::new(&self.assets_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_legacy_locations() {
        let config = AppConfig::default();
        assert_eq!(config.log_path, PathBuf::from("respuestas_cuestionarios.csv"));
        assert_eq!(config.assets_dir, PathBuf::from("Sources"));
    }

    #[test]
    fn open_log_reports_path_on_failure() {
        let config = AppConfig::new("/nonexistent-dir/escalas/log.csv", "Sources");
        let err = config.open_log().err().unwrap_or_default();
        assert!(err.contains("/nonexistent-dir/escalas/log.csv"));
    }
}
