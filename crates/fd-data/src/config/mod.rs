//! Dashboard configuration

use std::path::{Path, PathBuf};
use std::time::Duration;

use fd_core::state::{DEFAULT_GRID_PAGE_SIZE, DEFAULT_PAGE_SIZE};
use fd_core::PageSizes;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::DataError;

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "FASTFOOD_ADMIN_CONFIG";

/// File looked up in the working directory when the variable is unset
pub const DEFAULT_CONFIG_FILE: &str = "fastfood-admin.json";

/// Runtime settings of the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Rows per page in table views
    pub page_size: usize,

    /// Cards per page in card-grid views
    pub grid_page_size: usize,

    /// Quiet period before a search re-renders
    pub search_debounce_ms: u64,

    /// How long a notification stays on screen
    pub notification_ttl_ms: u64,

    /// JSON catalog replacing the embedded seed data
    pub seed_path: Option<PathBuf>,

    /// Starting directory of the export save dialog
    pub export_dir: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            grid_page_size: DEFAULT_GRID_PAGE_SIZE,
            search_debounce_ms: 300,
            notification_ttl_ms: 3000,
            seed_path: None,
            export_dir: None,
        }
    }
}

impl DashboardConfig {
    /// Parse and validate a configuration file
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, DataError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `FASTFOOD_ADMIN_CONFIG`, else `fastfood-admin.json` when
    /// present, else defaults
    pub fn load_default() -> Result<Self, DataError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load(Path::new(&path));
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::load(local);
        }
        debug!("no configuration file, using defaults");
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<(), DataError> {
        if self.page_size == 0 {
            return Err(DataError::Config("page_size must be positive".into()));
        }
        if self.grid_page_size == 0 {
            return Err(DataError::Config("grid_page_size must be positive".into()));
        }
        Ok(())
    }

    pub fn page_sizes(&self) -> Result<PageSizes, DataError> {
        Ok(PageSizes::new(self.page_size, self.grid_page_size)?)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = DashboardConfig::from_json(r#"{ "page_size": 20 }"#).unwrap();
        assert_eq!(config.page_size, 20);
        assert_eq!(config.grid_page_size, 6);
        assert_eq!(config.search_debounce(), Duration::from_millis(300));
        assert_eq!(config.notification_ttl(), Duration::from_secs(3));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = DashboardConfig::from_json(r#"{ "grid_page_size": 0 }"#).unwrap_err();
        assert!(matches!(err, DataError::Config(_)));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            DashboardConfig::from_json("{ page_size"),
            Err(DataError::Json(_))
        ));
    }

    #[test]
    fn test_page_sizes() {
        let sizes = DashboardConfig::default().page_sizes().unwrap();
        assert_eq!(sizes, PageSizes::new(10, 6).unwrap());
    }
}
