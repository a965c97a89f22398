//! Configuration module for BondGrid-RS
//!
//! This module handles:
//! - Application configuration (`bondgrid.toml`): default dataset, page sizes, theme
//! - Application state persistence (`app_state.json`): recently opened datasets
//!
//! View state (filter, sort, page) is deliberately not persisted.
//!
//! # App Data Location
//!
//! Both files live in the platform-appropriate data directory:
//! - **Linux**: `~/.local/share/dev.bondgrid.bondgrid-rs/`
//! - **macOS**: `~/Library/Application Support/dev.bondgrid.bondgrid-rs/`
//! - **Windows**: `%APPDATA%\dev.bondgrid.bondgrid-rs\`
//!
//! # Example
//!
//! ```ignore
//! use bondgrid_rs::config::{AppConfig, AppState};
//!
//! let config = AppConfig::load_or_default();
//! let mut state = AppState::load_or_default();
//! state.add_recent_dataset(&config.dataset_path);
//! state.save()?;
//! ```

use crate::error::{BondGridError, Result};
use crate::table::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier for data directories
pub const APP_ID: &str = "dev.bondgrid.bondgrid-rs";

/// Config filename
pub const CONFIG_FILE: &str = "bondgrid.toml";

/// App state filename
pub const APP_STATE_FILE: &str = "app_state.json";

/// Dataset opened when nothing else is configured
pub const DEFAULT_DATASET_PATH: &str = "assets/bonds.json";

/// Page sizes offered by the page-size selector
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 5] = [10, 20, 30, 40, 50];

/// Maximum number of recent datasets to remember
pub const MAX_RECENT_DATASETS: usize = 10;

// ==================== App Data Directory ====================

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> Result<PathBuf> {
    let dir = app_data_dir().ok_or_else(|| {
        BondGridError::Config("Could not determine app data directory".to_string())
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| {
            BondGridError::Config(format!("Failed to create app data directory: {}", e))
        })?;
    }

    Ok(dir)
}

// ==================== App Config ====================

/// User-editable application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Dataset opened at startup when no path is given on the command line
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,

    /// Initial rows per page
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Choices shown in the page-size selector
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,

    #[serde(default = "default_true")]
    pub dark_mode: bool,
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATASET_PATH)
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_page_size_options() -> Vec<usize> {
    DEFAULT_PAGE_SIZE_OPTIONS.to_vec()
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: default_page_size_options(),
            dark_mode: true,
        }
    }
}

impl AppConfig {
    /// Load config from the default location, or defaults if the file is absent
    pub fn load() -> Result<Self> {
        let path = app_data_dir()
            .map(|p| p.join(CONFIG_FILE))
            .ok_or_else(|| BondGridError::Config("Could not determine config path".to_string()))?;

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load config, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Load config from a specific TOML file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| BondGridError::Config(format!("Failed to read config: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| BondGridError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config.sanitized())
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let dir = ensure_app_data_dir()?;
        self.save_to(dir.join(CONFIG_FILE))
    }

    /// Save config to a specific TOML file
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| BondGridError::Serialization(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path.as_ref(), content)
            .map_err(|e| BondGridError::Config(format!("Failed to write config: {}", e)))
    }

    /// Drop zero page sizes, sort and dedupe the options, and make sure the
    /// default page size is positive.
    pub fn sanitized(mut self) -> Self {
        self.page_size_options.retain(|&n| n > 0);
        self.page_size_options.sort_unstable();
        self.page_size_options.dedup();
        if self.page_size_options.is_empty() {
            self.page_size_options = default_page_size_options();
        }
        if self.default_page_size == 0 {
            tracing::warn!("default_page_size must be positive, using {}", DEFAULT_PAGE_SIZE);
            self.default_page_size = DEFAULT_PAGE_SIZE;
        }
        self
    }
}

// ==================== App State ====================

/// Persistent application state (recently opened datasets)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Most recent first
    #[serde(default)]
    pub recent_datasets: Vec<PathBuf>,

    #[serde(default)]
    pub last_dataset_path: Option<PathBuf>,
}

impl AppState {
    /// Load app state from the default location
    pub fn load() -> Result<Self> {
        let path = app_data_dir()
            .map(|p| p.join(APP_STATE_FILE))
            .ok_or_else(|| {
                BondGridError::Config("Could not determine app state path".to_string())
            })?;

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load app state, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load app state, using defaults: {}", e);
            Self::default()
        })
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| BondGridError::Config(format!("Failed to read app state: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| BondGridError::Config(format!("Failed to parse app state: {}", e)))
    }

    /// Save app state to the default location
    pub fn save(&self) -> Result<()> {
        let dir = ensure_app_data_dir()?;
        self.save_to(dir.join(APP_STATE_FILE))
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;

        std::fs::write(path.as_ref(), content)
            .map_err(|e| BondGridError::Config(format!("Failed to write app state: {}", e)))
    }

    /// Move `path` to the front of the recent list
    pub fn add_recent_dataset(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref().to_path_buf();
        self.recent_datasets.retain(|p| *p != path);
        self.recent_datasets.insert(0, path.clone());
        self.recent_datasets.truncate(MAX_RECENT_DATASETS);
        self.last_dataset_path = Some(path);
    }

    /// Forget datasets that no longer exist on disk
    pub fn cleanup_missing_datasets(&mut self) {
        self.recent_datasets.retain(|p| p.exists());

        if let Some(ref last) = self.last_dataset_path {
            if !last.exists() {
                self.last_dataset_path = None;
            }
        }
    }
}
