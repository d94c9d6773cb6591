//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads match settings
//! from the configuration file (~/.config/skillsync/config.toml).

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use skillsync_core::config::MatchSettings;

use crate::paths::SkillSyncPaths;

/// Configuration service that loads and caches the match settings.
///
/// Reads the settings from config.toml and caches them to avoid repeated
/// file I/O. A missing file yields the defaults; a malformed file is
/// logged and also falls back to the defaults.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Explicit config file path; `None` resolves the platform default.
    path: Option<PathBuf>,
    /// Cached settings loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    settings: Arc<RwLock<Option<MatchSettings>>>,
}

impl ConfigService {
    /// Creates a new ConfigService using the platform config location.
    ///
    /// The settings are loaded lazily on first access.
    pub fn new() -> Self {
        Self {
            path: None,
            settings: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a ConfigService reading from an explicit file (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            settings: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the match settings, loading from file if not cached.
    pub fn get_settings(&self) -> MatchSettings {
        // Check if already cached
        {
            let read_lock = self.settings.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load_settings().unwrap_or_else(|e| {
            tracing::warn!("Failed to load match settings, using defaults: {}", e);
            MatchSettings::default()
        });

        // Cache it
        {
            let mut write_lock = self.settings.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.settings.write().unwrap();
        *write_lock = None;
    }

    fn config_path(&self) -> Result<PathBuf, String> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => SkillSyncPaths::config_file().map_err(|e| e.to_string()),
        }
    }

    fn load_settings(&self) -> Result<MatchSettings, String> {
        let path = self.config_path()?;

        if !path.exists() {
            return Ok(MatchSettings::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));

        assert_eq!(service.get_settings(), MatchSettings::default());
    }

    #[test]
    fn test_loads_and_caches_settings() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "include_zero_score = true\nscore_precision = 1\n").unwrap();

        let service = ConfigService::with_path(path.clone());
        let settings = service.get_settings();
        assert!(settings.include_zero_score);
        assert_eq!(settings.score_precision, 1);

        // Cached: a file change is invisible until the cache is invalidated.
        std::fs::write(&path, "include_zero_score = false\n").unwrap();
        assert!(service.get_settings().include_zero_score);

        service.invalidate_cache();
        assert!(!service.get_settings().include_zero_score);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "include_zero_score = \"not a bool\"").unwrap();

        let service = ConfigService::with_path(path);
        assert_eq!(service.get_settings(), MatchSettings::default());
    }
}
