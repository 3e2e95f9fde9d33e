//! Configuration service implementation.
//!
//! Loads `MentorConfig` from a TOML file (by default
//! `~/.config/mentor/config.toml`) and caches it.

use crate::paths::MentorPaths;
use mentor_core::config::MentorConfig;
use mentor_core::error::Result;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Configuration service that loads and caches the root configuration.
///
/// A missing file yields the default configuration. A file that exists but
/// does not parse is an error, so a typo never silently falls back to
/// defaults.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Explicit config file path; `None` resolves the platform default.
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<MentorConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the platform default config file.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a service reading `path`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Path the configuration is read from.
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => Ok(MentorPaths::config_file()?),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<MentorConfig> {
        {
            let cached = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref config) = *cached {
                return Ok(config.clone());
            }
        }

        let loaded = Self::load_config(&self.config_path()?)?;

        {
            let mut cached = self.config.write().unwrap_or_else(|e| e.into_inner());
            *cached = Some(loaded.clone());
        }

        Ok(loaded)
    }

    fn load_config(path: &Path) -> Result<MentorConfig> {
        if !path.exists() {
            tracing::debug!(
                "[ConfigService] No config at {}, using defaults",
                path.display()
            );
            return Ok(MentorConfig::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: MentorConfig = toml::from_str(&content)?;
        tracing::info!("[ConfigService] Loaded config from {}", path.display());
        Ok(config)
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
    use mentor_core::config::{IdStrategy, ProgressPolicy};
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));

        let config = service.get_config().unwrap();
        assert_eq!(config, MentorConfig::default());
    }

    #[test]
    fn test_config_is_cached_after_first_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[goals]\nprogress_policy = \"clamp\"\n").unwrap();

        let service = ConfigService::with_path(&path);
        assert_eq!(
            service.get_config().unwrap().goals.progress_policy,
            ProgressPolicy::Clamp
        );

        std::fs::write(&path, "[ids]\nstrategy = \"timestamp\"\n").unwrap();
        // Still cached
        assert_eq!(
            service.get_config().unwrap().goals.progress_policy,
            ProgressPolicy::Clamp
        );

        let fresh = ConfigService::with_path(&path).get_config().unwrap();
        assert_eq!(fresh.goals.progress_policy, ProgressPolicy::Accept);
        assert_eq!(fresh.ids.strategy, IdStrategy::Timestamp);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[goals]\nprogress_policy = \"sometimes\"\n").unwrap();

        let err = ConfigService::with_path(&path).get_config().unwrap_err();
        assert!(err.is_serialization());
    }
}
