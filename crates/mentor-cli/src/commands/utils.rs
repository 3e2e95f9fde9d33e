use anyhow::{Context, Result};
use mentor_core::config::MentorConfig;
use mentor_infrastructure::ConfigService;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Loads the configuration from `path`, or from the platform default location.
pub fn load_config(path: Option<PathBuf>) -> Result<MentorConfig> {
    let service = match path {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(),
    };
    let location = service.config_path()?;
    service
        .get_config()
        .with_context(|| format!("Failed to load config from {}", location.display()))
}

/// Installs the stderr subscriber. `RUST_LOG` wins over the configured filter.
pub fn init_logging(config: &MentorConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
