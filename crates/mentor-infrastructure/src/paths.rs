//! Path resolution for Mentor configuration files.
//!
//! ```text
//! ~/.config/mentor/        # Config directory (platform config dir)
//! └── config.toml          # Application configuration
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for mentor_core::MentorError {
    fn from(err: PathError) -> Self {
        mentor_core::MentorError::config(err.to_string())
    }
}

pub struct MentorPaths;

impl MentorPaths {
    const APP_DIR: &'static str = "mentor";

    /// Returns the mentor configuration directory (e.g. `~/.config/mentor/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}
