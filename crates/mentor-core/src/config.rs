//! Configuration model.
//!
//! Every field has a default so an empty or missing `config.toml` yields a
//! working configuration.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MentorConfig {
    pub goals: GoalConfig,
    pub ids: IdConfig,
    pub logging: LoggingConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GoalConfig {
    pub progress_policy: ProgressPolicy,
}

/// How goal progress values outside `0..=100` are handled.
#[derive(
    Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProgressPolicy {
    /// Store the value as given.
    #[default]
    Accept,
    /// Clamp into `0..=100` before storing.
    Clamp,
    /// Fail the operation without touching state.
    Reject,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct IdConfig {
    pub strategy: IdStrategy,
}

#[derive(
    Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IdStrategy {
    /// Timestamp only. Collides when two records land in the same second.
    Timestamp,
    /// Timestamp plus a monotonic counter.
    #[default]
    Sequential,
    /// Random v4 uuid.
    Uuid,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}
