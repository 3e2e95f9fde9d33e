use anyhow::{Context, Result};
use mentor_core::config::MentorConfig;

pub fn render(config: &MentorConfig) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to render configuration as TOML")
}
