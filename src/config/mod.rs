//! Configuration management for the cuit CLI.
//!
//! Configuration is plain YAML. Layers, later overriding earlier:
//! 1. Global config (`~/.config/cuit/config.yaml`)
//! 2. Project config (`.cuit/config.yaml`), or the file passed with `--config`

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

pub use defaults::*;

/// Project config location, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".cuit/config.yaml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

impl Config {
    /// Load the global config merged with the project config.
    ///
    /// Both files are optional; missing files fall back to defaults.
    pub fn load() -> Result<Self> {
        Self::load_merged_from(
            global_config_path().as_deref(),
            Path::new(PROJECT_CONFIG_PATH),
        )
    }

    /// Load the global config merged with an explicit project config path.
    /// Unlike [`Config::load`], the explicit file must exist.
    pub fn load_with_override(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        Self::load_merged_from(global_config_path().as_deref(), path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load merged configuration from the given global and project paths.
    /// Project values override global values.
    pub fn load_merged_from(global_path: Option<&Path>, project_path: &Path) -> Result<Self> {
        let global_config = global_path
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let project_config = Some(project_path)
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let config = global_config.merge_with(project_config);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch.comment_prefix.trim().is_empty() {
            anyhow::bail!("batch.comment_prefix must not be empty");
        }
        Ok(())
    }
}

/// Returns the path to the global config file at ~/.config/cuit/config.yaml
pub fn global_config_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config/cuit/config.yaml"))
}

/// Partial config for merging - all fields optional
#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    pub output: Option<PartialOutputConfig>,
    pub batch: Option<PartialBatchConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialOutputConfig {
    pub format: Option<OutputFormat>,
    pub explain: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialBatchConfig {
    pub skip_comments: Option<bool>,
    pub comment_prefix: Option<String>,
    pub only_invalid: Option<bool>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("Failed to parse config")
    }

    /// Merge this global config with a project config, returning the merged result.
    /// Values from the project config take precedence over global.
    fn merge_with(self, project: PartialConfig) -> Config {
        let global_output = self.output.unwrap_or_default();
        let global_batch = self.batch.unwrap_or_default();
        let project_output = project.output.unwrap_or_default();
        let project_batch = project.batch.unwrap_or_default();

        Config {
            output: OutputConfig {
                // Project value > global value > default
                format: project_output
                    .format
                    .or(global_output.format)
                    .unwrap_or_default(),
                explain: project_output
                    .explain
                    .or(global_output.explain)
                    .unwrap_or(false),
            },
            batch: BatchConfig {
                skip_comments: project_batch
                    .skip_comments
                    .or(global_batch.skip_comments)
                    .unwrap_or_else(defaults::default_true),
                comment_prefix: project_batch
                    .comment_prefix
                    .or(global_batch.comment_prefix)
                    .unwrap_or_else(defaults::default_comment_prefix),
                only_invalid: project_batch
                    .only_invalid
                    .or(global_batch.only_invalid)
                    .unwrap_or(false),
            },
        }
    }
}
