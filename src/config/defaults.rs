//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

default_fn!(default_true, bool, true);
default_fn!(default_comment_prefix, String, "#".to_string());

/// How verdicts are rendered on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored, human-readable lines
    #[default]
    #[serde(alias = "human")]
    Text,
    /// One JSON document per command
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "human" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("Unknown output format '{}': expected text or json", other),
        }
    }
}

/// Output settings shared by every command
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Print the rejection reason next to invalid verdicts
    #[serde(default)]
    pub explain: bool,
}

/// Settings for `cuit batch`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BatchConfig {
    /// Skip lines starting with `comment_prefix` (default: true)
    #[serde(default = "default_true")]
    pub skip_comments: bool,
    /// Comment marker (default: "#")
    #[serde(default = "default_comment_prefix")]
    pub comment_prefix: String,
    /// Only print invalid lines (the summary is always printed)
    #[serde(default)]
    pub only_invalid: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            skip_comments: default_true(),
            comment_prefix: default_comment_prefix(),
            only_invalid: false,
        }
    }
}
