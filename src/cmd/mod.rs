//! Command module structure for the cuit CLI

use anyhow::Result;
use std::path::Path;

use cuit::config::{Config, OutputFormat};
use cuit::output::{Output, OutputMode};

pub mod batch;
pub mod check;
pub mod digit;

/// Everything a command needs besides its own arguments.
pub struct Context {
    pub config: Config,
    pub quiet: bool,
}

impl Context {
    /// Load configuration (explicit path or the usual layers) and resolve quiet mode.
    pub fn load(config_path: Option<&Path>, quiet: bool) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_with_override(path)?,
            None => Config::load()?,
        };
        Ok(Self {
            config,
            quiet: quiet || cuit::ui::is_quiet(),
        })
    }

    /// Format requested on the command line, falling back to config.
    pub fn format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.unwrap_or(self.config.output.format)
    }

    /// Diagnostic sink matching the effective format.
    pub fn output(&self, format: OutputFormat) -> Output {
        Output::new(OutputMode::resolve(format, self.quiet))
    }
}
