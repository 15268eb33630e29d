use crate::cli::SelectArgs;
use crate::error::{CliError, Result};
use crate::output::OutputFormat;
use sarna::engine::config::{DesignConfig, DesignConfigBuilder};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Settings read from a `--config` TOML file. Every key is optional.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialSelectConfig {
    pub window_length: Option<usize>,
    pub run_length_threshold: Option<usize>,
    pub limit: Option<usize>,
    pub format: Option<OutputFormat>,
}

/// Fully resolved settings for one `select` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectSettings {
    pub design: DesignConfig,
    pub limit: Option<usize>,
    pub format: OutputFormat,
}

impl PartialSelectConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Layers command-line flags over the file values; unset keys fall back to the built-in
    /// defaults of [`DesignConfigBuilder`].
    pub fn merge_with_cli(self, args: &SelectArgs) -> Result<SelectSettings> {
        let mut builder = DesignConfigBuilder::new();
        if let Some(length) = args.window_length.or(self.window_length) {
            builder = builder.window_length(length);
        }
        if let Some(threshold) = args.run_length_threshold.or(self.run_length_threshold) {
            builder = builder.run_length_threshold(threshold);
        }
        let design = builder
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        let limit = args.limit.or(self.limit);
        if limit == Some(0) {
            return Err(CliError::Argument(
                "limit must be at least 1 when given".to_string(),
            ));
        }

        let settings = SelectSettings {
            design,
            limit,
            format: args.format.or(self.format).unwrap_or_default(),
        };
        debug!(?settings, "Resolved select settings.");
        Ok(settings)
    }
}

/// Loads the optional config file named by `args` and merges it with the flags.
pub fn resolve(args: &SelectArgs) -> Result<SelectSettings> {
    let partial = match &args.config {
        Some(path) => PartialSelectConfig::from_file(path)?,
        None => PartialSelectConfig::default(),
    };
    partial.merge_with_cli(args)
}
