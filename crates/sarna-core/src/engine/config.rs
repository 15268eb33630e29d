use crate::core::thermo::stability::END_PROBE_LENGTH;
use thiserror::Error;

/// Window length of the reference rule set.
pub const DEFAULT_WINDOW_LENGTH: usize = 19;

/// Homopolymer runs of this many identical symbols or more are rejected.
pub const DEFAULT_RUN_LENGTH_THRESHOLD: usize = 4;

const MIN_RUN_LENGTH_THRESHOLD: usize = 2;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value {value} for '{name}': {reason}")]
    InvalidParameter {
        name: &'static str,
        value: usize,
        reason: String,
    },
}

/// The externally tunable parameters of a selection run.
///
/// Scoring weights and the thermodynamic table are fixed; only the window geometry and the
/// homopolymer threshold vary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesignConfig {
    pub window_length: usize,
    pub run_length_threshold: usize,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            window_length: DEFAULT_WINDOW_LENGTH,
            run_length_threshold: DEFAULT_RUN_LENGTH_THRESHOLD,
        }
    }
}

impl DesignConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_length < END_PROBE_LENGTH {
            return Err(ConfigError::InvalidParameter {
                name: "window_length",
                value: self.window_length,
                reason: format!(
                    "must be at least {} to fit the end stability probes",
                    END_PROBE_LENGTH
                ),
            });
        }
        if self.run_length_threshold < MIN_RUN_LENGTH_THRESHOLD {
            return Err(ConfigError::InvalidParameter {
                name: "run_length_threshold",
                value: self.run_length_threshold,
                reason: format!("must be at least {}", MIN_RUN_LENGTH_THRESHOLD),
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct DesignConfigBuilder {
    window_length: Option<usize>,
    run_length_threshold: Option<usize>,
}

impl DesignConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn window_length(mut self, length: usize) -> Self {
        self.window_length = Some(length);
        self
    }
    pub fn run_length_threshold(mut self, threshold: usize) -> Self {
        self.run_length_threshold = Some(threshold);
        self
    }

    pub fn build(self) -> Result<DesignConfig, ConfigError> {
        let config = DesignConfig {
            window_length: self.window_length.unwrap_or(DEFAULT_WINDOW_LENGTH),
            run_length_threshold: self
                .run_length_threshold
                .unwrap_or(DEFAULT_RUN_LENGTH_THRESHOLD),
        };
        config.validate()?;
        Ok(config)
    }
}
