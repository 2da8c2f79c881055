//! Sampler configuration and its builder.
//!
//! Configurations can be built in code, loaded from `.toml` or `.json`
//! files, or read from `CARDINAL_*` environment variables.

use crate::core::constants::*;
use crate::core::error::{CardinalError, Result};
use crate::core::types::SelectionStrategy;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Settings shared by the score-driven samplers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Number of samples to select per call
    pub batch_size: usize,
    /// Selection strategy identifier: top, linear_choice or squared_choice
    pub strategy: String,
    /// Seed for the random source (None = seeded from entropy)
    pub random_seed: Option<u64>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfig {
            batch_size: DEFAULT_BATCH_SIZE,
            strategy: DEFAULT_STRATEGY.to_string(),
            random_seed: None,
        }
    }
}

impl SamplerConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parsed selection strategy.
    pub fn selection_strategy(&self) -> Result<SelectionStrategy> {
        self.strategy.parse()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        crate::ensure!(
            self.batch_size > 0,
            CardinalError::invalid_parameter("batch_size", "0", "must be positive")
        );

        let strategy = self.selection_strategy()?;
        if self.random_seed.is_none() && strategy.is_stochastic() {
            log::debug!(
                "strategy {} without random_seed, selections will not be reproducible",
                strategy
            );
        }

        Ok(())
    }

    /// Load configuration from a `.toml` or `.json` file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let config: SamplerConfig = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => {
                return Err(CardinalError::config(
                    "Unsupported config file format. Use .json or .toml",
                ))
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a `.toml` or `.json` file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)
                .map_err(|e| CardinalError::config(format!("Failed to serialize to TOML: {}", e)))?,
            _ => {
                return Err(CardinalError::config(
                    "Unsupported config file format. Use .json or .toml",
                ))
            }
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from `CARDINAL_*` environment variables
    pub fn load_from_environment() -> Result<Self> {
        let mut config = SamplerConfig::default();

        if let Ok(val) = std::env::var(format!("{}BATCH_SIZE", ENV_PREFIX)) {
            config.batch_size = val
                .parse()
                .map_err(|_| CardinalError::config(format!("Invalid CARDINAL_BATCH_SIZE: {}", val)))?;
        }

        if let Ok(val) = std::env::var(format!("{}STRATEGY", ENV_PREFIX)) {
            config.strategy = val;
        }

        if let Ok(val) = std::env::var(format!("{}RANDOM_SEED", ENV_PREFIX)) {
            config.random_seed = Some(val.parse().map_err(|_| {
                CardinalError::config(format!("Invalid CARDINAL_RANDOM_SEED: {}", val))
            })?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration as string key/value pairs
    pub fn as_parameter_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("batch_size".to_string(), self.batch_size.to_string());
        map.insert("strategy".to_string(), self.strategy.clone());
        if let Some(seed) = self.random_seed {
            map.insert("random_seed".to_string(), seed.to_string());
        }
        map
    }
}

/// Configuration builder for fluent configuration creation
#[derive(Debug, Clone, Default)]
pub struct SamplerConfigBuilder {
    config: SamplerConfig,
    validation_errors: Vec<String>,
}

impl SamplerConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the batch size
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        if batch_size == 0 {
            self.validation_errors
                .push("batch_size must be positive".to_string());
        }
        self.config.batch_size = batch_size;
        self
    }

    /// Set the selection strategy
    pub fn strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.config.strategy = strategy.to_string();
        self
    }

    /// Set the selection strategy by name
    pub fn strategy_name<S: Into<String>>(mut self, strategy: S) -> Self {
        self.config.strategy = strategy.into();
        self
    }

    /// Set the random seed
    pub fn random_seed(mut self, seed: u64) -> Self {
        self.config.random_seed = Some(seed);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<SamplerConfig> {
        if !self.validation_errors.is_empty() {
            return Err(CardinalError::config(format!(
                "Configuration validation failed: {}",
                self.validation_errors.join(", ")
            )));
        }

        self.config.validate()?;
        Ok(self.config)
    }
}
