//! Configuration management for cardinal samplers.

pub mod core;

pub use self::core::{SamplerConfig, SamplerConfigBuilder};

/// Utility functions for configuration management
pub mod utils {
    use super::*;
    use crate::core::error::{CardinalError, Result};
    use std::collections::HashMap;

    /// Parse configuration from key-value pairs
    pub fn parse_config_from_map(map: &HashMap<String, String>) -> Result<SamplerConfig> {
        let mut builder = SamplerConfigBuilder::new();

        for (key, value) in map {
            match key.as_str() {
                "batch_size" => {
                    let val = value.parse::<usize>().map_err(|_| {
                        CardinalError::config(format!("Invalid batch_size: {}", value))
                    })?;
                    builder = builder.batch_size(val);
                }
                "strategy" => {
                    builder = builder.strategy_name(value.as_str());
                }
                "random_seed" => {
                    let val = value.parse::<u64>().map_err(|_| {
                        CardinalError::config(format!("Invalid random_seed: {}", value))
                    })?;
                    builder = builder.random_seed(val);
                }
                _ => {
                    log::warn!("Unknown configuration parameter: {}", key);
                }
            }
        }

        builder.build()
    }
}
