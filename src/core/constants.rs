//! Default values shared by the samplers and the configuration layer.

use crate::core::types::SelectionStrategy;

/// Default number of samples selected per call.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Default selection strategy.
pub const DEFAULT_STRATEGY: SelectionStrategy = SelectionStrategy::Top;

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "CARDINAL_";

/// Crate version string.
pub const CARDINAL_VERSION: &str = env!("CARGO_PKG_VERSION");
