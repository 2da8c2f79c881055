//! Core infrastructure module for cardinal.
//!
//! - [`types`]: pool, score and strategy types
//! - [`constants`]: configuration defaults
//! - [`error`]: error handling and error types
//! - [`traits`]: the sampler and scorer contracts

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

pub use constants::*;
pub use error::{CardinalError, Result};
pub use traits::*;
pub use types::*;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

static CORE_INIT: Once = Once::new();
static CORE_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initialize the core module: sets up `env_logger` once per process.
///
/// Logging defaults to the `info` level when `RUST_LOG` is unset. Calling it
/// again is a no-op, and an already installed logger is left in place.
pub fn initialize_core() -> Result<()> {
    CORE_INIT.call_once(|| {
        initialize_logging();
        CORE_INITIALIZED.store(true, Ordering::SeqCst);
        log::info!("cardinal {} initialized", CARDINAL_VERSION);
    });
    Ok(())
}

/// Check if the core module is initialized
pub fn is_core_initialized() -> bool {
    CORE_INITIALIZED.load(Ordering::SeqCst)
}

fn initialize_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    // Ignore the error when another logger is already installed
    let _ = env_logger::Builder::from_env(env).try_init();
}
