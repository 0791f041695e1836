//! Configuration loading and types for pagesmith.
//!
//! This module handles all aspects of configuration:
//! - Type definitions for settings (`types`)
//! - Layering settings from a file and the environment (`load`)

mod load;
mod types;

pub use load::{DEFAULT_CONFIG_FILE, ENV_PREFIX, base_path_from_config};
pub use types::Settings;

// =============================================================================
// Errors
// =============================================================================

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to deserialize config: {0}")]
    Deserialize(#[from] config::ConfigError),

    #[error("failed to get current working directory: {0}")]
    CwdFailure(std::io::Error),
}
