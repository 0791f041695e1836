//! Configuration loading.
//!
//! Settings are layered: built-in defaults, then the config file (if any),
//! then `PAGESMITH_*` environment variables.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};

use super::{ConfigError, Settings};

pub const DEFAULT_CONFIG_FILE: &str = "pagesmith.yaml";
pub const ENV_PREFIX: &str = "PAGESMITH";

impl Settings {
    /// Load settings from the command line argument, defaulting to `pagesmith.yaml`.
    ///
    /// An explicitly named config file must exist; the default one is optional.
    pub fn load_from_arg(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let required = config_file.is_some();
        let config_file = config_file.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
        let config_file = if config_file.is_relative() {
            std::env::current_dir()
                .map_err(ConfigError::CwdFailure)?
                .join(config_file)
        } else {
            config_file.to_path_buf()
        };

        Self::load_from_file(&config_file, required)
    }

    /// Load settings from a file path, layered with the environment.
    pub(crate) fn load_from_file(path: &Path, required: bool) -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .add_source(File::from(path).required(required))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        Ok(settings.resolve_paths(&base_path_from_config(path)))
    }
}

/// Get the base path from a config file path (its parent directory).
pub fn base_path_from_config(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
