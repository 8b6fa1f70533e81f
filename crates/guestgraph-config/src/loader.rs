//! Configuration loading utilities.

use crate::Config;
use guestgraph_common::{GuestGraphError, Result as CommonResult};
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::debug;
use validator::Validate;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading the configuration file.
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("Failed to parse YAML configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Configuration validation error.
    #[error("Configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Environment variable parsing error.
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParse {
        /// Name of the offending variable.
        var: String,
        /// Underlying parse error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for GuestGraphError {
    fn from(err: ConfigError) -> Self {
        GuestGraphError::config(err.to_string())
    }
}

/// Configuration loader for the application.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable
    /// overrides applied afterwards, validating the final result.
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: Config = serde_yaml::from_str(&content)?;

        Self::apply_env_overrides(&mut config)?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from the default locations.
    ///
    /// Order: `GUESTGRAPH_CONFIG_PATH`, then `config.yaml` / `config.yml` in
    /// the working directory, then built-in defaults. Environment overrides
    /// apply in every case.
    pub fn load() -> CommonResult<Config> {
        let config = if let Ok(config_path) = env::var("GUESTGRAPH_CONFIG_PATH") {
            Self::load_config(&config_path)?
        } else if Path::new("config.yaml").exists() {
            Self::load_config("config.yaml")?
        } else if Path::new("config.yml").exists() {
            Self::load_config("config.yml")?
        } else {
            debug!("no configuration file found, using defaults");
            let mut config = Config::default();
            Self::apply_env_overrides(&mut config).map_err(GuestGraphError::from)?;
            config
                .validate()
                .map_err(|e| GuestGraphError::from(ConfigError::from(e)))?;
            config
        };

        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CommonResult<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Apply environment variable overrides to a configuration.
    fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        if let Ok(host) = env::var("GUESTGRAPH_HOST") {
            config.server.host = host;
        }

        if let Ok(port) = env::var("GUESTGRAPH_PORT") {
            config.server.port = port.parse().map_err(|e| ConfigError::EnvParse {
                var: "GUESTGRAPH_PORT".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Ok(debug_flag) = env::var("GUESTGRAPH_DEBUG") {
            config.server.debug = debug_flag.parse().map_err(|e| ConfigError::EnvParse {
                var: "GUESTGRAPH_DEBUG".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Ok(url) = env::var("GUESTGRAPH_DATA_URL") {
            config.data.source_url = url;
        }

        if let Ok(level) = env::var("GUESTGRAPH_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }
}
