//! Application configuration structures.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Config {
    /// HTTP server configuration.
    #[validate(nested)]
    pub server: ServerConfig,

    /// Data source configuration.
    #[validate(nested)]
    pub data: DataConfig,

    /// Chart rendering settings.
    #[validate(nested)]
    pub chart: ChartConfig,

    /// Logging configuration.
    #[validate(nested)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServerConfig {
    /// Interface to bind the listener on.
    #[validate(length(min = 1, message = "Host cannot be empty"))]
    pub host: String,

    /// Port to bind the listener on.
    #[validate(range(min = 1, message = "Port must be non-zero"))]
    pub port: u16,

    /// Debug mode: raises the default log verbosity.
    pub debug: bool,
}

/// Data source configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DataConfig {
    /// URL of the guest-appearance CSV fetched at startup.
    #[validate(url(message = "Data source must be a valid URL"))]
    pub source_url: String,

    /// Request timeout in seconds for the startup fetch.
    #[validate(range(min = 1, max = 300, message = "Timeout must be between 1 and 300 seconds"))]
    pub request_timeout_seconds: u64,
}

/// Chart rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChartConfig {
    /// Chart width in pixels.
    #[validate(range(min = 100, max = 4000, message = "Width must be between 100 and 4000 pixels"))]
    pub width: u32,

    /// Chart height in pixels.
    #[validate(range(min = 100, max = 4000, message = "Height must be between 100 and 4000 pixels"))]
    pub height: u32,

    /// Plot background color (hex format, e.g. #FFFFFF).
    #[validate(custom(function = crate::validation::validate_hex_color, message = "Background color must be a hex color like #FFFFFF"))]
    pub background_color: String,

    /// Maximum number of guests shown in the chart.
    #[validate(range(min = 1, max = 50, message = "Limit must be between 1 and 50"))]
    pub limit: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", or a filter directive).
    #[validate(custom(function = crate::validation::validate_log_level, message = "Unknown log level"))]
    pub level: String,

    /// Whether to emit JSON-formatted log lines.
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            data: DataConfig::default(),
            chart: ChartConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8050,
            debug: false,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source_url:
                "https://raw.githubusercontent.com/half-man-half-potato/sp_celebrities/main/sp_uncensored_only.csv"
                    .to_string(),
            request_timeout_seconds: 30,
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background_color: "#FFFFFF".to_string(),
            limit: 10,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}
