//! Configuration management for GuestGraph.
//!
//! Settings are described by validator-annotated serde structs, loaded from a
//! YAML file with environment-variable overrides applied afterwards.

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader};
pub use settings::{ChartConfig, Config, DataConfig, LoggingConfig, ServerConfig};
