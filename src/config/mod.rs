//! Configuration module for Wireup
//!
//! Configuration hierarchy:
//! 1. Environment variables (WIREUP_*, highest priority)
//! 2. Project config (wireup.toml)
//! 3. User config (~/.config/wireup/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigError, ConfigWarning};
pub use types::{ConverterConfig, TranslatorConfig, WireupConfig};

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "wireup.toml";
