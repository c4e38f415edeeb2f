//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::passes::{
    DEFAULT_CONVERTER_REGISTRY, DEFAULT_CONVERTER_TAG, DEFAULT_TRANSLATOR,
};
use crate::domain::services::DEFAULT_ATTRIBUTE;
use crate::domain::value_objects::TraversalOrder;

use super::loader::{self, ConfigError, ConfigWarning};

/// Translator pass configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default = "default_translator_service")]
    pub service: String,

    /// Translation directory; relative paths resolve against the config file
    #[serde(default = "default_translations_dir")]
    pub dir: PathBuf,

    #[serde(default)]
    pub traversal: TraversalOrder,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            service: default_translator_service(),
            dir: default_translations_dir(),
            traversal: TraversalOrder::default(),
        }
    }
}

fn default_translator_service() -> String {
    DEFAULT_TRANSLATOR.to_string()
}

fn default_translations_dir() -> PathBuf {
    PathBuf::from("resources/translations")
}

/// Converter pass configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    #[serde(default = "default_converter_registry")]
    pub registry: String,

    #[serde(default = "default_converter_tag")]
    pub tag: String,

    #[serde(default = "default_converter_attribute")]
    pub attribute: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            registry: default_converter_registry(),
            tag: default_converter_tag(),
            attribute: default_converter_attribute(),
        }
    }
}

fn default_converter_registry() -> String {
    DEFAULT_CONVERTER_REGISTRY.to_string()
}

fn default_converter_tag() -> String {
    DEFAULT_CONVERTER_TAG.to_string()
}

fn default_converter_attribute() -> String {
    DEFAULT_ATTRIBUTE.to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireupConfig {
    #[serde(default)]
    pub translator: TranslatorConfig,

    #[serde(default)]
    pub converter: ConverterConfig,
}

impl WireupConfig {
    /// Load configuration from TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply WIREUP_* environment variable overrides
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |name| std::env::var(name).ok())
    }

    /// Resolve a relative translation directory against `base`.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        if self.translator.dir.is_relative() {
            self.translator.dir = base.join(&self.translator.dir);
        }
        self
    }
}
