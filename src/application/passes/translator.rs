//! Translator pass
//!
//! Discovers translation files and registers them in the `resource_files`
//! option of the translator definition, grouped by locale with the last
//! discovered file first.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::application::compiler::CompilerPass;
use crate::config::TranslatorConfig;
use crate::container::{ContainerBuilder, DirectoryResource};
use crate::domain::entities::{kind_of, RegistryError};
use crate::domain::ports::ResourceDiscovery;
use crate::domain::services::{Insertion, RegistryBuilder};
use crate::domain::value_objects::ServiceId;
use crate::error::{WireupError, WireupResult};
use crate::infrastructure::FsScanner;

pub const DEFAULT_TRANSLATOR: &str = "translator.default";

/// Option key holding `{ locale: [path, ...] }`
pub const RESOURCE_FILES_KEY: &str = "resource_files";

/// Glob tracked for container freshness
pub const TRANSLATION_FILE_PATTERN: &str = "*.*.*";

#[derive(Debug, Clone)]
pub struct TranslatorPass<D = FsScanner> {
    service: ServiceId,
    dir: PathBuf,
    discovery: D,
}

impl TranslatorPass<FsScanner> {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            service: ServiceId::new(DEFAULT_TRANSLATOR),
            dir: dir.into(),
            discovery: FsScanner::default(),
        }
    }

    pub fn from_config(config: &TranslatorConfig) -> Self {
        Self {
            service: ServiceId::new(config.service.as_str()),
            dir: config.dir.clone(),
            discovery: FsScanner::new(config.traversal),
        }
    }
}

impl<D: ResourceDiscovery> TranslatorPass<D> {
    pub fn with_service(mut self, service: impl Into<ServiceId>) -> Self {
        self.service = service.into();
        self
    }

    pub fn with_discovery<E: ResourceDiscovery>(self, discovery: E) -> TranslatorPass<E> {
        TranslatorPass {
            service: self.service,
            dir: self.dir,
            discovery,
        }
    }

    pub fn service(&self) -> &ServiceId {
        &self.service
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl<D: ResourceDiscovery> CompilerPass for TranslatorPass<D> {
    fn name(&self) -> &str {
        "translator"
    }

    fn process(&self, container: &mut ContainerBuilder) -> WireupResult<()> {
        let Some(translator) = container.definition(self.service.as_str()) else {
            debug!(service = %self.service, "translator not defined, skipping");
            return Ok(());
        };

        let discovered = self.discovery.discover(&self.dir)?;
        let root = discovered.root().to_path_buf();

        // Options live in the last constructor argument.
        let index = translator.arguments().len().checked_sub(1);
        let mut options = match index.and_then(|i| translator.argument(i)) {
            Some(Value::Null) | None => Value::Object(Map::new()),
            Some(value) => value.clone(),
        };

        let invalid = |source: RegistryError| WireupError::InvalidArgument {
            service: self.service.clone(),
            index: index.unwrap_or(0),
            source,
        };

        let found = kind_of(&options);
        let map = options
            .as_object_mut()
            .ok_or_else(|| invalid(RegistryError::NotAMap { found }))?;

        let existing = map.get(RESOURCE_FILES_KEY).cloned().unwrap_or(Value::Null);
        let mut resource_files =
            RegistryBuilder::from_value(&existing, Insertion::NewestFirst).map_err(invalid)?;
        let added = resource_files.extend(discovered);
        map.insert(
            RESOURCE_FILES_KEY.to_string(),
            resource_files.build().to_value(),
        );

        container.add_resource(DirectoryResource::new(&root).with_pattern(TRANSLATION_FILE_PATTERN));
        if let Some(translator) = container.definition_mut(self.service.as_str()) {
            match index {
                Some(i) => {
                    translator.replace_argument(i, options);
                }
                None => translator.push_argument(options),
            }
        }

        info!(
            service = %self.service,
            dir = %root.display(),
            files = added,
            "translation resources registered"
        );
        Ok(())
    }
}
