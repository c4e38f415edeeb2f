//! Converter pass
//!
//! Collects every service tagged `converter` into the first argument of the
//! converter registry definition, as `{ type: ["@service", ...] }`.

use serde_json::Value;
use tracing::{debug, info};

use crate::application::compiler::CompilerPass;
use crate::config::ConverterConfig;
use crate::container::ContainerBuilder;
use crate::domain::ports::Converter;
use crate::domain::services::{Insertion, RegistryBuilder, TagValidator};
use crate::domain::value_objects::{Capability, ServiceId};
use crate::error::{WireupError, WireupResult};

pub const DEFAULT_CONVERTER_REGISTRY: &str = "converter_registry";
pub const DEFAULT_CONVERTER_TAG: &str = "converter";

#[derive(Debug, Clone)]
pub struct ConverterPass {
    registry: ServiceId,
    validator: TagValidator,
}

impl ConverterPass {
    pub fn new() -> Self {
        Self {
            registry: ServiceId::new(DEFAULT_CONVERTER_REGISTRY),
            validator: TagValidator::new(DEFAULT_CONVERTER_TAG, Capability::of::<dyn Converter>()),
        }
    }

    pub fn from_config(config: &ConverterConfig) -> Self {
        Self {
            registry: ServiceId::new(config.registry.as_str()),
            validator: TagValidator::new(config.tag.as_str(), Capability::of::<dyn Converter>())
                .with_attribute(config.attribute.as_str()),
        }
    }

    pub fn with_registry(mut self, registry: impl Into<ServiceId>) -> Self {
        self.registry = registry.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.validator = TagValidator::new(tag, self.validator.capability().clone())
            .with_attribute(self.validator.attribute());
        self
    }

    pub fn registry(&self) -> &ServiceId {
        &self.registry
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.validator = self.validator.with_attribute(attribute);
        self
    }

    pub fn tag(&self) -> &str {
        self.validator.tag()
    }

    /// Attribute every tag must carry
    pub fn attribute(&self) -> &str {
        self.validator.attribute()
    }
}

impl Default for ConverterPass {
    fn default() -> Self {
        Self::new()
    }
}

impl CompilerPass for ConverterPass {
    fn name(&self) -> &str {
        "converter"
    }

    fn process(&self, container: &mut ContainerBuilder) -> WireupResult<()> {
        let Some(registry) = container.definition(self.registry.as_str()) else {
            debug!(service = %self.registry, "converter registry not defined, skipping");
            return Ok(());
        };

        let has_argument = !registry.arguments().is_empty();
        let existing = registry.argument(0).cloned().unwrap_or(Value::Null);

        let converters = self
            .validator
            .validate(container.find_tagged_service_ids(self.validator.tag()))?;
        for converter in &converters {
            debug!(
                kind = converter.key(),
                service = %converter.resource().id(),
                "registering converter"
            );
        }

        let mut builder = RegistryBuilder::from_value(&existing, Insertion::Append).map_err(
            |source| WireupError::InvalidArgument {
                service: self.registry.clone(),
                index: 0,
                source,
            },
        )?;
        let added = builder.extend(converters);
        let value = builder.build().to_value();

        if let Some(registry) = container.definition_mut(self.registry.as_str()) {
            if has_argument {
                registry.replace_argument(0, value);
            } else {
                registry.push_argument(value);
            }
        }

        info!(
            service = %self.registry,
            converters = added,
            attribute = self.validator.attribute(),
            "converters registered"
        );
        Ok(())
    }
}
