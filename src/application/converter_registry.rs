//! Runtime converter lookup
//!
//! Built from the registry argument written by `ConverterPass`. Service
//! references are resolved through a caller-supplied resolver, so the
//! registry does not need to know how services are instantiated.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::container::Container;
use crate::domain::ports::{ConvertError, Converter};
use crate::domain::value_objects::Reference;

#[derive(Clone, Default)]
pub struct ConverterRegistry {
    converters: IndexMap<String, Arc<dyn Converter>>,
}

impl ConverterRegistry {
    /// Registry keyed by each converter's own format; later converters win.
    pub fn new(converters: impl IntoIterator<Item = Arc<dyn Converter>>) -> Self {
        let converters = converters
            .into_iter()
            .map(|converter| (converter.format().to_string(), converter))
            .collect();
        Self { converters }
    }

    /// Read the registry stored in argument 0 of `registry_id`.
    ///
    /// A missing service yields an empty registry. When a type lists
    /// several services the last one is used.
    pub fn from_container<F>(
        container: &Container,
        registry_id: &str,
        mut resolve: F,
    ) -> Result<Self, ConvertError>
    where
        F: FnMut(&Reference) -> Option<Arc<dyn Converter>>,
    {
        let Some(registry) = container.registry(registry_id, 0)? else {
            debug!(service = registry_id, "converter registry not defined");
            return Ok(Self::default());
        };

        let mut converters = IndexMap::new();
        for kind in registry.keys() {
            let Some(reference) = registry.references(kind).last() else {
                continue;
            };
            let converter = resolve(&reference).ok_or_else(|| ConvertError::UnresolvedService {
                id: reference.id().clone(),
            })?;
            converters.insert(kind.to_string(), converter);
        }

        Ok(Self { converters })
    }

    pub fn has(&self, kind: &str) -> bool {
        self.converters.contains_key(kind)
    }

    pub fn get(&self, kind: &str) -> Result<Arc<dyn Converter>, ConvertError> {
        self.converters
            .get(kind)
            .cloned()
            .ok_or_else(|| ConvertError::UnknownType {
                kind: kind.to_string(),
                available: self.available(),
            })
    }

    /// Convert `content` with the converter registered for `kind`.
    pub fn convert(&self, kind: &str, content: &str) -> Result<serde_json::Value, ConvertError> {
        self.get(kind)?.convert(content)
    }

    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.converters.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    fn available(&self) -> String {
        if self.converters.is_empty() {
            "none".to_string()
        } else {
            self.types().collect::<Vec<_>>().join(", ")
        }
    }
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterRegistry")
            .field("types", &self.types().collect::<Vec<_>>())
            .finish()
    }
}
