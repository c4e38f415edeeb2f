//! Container builder and compiled container

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::info;

use crate::application::{CompileReport, Compiler};
use crate::domain::entities::{Registry, RegistryError};
use crate::domain::services::TaggedComponent;
use crate::domain::value_objects::ServiceId;
use crate::error::WireupResult;

use super::{Definition, DirectoryResource};

/// Mutable build context handed to every compiler pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContainerBuilder {
    definitions: IndexMap<ServiceId, Definition>,
    parameters: Map<String, Value>,
    resources: Vec<DirectoryResource>,
}

impl ContainerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition, returning the one it replaced.
    ///
    /// Replacing keeps the first registration position.
    pub fn set_definition(
        &mut self,
        id: impl Into<ServiceId>,
        definition: Definition,
    ) -> Option<Definition> {
        self.definitions.insert(id.into(), definition)
    }

    pub fn has_definition(&self, id: &str) -> bool {
        self.definitions.contains_key(id)
    }

    pub fn definition(&self, id: &str) -> Option<&Definition> {
        self.definitions.get(id)
    }

    pub fn definition_mut(&mut self, id: &str) -> Option<&mut Definition> {
        self.definitions.get_mut(id)
    }

    pub fn remove_definition(&mut self, id: &str) -> Option<Definition> {
        self.definitions.shift_remove(id)
    }

    pub fn definitions(&self) -> impl Iterator<Item = (&ServiceId, &Definition)> {
        self.definitions.iter()
    }

    /// Every tag instance named `tag`, in service registration order.
    pub fn find_tagged_service_ids<'a>(&'a self, tag: &'a str) -> Vec<TaggedComponent<'a>> {
        self.definitions
            .iter()
            .flat_map(|(id, definition)| {
                definition.tag(tag).map(move |role| TaggedComponent {
                    id,
                    tag: role,
                    implementation: definition,
                })
            })
            .collect()
    }

    /// Track a directory the compiled container depends on.
    ///
    /// Tracking the same resource twice is a no-op.
    pub fn add_resource(&mut self, resource: DirectoryResource) {
        if !self.resources.contains(&resource) {
            self.resources.push(resource);
        }
    }

    pub fn resources(&self) -> &[DirectoryResource] {
        &self.resources
    }

    pub fn set_parameter(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.parameters.insert(name.into(), value.into());
    }

    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters.get(name)
    }

    /// Run every pass of `compiler` once and freeze the result.
    ///
    /// On failure the builder is dropped: no partially built container
    /// escapes.
    pub fn compile(mut self, compiler: &Compiler) -> WireupResult<Container> {
        let report = compiler.compile(&mut self)?;

        let resources = self
            .resources
            .into_iter()
            .map(|resource| {
                let fingerprint = resource.fingerprint();
                (resource, fingerprint)
            })
            .collect::<Vec<_>>();

        info!(
            definitions = self.definitions.len(),
            resources = resources.len(),
            "container compiled"
        );

        Ok(Container {
            definitions: self.definitions,
            parameters: self.parameters,
            resources,
            report,
        })
    }
}

/// A compiled, read-only container.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    definitions: IndexMap<ServiceId, Definition>,
    parameters: Map<String, Value>,
    resources: Vec<(DirectoryResource, String)>,
    report: CompileReport,
}

impl Container {
    pub fn has_definition(&self, id: &str) -> bool {
        self.definitions.contains_key(id)
    }

    pub fn definition(&self, id: &str) -> Option<&Definition> {
        self.definitions.get(id)
    }

    pub fn definitions(&self) -> impl Iterator<Item = (&ServiceId, &Definition)> {
        self.definitions.iter()
    }

    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters.get(name)
    }

    /// Read a registry stored in argument `index` of service `id`.
    ///
    /// `Ok(None)` when the service or the argument does not exist.
    pub fn registry(&self, id: &str, index: usize) -> Result<Option<Registry>, RegistryError> {
        match self.definition(id).and_then(|def| def.argument(index)) {
            Some(value) => Registry::from_value(value).map(Some),
            None => Ok(None),
        }
    }

    pub fn resources(&self) -> impl Iterator<Item = &DirectoryResource> {
        self.resources.iter().map(|(resource, _)| resource)
    }

    /// Whether every tracked directory is unchanged since compilation.
    pub fn is_fresh(&self) -> bool {
        self.resources
            .iter()
            .all(|(resource, fingerprint)| resource.is_fresh(fingerprint))
    }

    pub fn report(&self) -> &CompileReport {
        &self.report
    }
}
