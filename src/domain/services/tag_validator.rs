//! Tagged-service validator
//!
//! Checks every service tagged with a role against the attribute and the
//! capability the role requires, in registration order, stopping at the
//! first invalid tag instance.

use crate::domain::entities::{CandidateResource, RoleTag};
use crate::domain::value_objects::{Capability, Implementation, Reference, ServiceId};

/// Attribute every role tag must carry unless configured otherwise
pub const DEFAULT_ATTRIBUTE: &str = "type";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("the service id \"{service_id}\" must have the \"{attribute}\" attribute in the \"{tag}\" tag")]
    MissingAttribute {
        service_id: ServiceId,
        attribute: String,
        tag: String,
    },

    #[error("the service id \"{service_id}\" must be a class implementing the \"{capability}\" contract, \"{class}\" does not")]
    ContractViolation {
        service_id: ServiceId,
        class: String,
        capability: String,
    },
}

impl ValidationError {
    /// Id of the service that failed validation
    pub fn service_id(&self) -> &ServiceId {
        match self {
            ValidationError::MissingAttribute { service_id, .. }
            | ValidationError::ContractViolation { service_id, .. } => service_id,
        }
    }
}

/// One tag instance on one service, as handed to the validator.
#[derive(Clone, Copy)]
pub struct TaggedComponent<'a> {
    pub id: &'a ServiceId,
    pub tag: &'a RoleTag,
    pub implementation: &'a dyn Implementation,
}

#[derive(Debug, Clone)]
pub struct TagValidator {
    tag: String,
    attribute: String,
    capability: Capability,
}

impl TagValidator {
    pub fn new(tag: impl Into<String>, capability: Capability) -> Self {
        Self {
            tag: tag.into(),
            attribute: DEFAULT_ATTRIBUTE.to_string(),
            capability,
        }
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = attribute.into();
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn capability(&self) -> &Capability {
        &self.capability
    }

    /// Validate tagged components and yield `(type, reference)` candidates.
    ///
    /// Per component the required attribute is checked before the
    /// capability. Tag instances for other roles are ignored.
    pub fn validate<'a, I>(
        &self,
        components: I,
    ) -> Result<Vec<CandidateResource<Reference>>, ValidationError>
    where
        I: IntoIterator<Item = TaggedComponent<'a>>,
    {
        let mut validated = Vec::new();

        for component in components {
            if component.tag.name() != self.tag {
                continue;
            }

            let Some(key) = component.tag.discriminator(&self.attribute) else {
                return Err(ValidationError::MissingAttribute {
                    service_id: component.id.clone(),
                    attribute: self.attribute.clone(),
                    tag: self.tag.clone(),
                });
            };

            if !component.implementation.satisfies(&self.capability) {
                return Err(ValidationError::ContractViolation {
                    service_id: component.id.clone(),
                    class: component.implementation.class().to_string(),
                    capability: self.capability.to_string(),
                });
            }

            let priority = validated.len();
            validated.push(CandidateResource::new(
                key,
                Reference::new(component.id.clone()),
                priority,
            ));
        }

        Ok(validated)
    }
}
