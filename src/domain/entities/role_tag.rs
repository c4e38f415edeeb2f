//! Role tags attached to service definitions

use serde_json::{Map, Value};

/// Ordered attribute map carried by a tag instance.
pub type TagAttributes = Map<String, Value>;

/// Marks a service as taking part in a named role (e.g. `converter`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoleTag {
    name: String,
    attributes: TagAttributes,
}

impl RoleTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: TagAttributes::new(),
        }
    }

    pub fn with_attributes(name: impl Into<String>, attributes: TagAttributes) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &TagAttributes {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Resolve `key` to a single discriminator value.
    ///
    /// Strings must be non-empty; numbers and booleans are rendered as
    /// strings. `null`, arrays and objects do not resolve.
    pub fn discriminator(&self, key: &str) -> Option<String> {
        match self.attributes.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}
