//! Service identifiers and references between services

use std::borrow::Borrow;
use std::fmt;

use serde_json::Value;

/// Identifier of a service definition inside a container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ServiceId(String);

impl ServiceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ServiceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ServiceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ServiceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ServiceId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A reference to another service, resolved when the container is built.
///
/// Inside argument values a reference is written as `"@service_id"`; a
/// leading `@@` escapes a literal string that starts with `@`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference(ServiceId);

impl Reference {
    /// Marker prefix used when a reference is stored in an argument value
    pub const PREFIX: &'static str = "@";

    pub fn new(id: impl Into<ServiceId>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &ServiceId {
        &self.0
    }

    /// Encode as an argument value (`"@id"`).
    pub fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }

    /// Decode an argument value written by [`Reference::to_value`].
    ///
    /// Returns `None` for anything that is not an unescaped `@`-string.
    pub fn from_value(value: &Value) -> Option<Self> {
        let s = value.as_str()?;
        let id = s.strip_prefix(Self::PREFIX)?;
        if id.is_empty() || id.starts_with(Self::PREFIX) {
            return None;
        }
        Some(Self::new(id))
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

impl From<ServiceId> for Reference {
    fn from(id: ServiceId) -> Self {
        Self(id)
    }
}
