//! Candidate resources produced by discovery and validation

use std::path::PathBuf;

use serde_json::Value;

use crate::domain::value_objects::Reference;

/// A discovered unit with the key it is registered under.
///
/// `priority` is the discovery order: 0 for the first candidate a scan or a
/// validation yielded, increasing from there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateResource<T> {
    key: String,
    resource: T,
    priority: usize,
}

impl<T> CandidateResource<T> {
    pub fn new(key: impl Into<String>, resource: T, priority: usize) -> Self {
        Self {
            key: key.into(),
            resource,
            priority,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn resource(&self) -> &T {
        &self.resource
    }

    pub fn priority(&self) -> usize {
        self.priority
    }

    pub fn into_parts(self) -> (String, T) {
        (self.key, self.resource)
    }
}

/// Anything that can be stored as an entry of a [`Registry`](super::Registry).
pub trait RegistryEntry {
    fn to_entry(&self) -> Value;
}

impl RegistryEntry for PathBuf {
    fn to_entry(&self) -> Value {
        Value::String(self.to_string_lossy().into_owned())
    }
}

impl RegistryEntry for Reference {
    fn to_entry(&self) -> Value {
        self.to_value()
    }
}

impl RegistryEntry for Value {
    fn to_entry(&self) -> Value {
        self.clone()
    }
}
