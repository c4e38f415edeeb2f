//! Registry entity
//!
//! The aggregated result of a discovery pass: an ordered mapping from a
//! discriminator key (locale, converter type) to an ordered list of entries.
//! A registry is produced by `RegistryBuilder` and is read-only afterwards.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::domain::value_objects::Reference;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("expected a map of lists, found {found}")]
    NotAMap { found: &'static str },

    #[error("entry '{key}' must be a list, found {found}")]
    NotAList { key: String, found: &'static str },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    entries: IndexMap<String, Vec<Value>>,
}

impl Registry {
    pub(crate) fn from_entries(entries: IndexMap<String, Vec<Value>>) -> Self {
        Self { entries }
    }

    pub(crate) fn into_entries(self) -> IndexMap<String, Vec<Value>> {
        self.entries
    }

    /// Read a registry previously stored as an argument value.
    ///
    /// `null` and `[]` (the usual placeholder argument) read as an empty
    /// registry.
    pub fn from_value(value: &Value) -> Result<Self, RegistryError> {
        let map = match value {
            Value::Null => return Ok(Self::default()),
            Value::Array(items) if items.is_empty() => return Ok(Self::default()),
            Value::Object(map) => map,
            other => {
                return Err(RegistryError::NotAMap {
                    found: kind_of(other),
                })
            }
        };

        let mut entries = IndexMap::with_capacity(map.len());
        for (key, list) in map {
            let items = match list {
                Value::Array(items) => items.clone(),
                Value::Null => Vec::new(),
                other => {
                    return Err(RegistryError::NotAList {
                        key: key.clone(),
                        found: kind_of(other),
                    })
                }
            };
            entries.insert(key.clone(), items);
        }

        Ok(Self { entries })
    }

    /// Encode as an argument value: `{ key: [entry, ...] }`.
    pub fn to_value(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(key, items)| (key.clone(), Value::Array(items.clone())))
            .collect();
        Value::Object(map)
    }

    pub fn get(&self, key: &str) -> Option<&[Value]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.entries
            .iter()
            .map(|(key, items)| (key.as_str(), items.as_slice()))
    }

    /// Entries under `key` that are file paths.
    pub fn paths<'a>(&'a self, key: &str) -> impl Iterator<Item = PathBuf> + 'a {
        self.get(key)
            .unwrap_or_default()
            .iter()
            .filter_map(|v| v.as_str().map(PathBuf::from))
    }

    /// Entries under `key` that are service references.
    pub fn references<'a>(&'a self, key: &str) -> impl Iterator<Item = Reference> + 'a {
        self.get(key)
            .unwrap_or_default()
            .iter()
            .filter_map(Reference::from_value)
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "map",
    }
}
