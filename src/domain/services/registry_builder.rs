//! Registry builder
//!
//! Merges candidates into a registry seeded from a previously configured
//! value. Keys coming from prior configuration are never replaced: new
//! entries are only added next to the existing ones.

use indexmap::IndexMap;
use serde_json::Value;

use crate::domain::entities::{CandidateResource, Registry, RegistryEntry, RegistryError};

/// Where a new entry goes relative to the entries already under its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// New entries go first; the last discovered entry ends up at the head
    NewestFirst,
    /// New entries go last, in the order they arrive
    Append,
}

#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    entries: IndexMap<String, Vec<Value>>,
    insertion: Insertion,
}

impl RegistryBuilder {
    pub fn new(insertion: Insertion) -> Self {
        Self {
            entries: IndexMap::new(),
            insertion,
        }
    }

    /// Seed the builder with a registry stored in an argument value.
    pub fn from_value(existing: &Value, insertion: Insertion) -> Result<Self, RegistryError> {
        Ok(Self::from_registry(Registry::from_value(existing)?, insertion))
    }

    pub fn from_registry(existing: Registry, insertion: Insertion) -> Self {
        Self {
            entries: existing.into_entries(),
            insertion,
        }
    }

    pub fn insertion(&self) -> Insertion {
        self.insertion
    }

    pub fn insert(&mut self, key: impl Into<String>, entry: Value) {
        let list = self.entries.entry(key.into()).or_default();
        match self.insertion {
            Insertion::NewestFirst => list.insert(0, entry),
            Insertion::Append => list.push(entry),
        }
    }

    /// Insert candidates in the order they are yielded.
    pub fn extend<T, I>(&mut self, candidates: I) -> usize
    where
        T: RegistryEntry,
        I: IntoIterator<Item = CandidateResource<T>>,
    {
        let mut added = 0;
        for candidate in candidates {
            let (key, resource) = candidate.into_parts();
            self.insert(key, resource.to_entry());
            added += 1;
        }
        added
    }

    pub fn build(self) -> Registry {
        Registry::from_entries(self.entries)
    }
}
